use glam::Vec3;

/// Hand-authored light rig for the crystal scene.
///
/// Positions, colors and intensities were tuned visually against the logo
/// model; treat the table as art direction, not derived data. Two entries
/// (the white key lights) are repositioned every frame by the crystal rig.
#[derive(Debug, Clone, Copy)]
pub struct AreaLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Edge length of the square emitter
    pub size: f32,
    pub position: Vec3,
}

pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const PINK: [f32; 3] = [1.0, 0.0, 1.0];
pub const BLUE: [f32; 3] = [0.27, 0.21, 1.0];
pub const VIOLET: [f32; 3] = [0.53, 0.16, 0.92];
pub const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

/// Index of the first roaming key light in [`rig`]
pub const ORBIT_LIGHT_A: usize = 4;
/// Index of the second roaming key light in [`rig`]
pub const ORBIT_LIGHT_B: usize = 5;

/// Ambient light intensity (white)
pub const AMBIENT_INTENSITY: f32 = 30.0;

pub fn rig() -> Vec<AreaLight> {
    vec![
        AreaLight {
            color: VIOLET,
            intensity: 10.0,
            size: 10.0,
            position: Vec3::new(0.0, 0.0, -3.0),
        },
        AreaLight {
            color: BLUE,
            intensity: 10.0,
            size: 10.0,
            position: Vec3::new(5.0, 0.0, 3.0),
        },
        AreaLight {
            color: BLUE,
            intensity: 10.0,
            size: 10.0,
            position: Vec3::new(0.0, -6.0, -7.0),
        },
        AreaLight {
            color: BLUE,
            intensity: 5.0,
            size: 10.0,
            position: Vec3::new(-5.0, 0.0, 3.0),
        },
        AreaLight {
            color: WHITE,
            intensity: 25.0,
            size: 5.0,
            position: Vec3::new(0.0, 1.0, 0.0),
        },
        AreaLight {
            color: WHITE,
            intensity: 25.0,
            size: 5.0,
            position: Vec3::new(0.0, -2.0, 0.0),
        },
        AreaLight {
            color: PINK,
            intensity: 10.0,
            size: 3.0,
            position: Vec3::new(0.0, 0.0, -2.0),
        },
        AreaLight {
            color: BLUE,
            intensity: 10.0,
            size: 10.0,
            position: Vec3::new(-5.0, 0.0, 1.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_has_eight_lights() {
        assert_eq!(rig().len(), 8);
    }

    #[test]
    fn orbit_indices_are_the_white_key_lights() {
        let lights = rig();
        assert_eq!(lights[ORBIT_LIGHT_A].color, WHITE);
        assert_eq!(lights[ORBIT_LIGHT_B].color, WHITE);
        assert_eq!(lights[ORBIT_LIGHT_A].intensity, 25.0);
        assert_eq!(lights[ORBIT_LIGHT_B].intensity, 25.0);
    }

    #[test]
    fn all_lights_have_positive_extent() {
        for light in rig() {
            assert!(light.size > 0.0);
            assert!(light.intensity > 0.0);
        }
    }
}
