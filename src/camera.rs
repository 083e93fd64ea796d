use glam::{Mat4, Vec3};

/// Perspective camera that orbits the origin on the XZ plane.
///
/// Both scenes park the camera at a fixed distance on +Z looking at the
/// origin; the morph scene additionally sweeps the orbit angle through a
/// full revolution during each animation cycle. The position law is
/// `x = R*sin(angle)`, `z = R*cos(angle)`, so angle 0 is the resting spot.
pub struct OrbitCamera {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub radius: f32,
    pub aspect: f32,
    angle: f32,
}

impl OrbitCamera {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32, radius: f32, aspect: f32) -> Self {
        Self {
            fov_y_degrees,
            near,
            far,
            radius,
            aspect,
            angle: 0.0,
        }
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Update the aspect ratio after a surface resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.angle.sin(),
            0.0,
            self.radius * self.angle.cos(),
        )
    }

    /// Combined view-projection matrix, always looking at the origin
    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
        let view = Mat4::look_at_rh(self.position(), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn rests_at_radius_on_positive_z() {
        let camera = OrbitCamera::new(45.0, 1.0, 2000.0, 1500.0, 16.0 / 9.0);
        let pos = camera.position();
        assert_eq!(pos, Vec3::new(0.0, 0.0, 1500.0));
    }

    #[test]
    fn orbit_law_holds_over_full_revolution() {
        let radius = 1500.0;
        let mut camera = OrbitCamera::new(45.0, 1.0, 2000.0, radius, 1.0);

        for i in 0..=64 {
            let angle = TAU * i as f32 / 64.0;
            camera.set_angle(angle);
            let pos = camera.position();
            assert!((pos.x - radius * angle.sin()).abs() < 1e-3);
            assert!((pos.z - radius * angle.cos()).abs() < 1e-3);
            assert_eq!(pos.y, 0.0);
            // Constant distance from the origin
            assert!((pos.length() - radius).abs() < 0.5);
        }
    }

    #[test]
    fn quarter_turn_reaches_positive_x() {
        let mut camera = OrbitCamera::new(45.0, 1.0, 2000.0, 100.0, 1.0);
        camera.set_angle(FRAC_PI_2);
        let pos = camera.position();
        assert!((pos.x - 100.0).abs() < 1e-3);
        assert!(pos.z.abs() < 1e-3);
    }

    #[test]
    fn aspect_updates_projection() {
        let mut camera = OrbitCamera::new(45.0, 1.0, 2000.0, 1500.0, 1.0);
        let square = camera.view_proj();
        camera.set_aspect(2.0);
        let wide = camera.view_proj();
        assert_ne!(square, wide);
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn view_proj_is_finite_everywhere_on_the_orbit() {
        let mut camera = OrbitCamera::new(5.0, 1.0, 100.0, 68.5, 1.5);
        for i in 0..32 {
            camera.set_angle(PI * i as f32 / 16.0);
            let m = camera.view_proj();
            assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
        }
    }
}
