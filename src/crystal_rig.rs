use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Per-frame knobs for the crystal scene.
///
/// `speed_factor` is chosen by the caller per device class; the shipped
/// presets were mobile 1.0, Safari 2.0, everything else 0.5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CrystalParams {
    pub speed_factor: f32,
    /// Orbit radius of the two roaming key lights
    pub light_orbit_radius: f32,
    /// Model yaw decrement per frame, before the speed factor
    pub model_yaw_step: f32,
    /// Crystal yaw increment per frame, before the speed factor
    pub crystal_yaw_step: f32,
    /// Vertical bob amplitude of the logo model
    pub bob_amplitude: f32,
}

impl Default for CrystalParams {
    fn default() -> Self {
        Self {
            speed_factor: 0.5,
            light_orbit_radius: 4.0,
            model_yaw_step: 0.005,
            crystal_yaw_step: 0.008,
            bob_amplitude: 0.15,
        }
    }
}

/// Which half of the logo faces the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceGroup {
    /// Bitcoin disc and its outline
    Front,
    /// X-part, its outline and the arrow
    Back,
}

/// Procedural state for the crystal scene: model and crystal yaw, bob
/// offset, the two orbiting light positions and the front/back visibility
/// split. No tweens here; everything is derived per frame from the
/// accumulated time and fixed per-frame deltas.
pub struct CrystalRig {
    params: CrystalParams,
    model_yaw: f32,
    crystal_yaw: f32,
    bob: f32,
    light_a: Vec3,
    light_b: Vec3,
}

impl CrystalRig {
    pub fn new(params: CrystalParams) -> Self {
        let radius = params.light_orbit_radius;
        Self {
            params,
            model_yaw: 0.0,
            crystal_yaw: 0.0,
            bob: params.bob_amplitude,
            // Resting positions match time zero of the orbit formulas
            light_a: Vec3::new(radius, 1.0, 0.0),
            light_b: Vec3::new(-radius, 0.0, 0.0),
        }
    }

    /// Advance one frame. `time` is the frame clock's accumulated value.
    pub fn advance(&mut self, time: f32) {
        let speed = self.params.speed_factor;
        let radius = self.params.light_orbit_radius;

        self.model_yaw -= self.params.model_yaw_step * speed;
        self.crystal_yaw += self.params.crystal_yaw_step * speed;
        self.bob = self.params.bob_amplitude * (time * 2.0 * speed).cos();

        let theta = time * 2.0 * speed;
        self.light_a = Vec3::new(radius * theta.cos(), 1.0, radius * theta.sin());
        self.light_b = Vec3::new(
            -radius * theta.cos(),
            radius * (time * 4.0 * speed).sin(),
            -radius * theta.sin(),
        );
    }

    /// Accumulated logo yaw (unwrapped, decreases over time)
    pub fn model_yaw(&self) -> f32 {
        self.model_yaw
    }

    pub fn crystal_yaw(&self) -> f32 {
        self.crystal_yaw
    }

    /// Vertical offset of the logo model
    pub fn bob(&self) -> f32 {
        self.bob
    }

    /// Position of the first roaming light
    pub fn light_a(&self) -> Vec3 {
        self.light_a
    }

    /// Position of the second roaming light (mirrored, with a faster
    /// vertical oscillation)
    pub fn light_b(&self) -> Vec3 {
        self.light_b
    }

    /// The face group currently turned toward the camera. Exactly one
    /// group is visible for any yaw: the front group while the wrapped yaw
    /// lies in the half-plane around angle zero, the back group otherwise.
    pub fn visible_group(&self) -> FaceGroup {
        Self::group_for_yaw(self.model_yaw)
    }

    pub fn group_for_yaw(yaw: f32) -> FaceGroup {
        let wrapped = yaw.rem_euclid(TAU);
        if wrapped < FRAC_PI_2 || wrapped > TAU - FRAC_PI_2 {
            FaceGroup::Front
        } else {
            FaceGroup::Back
        }
    }
}
