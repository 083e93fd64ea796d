use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::tween::{Ease, Tween};

/// Timing and amplitude knobs for the morph animation cycle.
///
/// These numbers are art direction, not contracts: they were tuned by eye
/// and have been retuned before (orbit radius 1200 vs 1400 vs 1500,
/// coefficient 1.2 vs 1.5 vs 1.6), so they stay overridable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphParams {
    /// Resting value of the displacement coefficient
    pub coefficient_high: f32,
    /// Seconds before the coefficient ramp-down starts
    pub blend_out_delay: f32,
    /// Seconds for the coefficient to settle to zero
    pub blend_out_duration: f32,
    /// Seconds for the texture crossfade
    pub crossfade_duration: f32,
    /// Seconds for one full camera revolution
    pub orbit_duration: f32,
    /// Seconds to hold after the orbit before restoring distortion
    pub hold_duration: f32,
    /// Seconds for the coefficient to ramp back up
    pub blend_in_duration: f32,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            coefficient_high: 1.6,
            blend_out_delay: 0.5,
            blend_out_duration: 0.5,
            crossfade_duration: 1.0,
            orbit_duration: 2.0,
            hold_duration: 1.5,
            blend_in_duration: 1.0,
        }
    }
}

/// Cycle position of the morph animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Distortion settling to zero
    BlendOut,
    /// Texture crossfade in flight, orbit running alongside it
    Swapped,
    /// Crossfade done; orbit finishing, then a fixed hold
    Orbit,
    /// Distortion ramping back to its resting value
    BlendIn,
}

/// Perpetual state machine driving the morph scene's uniforms and the
/// camera orbit.
///
/// Every transition is an explicit (phase, tween-completion) edge, so the
/// machine can be stepped with a deterministic clock and asserted on.
/// `mix_factor` is guaranteed to sit at exactly 0 or 1 whenever a cycle
/// boundary is crossed.
pub struct MorphSequencer {
    params: MorphParams,
    phase: Phase,
    coefficient: Tween,
    crossfade: Tween,
    orbit: Tween,
    hold_elapsed: f32,
    mix_high: bool,
    /// Completed full cycles
    cycles: u32,
    /// Total orbit angle applied across all cycles
    total_orbit: f32,
}

impl MorphSequencer {
    pub fn new(params: MorphParams) -> Self {
        Self {
            params,
            phase: Phase::BlendOut,
            coefficient: Self::blend_out(&params),
            crossfade: Tween::new(0.0, 0.0, 0.0, Ease::Power2InOut),
            orbit: Tween::new(0.0, 0.0, 0.0, Ease::Linear),
            hold_elapsed: 0.0,
            mix_high: false,
            cycles: 0,
            total_orbit: 0.0,
        }
    }

    fn blend_out(params: &MorphParams) -> Tween {
        Tween::new(
            params.coefficient_high,
            0.0,
            params.blend_out_duration,
            Ease::Power2InOut,
        )
        .with_delay(params.blend_out_delay)
    }

    /// Advance the timeline by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            Phase::BlendOut => {
                if self.coefficient.tick(dt) {
                    // Distortion settled: toggle the crossfade target and
                    // start the camera orbit alongside it.
                    self.mix_high = !self.mix_high;
                    let target = if self.mix_high { 1.0 } else { 0.0 };
                    self.crossfade = Tween::new(
                        1.0 - target,
                        target,
                        self.params.crossfade_duration,
                        Ease::Power2InOut,
                    );
                    self.orbit = Tween::new(0.0, TAU, self.params.orbit_duration, Ease::Linear);
                    self.phase = Phase::Swapped;
                }
            }
            Phase::Swapped => {
                let faded = self.crossfade.tick(dt);
                let orbited = self.orbit.tick(dt);
                if faded {
                    self.phase = Phase::Orbit;
                    if orbited {
                        self.hold_elapsed = 0.0;
                    }
                }
            }
            Phase::Orbit => {
                if self.orbit.finished() {
                    self.hold_elapsed += dt;
                    if self.hold_elapsed >= self.params.hold_duration {
                        self.total_orbit += TAU;
                        self.coefficient = Tween::new(
                            0.0,
                            self.params.coefficient_high,
                            self.params.blend_in_duration,
                            Ease::Power2InOut,
                        );
                        self.phase = Phase::BlendIn;
                    }
                } else {
                    self.orbit.tick(dt);
                    self.hold_elapsed = 0.0;
                }
            }
            Phase::BlendIn => {
                if self.coefficient.tick(dt) {
                    self.cycles += 1;
                    self.coefficient = Self::blend_out(&self.params);
                    self.hold_elapsed = 0.0;
                    self.phase = Phase::BlendOut;
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current displacement coefficient
    pub fn coefficient(&self) -> f32 {
        self.coefficient.value()
    }

    /// Current texture blend fraction, in [0, 1]
    pub fn mix_factor(&self) -> f32 {
        self.crossfade.value()
    }

    /// Camera orbit angle for the current cycle, in [0, 2pi]
    pub fn orbit_angle(&self) -> f32 {
        self.orbit.value()
    }

    pub fn completed_cycles(&self) -> u32 {
        self.cycles
    }

    /// Total orbit rotation applied since the sequencer started
    pub fn total_orbit_angle(&self) -> f32 {
        self.total_orbit
            + if self.phase == Phase::Swapped || self.phase == Phase::Orbit {
                self.orbit.value()
            } else {
                0.0
            }
    }
}
