pub mod camera;
pub mod cli;
pub mod config;
pub mod crystal_rig;
pub mod frame;
pub mod geometry;
pub mod gpu;
pub mod lights;
pub mod loaders;
pub mod scenes;
pub mod sequencer;
pub mod tween;
pub mod types;
pub mod viewport;

pub use camera::OrbitCamera;
pub use config::Tuning;
pub use crystal_rig::{CrystalParams, CrystalRig, FaceGroup};
pub use frame::{FrameClock, TIME_STEP};
pub use sequencer::{MorphParams, MorphSequencer, Phase};
pub use viewport::Viewport;
