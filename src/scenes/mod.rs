use crate::gpu::GpuState;
use crate::viewport::Viewport;

pub mod crystal;
pub mod morph;

pub use crystal::CrystalScene;
pub use morph::MorphScene;

/// One renderable showcase scene, driven by the frame loop in main
pub trait Scene {
    /// Per-frame update. `time` is the fixed-step accumulator;
    /// `timeline_active` is false while the window is occluded, which
    /// freezes any scripted timeline without interrupting it.
    fn advance(&mut self, time: f32, timeline_active: bool);

    /// React to a surface resize (the surface itself is already
    /// reconfigured by the caller)
    fn resize(&mut self, viewport: Viewport);

    /// Render one frame
    fn render(&mut self, gpu: &GpuState) -> Result<(), wgpu::SurfaceError>;

    fn name(&self) -> &str;
}
