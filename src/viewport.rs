/// Render surface sizing.
///
/// The window's physical size drives the surface, with the device pixel
/// ratio capped at 2x so high-density displays don't quadruple the
/// point-cloud fill cost.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Render surface width in device pixels
    pub width: u32,
    /// Render surface height in device pixels
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Compute the surface size for a window's physical size and scale
    /// factor, capping the effective pixel ratio at [`MAX_PIXEL_RATIO`].
    pub fn from_window(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        let ratio = if scale_factor > MAX_PIXEL_RATIO {
            MAX_PIXEL_RATIO / scale_factor
        } else {
            1.0
        };
        Self::new(
            (physical_width as f64 * ratio).round() as u32,
            (physical_height as f64 * ratio).round() as u32,
        )
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_size_below_cap() {
        let vp = Viewport::from_window(800, 600, 1.0);
        assert_eq!(vp, Viewport::new(800, 600));

        let vp = Viewport::from_window(1600, 1200, 2.0);
        assert_eq!(vp, Viewport::new(1600, 1200));
    }

    #[test]
    fn caps_pixel_ratio_at_two() {
        // A 3x display: 2400x1800 physical for an 800x600 logical window.
        // Capped at 2x that should render at 1600x1200.
        let vp = Viewport::from_window(2400, 1800, 3.0);
        assert_eq!(vp, Viewport::new(1600, 1200));
    }

    #[test]
    fn aspect_matches_dimensions() {
        for (w, h) in [(1u32, 1u32), (800, 600), (1920, 1080), (350, 700)] {
            let vp = Viewport::new(w, h);
            assert_eq!(vp.aspect(), w as f32 / h as f32);
        }
    }

    #[test]
    fn never_collapses_to_zero() {
        let vp = Viewport::new(0, 0);
        assert_eq!(vp, Viewport::new(1, 1));
    }
}
