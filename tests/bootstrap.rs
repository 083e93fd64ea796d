//! Scene-bootstrap invariants that don't need a live GPU: viewport
//! sizing, camera aspect after resize, and the asset-failure policy's
//! CPU-side half.

use vitrine::loaders::model::load_model;
use vitrine::loaders::texture::decode_rgba;
use vitrine::{OrbitCamera, Viewport};

#[test]
fn resize_keeps_camera_aspect_in_lockstep_with_the_surface() {
    let mut camera = OrbitCamera::new(45.0, 1.0, 2000.0, 1500.0, 1.0);

    for (w, h) in [(1u32, 1u32), (800, 600), (1920, 1080), (350, 701), (4096, 17)] {
        let viewport = Viewport::new(w, h);
        camera.set_aspect(viewport.aspect());
        assert_eq!(camera.aspect, w as f32 / h as f32);
        assert_eq!((viewport.width, viewport.height), (w, h));
    }
}

#[test]
fn pixel_ratio_cap_applies_only_above_two() {
    // 1x and 2x displays render at full physical resolution
    assert_eq!(
        Viewport::from_window(1280, 720, 1.0),
        Viewport::new(1280, 720)
    );
    assert_eq!(
        Viewport::from_window(2560, 1440, 2.0),
        Viewport::new(2560, 1440)
    );
    // A 4x display is clamped to the 2x footprint
    assert_eq!(
        Viewport::from_window(5120, 2880, 4.0),
        Viewport::new(2560, 1440)
    );
}

#[test]
fn failed_texture_load_is_an_error_not_a_panic() {
    let result = decode_rgba("assets/missing-texture.png");
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("missing-texture.png"));
}

#[test]
fn failed_model_load_is_an_error_not_a_panic() {
    let result = load_model("assets/missing-logo.glb");
    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("missing-logo.glb"));
}
