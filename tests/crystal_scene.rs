//! Behavioral checks on the crystal scene's procedural rig.

use std::f32::consts::TAU;
use vitrine::{CrystalParams, CrystalRig, FaceGroup};

const TIME_STEP: f32 = 0.01;

#[test]
fn exactly_one_face_group_visible_at_every_frame() {
    // Run long enough for several full model revolutions at the fast
    // preset and check the split at every single frame.
    let params = CrystalParams {
        speed_factor: 2.0,
        ..CrystalParams::default()
    };
    let mut rig = CrystalRig::new(params);

    let mut time = 0.0;
    let mut front_frames = 0u32;
    let mut back_frames = 0u32;

    // 0.005 * 2.0 per frame: one turn every ~629 frames
    for _ in 0..3_000 {
        time += TIME_STEP;
        rig.advance(time);
        match rig.visible_group() {
            FaceGroup::Front => front_frames += 1,
            FaceGroup::Back => back_frames += 1,
        }
    }

    // Both halves get screen time across full revolutions
    assert!(front_frames > 0);
    assert!(back_frames > 0);
    assert_eq!(front_frames + back_frames, 3_000);
}

#[test]
fn speed_presets_scale_rotation_proportionally() {
    let presets = [0.5_f32, 1.0, 2.0];
    let mut yaws = Vec::new();

    for speed in presets {
        let mut rig = CrystalRig::new(CrystalParams {
            speed_factor: speed,
            ..CrystalParams::default()
        });
        let mut time = 0.0;
        for _ in 0..1_000 {
            time += TIME_STEP;
            rig.advance(time);
        }
        yaws.push(rig.model_yaw());
    }

    // Doubling the preset doubles the accumulated yaw
    assert!((yaws[1] - 2.0 * yaws[0]).abs() < 1e-4);
    assert!((yaws[2] - 2.0 * yaws[1]).abs() < 1e-4);
}

#[test]
fn roaming_lights_stay_opposed_in_the_horizontal_plane() {
    let params = CrystalParams::default();
    let mut rig = CrystalRig::new(params);

    let mut time = 0.0;
    for _ in 0..2_000 {
        time += TIME_STEP;
        rig.advance(time);

        let a = rig.light_a();
        let b = rig.light_b();
        assert!((a.x + b.x).abs() < 1e-4);
        assert!((a.z + b.z).abs() < 1e-4);
    }
}

#[test]
fn visibility_boundary_sits_a_quarter_turn_out() {
    let quarter = TAU / 4.0;
    assert_eq!(CrystalRig::group_for_yaw(quarter - 1e-3), FaceGroup::Front);
    assert_eq!(CrystalRig::group_for_yaw(quarter + 1e-3), FaceGroup::Back);
    assert_eq!(
        CrystalRig::group_for_yaw(-quarter + 1e-3),
        FaceGroup::Front
    );
    assert_eq!(CrystalRig::group_for_yaw(-quarter - 1e-3), FaceGroup::Back);
}

#[test]
fn negative_accumulated_yaw_wraps_like_positive() {
    // The model yaw decreases forever; many turns in either direction
    // must classify identically.
    for i in 0..200 {
        let yaw = i as f32 * 0.1;
        assert_eq!(
            CrystalRig::group_for_yaw(yaw),
            CrystalRig::group_for_yaw(yaw - 7.0 * TAU),
        );
    }
}
