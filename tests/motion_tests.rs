//! Source Motion Model Tests
//!
//! Tests for:
//! - SourceClip validation (frame rate, frame count, channel lengths)
//! - Joint traversal and channel masks
//! - Pruning joints with their subtrees
//! - JSON round trip of a clip fixture

use glam::Vec3;
use myth_retarget::RetargetError;
use myth_retarget::motion::{Channel, ChannelMask, SourceClip, SourceJoint};

fn rotating(name: &str, frames: usize) -> SourceJoint {
    SourceJoint::new(name, Vec3::new(0.0, 10.0, 0.0))
        .with_channel(Channel::RotZ, vec![0.0; frames])
        .with_channel(Channel::RotX, vec![0.0; frames])
        .with_channel(Channel::RotY, vec![0.0; frames])
}

fn body(frames: usize) -> SourceClip {
    let hips = SourceJoint::new("Hips", Vec3::ZERO)
        .with_channel(Channel::PosX, vec![0.0; frames])
        .with_channel(Channel::PosY, vec![0.0; frames])
        .with_channel(Channel::PosZ, vec![0.0; frames])
        .with_channel(Channel::RotZ, vec![0.0; frames])
        .with_channel(Channel::RotX, vec![0.0; frames])
        .with_channel(Channel::RotY, vec![0.0; frames])
        .with_child(
            rotating("Spine", frames).with_child(
                rotating("LeftHand", frames)
                    .with_child(rotating("LeftHandThumb1", frames))
                    .with_child(rotating("LeftHandIndex1", frames)),
            ),
        )
        .with_child(rotating("LeftUpLeg", frames));
    SourceClip::new(hips, frames, 30.0)
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn validate_accepts_consistent_clip() {
    assert!(body(4).validate().is_ok());
}

#[test]
fn validate_rejects_bad_frame_rate() {
    for rate in [0.0, -24.0, f32::NAN, f32::INFINITY] {
        let mut clip = body(2);
        clip.frame_rate = rate;
        assert!(matches!(clip.validate(), Err(RetargetError::InvalidFrameRate(_))));
    }
}

#[test]
fn validate_rejects_empty_clip() {
    let clip = SourceClip::new(SourceJoint::new("Hips", Vec3::ZERO), 0, 30.0);
    assert!(matches!(clip.validate(), Err(RetargetError::EmptyClip)));
}

#[test]
fn validate_reports_mismatched_channel() {
    let mut clip = body(3);
    clip.root.children[1].set_channel(Channel::RotY, vec![0.0; 2]);

    match clip.validate() {
        Err(RetargetError::ChannelLengthMismatch {
            joint,
            channel,
            expected,
            actual,
        }) => {
            assert_eq!(joint, "LeftUpLeg");
            assert_eq!(channel, Channel::RotY);
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn validate_ignores_disabled_channels() {
    let mut clip = body(3);
    // Disabled channel with stale samples is not checked.
    clip.root.children[1].channels[Channel::PosX.index()].samples = vec![1.0];
    assert!(clip.validate().is_ok());
}

// ============================================================================
// Traversal & Masks
// ============================================================================

#[test]
fn joints_iterate_in_pre_order() {
    let clip = body(1);
    assert_eq!(
        clip.joint_names(),
        ["Hips", "Spine", "LeftHand", "LeftHandThumb1", "LeftHandIndex1", "LeftUpLeg"]
    );
    assert!(clip.find_joint("LeftHandIndex1").is_some());
    assert!(clip.find_joint("Tail").is_none());
}

#[test]
fn enabled_mask_reflects_channels() {
    let clip = body(1);
    assert_eq!(clip.root.enabled_mask(), ChannelMask::all());
    let spine = clip.find_joint("Spine").unwrap();
    assert_eq!(spine.enabled_mask(), ChannelMask::ROTATION);
    assert!(spine.samples(Channel::PosX).is_none());
    assert_eq!(spine.samples(Channel::RotX).map(<[f32]>::len), Some(1));
}

#[test]
fn frame_times_start_one_period_in() {
    let clip = body(5);
    assert!((clip.frame_time(0) - 1.0 / 30.0).abs() < 1e-7);
    assert!((clip.frame_time(4) - 5.0 / 30.0).abs() < 1e-7);
    assert!((clip.duration() - 5.0 / 30.0).abs() < 1e-7);
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn prune_removes_matching_subtrees() {
    let mut clip = body(2);
    let removed = clip.prune(|j| j.name.starts_with("LeftHand"));
    assert_eq!(removed, 3);
    assert_eq!(clip.joint_names(), ["Hips", "Spine", "LeftUpLeg"]);
    assert!(clip.validate().is_ok());
}

#[test]
fn prune_never_removes_root() {
    let mut clip = body(2);
    let removed = clip.prune(|j| j.name == "Hips");
    assert_eq!(removed, 0);
    assert_eq!(clip.joint_names().len(), 6);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn clip_json_round_trip_preserves_authored_order() -> anyhow::Result<()> {
    let clip = body(2);
    let json = serde_json::to_string(&clip)?;
    let back = SourceClip::from_json_str(&json)?;
    assert_eq!(back, clip);
    assert_eq!(back.root.rotation_order(), glam::EulerRot::ZXY);
    Ok(())
}
