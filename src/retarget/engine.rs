use glam::{Affine3A, Quat, Vec3};

use crate::animation::{AnimationCurve, CurveName, CurveSink, RetargetedCurveSet};
use crate::errors::{Result, RetargetError};
use crate::motion::{Channel, ChannelMask, SourceClip, SourceJoint};
use crate::remap::RemapTable;
use crate::retarget::report::{RetargetReport, SkipReason, SkippedJoint};
use crate::retarget::rotation::{RotationGuard, ensure_continuity, euler_degrees_to_quat, mirror_x, wrap180};
use crate::retarget::settings::RetargetSettings;
use crate::scene::{Bone, Scene, Skeleton};

/// World frame of the skeleton's root node, captured once per run.
struct RootFrame {
    position: Vec3,
    inverse: Affine3A,
}

/// Converts source clips into local-space curves bound to a target skeleton.
///
/// Runs synchronously: one joint at a time, one frame at a time. The only
/// scene mutation is the scoped rotation write used to express each sampled
/// world rotation in the target bone's local space; it is reverted before
/// the next joint is processed.
#[derive(Debug, Clone, Default)]
pub struct Retargeter {
    settings: RetargetSettings,
}

impl Retargeter {
    #[must_use]
    pub fn new(settings: RetargetSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &RetargetSettings {
        &self.settings
    }

    /// Retargets every mapped joint of `clip` onto `skeleton` and hands the
    /// resulting curve sets to `sink`.
    ///
    /// Settings and clip are validated before anything is produced. Curves are
    /// delivered only once every joint converted successfully, so a fatal
    /// error leaves the sink untouched.
    pub fn retarget<S>(
        &self,
        scene: &mut Scene,
        skeleton: &Skeleton,
        remap: &RemapTable,
        clip: &SourceClip,
        sink: &mut S,
    ) -> Result<RetargetReport>
    where
        S: CurveSink + ?Sized,
    {
        self.settings.validate()?;
        clip.validate()?;

        let root = skeleton.root_node();
        let root_world = scene
            .world_matrix(root)
            .ok_or_else(|| RetargetError::NodeNotFound("<skeleton root>".to_owned()))?;
        let frame = RootFrame {
            position: root_world.translation.into(),
            inverse: root_world.inverse(),
        };

        let mut report = RetargetReport::default();
        let mut sets = Vec::new();

        for joint in clip.joints() {
            let Some(target) = remap.target_for(&joint.name) else {
                self.skip(&mut report, joint, SkipReason::Unmapped)?;
                continue;
            };
            let Some(bone) = skeleton.find_bone(target) else {
                self.skip(&mut report, joint, SkipReason::TargetNotFound(target.to_owned()))?;
                continue;
            };
            if scene.get_node(bone.node).is_none() {
                return Err(RetargetError::NodeNotFound(bone.name.clone()));
            }

            let path = skeleton.bone_path(scene, bone)?;
            let set = self.convert_joint(scene, &frame, clip, joint, bone, path, &mut report)?;
            if !set.is_empty() {
                report.produced.push(set.path.clone());
                report.curve_count += set.len();
                sets.push(set);
            }
        }

        for set in sets {
            sink.add_curve_set(set);
        }

        log::info!(
            "Retargeted {} joints into {} curves ({} skipped)",
            report.produced.len(),
            report.curve_count,
            report.skipped.len()
        );
        Ok(report)
    }

    #[allow(clippy::too_many_arguments)]
    fn convert_joint(
        &self,
        scene: &mut Scene,
        frame: &RootFrame,
        clip: &SourceClip,
        joint: &SourceJoint,
        bone: &Bone,
        path: String,
        report: &mut RetargetReport,
    ) -> Result<RetargetedCurveSet> {
        let mask = joint.enabled_mask();
        let mut set = RetargetedCurveSet::new(path);

        if mask.has_full_position() {
            let scale = scene.local_scale(bone.node).unwrap_or(Vec3::ONE);
            self.sample_positions(frame, clip, joint, scale, &mut set);
        }

        if mask.has_full_rotation() {
            self.sample_rotations(scene, clip, joint, bone, &mut set)?;
        } else if mask.intersects(ChannelMask::ROTATION) {
            self.skip(
                report,
                joint,
                SkipReason::IncompleteRotation(mask & ChannelMask::ROTATION),
            )?;
        } else if set.is_empty() {
            self.skip(report, joint, SkipReason::NoChannels)?;
        }

        Ok(set)
    }

    fn sample_positions(
        &self,
        frame: &RootFrame,
        clip: &SourceClip,
        joint: &SourceJoint,
        scale: Vec3,
        set: &mut RetargetedCurveSet,
    ) {
        let (Some(xs), Some(ys), Some(zs)) = (
            joint.samples(Channel::PosX),
            joint.samples(Channel::PosY),
            joint.samples(Channel::PosZ),
        ) else {
            return;
        };

        let offset = self.mirror_position(joint.offset);
        let mut curves: [AnimationCurve; 3] =
            std::array::from_fn(|_| AnimationCurve::with_capacity(clip.frame_count));

        for i in 0..clip.frame_count {
            let time = clip.frame_time(i);
            let sample = self.mirror_position(Vec3::new(xs[i], ys[i], zs[i]));
            let local = frame
                .inverse
                .transform_point3(sample + frame.position + offset);
            let value = local / self.settings.unit_scale * scale;

            curves[0].push(time, value.x);
            curves[1].push(time, value.y);
            curves[2].push(time, value.z);
        }

        for (name, curve) in CurveName::POSITION.into_iter().zip(curves) {
            set.insert(name, curve);
        }
    }

    fn sample_rotations(
        &self,
        scene: &mut Scene,
        clip: &SourceClip,
        joint: &SourceJoint,
        bone: &Bone,
        set: &mut RetargetedCurveSet,
    ) -> Result<()> {
        let (Some(rx), Some(ry), Some(rz)) = (
            joint.samples(Channel::RotX),
            joint.samples(Channel::RotY),
            joint.samples(Channel::RotZ),
        ) else {
            return Ok(());
        };

        let order = joint.rotation_order();
        let mut rotations: Vec<Quat> = Vec::with_capacity(clip.frame_count);
        {
            let mut guard = RotationGuard::new(scene, bone.node)
                .ok_or_else(|| RetargetError::NodeNotFound(bone.name.clone()))?;

            for i in 0..clip.frame_count {
                let euler = Vec3::new(wrap180(rx[i]), wrap180(ry[i]), wrap180(rz[i]));
                let mut world = euler_degrees_to_quat(order, euler);
                if self.settings.mirror_x {
                    world = mirror_x(world);
                }
                rotations.push(guard.sample(world));
            }
        }

        if self.settings.enforce_continuity {
            ensure_continuity(&mut rotations);
        }

        let mut curves: [AnimationCurve; 4] =
            std::array::from_fn(|_| AnimationCurve::with_capacity(clip.frame_count));
        for (i, q) in rotations.iter().enumerate() {
            let time = clip.frame_time(i);
            curves[0].push(time, q.x);
            curves[1].push(time, q.y);
            curves[2].push(time, q.z);
            curves[3].push(time, q.w);
        }

        for (name, curve) in CurveName::ROTATION.into_iter().zip(curves) {
            set.insert(name, curve);
        }
        Ok(())
    }

    #[inline]
    fn mirror_position(&self, v: Vec3) -> Vec3 {
        if self.settings.mirror_x {
            Vec3::new(-v.x, v.y, v.z)
        } else {
            v
        }
    }

    fn skip(&self, report: &mut RetargetReport, joint: &SourceJoint, reason: SkipReason) -> Result<()> {
        if self.settings.strict && reason.is_misconfiguration() {
            return Err(RetargetError::UnresolvedMapping {
                joint: joint.name.clone(),
                reason,
            });
        }

        match &reason {
            SkipReason::TargetNotFound(_) => log::warn!("Skipping joint '{}': {reason}", joint.name),
            _ => log::debug!("Skipping joint '{}': {reason}", joint.name),
        }
        report.skipped.push(SkippedJoint {
            joint: joint.name.clone(),
            reason,
        });
        Ok(())
    }
}
