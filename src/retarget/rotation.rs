//! Rotation helpers used while sampling rotation channels.

use glam::{EulerRot, Quat, Vec3};

use crate::scene::{NodeHandle, Scene};

/// Wraps an angle in degrees into `(-180, 180]`.
#[must_use]
pub fn wrap180(angle: f32) -> f32 {
    if angle > -180.0 && angle <= 180.0 {
        return angle;
    }
    let wrapped = 180.0 - (180.0 - angle).rem_euclid(360.0);
    if wrapped <= -180.0 { wrapped + 360.0 } else { wrapped }
}

/// Composes per-axis angles in degrees in the given intrinsic order.
#[must_use]
pub fn euler_degrees_to_quat(order: EulerRot, degrees: Vec3) -> Quat {
    let Vec3 { x, y, z } = degrees * (std::f32::consts::PI / 180.0);
    match order {
        EulerRot::XYZ => Quat::from_euler(order, x, y, z),
        EulerRot::XZY => Quat::from_euler(order, x, z, y),
        EulerRot::YXZ => Quat::from_euler(order, y, x, z),
        EulerRot::YZX => Quat::from_euler(order, y, z, x),
        EulerRot::ZXY => Quat::from_euler(order, z, x, y),
        EulerRot::ZYX => Quat::from_euler(order, z, y, x),
        // Source channels only ever resolve to the six Tait-Bryan orders.
        _ => Quat::from_euler(EulerRot::YXZ, y, x, z),
    }
}

/// Mirrors a rotation across the YZ plane (negates the horizontal axis).
#[inline]
#[must_use]
pub fn mirror_x(q: Quat) -> Quat {
    Quat::from_xyzw(q.x, -q.y, -q.z, q.w)
}

/// Negates samples so every consecutive pair has a non-negative dot product.
/// Each sample is compared against the already corrected previous one.
pub fn ensure_continuity(rotations: &mut [Quat]) {
    for i in 1..rotations.len() {
        if rotations[i - 1].dot(rotations[i]) < 0.0 {
            rotations[i] = -rotations[i];
        }
    }
}

/// Exclusive, scoped write access to one node's rotation.
///
/// The node's original local rotation is captured on creation and written
/// back when the guard drops, on every exit path.
pub struct RotationGuard<'a> {
    scene: &'a mut Scene,
    node: NodeHandle,
    original: Quat,
}

impl<'a> RotationGuard<'a> {
    pub fn new(scene: &'a mut Scene, node: NodeHandle) -> Option<Self> {
        let original = scene.local_rotation(node)?;
        Some(Self {
            scene,
            node,
            original,
        })
    }

    /// Applies `world` as the node's world rotation and returns the local
    /// rotation that results under the current parent chain.
    pub fn sample(&mut self, world: Quat) -> Quat {
        self.scene.set_world_rotation(self.node, world);
        self.scene.nodes[self.node].transform.rotation
    }
}

impl Drop for RotationGuard<'_> {
    fn drop(&mut self) {
        self.scene.set_local_rotation(self.node, self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Node, Transform};

    #[test]
    fn test_wrap180_range_and_idempotence() {
        let mut angle = -720.0_f32;
        while angle <= 720.0 {
            let w = wrap180(angle);
            assert!(w > -180.0 && w <= 180.0, "{angle} -> {w}");
            assert_eq!(wrap180(w), w);
            angle += 0.25;
        }
        assert_eq!(wrap180(-180.0), 180.0);
        assert_eq!(wrap180(190.0), -170.0);
        assert_eq!(wrap180(-190.0), 170.0);
        assert_eq!(wrap180(45.5), 45.5);
    }

    #[test]
    fn test_continuity_cascades() {
        let a = Quat::from_rotation_y(0.1);
        let mut samples = vec![a, -a, a, -a];
        ensure_continuity(&mut samples);
        for pair in samples.windows(2) {
            assert!(pair[0].dot(pair[1]) >= 0.0);
        }
        assert_eq!(samples[3], a);
    }

    #[test]
    fn test_euler_order_composition() {
        let q = euler_degrees_to_quat(EulerRot::ZXY, Vec3::new(30.0, 45.0, 60.0));
        let expected = Quat::from_rotation_z(60f32.to_radians())
            * Quat::from_rotation_x(30f32.to_radians())
            * Quat::from_rotation_y(45f32.to_radians());
        assert!(q.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_guard_restores_rotation_on_drop() {
        let mut scene = Scene::new();
        let original = Quat::from_rotation_x(0.3);
        let node = scene.add_node(Node::with_transform(
            "bone",
            Transform::default().with_rotation(original),
        ));

        {
            let mut guard = RotationGuard::new(&mut scene, node).unwrap();
            let local = guard.sample(Quat::from_rotation_y(1.0));
            assert!(local.abs_diff_eq(Quat::from_rotation_y(1.0), 1e-5));
        }

        assert_eq!(scene.local_rotation(node), Some(original));
    }
}
