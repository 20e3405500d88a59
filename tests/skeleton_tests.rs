//! Skeleton Hierarchy Tests
//!
//! Tests for:
//! - Full extraction: bone count, root placement, parent ordering
//! - Subset extraction: excluded nodes are spliced out
//! - Bone lookup by name
//! - Binding paths (delimiter count, round trip through the scene)
//! - Rest length computation and application

use glam::Vec3;
use myth_retarget::scene::{Node, NodeHandle, PATH_DELIMITER, Scene, Skeleton, Transform};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Builds a deterministic tree of `n` nodes. Node `i` hangs under node
/// `(i * 7 + 3) % i`, so shapes vary with `n`.
fn build_tree(n: usize) -> (Scene, Vec<NodeHandle>) {
    let mut scene = Scene::new();
    let mut handles = vec![scene.create_node_with_name("n0")];
    for i in 1..n {
        let parent = handles[(i * 7 + 3) % i];
        let offset = Vec3::new(i as f32 * 0.1, 1.0, 0.0);
        handles.push(scene.add_to_parent(
            Node::with_transform(format!("n{i}"), Transform::from_translation(offset)),
            parent,
        ));
    }
    (scene, handles)
}

fn depth(scene: &Scene, root: NodeHandle, mut node: NodeHandle) -> usize {
    let mut d = 0;
    while node != root {
        node = scene.get_node(node).unwrap().parent().unwrap();
        d += 1;
    }
    d
}

// ============================================================================
// Full Extraction
// ============================================================================

#[test]
fn extract_yields_one_bone_per_node_in_parent_order() {
    for n in 1..40 {
        let (scene, handles) = build_tree(n);
        let skeleton = Skeleton::extract(&scene, handles[0]);

        assert_eq!(skeleton.len(), n);
        assert_eq!(skeleton.bones()[0].node, handles[0]);
        assert!(skeleton.bones()[0].is_root());
        for (i, bone) in skeleton.iter().enumerate() {
            assert_eq!(bone.index, i);
            if let Some(p) = bone.parent {
                assert!(p < i, "parent {p} of bone {i} out of order");
                assert!(skeleton.bones()[p].children.contains(&i));
            } else {
                assert_eq!(i, 0);
            }
        }
    }
}

#[test]
fn extract_mirrors_scene_parenting() {
    let (scene, handles) = build_tree(25);
    let skeleton = Skeleton::extract(&scene, handles[0]);
    for bone in skeleton.iter().skip(1) {
        let parent_bone = skeleton.parent_of(bone).unwrap();
        let live_parent = scene.get_node(bone.node).unwrap().parent().unwrap();
        assert_eq!(parent_bone.node, live_parent);
    }
}

#[test]
fn extract_records_rest_lengths() {
    let mut scene = Scene::new();
    let hips = scene.create_node_with_name("Hips");
    let knee = scene.add_to_parent(
        Node::with_transform("Knee", Transform::from_translation(Vec3::new(0.0, -3.0, 4.0))),
        hips,
    );
    let skeleton = Skeleton::extract(&scene, hips);

    assert!(approx(skeleton.bones()[0].length(), 0.0));
    assert!(approx(skeleton.bones()[1].length(), 5.0));
    assert_eq!(skeleton.bones()[1].node, knee);
}

// ============================================================================
// Subset Extraction
// ============================================================================

#[test]
fn extract_subset_splices_out_excluded_nodes() {
    let mut scene = Scene::new();
    let root = scene.create_node_with_name("Root");
    let hips = scene.add_to_parent(Node::new("Hips"), root);
    let twist = scene.add_to_parent(Node::new("Twist"), hips);
    let _knee = scene.add_to_parent(Node::new("Knee"), twist);
    let _foot = scene.add_to_parent(Node::new("Foot"), hips);

    let skeleton = Skeleton::extract_subset(&scene, root, &["Root", "Hips", "Knee", "Foot"]);
    let names: Vec<&str> = skeleton.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Root", "Hips", "Knee", "Foot"]);

    let knee = skeleton.find_bone("Knee").unwrap();
    assert_eq!(skeleton.parent_of(knee).unwrap().name, "Hips");
    let hips_bone = skeleton.find_bone("Hips").unwrap();
    assert_eq!(hips_bone.children.as_slice(), &[2, 3]);
    assert_eq!(skeleton.child_of(hips_bone, 1).unwrap().name, "Foot");
}

#[test]
fn extract_subset_without_root_promotes_first_included() {
    let (scene, handles) = build_tree(6);
    let skeleton = Skeleton::extract_subset(&scene, handles[0], &["n3", "n5"]);
    assert!(!skeleton.is_empty());
    assert!(skeleton.bones()[0].is_root());
    for bone in skeleton.iter() {
        if let Some(p) = bone.parent {
            assert!(p < bone.index);
        }
    }
}

#[test]
fn extract_subset_rest_length_spans_spliced_nodes() {
    let mut scene = Scene::new();
    let a = scene.create_node_with_name("A");
    let b = scene.add_to_parent(
        Node::with_transform("B", Transform::from_translation(Vec3::Y)),
        a,
    );
    let _c = scene.add_to_parent(
        Node::with_transform("C", Transform::from_translation(Vec3::Y)),
        b,
    );
    let skeleton = Skeleton::extract_subset(&scene, a, &["A", "C"]);
    assert!(approx(skeleton.find_bone("C").unwrap().length(), 2.0));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn find_bone_returns_first_match_or_none() {
    let mut scene = Scene::new();
    let root = scene.create_node_with_name("Root");
    let left = scene.add_to_parent(Node::new("Left"), root);
    let first = scene.add_to_parent(Node::new("Hand"), left);
    let right = scene.add_to_parent(Node::new("Right"), root);
    let _second = scene.add_to_parent(Node::new("Hand"), right);

    let skeleton = Skeleton::extract(&scene, root);
    assert_eq!(skeleton.find_bone("Hand").unwrap().node, first);
    assert!(skeleton.find_bone("Tail").is_none());
}

// ============================================================================
// Binding Paths
// ============================================================================

#[test]
fn bone_path_has_depth_minus_one_delimiters_and_resolves_back() {
    let (scene, handles) = build_tree(30);
    let root = handles[0];
    let skeleton = Skeleton::extract(&scene, root);

    for bone in skeleton.iter().skip(1) {
        let path = skeleton.bone_path(&scene, bone).unwrap();
        let d = depth(&scene, root, bone.node);
        assert_eq!(path.matches(PATH_DELIMITER).count(), d - 1, "path '{path}'");
        assert_eq!(scene.resolve_path(root, &path), Some(bone.node));
    }
}

#[test]
fn bone_path_of_root_is_empty() {
    let (scene, handles) = build_tree(3);
    let skeleton = Skeleton::extract(&scene, handles[0]);
    let root = skeleton.root_bone().unwrap();
    assert_eq!(skeleton.bone_path(&scene, root).unwrap(), "");
}

// ============================================================================
// Rest Lengths
// ============================================================================

#[test]
fn compute_lengths_tracks_live_positions() {
    let mut scene = Scene::new();
    let a = scene.create_node_with_name("A");
    let b = scene.add_to_parent(
        Node::with_transform("B", Transform::from_translation(Vec3::X)),
        a,
    );
    let mut skeleton = Skeleton::extract(&scene, a);
    assert!(approx(skeleton.bones()[1].length(), 1.0));

    scene.get_node_mut(b).unwrap().transform.position = Vec3::new(3.0, 0.0, 0.0);
    assert!(approx(skeleton.current_length(&scene, 1), 3.0));
    assert!(approx(skeleton.bones()[1].length(), 1.0));

    skeleton.compute_lengths(&scene);
    assert!(approx(skeleton.bones()[1].length(), 3.0));
}

#[test]
fn apply_lengths_moves_nodes_along_parent_direction() {
    let mut scene = Scene::new();
    let a = scene.create_node_with_name("A");
    let b = scene.add_to_parent(
        Node::with_transform("B", Transform::from_translation(Vec3::new(0.0, 2.0, 0.0))),
        a,
    );
    let c = scene.add_to_parent(
        Node::with_transform("C", Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))),
        b,
    );

    let mut skeleton = Skeleton::extract(&scene, a);
    skeleton.set_length(1, 0.5);
    skeleton.set_length(2, 4.0);
    skeleton.apply_lengths(&mut scene);

    assert!(scene.world_position(b).unwrap().abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), EPSILON));
    assert!(scene.world_position(c).unwrap().abs_diff_eq(Vec3::new(4.0, 0.5, 0.0), EPSILON));
}

#[test]
fn set_length_clamps_negative_values() {
    let (scene, handles) = build_tree(2);
    let mut skeleton = Skeleton::extract(&scene, handles[0]);
    skeleton.set_length(1, -2.0);
    assert!(approx(skeleton.bones()[1].length(), 0.0));
}
