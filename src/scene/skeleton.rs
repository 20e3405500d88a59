use glam::Vec3;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::errors::Result;
use crate::scene::node::Node;
use crate::scene::{NodeHandle, Scene};

/// One entry of a [`Skeleton`] arena.
///
/// Name and rest length are copied out of the scene at extraction time, so the
/// arena stays stable while unrelated tooling edits the live graph.
#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    /// Live node this bone reads and writes through.
    pub node: NodeHandle,
    pub index: usize,
    /// Index of the nearest included ancestor (`None` for top-level bones).
    pub parent: Option<usize>,
    pub children: SmallVec<[usize; 4]>,
    length: f32,
}

impl Bone {
    /// Stored rest length (distance to the parent bone).
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn set_length(&mut self, value: f32) {
        self.length = value.max(0.0);
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Indexed bone hierarchy extracted from a scene subtree.
///
/// Bones are stored in pre-order, so `bones[0]` is the first extracted node
/// and every bone's parent index is smaller than its own.
#[derive(Debug, Clone)]
pub struct Skeleton {
    root: NodeHandle,
    bones: Vec<Bone>,
}

impl Skeleton {
    /// Every node under `root` (root included) becomes a bone.
    #[must_use]
    pub fn extract(scene: &Scene, root: NodeHandle) -> Self {
        Self::extract_with(scene, root, |_, _| true)
    }

    /// Only nodes whose name is listed become bones. Excluded nodes are
    /// spliced out: traversal continues through them and their descendants
    /// attach to the nearest included ancestor.
    #[must_use]
    pub fn extract_subset<S: AsRef<str>>(scene: &Scene, root: NodeHandle, names: &[S]) -> Self {
        let included: FxHashSet<&str> = names.iter().map(AsRef::as_ref).collect();
        Self::extract_with(scene, root, |_, node| included.contains(node.name.as_str()))
    }

    /// Extraction with an arbitrary inclusion predicate.
    pub fn extract_with<F>(scene: &Scene, root: NodeHandle, mut include: F) -> Self
    where
        F: FnMut(NodeHandle, &Node) -> bool,
    {
        let mut bones: Vec<Bone> = Vec::new();
        // (node, nearest included ancestor)
        let mut stack: Vec<(NodeHandle, Option<usize>)> = vec![(root, None)];

        while let Some((handle, parent)) = stack.pop() {
            let Some(node) = scene.get_node(handle) else {
                continue;
            };

            let mut effective_parent = parent;
            if include(handle, node) {
                let index = bones.len();
                bones.push(Bone {
                    name: node.name.clone(),
                    node: handle,
                    index,
                    parent,
                    children: SmallVec::new(),
                    length: 0.0,
                });
                if let Some(p) = parent {
                    bones[p].children.push(index);
                }
                effective_parent = Some(index);
            }

            for &child in node.children().iter().rev() {
                stack.push((child, effective_parent));
            }
        }

        let mut skeleton = Self { root, bones };
        skeleton.compute_lengths(scene);
        log::debug!(
            "Extracted skeleton with {} bones from '{}'",
            skeleton.bones.len(),
            scene.get_name(root).unwrap_or_default()
        );
        skeleton
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Scene node the skeleton was extracted from; binding paths are relative
    /// to it.
    #[inline]
    #[must_use]
    pub fn root_node(&self) -> NodeHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn root_bone(&self) -> Option<&Bone> {
        self.bones.first()
    }

    #[inline]
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    #[inline]
    #[must_use]
    pub fn bone(&self, index: usize) -> Option<&Bone> {
        self.bones.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter()
    }

    #[must_use]
    pub fn parent_of(&self, bone: &Bone) -> Option<&Bone> {
        bone.parent.and_then(|p| self.bones.get(p))
    }

    #[must_use]
    pub fn child_of(&self, bone: &Bone, n: usize) -> Option<&Bone> {
        bone.children.get(n).and_then(|&c| self.bones.get(c))
    }

    /// First bone named `name` in pre-order.
    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// Binding path of a bone relative to the skeleton's root node.
    pub fn bone_path(&self, scene: &Scene, bone: &Bone) -> Result<String> {
        scene.relative_path(self.root, bone.node)
    }

    // ========================================================================
    // Rest lengths
    // ========================================================================

    /// Live distance between a bone and its parent bone. Zero for top-level
    /// bones or when either node is gone.
    #[must_use]
    pub fn current_length(&self, scene: &Scene, index: usize) -> f32 {
        let Some(bone) = self.bones.get(index) else {
            return 0.0;
        };
        let Some(parent) = self.parent_of(bone) else {
            return 0.0;
        };
        match (scene.world_position(parent.node), scene.world_position(bone.node)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => 0.0,
        }
    }

    /// Refreshes every stored rest length from the live positions.
    pub fn compute_lengths(&mut self, scene: &Scene) {
        for i in 0..self.bones.len() {
            self.bones[i].length = self.current_length(scene, i);
        }
    }

    pub fn set_length(&mut self, index: usize, value: f32) {
        if let Some(bone) = self.bones.get_mut(index) {
            bone.set_length(value);
        }
    }

    /// Moves each live node along the current direction from its parent so
    /// the distance matches the stored rest length. Parents are processed
    /// before their children.
    pub fn apply_lengths(&self, scene: &mut Scene) {
        for bone in &self.bones {
            let Some(parent) = self.parent_of(bone) else {
                continue;
            };
            let (Some(from), Some(to)) = (scene.world_position(parent.node), scene.world_position(bone.node))
            else {
                continue;
            };
            let direction = (to - from).normalize_or_zero();
            if direction == Vec3::ZERO {
                continue;
            }
            scene.set_world_position(bone.node, from + direction * bone.length);
        }
    }
}
