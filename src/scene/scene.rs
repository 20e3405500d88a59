use glam::{Affine3A, Quat, Vec3};
use slotmap::SlotMap;

use crate::errors::{Result, RetargetError};
use crate::scene::NodeHandle;
use crate::scene::node::Node;
use crate::scene::transform::Transform;

/// Separator between node names in a binding path.
pub const PATH_DELIMITER: char = '/';

/// Scene graph
///
/// Pure data layer: node storage plus hierarchy bookkeeping. World-space
/// values are composed from the parent chain on every query, so they always
/// reflect the latest local edits.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Adds a node at the top level of the scene.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Creates an identity-transform root node with the given name.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::new(name))
    }

    /// Inserts `child` under `parent`. Falls back to a root node when the
    /// parent does not exist.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
            self.nodes[handle].parent = Some(parent);
        } else {
            log::error!("Parent node not found, adding '{}' as root", self.nodes[handle].name);
            self.root_nodes.push(handle);
        }

        handle
    }

    /// Re-parents `child` under `parent`.
    ///
    /// Returns `false` (and leaves the hierarchy untouched) if either node is
    /// missing or if the move would create a cycle.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) -> bool {
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::error!("Node not found during attach!");
            return false;
        }
        if child == parent || self.is_ancestor(child, parent) {
            log::warn!("Cannot attach a node to itself or to one of its descendants!");
            return false;
        }

        // 1. Detach from old
        if let Some(old) = self.nodes[child].parent {
            let siblings = &mut self.nodes[old].children;
            if let Some(i) = siblings.iter().position(|&x| x == child) {
                siblings.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        true
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `ancestor` lies on the parent chain of `node` (exclusive).
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(Node::parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(Node::parent);
        }
        false
    }

    // ========================================================================
    // World-space queries
    // ========================================================================

    /// World matrix of a node, composed root-first along its parent chain.
    #[must_use]
    pub fn world_matrix(&self, handle: NodeHandle) -> Option<Affine3A> {
        let mut world = self.nodes.get(handle)?.transform.local_matrix();
        let mut current = self.nodes[handle].parent;
        while let Some(parent) = current {
            let node = self.nodes.get(parent)?;
            world = node.transform.local_matrix() * world;
            current = node.parent;
        }
        Some(world)
    }

    #[must_use]
    pub fn world_position(&self, handle: NodeHandle) -> Option<Vec3> {
        self.world_matrix(handle).map(|m| m.translation.into())
    }

    /// World rotation: the product of local rotations along the parent chain.
    /// Scale does not contribute.
    #[must_use]
    pub fn world_rotation(&self, handle: NodeHandle) -> Option<Quat> {
        let mut rotation = self.nodes.get(handle)?.transform.rotation;
        let mut current = self.nodes[handle].parent;
        while let Some(parent) = current {
            let node = self.nodes.get(parent)?;
            rotation = node.transform.rotation * rotation;
            current = node.parent;
        }
        Some(rotation)
    }

    #[must_use]
    pub fn local_rotation(&self, handle: NodeHandle) -> Option<Quat> {
        self.nodes.get(handle).map(|n| n.transform.rotation)
    }

    #[must_use]
    pub fn local_scale(&self, handle: NodeHandle) -> Option<Vec3> {
        self.nodes.get(handle).map(|n| n.transform.scale)
    }

    #[must_use]
    pub fn local_transform(&self, handle: NodeHandle) -> Option<&Transform> {
        self.nodes.get(handle).map(|n| &n.transform)
    }

    fn parent_world_matrix(&self, handle: NodeHandle) -> Option<Affine3A> {
        match self.nodes.get(handle)?.parent {
            Some(parent) => self.world_matrix(parent),
            None => Some(Affine3A::IDENTITY),
        }
    }

    fn parent_world_rotation(&self, handle: NodeHandle) -> Option<Quat> {
        match self.nodes.get(handle)?.parent {
            Some(parent) => self.world_rotation(parent),
            None => Some(Quat::IDENTITY),
        }
    }

    // ========================================================================
    // World-space mutations
    // ========================================================================

    /// Moves a node so its world position equals `position`. Children keep
    /// their local transforms and follow along.
    pub fn set_world_position(&mut self, handle: NodeHandle, position: Vec3) -> bool {
        let Some(parent_world) = self.parent_world_matrix(handle) else {
            return false;
        };
        let local = parent_world.inverse().transform_point3(position);
        self.nodes[handle].transform.position = local;
        true
    }

    /// Rotates a node so its world rotation equals `rotation`, expressed
    /// relative to its current parent chain.
    pub fn set_world_rotation(&mut self, handle: NodeHandle, rotation: Quat) -> bool {
        let Some(parent_rotation) = self.parent_world_rotation(handle) else {
            return false;
        };
        let local = (parent_rotation.inverse() * rotation).normalize();
        self.nodes[handle].transform.rotation = local;
        true
    }

    pub fn set_local_rotation(&mut self, handle: NodeHandle, rotation: Quat) -> bool {
        match self.nodes.get_mut(handle) {
            Some(node) => {
                node.transform.rotation = rotation;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Pre-order traversal of the subtree rooted at `root` (root included).
    #[must_use]
    pub fn pre_order(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            out.push(handle);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// First node named `name` in pre-order under `root` (root included).
    #[must_use]
    pub fn find_node_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            if node.name == name {
                return Some(handle);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Binding path of `target` relative to `root`: the names from the child
    /// of `root` down to `target`, joined by [`PATH_DELIMITER`]. The root
    /// itself yields an empty path.
    pub fn relative_path(&self, root: NodeHandle, target: NodeHandle) -> Result<String> {
        let no_path = || RetargetError::NoPath {
            root: self.get_name(root).unwrap_or("<missing>").to_owned(),
            target: self.get_name(target).unwrap_or("<missing>").to_owned(),
        };

        let mut names = Vec::new();
        let mut current = target;
        while current != root {
            let node = self.nodes.get(current).ok_or_else(no_path)?;
            names.push(node.name.as_str());
            current = node.parent.ok_or_else(no_path)?;
        }

        let mut path = String::new();
        for (i, name) in names.iter().rev().enumerate() {
            if i > 0 {
                path.push(PATH_DELIMITER);
            }
            path.push_str(name);
        }
        Ok(path)
    }

    /// Inverse of [`relative_path`](Self::relative_path). Each segment picks
    /// the first child with that name.
    #[must_use]
    pub fn resolve_path(&self, root: NodeHandle, path: &str) -> Option<NodeHandle> {
        let mut current = root;
        self.nodes.get(root)?;
        if path.is_empty() {
            return Some(root);
        }
        for segment in path.split(PATH_DELIMITER) {
            current = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&c| self.nodes.get(c).is_some_and(|n| n.name == segment))?;
        }
        Some(current)
    }
}
