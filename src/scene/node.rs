use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A named node of the target hierarchy.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: Ordered child handles; the order defines pre-order traversal
///
/// # Transform
///
/// [`Transform`] holds the local position, rotation and scale. World-space
/// values are derived on demand by [`Scene`](crate::scene::Scene).
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,
}

impl Node {
    /// Creates a detached node with an identity transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
        }
    }

    /// Creates a detached node with the given local transform.
    #[must_use]
    pub fn with_transform(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            transform,
            ..Self::new(name)
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }
}
