//! Target scene graph
//!
//! The live, mutable tree of named nodes that animation is retargeted onto:
//! - Node: named scene node (parent/children + local transform)
//! - Transform: local TRS component
//! - Scene: node storage, world-space queries and path lookup
//! - Skeleton: indexed bone arena extracted from a scene subtree

pub mod node;
pub mod scene;
pub mod skeleton;
pub mod transform;

pub use node::Node;
pub use scene::{PATH_DELIMITER, Scene};
pub use skeleton::{Bone, Skeleton};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
