//! NodeID computation for virtual tree nodes

use crate::types::NodeID;

/// Compute the NodeID for the node reached by `segments` from the root.
///
/// Each segment is length-prefixed before hashing so that `["ab", "c"]` and
/// `["a", "bc"]` can never collide. Sibling titles are unique, so the path
/// alone identifies a node.
pub fn compute_node_id(segments: &[&str]) -> NodeID {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"deskterm-node");
    for segment in segments {
        hasher.update(&(segment.len() as u64).to_le_bytes());
        hasher.update(segment.as_bytes());
    }
    NodeID(*hasher.finalize().as_bytes())
}
