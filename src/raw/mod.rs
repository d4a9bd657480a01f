mod arena;
mod handle;
mod node;
mod raw_tree;

pub(crate) use handle::NodeId;
pub(crate) use raw_tree::{RawOstTree, SENTINEL};
