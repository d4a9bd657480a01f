use super::handle::NodeId;

/// One stored key plus its red-black and order-statistic bookkeeping.
///
/// `left_size` counts the real nodes in the left subtree only; neither the
/// node itself nor its right subtree contribute. Child links are arena
/// indices and always point at a valid slot, with the sentinel standing in
/// for an absent child.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) red: bool,
    pub(crate) left_size: u32,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<T> Node<T> {
    /// A black childless node; `child` is the arena's sentinel index
    /// (or the node's own index, for the sentinel itself).
    pub(crate) fn leaf(key: T, child: NodeId) -> Self {
        Self {
            key,
            red: false,
            left_size: 0,
            left: child,
            right: child,
        }
    }
}
