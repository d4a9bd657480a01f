use alloc::vec::Vec;

use super::handle::NodeId;

/// Insert-only node arena.
///
/// The tree never deletes, so there is no free list: slots are handed out in
/// allocation order and a `NodeId` stays valid for the arena's lifetime. The
/// one exception is [`rollback`](Arena::rollback), which discards the most
/// recent allocation before anything has been linked to it.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        assert!(
            self.slots.len() <= NodeId::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            NodeId::MAX
        );
        self.slots.push(element);
        NodeId::from_index(self.slots.len() - 1)
    }

    /// Discards the most recent allocation. The caller must guarantee that
    /// `id` came from the immediately preceding [`alloc`](Arena::alloc) and
    /// that nothing points at it.
    pub(crate) fn rollback(&mut self, id: NodeId) {
        assert!(
            id.to_index() + 1 == self.slots.len(),
            "`Arena::rollback()` - `id` is not the most recent allocation!"
        );
        self.slots.pop();
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        &self.slots[id.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.to_index()]
    }
}
