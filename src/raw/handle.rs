use core::num::NonZero;

type RawId = u32;

/// Index of a node slot in the arena.
///
/// Stored shifted by one so the niche optimization applies; node links never
/// need `Option<NodeId>` (the sentinel plays that role), but keeping the
/// niche keeps `NodeId` interchangeable with its raw representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<RawId>);

impl NodeId {
    pub(crate) const MAX: usize = (RawId::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        // `index + 1` cannot be zero and cannot overflow.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawId).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `NodeId` and the niche optimization.
    assert_eq_size!(NodeId, Option<NodeId>);
    assert_eq_size!(NodeId, RawId);

    #[test]
    #[should_panic(expected = "`NodeId::from_index()` - `index` > `NodeId::MAX`!")]
    fn invalid_id() {
        let _ = NodeId::from_index(NodeId::MAX + 1);
    }

    proptest! {
        #[test]
        fn id_round_trip(index in 0..=NodeId::MAX) {
            let id = NodeId::from_index(index);
            assert_eq!(id.to_index(), index);
        }
    }
}
