use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::NodeId;
use super::node::Node;

/// Shared leaf marker: a black node whose children point back at itself and
/// whose `left_size` is zero. Every "no child" link in the tree is this
/// index, so the balancing code can read any node's grandchildren without
/// branching on missing children. It is never written after construction.
pub(crate) const SENTINEL: NodeId = NodeId::from_index(0);

/// Root holder: a non-data node whose right child is the conceptual root and
/// whose left child is always the sentinel. Root-level rotations run through
/// the same "rotate under a parent" path as any other rotation because of
/// it. Its key is the caller's not-found value and is never compared against
/// input; it is also where out-of-range `select` answers are borrowed from.
const HEAD: NodeId = NodeId::from_index(1);

/// The balancing and query engine behind `OrderStatisticTree`.
///
/// Insertion is Sedgewick's top-down red-black algorithm: while walking down
/// to the insertion point, any node with two red children is split
/// (recolored, and rotated if that creates a red-red edge with its parent),
/// so that attaching the new leaf can never force a violation back up the
/// tree. Every node carries the size of its left subtree, which is the whole
/// of the order-statistic support.
#[derive(Clone)]
pub(crate) struct RawOstTree<T> {
    arena: Arena<Node<T>>,
    len: usize,
}

impl<T> RawOstTree<T> {
    pub(crate) fn new(not_found: T) -> Self
    where
        T: Clone,
    {
        let mut arena = Arena::new();
        let sentinel = arena.alloc(Node::leaf(not_found.clone(), SENTINEL));
        debug_assert!(sentinel == SENTINEL);
        let head = arena.alloc(Node::leaf(not_found, SENTINEL));
        debug_assert!(head == HEAD);
        Self { arena, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// The constructor's not-found value, stored as the root holder's key.
    pub(crate) fn not_found(&self) -> &T {
        &self.node(HEAD).key
    }

    pub(crate) fn root(&self) -> NodeId {
        self.node(HEAD).right
    }

    pub(crate) fn key(&self, id: NodeId) -> &T {
        &self.node(id).key
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.node(id).left
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.node(id).right
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena.get_mut(id)
    }

    #[inline]
    fn is_red(&self, id: NodeId) -> bool {
        self.node(id).red
    }

    /// Recolors `id`, leaving the sentinel alone: a split at a fresh leaf
    /// recolors both of its children, which are the sentinel, and the
    /// sentinel must stay black and untouched.
    fn paint(&mut self, id: NodeId, red: bool) {
        if id != SENTINEL {
            self.node_mut(id).red = red;
        }
    }
}

impl<T: Ord> RawOstTree<T> {
    /// Inserts `value`, returning false and leaving the tree unchanged in
    /// content if an equal key is already present. Splits applied before a
    /// duplicate is detected are kept; they preserve every invariant whether
    /// or not an insertion follows.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        // Allocated up front so every comparison on the way down can read
        // both keys out of the arena. Nothing links to it until the descent
        // finds the attachment point, so a duplicate hit can discard it.
        let probe = self.arena.alloc(Node::leaf(value, SENTINEL));

        let mut x = HEAD;
        let mut p = HEAD;
        let mut g = HEAD;
        let mut gg = HEAD;

        while x != SENTINEL {
            gg = g;
            g = p;
            p = x;

            x = if x == HEAD {
                self.node(x).right
            } else {
                match self.node(probe).key.cmp(&self.node(x).key) {
                    Ordering::Equal => {
                        self.arena.rollback(probe);
                        return false;
                    }
                    Ordering::Less => self.node(x).left,
                    Ordering::Greater => self.node(x).right,
                }
            };

            if self.is_red(self.node(x).left) && self.is_red(self.node(x).right) {
                (x, p) = self.split(probe, x, p, g, gg);
            }
        }

        if p != HEAD && self.descends_left(probe, p) {
            self.node_mut(p).left = probe;
        } else {
            self.node_mut(p).right = probe;
        }
        self.len += 1;

        self.bump_left_sizes(probe);
        self.split(probe, probe, p, g, gg);

        true
    }

    /// Number of stored keys strictly less than `value`, or -1 if `value` is
    /// not present. Left descents add nothing; right descents skip the
    /// current node's left subtree and the node itself.
    pub(crate) fn rank<Q>(&self, value: &Q) -> i64
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut n = self.root();
        let mut below: i64 = 0;

        while n != SENTINEL {
            let node = self.node(n);
            match value.cmp(node.key.borrow()) {
                Ordering::Equal => return below + i64::from(node.left_size),
                Ordering::Less => n = node.left,
                Ordering::Greater => {
                    below += i64::from(node.left_size) + 1;
                    n = node.right;
                }
            }
        }

        -1
    }

    /// Key with exactly `k` stored keys below it, or the not-found value for
    /// any `k` outside `[0, len())`. A negative `k` descends left until the
    /// sentinel, so it shares the out-of-range path rather than a special
    /// case.
    pub(crate) fn select(&self, mut k: i64) -> &T {
        let mut n = self.root();

        while n != SENTINEL {
            let node = self.node(n);
            let size = i64::from(node.left_size);
            match k.cmp(&size) {
                Ordering::Equal => return &node.key,
                Ordering::Less => n = node.left,
                Ordering::Greater => {
                    k -= size + 1;
                    n = node.right;
                }
            }
        }

        self.not_found()
    }

    /// Maximum node count on a root-to-leaf path. O(n); exposed so callers
    /// can observe how tightly the balancing bounds the tree.
    pub(crate) fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: SmallVec<[(NodeId, usize); 16]> = SmallVec::new();

        if self.root() != SENTINEL {
            stack.push((self.root(), 1));
        }
        while let Some((n, depth)) = stack.pop() {
            if depth > max {
                max = depth;
            }
            let node = self.node(n);
            if node.left != SENTINEL {
                stack.push((node.left, depth + 1));
            }
            if node.right != SENTINEL {
                stack.push((node.right, depth + 1));
            }
        }

        max
    }

    /// True when the descent for the key in `probe` leaves `at` to the left.
    /// The root holder has no comparable key, so everything descends to its
    /// right, where the real root hangs.
    fn descends_left(&self, probe: NodeId, at: NodeId) -> bool {
        at != HEAD && self.node(probe).key < self.node(at).key
    }

    /// Rotates the subtree under `y` one step toward the key in `probe`:
    /// promotes the appropriate grandchild `gc`, demotes the child `c`,
    /// rewires `y` to `gc` and returns `gc`. A left descent moves `gc`'s
    /// right subtree out of `c`'s left count; a right descent makes `c` and
    /// its left subtree part of `gc`'s.
    fn rotate(&mut self, probe: NodeId, y: NodeId) -> NodeId {
        let c = if self.descends_left(probe, y) {
            self.node(y).left
        } else {
            self.node(y).right
        };

        let gc;
        if self.descends_left(probe, c) {
            gc = self.node(c).left;
            let transplanted = self.node(gc).right;
            self.node_mut(c).left = transplanted;
            self.node_mut(gc).right = c;
            let moved = self.node(gc).left_size + 1;
            self.node_mut(c).left_size -= moved;
        } else {
            gc = self.node(c).right;
            let transplanted = self.node(gc).left;
            self.node_mut(c).right = transplanted;
            self.node_mut(gc).left = c;
            let absorbed = self.node(c).left_size + 1;
            self.node_mut(gc).left_size += absorbed;
        }

        if self.descends_left(probe, y) {
            self.node_mut(y).left = gc;
        } else {
            self.node_mut(y).right = gc;
        }

        gc
    }

    /// Eager top-down rebalance at `x`: recolor `x` red and its children
    /// black, then repair any red-red edge with `p` by rotating under the
    /// grandparent (one extra rotation under `g` first for the zig-zag
    /// shape). Returns the node the descent continues from with its updated
    /// parent; the conceptual root is forced black on every call.
    fn split(
        &mut self,
        probe: NodeId,
        mut x: NodeId,
        mut p: NodeId,
        g: NodeId,
        gg: NodeId,
    ) -> (NodeId, NodeId) {
        self.paint(x, true);
        let (left, right) = (self.node(x).left, self.node(x).right);
        self.paint(left, false);
        self.paint(right, false);

        if self.is_red(p) {
            self.paint(g, true);

            if self.descends_left(probe, g) != self.descends_left(probe, p) {
                p = self.rotate(probe, g);
            }
            x = self.rotate(probe, gg);
            self.paint(x, false);
        }

        let root = self.root();
        self.paint(root, false);

        (x, p)
    }

    /// Second root-to-leaf walk after attaching a new node: every ancestor
    /// entered toward its left child gained one node in its left subtree;
    /// right turns need no update. The descent loop's tracked ids are stale
    /// after splits, hence the fresh walk.
    fn bump_left_sizes(&mut self, probe: NodeId) {
        let mut n = self.root();

        while n != probe {
            if self.descends_left(probe, n) {
                self.node_mut(n).left_size += 1;
                n = self.node(n).left;
            } else {
                n = self.node(n).right;
            }
        }
    }
}
