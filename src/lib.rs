//! An order-statistic set for Rust, backed by a red-black tree.
//!
//! This crate provides [`OrderStatisticTree`], an insert-only sorted set of
//! unique keys that supports positional access in addition to the usual
//! ordering operations, all in O(log n):
//!
//! - [`insert`](OrderStatisticTree::insert) - Add a key, rejecting duplicates
//! - [`rank`](OrderStatisticTree::rank) - Count the stored keys strictly less
//!   than a value
//! - [`select`](OrderStatisticTree::select) - Get the key at a given sorted
//!   position
//!
//! # Example
//!
//! ```
//! use rbost_tree::OrderStatisticTree;
//!
//! let mut scores = OrderStatisticTree::new(-1);
//! scores.insert(85);
//! scores.insert(100);
//! scores.insert(92);
//!
//! // Positional queries (O(log n))
//! assert_eq!(*scores.select(1), 92); // the median score
//! assert_eq!(scores.rank(&100), 2); // two scores are lower
//!
//! // Misses are signaled with sentinels, never panics
//! assert_eq!(scores.rank(&50), -1);
//! assert_eq!(*scores.select(10), -1); // the constructor's not-found value
//! ```
//!
//! # Implementation
//!
//! The tree is a top-down red-black tree (Sedgewick's eager-splitting
//! insertion) in which every node also records the size of its left subtree.
//! That single counter is what turns rank and select from full scans into
//! one root-to-leaf walk. Nodes live in an insert-only arena and link to each
//! other by index; a shared sentinel index stands in for "no child", so the
//! balancing code never branches on missing children.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library
//!   dependency
//! - **O(log n) rank and select** - Subtree size augmentation, no full
//!   traversal
//! - **No panics on queries** - Absent keys and out-of-range positions
//!   return caller-visible sentinel values

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod raw;

pub mod ost_tree;

pub use ost_tree::OrderStatisticTree;
