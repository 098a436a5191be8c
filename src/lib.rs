//! A plain (unbalanced) binary search tree set.
//!
//! This crate provides [`BstSet`], an ordered set of totally-ordered keys
//! backed by a classic binary search tree: every node's left subtree holds
//! strictly smaller keys and its right subtree strictly larger ones. The
//! full operation set is insertion, search, the three depth-first
//! traversals (pre-order, in-order, post-order), min/max retrieval,
//! in-place key replacement, and removal with the three structural cases
//! (no children, one child, two children via the in-order successor).
//!
//! # Example
//!
//! ```
//! use bst_set::BstSet;
//!
//! let mut set = BstSet::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     set.insert(key);
//! }
//!
//! // In-order traversal yields the keys in ascending order.
//! assert!(set.iter().copied().eq([1, 3, 4, 5, 7, 8, 9]));
//! assert_eq!(set.min(), Ok(&1));
//! assert_eq!(set.max(), Ok(&9));
//!
//! // Removing the two-child root promotes its in-order successor.
//! assert_eq!(set.remove(&5), Ok(Some(5)));
//! assert!(set.iter().copied().eq([1, 3, 4, 7, 8, 9]));
//! ```
//!
//! # No balancing
//!
//! The tree is never rebalanced. Operations cost O(height), and the height
//! is whatever the insertion/removal order produces — O(log n) for random
//! orders, O(n) for sorted ones. Accepting degenerate shapes keeps every
//! mutation a handful of link rewrites; callers who need guaranteed
//! logarithmic height should reach for a self-balancing tree instead.
//!
//! # Storage
//!
//! Nodes live in an arena indexed by stable handles rather than in owned
//! boxes. Child links are plain indices, removal rewires links without
//! touching ownership, freed slots are recycled through a free-list, and
//! traversal uses an explicit stack, so even a degenerate tree cannot
//! overflow the call stack. The crate is `no_std` and only requires
//! `alloc`.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod bst_set;

pub use bst_set::BstSet;
pub use error::EmptyTreeError;
