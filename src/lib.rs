//! This crate exposes an embeddable ordered container backed by an AVL tree.
//!
//! ## AVL trees
//!
//! An AVL tree is a Binary Search Tree that keeps itself balanced. Every
//! `Node` stores some value and up to two child `Node`s, and the usual BST
//! invariants hold:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! On top of that, every `Node` records a _balance factor_: the height of its
//! right subtree minus the height of its left subtree. After every completed
//! insert or delete each balance factor is one of `-1`, `0` or `1`, which
//! bounds the height of the tree to roughly `1.44 * lg N`. Searching, inserting
//! and deleting are all `O(height)`.
//!
//! ## Comparators
//!
//! The tree doesn't require `T: Ord`. Instead it is parameterized by a
//! [`Comparator`] which orders elements and doubles as the tree's context
//! (a closure can capture whatever state it needs). Lookups take a _probe_
//! element compared with the same comparator, so a map is simply a tree of
//! entries whose comparator only looks at the key.
//!
//! ```
//! use avltree::{Error, Tree};
//!
//! type Entry = (u32, &'static str);
//!
//! let mut tree = Tree::new(|a: &Entry, b: &Entry| a.0.cmp(&b.0));
//!
//! assert_eq!(tree.put((2, "two")), Ok(None));
//! assert_eq!(tree.put((4, "four")), Ok(None));
//!
//! // Putting an equal element replaces it and hands back the old one.
//! assert_eq!(tree.put((2, "deux")), Ok(Some((2, "two"))));
//!
//! assert_eq!(tree.get(&(2, "")), Some(&(2, "deux")));
//! assert_eq!(tree.get_greater_than(&(2, "")), Some(&(4, "four")));
//! assert_eq!(tree.get_less_than(&(2, "")), None);
//!
//! assert_eq!(tree.delete(&(4, "")), Ok((4, "four")));
//! assert_eq!(tree.delete(&(4, "")), Err(Error::NotFound));
//! ```
//!
//! ## Threading
//!
//! A [`Tree`] is a plain single-threaded structure with no internal locking.
//! Sharing one between threads is the caller's business, through the usual
//! `Send`/`Sync` rules and whatever synchronization the caller wraps it in.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod config;
pub mod error;
mod node;
mod path;
mod rebalance;
mod splice;
pub mod tree;


pub use compare::{Comparator, Natural};
pub use config::Config;
pub use error::{Error, Result};
pub use tree::Tree;
