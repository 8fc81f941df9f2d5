//! Classic teaching data structures: a mutable, parent-linked Binary Search
//! Tree (BST) and a handful of quadratic comparison sorts to hold up next
//! to it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and an
//! associated value and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! These invariants mean the tree naturally supports sorted iteration:
//! visit the left subtree, then the subtree root, then the right subtree,
//! and keys come out in ascending order.
//!
//! The tree in [`parented`] additionally gives every `Node` a non-owning
//! back-reference to its parent. The parent link is what lets a node work
//! out whether it is a left child, a right child, or the root, and it is
//! what deletion uses to splice a node out of the tree and re-derive the
//! root afterwards. Nothing here rebalances: inserting keys in sorted
//! order degenerates the tree into a linked list, which is an accepted
//! limitation rather than a bug.
//!
//! ## Sorting baselines
//!
//! [`sort`] holds bubble sort, comb sort, and insertion sort operating in
//! place on slices. They are the quadratic classics, kept around to be
//! measured against each other and against sorted traversal of the tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod parented;
pub mod sort;

#[cfg(test)]
mod test;
