//! This crate exposes a link-based Binary Search Tree (BST) — an ordered,
//! mutable container keyed by the stored items themselves.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one item and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold
//!    items less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold
//!    items greater than (or, in this crate, equal to) its own item.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! items in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! The tree here does not balance itself on insertion. Inserting items in
//! ascending order produces a right-leaning chain, and searches degrade to
//! `O(N)`. The [`rebalance`][linked::Tree::rebalance] operation rebuilds a
//! minimum-height tree from the current contents when that happens; the
//! [`is_balanced`][linked::Tree::is_balanced] heuristic tells you whether it
//! is worth the trouble.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod linked;

#[cfg(test)]
pub(crate) mod test;
