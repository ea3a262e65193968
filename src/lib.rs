//! # avl-rs
//!
//! A self-balancing binary search tree (AVL tree) keyed by `i32` identifiers.
//!
//! Every node keeps the height difference between its two subtrees at most 1,
//! so insert, delete and search all run in `O(log n)` worst case. Balance is
//! restored on the way back up each recursive insert or delete using the four
//! classic rotations (left-left, left-right, right-right, right-left).
//!
//! ## Example
//!
//! ```rust
//! use avl_rs::AvlTree;
//!
//! let mut tree: AvlTree<&str> = AvlTree::new();
//! tree.insert(10, "ten");
//! tree.insert(20, "twenty");
//! tree.insert(5, "five");
//!
//! assert!(tree.search(20));
//! assert_eq!(tree.get(5), Some(&"five"));
//!
//! assert_eq!(tree.delete(20), Some("twenty"));
//! assert!(!tree.search(20));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

mod node;

use node::{find_min, height, rebalance, Link, Node};

/// An ordered map from `i32` keys to values of type `V`, kept height-balanced.
///
/// Keys are unique: inserting a key that is already present leaves the tree
/// untouched. Cloning produces an independent deep copy; moving transfers the
/// nodes without copying them, and [`std::mem::take`] moves the contents out
/// while leaving an empty tree behind.
pub struct AvlTree<V> {
    root: Link<V>,
    count: usize,
}

/// Alternate name for [`AvlTree`].
pub type BalancedOrderedTree<V> = AvlTree<V>;

impl<V> AvlTree<V> {
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    #[inline]
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Smallest key in the tree, if any.
    pub fn min_key(&self) -> Option<i32> {
        self.root.as_deref().map(find_min)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.count = 0;
    }

    /// Returns `true` if `key` is present.
    pub fn search(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: i32) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: i32) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Inserts `key` with `value`, rebalancing on the way back up.
    ///
    /// Returns `false` (dropping `value`) if `key` is already present; the
    /// stored value and the tree shape are left as they were.
    pub fn insert(&mut self, key: i32, value: V) -> bool {
        let (root, inserted) = insert_into(self.root.take(), key, value);
        self.root = Some(root);
        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Removes `key`, returning the value that was stored under it.
    ///
    /// A node with two children takes over its in-order successor's key and
    /// value; the successor is then removed from the right subtree instead.
    /// Deleting an absent key leaves the tree unchanged.
    pub fn delete(&mut self, key: i32) -> Option<V> {
        let (root, removed) = delete_from(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }
}

// =============================================================================
// Recursive insert / delete
// =============================================================================

fn insert_into<V>(link: Link<V>, key: i32, value: V) -> (Box<Node<V>>, bool) {
    let Some(mut node) = link else {
        return (Node::leaf(key, value), true);
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, inserted) = insert_into(node.left.take(), key, value);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert_into(node.right.take(), key, value);
            node.right = Some(child);
            inserted
        }
        Ordering::Equal => return (node, false),
    };

    (rebalance(node), inserted)
}

fn delete_from<V>(link: Link<V>, key: i32) -> (Link<V>, Option<V>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, removed) = delete_from(node.left.take(), key);
            node.left = child;
            removed
        }
        Ordering::Greater => {
            let (child, removed) = delete_from(node.right.take(), key);
            node.right = child;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let successor = find_min(&right);
                let (right, promoted) = delete_from(Some(right), successor);
                debug_assert!(promoted.is_some(), "successor {successor} vanished");
                node.left = Some(left);
                node.right = right;
                node.key = successor;
                promoted.map(|value| mem::replace(&mut node.value, value))
            }
            (child, None) | (None, child) => {
                let Node { value, .. } = *node;
                return (child, Some(value));
            }
        },
    };

    (Some(rebalance(node)), removed)
}

impl<V> Default for AvlTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for AvlTree<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            count: self.count,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for AvlTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.count)
            .field("root", &self.root)
            .finish()
    }
}
