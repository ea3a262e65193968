//! Owned tree nodes, height bookkeeping and the four AVL rotations.
//!
//! Every restructuring routine takes a subtree by value and hands back the new
//! subtree root, so a parent only ever has to write the result into its slot.

use std::cmp::max;

/// Maximum tolerated `height(left) - height(right)` in either direction.
pub(crate) const ALLOWED_HEIGHT_DIFFERENCE: i32 = 1;

/// A child slot: either empty or an exclusively owned subtree.
pub(crate) type Link<V> = Option<Box<Node<V>>>;

#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: i32,
    pub(crate) value: V,
    /// Cached height of this subtree. A leaf is 0.
    pub(crate) height: i32,
    pub(crate) left: Link<V>,
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    #[inline]
    pub(crate) fn leaf(key: i32, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 0,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = max(height(&self.left), height(&self.right)) + 1;
    }

    #[inline]
    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Cached height of a subtree, `-1` when the slot is empty.
///
/// Never walks children: relies on every mutation recomputing heights
/// bottom-up.
#[inline]
pub(crate) fn height<V>(link: &Link<V>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// Key of the leftmost node of a non-empty subtree.
pub(crate) fn find_min<V>(node: &Node<V>) -> i32 {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current.key
}

/// Restores the AVL condition at `node` (whose children are already balanced)
/// and recomputes its height.
///
/// On an inner-height tie the single rotation is preferred over the double
/// one; this decides the exact shape produced for a given operation sequence.
pub(crate) fn rebalance<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    let bf = node.balance_factor();
    if bf > ALLOWED_HEIGHT_DIFFERENCE {
        let left_outer_is_taller = node
            .left
            .as_ref()
            .map_or(true, |left| height(&left.left) >= height(&left.right));
        if left_outer_is_taller {
            node = rotate_left_left(node);
        } else {
            node = rotate_left_right(node);
        }
    } else if bf < -ALLOWED_HEIGHT_DIFFERENCE {
        let right_outer_is_taller = node
            .right
            .as_ref()
            .map_or(true, |right| height(&right.right) >= height(&right.left));
        if right_outer_is_taller {
            node = rotate_right_right(node);
        } else {
            node = rotate_right_left(node);
        }
    }
    node.update_height();
    node
}

/// Single rotation for a left-left imbalance: the left child is lifted into
/// `node`'s position and `node` becomes its right child.
fn rotate_left_left<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    debug_assert!(node.left.is_some(), "left-left rotation without left child");
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Mirror of [`rotate_left_left`].
fn rotate_right_right<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    debug_assert!(node.right.is_some(), "right-right rotation without right child");
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left_right<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    node.left = node.left.take().map(rotate_right_right);
    rotate_left_left(node)
}

fn rotate_right_left<V>(mut node: Box<Node<V>>) -> Box<Node<V>> {
    node.right = node.right.take().map(rotate_left_left);
    rotate_right_right(node)
}
