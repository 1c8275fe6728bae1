//! Binary search tree with recursive insert, search, and inorder traversal
//!
//! The tree is unbalanced: every operation costs O(height), and adversarial
//! insert orders (e.g. already sorted input) degrade height to O(n). There
//! is no delete operation and no rebalancing.

use std::cmp::Ordering;

type Link<K> = Option<Box<Node<K>>>;

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

/// Ordered binary tree storing each key at most once.
///
/// Invariant: for every node, all keys in its left subtree compare strictly
/// less and all keys in its right subtree strictly greater than its own key.
#[derive(Debug, Clone)]
pub struct Bst<K> {
    root: Link<K>,
}

impl<K: Ord> Bst<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Bst { root: None }
    }

    /// Whether the tree holds zero keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        fn count<K>(link: &Link<K>) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    /// Insert `key` at the first vacant slot found by ordered descent.
    ///
    /// A key equal to one already stored is silently discarded, so inserting
    /// a duplicate is an idempotent no-op.
    pub fn insert(&mut self, key: K) {
        fn attach<K: Ord>(link: &mut Link<K>, key: K) {
            match link {
                None => *link = Some(Box::new(Node::new(key))),
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => attach(&mut node.left, key),
                    Ordering::Greater => attach(&mut node.right, key),
                    Ordering::Equal => {}
                },
            }
        }
        attach(&mut self.root, key);
    }

    /// Whether `key` is stored in the tree
    pub fn search(&self, key: &K) -> bool {
        fn find<K: Ord>(link: &Link<K>, key: &K) -> bool {
            match link {
                None => false,
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => find(&node.left, key),
                    Ordering::Greater => find(&node.right, key),
                    Ordering::Equal => true,
                },
            }
        }
        find(&self.root, key)
    }
}

impl<K: Ord + Clone> Bst<K> {
    /// Keys in ascending order: left subtree, node, right subtree
    pub fn inorder_traversal(&self) -> Vec<K> {
        fn visit<K: Clone>(link: &Link<K>, out: &mut Vec<K>) {
            if let Some(node) = link {
                visit(&node.left, out);
                out.push(node.key.clone());
                visit(&node.right, out);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, &mut out);
        out
    }
}

impl<K: Ord> Default for Bst<K> {
    fn default() -> Self {
        Bst::new()
    }
}
