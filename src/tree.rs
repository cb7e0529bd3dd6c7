// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unbalanced binary search tree over the same element model.
//!
//! A second, much smaller consumer of "`Copy` element + injected comparator".
//! Nodes live in an arena (`Vec`) and link by index. Insertion walks down from
//! the root, sends ties to the right, and never rebalances. Each node keeps its
//! height so callers can see how lopsided the tree has become.
//!
//! ```text
//! insert 2, 1, 3, 3          height 3, balance +1
//!
//!        2
//!       / \
//!      1   3
//!           \
//!            3
//! ```

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Copy)]
struct Node<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
    height: usize,
}

/// Binary search tree with comparator ordering and no rebalancing.
#[derive(Debug, Clone)]
pub struct UnbalancedTree<T: Copy> {
    nodes: Vec<Node<T>>,
    root: Option<usize>,
    comparator: Comparator<T>,
}

impl<T: Copy> UnbalancedTree<T> {
    pub fn new(comparator: Comparator<T>) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Pre-allocate room for `capacity` nodes.
    pub fn with_capacity(capacity: usize, comparator: Comparator<T>) -> Result<Self> {
        let mut tree = Self::new(comparator);
        tree.nodes
            .try_reserve_exact(capacity)
            .map_err(|_| StoreError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `value`. Equal values go to the right subtree.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| StoreError::AllocationFailed {
                requested: self.nodes.len() + 1,
            })?;

        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
            height: 1,
        });

        let Some(mut current) = self.root else {
            self.root = Some(id);
            return Ok(());
        };

        let mut path = Vec::new();
        loop {
            path.push(current);
            let node = self.nodes[current];
            let go_left = self.comparator.compare(&value, &node.value) == Ordering::Less;
            let next = if go_left { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => {
                    if go_left {
                        self.nodes[current].left = Some(id);
                    } else {
                        self.nodes[current].right = Some(id);
                    }
                    break;
                }
            }
        }

        for &ancestor in path.iter().rev() {
            let node = self.nodes[ancestor];
            self.nodes[ancestor].height =
                1 + self.height_of(node.left).max(self.height_of(node.right));
        }
        Ok(())
    }

    /// True if some node is comparator-equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match self.comparator.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Height of the tree; `0` when empty, `1` for a single node.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Right height minus left height at the root.
    pub fn balance(&self) -> isize {
        match self.root {
            Some(root) => {
                let node = &self.nodes[root];
                self.height_of(node.right) as isize - self.height_of(node.left) as isize
            }
            None => 0,
        }
    }

    fn height_of(&self, id: Option<usize>) -> usize {
        id.map_or(0, |id| self.nodes[id].height)
    }
}
