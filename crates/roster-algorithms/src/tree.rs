//! Level-order binary tree
//!
//! A plain binary tree whose shape depends only on arrival order: every insert
//! fills the first free child slot found by a breadth-first walk, left before
//! right. Nodes live in an arena and refer to their children by index; there are
//! no parent links and no removal.

use std::collections::VecDeque;

/// Position of a node inside a [`LevelOrderTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node holding one value and up to two children
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    value: T,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

impl<T> TreeNode<T> {
    fn new(value: T) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Binary tree filled in breadth-first order
#[derive(Debug, Clone)]
pub struct LevelOrderTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<NodeIndex>,
}

impl<T> LevelOrderTree<T> {
    pub fn new() -> Self {
        LevelOrderTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LevelOrderTree {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Insert a value at the first free child slot in breadth-first order.
    ///
    /// An empty tree takes the value as root. Otherwise nodes are visited level
    /// by level from the left; the first one missing a left child gets the new
    /// node there, else the first one missing a right child.
    pub fn insert(&mut self, value: T) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(TreeNode::new(value));

        let root = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(index);
                return index;
            }
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let node = &mut self.nodes[current.0];

            match node.left {
                None => {
                    node.left = Some(index);
                    return index;
                }
                Some(left) => queue.push_back(left),
            }

            match node.right {
                None => {
                    node.right = Some(index);
                    return index;
                }
                Some(right) => queue.push_back(right),
            }
        }

        unreachable!("a finite tree always has a leaf with a free child slot")
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&TreeNode<T>> {
        self.nodes.get(index.0)
    }

    pub fn value(&self, index: NodeIndex) -> Option<&T> {
        self.node(index).map(TreeNode::value)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Longest root-to-leaf path counted in edges.
    ///
    /// An empty tree has height -1 and a lone root has height 0.
    pub fn height(&self) -> isize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, node: Option<NodeIndex>) -> isize {
        match node {
            None => -1,
            Some(index) => {
                let node = &self.nodes[index.0];
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }

    /// Drop every node, leaving an empty tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Iterate the tree one level at a time, top down, left to right
    pub fn levels(&self) -> Levels<'_, T> {
        Levels {
            tree: self,
            frontier: self.root.into_iter().collect(),
        }
    }
}

impl<T> Default for LevelOrderTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the levels of a [`LevelOrderTree`]
pub struct Levels<'a, T> {
    tree: &'a LevelOrderTree<T>,
    frontier: Vec<NodeIndex>,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }

        let mut values = Vec::with_capacity(self.frontier.len());
        let mut next_frontier = Vec::with_capacity(self.frontier.len() * 2);

        for &index in &self.frontier {
            let node = &self.tree.nodes[index.0];
            values.push(&node.value);
            next_frontier.extend(node.left);
            next_frontier.extend(node.right);
        }

        self.frontier = next_frontier;
        Some(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(count: usize) -> LevelOrderTree<usize> {
        let mut tree = LevelOrderTree::new();
        for i in 0..count {
            tree.insert(i);
        }
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree: LevelOrderTree<u32> = LevelOrderTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.levels().count(), 0);
    }

    #[test]
    fn test_single_node() {
        let tree = build(1);
        assert!(!tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.value(tree.root().unwrap()), Some(&0));
    }

    #[test]
    fn test_fills_left_before_right() {
        let tree = build(3);
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(tree.value(root.left().unwrap()), Some(&1));
        assert_eq!(tree.value(root.right().unwrap()), Some(&2));
    }

    #[test]
    fn test_levels_follow_arrival_order() {
        let tree = build(10);
        let levels: Vec<Vec<usize>> = tree
            .levels()
            .map(|level| level.into_iter().copied().collect())
            .collect();

        assert_eq!(
            levels,
            vec![vec![0], vec![1, 2], vec![3, 4, 5, 6], vec![7, 8, 9]]
        );
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_complete_shape() {
        // Children of breadth-first position i sit at 2i+1 and 2i+2
        for count in 1..40 {
            let tree = build(count);
            for i in 0..count {
                let node = tree.node(NodeIndex(i)).unwrap();
                assert_eq!(node.left().map(|n| n.index()), Some(2 * i + 1).filter(|&c| c < count));
                assert_eq!(node.right().map(|n| n.index()), Some(2 * i + 2).filter(|&c| c < count));
            }
        }
    }

    #[test]
    fn test_clear() {
        let mut tree = build(5);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        tree.insert(42);
        assert_eq!(tree.len(), 1);
    }
}
