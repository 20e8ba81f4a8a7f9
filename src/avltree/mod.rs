mod iter;
mod mutex;

pub use iter::Iter;
pub use mutex::MutexAVLTree;

use crate::{error::InvariantError, set::SequentialSet};
use std::{
    cmp::{max, Ordering},
    fmt::{self, Debug},
    iter::FromIterator,
    mem,
};

pub struct AVLTree<K> {
    root: Option<Box<Node<K>>>,
    size: usize,
}

impl<K: Debug> Debug for AVLTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Dir {
    Left,
    Eq,
    Right,
}

#[derive(Debug)]
struct Node<K> {
    key: K,
    height: isize,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn new(key: K) -> Node<K> {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// get the mutable reference of the child of the node by dir
    fn child_mut(&mut self, dir: Dir) -> &mut Option<Box<Node<K>>> {
        match dir {
            Dir::Left => &mut self.left,
            Dir::Right => &mut self.right,
            Dir::Eq => panic!("There is no 'Eq' child"),
        }
    }

    fn height_of(link: &Option<Box<Node<K>>>) -> isize {
        if let Some(node) = link {
            node.height
        } else {
            0
        }
    }

    /// renew the height of the node from the childs
    fn renew_height(&mut self) {
        self.height = max(Self::height_of(&self.left), Self::height_of(&self.right)) + 1;
    }

    /// get difference of the heights from the childs
    fn get_factor(&self) -> isize {
        Self::height_of(&self.left) - Self::height_of(&self.right)
    }

    /// rotate left the node
    ///
    /// Change Parent-Right Child to Left Child-Parent, then return new parent(old right child).
    /// Heights are renewed child first, then the new parent.
    fn rotate_left(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut new_parent = match node.right.take() {
            Some(right) => right,
            None => return node,
        };

        node.right = new_parent.left.take();
        node.renew_height();

        new_parent.left = Some(node);
        new_parent.renew_height();

        new_parent
    }

    /// rotate right the node
    ///
    /// Change Left Child-Parent to Parent-Right Child, then return new parent(old left child).
    /// Heights are renewed child first, then the new parent.
    fn rotate_right(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let mut new_parent = match node.left.take() {
            Some(left) => left,
            None => return node,
        };

        node.left = new_parent.right.take();
        node.renew_height();

        new_parent.right = Some(node);
        new_parent.renew_height();

        new_parent
    }

    /// rebalance the node on the way back from an insertion
    ///
    /// `dir` is the side the new key took from this node, and `below` is the side it took from
    /// that child (Eq if the child itself is the new node). `below` is exactly the comparison of the
    /// new key against the child's key, which picks the single or the double rotation.
    fn rebalance_after_insert(mut node: Box<Node<K>>, dir: Dir, below: Dir) -> Box<Node<K>> {
        let factor = node.get_factor();

        match (dir, below) {
            // Left-Left
            (Dir::Left, Dir::Left) if factor > 1 => Node::rotate_right(node),
            // Left-Right
            (Dir::Left, Dir::Right) if factor > 1 => {
                node.left = node.left.take().map(Node::rotate_left);
                Node::rotate_right(node)
            }
            // Right-Right
            (Dir::Right, Dir::Right) if factor < -1 => Node::rotate_left(node),
            // Right-Left
            (Dir::Right, Dir::Left) if factor < -1 => {
                node.right = node.right.take().map(Node::rotate_right);
                Node::rotate_left(node)
            }
            _ => node,
        }
    }

    /// rebalance the node on the way back from a removal
    ///
    /// A child with zero factor is resolved by the single rotation.
    fn rebalance_after_remove(mut node: Box<Node<K>>) -> Box<Node<K>> {
        let factor = node.get_factor();

        if factor > 1 {
            let child_factor = node.left.as_ref().map_or(0, |left| left.get_factor());

            if child_factor < 0 {
                node.left = node.left.take().map(Node::rotate_left);
            }

            Node::rotate_right(node)
        } else if factor < -1 {
            let child_factor = node.right.as_ref().map_or(0, |right| right.get_factor());

            if child_factor > 0 {
                node.right = node.right.take().map(Node::rotate_right);
            }

            Node::rotate_left(node)
        } else {
            node
        }
    }
}

impl<K: Ord> AVLTree<K> {
    /// find the node that has the key
    fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    /// insert the key into the subtree, then return the new root of the subtree
    ///
    /// The direction is the side the key took from the subtree root: Eq if the root is the new
    /// node, or None if the key already exists (then the subtree is untouched).
    fn insert_at(link: Option<Box<Node<K>>>, key: K) -> (Box<Node<K>>, Option<Dir>) {
        let mut node = match link {
            Some(node) => node,
            None => return (Box::new(Node::new(key)), Some(Dir::Eq)),
        };

        let dir = match key.cmp(&node.key) {
            Ordering::Less => Dir::Left,
            Ordering::Greater => Dir::Right,
            Ordering::Equal => return (node, None),
        };

        let child = node.child_mut(dir).take();
        let (child, below) = Self::insert_at(child, key);
        *node.child_mut(dir) = Some(child);

        let below = match below {
            Some(below) => below,
            None => return (node, None),
        };

        node.renew_height();
        (Node::rebalance_after_insert(node, dir, below), Some(dir))
    }

    /// remove the key from the subtree, then return the new root of the subtree and the removed key
    fn remove_at(link: Option<Box<Node<K>>>, key: &K) -> (Option<Box<Node<K>>>, Option<K>) {
        let mut node = match link {
            Some(node) => node,
            None => return (None, None),
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, removed) = Self::remove_at(node.left.take(), key);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_at(node.right.take(), key);
                node.right = right;
                removed
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    let Node { key, .. } = *node;
                    return (right, Some(key));
                }
                (left, None) => {
                    let Node { key, .. } = *node;
                    return (left, Some(key));
                }
                (Some(left), Some(right)) => {
                    // the successor's node is the one structurally removed,
                    // and its key takes the place of the removed one
                    let (right, successor) = Self::remove_min(right);
                    node.left = Some(left);
                    node.right = right;
                    Some(mem::replace(&mut node.key, successor))
                }
            },
        };

        if removed.is_none() {
            return (Some(node), None);
        }

        node.renew_height();
        (Some(Node::rebalance_after_remove(node)), removed)
    }

    /// detach the node that has the least key on the subtree
    fn remove_min(mut node: Box<Node<K>>) -> (Option<Box<Node<K>>>, K) {
        match node.left.take() {
            None => {
                let Node { key, right, .. } = *node;
                (right, key)
            }
            Some(left) => {
                let (left, min) = Self::remove_min(left);
                node.left = left;
                node.renew_height();
                (Some(Node::rebalance_after_remove(node)), min)
            }
        }
    }

    /// Lookup the stored key that is equal to the given one.
    pub fn lookup(&self, key: &K) -> Option<&K> {
        self.find(key).map(|node| &node.key)
    }

    /// Check every invariant of the tree.
    ///
    /// The cached height of each node must be exact, every balance factor must be in -1..=1,
    /// keys must be strictly ascending in order, and the node count must equal the size.
    pub fn verify(&self) -> Result<(), InvariantError> {
        let mut position = 0;
        let mut last = None;

        Self::verify_node(self.root.as_deref(), &mut position, &mut last)?;

        if position != self.size {
            return Err(InvariantError::SizeMismatch {
                size: self.size,
                nodes: position,
            });
        }

        Ok(())
    }

    /// verify the subtree, then return its height
    fn verify_node<'a>(
        node: Option<&'a Node<K>>,
        position: &mut usize,
        last: &mut Option<&'a K>,
    ) -> Result<isize, InvariantError> {
        let node = match node {
            Some(node) => node,
            None => return Ok(0),
        };

        let left_height = Self::verify_node(node.left.as_deref(), position, last)?;

        let here = *position;
        if let Some(prev) = *last {
            if *prev >= node.key {
                return Err(InvariantError::OutOfOrder { position: here });
            }
        }
        *last = Some(&node.key);
        *position += 1;

        let right_height = Self::verify_node(node.right.as_deref(), position, last)?;

        let computed = max(left_height, right_height) + 1;
        if node.height != computed {
            return Err(InvariantError::HeightMismatch {
                position: here,
                cached: node.height,
                computed,
            });
        }

        let factor = left_height - right_height;
        if !(-1..=1).contains(&factor) {
            return Err(InvariantError::Unbalanced {
                position: here,
                factor,
            });
        }

        Ok(computed)
    }
}

impl<K> AVLTree<K> {
    /// get the height of the tree
    pub fn get_height(&self) -> usize {
        Node::height_of(&self.root) as usize
    }

    /// the key on the root node
    pub fn root(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;

        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Some(&node.key)
    }

    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;

        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Some(&node.key)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Iterate the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.size, self.get_height())
    }
}

impl<K> Default for AVLTree<K> {
    fn default() -> Self {
        AVLTree {
            root: None,
            size: 0,
        }
    }
}

impl<K: Ord> SequentialSet<K> for AVLTree<K> {
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: K) -> bool {
        let (root, dir) = Self::insert_at(self.root.take(), key);
        self.root = Some(root);

        if dir.is_none() {
            return false;
        }

        self.size += 1;
        true
    }

    fn search(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn remove(&mut self, key: &K) -> bool {
        let (root, removed) = Self::remove_at(self.root.take(), key);
        self.root = root;

        if removed.is_none() {
            return false;
        }

        self.size -= 1;
        true
    }

    fn len(&self) -> usize {
        self.size
    }

    fn traverse(&self) -> Vec<&K> {
        self.iter().collect()
    }
}

impl<K: Ord> FromIterator<K> for AVLTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AVLTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AVLTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AVLTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}
