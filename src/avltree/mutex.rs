use parking_lot::Mutex;

use super::AVLTree;
use crate::set::{ConcurrentSet, SequentialSet};

/// An [`AVLTree`] behind one exclusive lock.
///
/// Rotations relink several nodes at once, so every operation holds the lock for its whole run.
pub struct MutexAVLTree<K> {
    tree: Mutex<AVLTree<K>>,
}

impl<K> MutexAVLTree<K> {
    /// Run `f` with exclusive access to the inner tree.
    pub fn with<R>(&self, f: impl FnOnce(&mut AVLTree<K>) -> R) -> R {
        f(&mut self.tree.lock())
    }

    pub fn into_inner(self) -> AVLTree<K> {
        self.tree.into_inner()
    }
}

impl<K: Ord> From<AVLTree<K>> for MutexAVLTree<K> {
    fn from(tree: AVLTree<K>) -> Self {
        Self {
            tree: Mutex::new(tree),
        }
    }
}

impl<K: Ord> ConcurrentSet<K> for MutexAVLTree<K> {
    fn new() -> Self {
        Self::from(AVLTree::new())
    }

    fn insert(&self, key: K) -> bool {
        self.tree.lock().insert(key)
    }

    fn search(&self, key: &K) -> bool {
        self.tree.lock().search(key)
    }

    fn remove(&self, key: &K) -> bool {
        self.tree.lock().remove(key)
    }

    fn len(&self) -> usize {
        self.tree.lock().len()
    }

    fn traverse(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.tree.lock().iter().cloned().collect()
    }
}
