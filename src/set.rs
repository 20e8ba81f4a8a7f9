pub trait SequentialSet<K: Ord> {
    fn new() -> Self;

    /// Insert the key into the set.
    ///
    /// If the key was not in the set, return true.
    /// If the key already exists, the set is unchanged and return false.
    fn insert(&mut self, key: K) -> bool;

    /// Search the key from the set.
    fn search(&self, key: &K) -> bool;

    /// Remove the key from the set.
    ///
    /// If the key was in the set, return true.
    /// If not, the set is unchanged and return false.
    fn remove(&mut self, key: &K) -> bool;

    /// The number of keys in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys in ascending order, collected freshly on each call.
    fn traverse(&self) -> Vec<&K>;
}

pub trait ConcurrentSet<K: Ord> {
    fn new() -> Self;

    /// Insert the key into the set.
    ///
    /// If the key was not in the set, return true.
    /// If the key already exists, return false.
    fn insert(&self, key: K) -> bool;

    /// Search the key from the set.
    fn search(&self, key: &K) -> bool;

    /// Remove the key from the set.
    ///
    /// If the key was in the set, return true.
    /// If not, return false.
    fn remove(&self, key: &K) -> bool;

    /// The number of keys in the set at the moment of the call.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A point-in-time snapshot of all keys in ascending order.
    fn traverse(&self) -> Vec<K>
    where
        K: Clone;
}
