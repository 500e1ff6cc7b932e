//! Keyed child container shared by the launcher views.

use std::collections::HashMap;
use std::hash::Hash;

/// Ordered children under a single root handle.
///
/// Each child is stored under a unique key; `positions` maps every key to its
/// current index so lookups never scan the children.
pub struct ViewContainer<K, V> {
    root_id: String,
    children: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> ViewContainer<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            children: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|i| &self.children[i].1)
    }

    pub fn child_at(&self, index: usize) -> Option<(&K, &V)> {
        self.children.get(index).map(|(k, v)| (k, v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.children.iter().map(|(k, v)| (k, v))
    }
}

/// Mutation operations.
impl<K, V> ViewContainer<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns false without inserting when the key is already present.
    pub fn append(&mut self, key: K, child: V) -> bool {
        self.insert_at(self.children.len(), key, child)
    }

    /// Inserts before `before`, or appends when `before` is not a child.
    /// Returns false without inserting when the key is already present.
    pub fn insert_before(&mut self, before: &K, key: K, child: V) -> bool {
        match self.position(before) {
            Some(index) => self.insert_at(index, key, child),
            None => self.append(key, child),
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.positions.remove(key)?;
        let (_, child) = self.children.remove(index);
        self.reindex_from(index);
        Some(child)
    }

    fn insert_at(&mut self, index: usize, key: K, child: V) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }
        self.children.insert(index, (key, child));
        self.reindex_from(index);
        true
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, (key, _)) in self.children.iter().enumerate().skip(start) {
            self.positions.insert(key.clone(), index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(keys: &[&'static str]) -> ViewContainer<&'static str, usize> {
        let mut view = ViewContainer::new("root");
        for (i, key) in keys.iter().enumerate() {
            assert!(view.append(*key, i));
        }
        view
    }

    fn keys(view: &ViewContainer<&'static str, usize>) -> Vec<&'static str> {
        view.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_append_keeps_order() {
        let view = container(&["a", "b", "c"]);

        assert_eq!(view.root_id(), "root");
        assert_eq!(keys(&view), ["a", "b", "c"]);
        assert_eq!(view.position(&"c"), Some(2));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut view = container(&["a"]);

        assert!(!view.append("a", 7));
        assert!(!view.insert_before(&"a", "a", 7));
        assert_eq!(view.len(), 1);
        assert_eq!(view.get(&"a"), Some(&0));
    }

    #[test]
    fn test_insert_before_shifts_positions() {
        let mut view = container(&["a", "tail"]);

        assert!(view.insert_before(&"tail", "b", 9));

        assert_eq!(keys(&view), ["a", "b", "tail"]);
        assert_eq!(view.position(&"b"), Some(1));
        assert_eq!(view.position(&"tail"), Some(2));
    }

    #[test]
    fn test_insert_before_missing_anchor_appends() {
        let mut view = container(&["a"]);

        assert!(view.insert_before(&"nope", "b", 1));

        assert_eq!(keys(&view), ["a", "b"]);
    }

    #[test]
    fn test_remove_reindexes() {
        let mut view = container(&["a", "b", "c"]);

        assert_eq!(view.remove(&"a"), Some(0));
        assert_eq!(view.remove(&"a"), None);

        assert_eq!(keys(&view), ["b", "c"]);
        assert_eq!(view.position(&"b"), Some(0));
        assert_eq!(view.position(&"c"), Some(1));
        assert!(!view.contains(&"a"));
        assert_eq!(view.child_at(1), Some((&"c", &2)));
        assert_eq!(view.child_at(2), None);
    }
}
