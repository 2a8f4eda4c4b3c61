//! Ordered collections keyed by a unique identity.
//!
//! Every level of the hierarchy stores its children in insertion order and
//! forbids two children with the same key. [`UniqueList`] is the shared
//! primitive: replacement keeps the element's position, so listings stay
//! stable across unrelated edits.

use std::fmt;

/// An element with a unique identity key within its owning collection.
pub trait Keyed {
    /// The identity key type.
    type Key: Eq + fmt::Display;

    /// Returns the element's identity key.
    fn key(&self) -> &Self::Key;
}

/// Error returned when an operation would produce two elements with the same
/// key.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Duplicate key: {0}")]
pub struct DuplicateKeyError(String);

impl DuplicateKeyError {
    fn new(key: &impl fmt::Display) -> Self {
        Self(key.to_string())
    }

    /// The offending key, as text.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// An insertion-ordered sequence whose elements have unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> UniqueList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns `true` if an element with the given key is present.
    #[must_use]
    pub fn contains(&self, key: &T::Key) -> bool {
        self.items.iter().any(|item| item.key() == key)
    }

    /// Retrieves the element with the given key.
    #[must_use]
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Returns the position of the element with the given key.
    #[must_use]
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    /// Appends an element.
    ///
    /// # Panics
    ///
    /// Panics if an element with the same key is already present.
    pub fn push(&mut self, item: T) {
        assert!(
            !self.contains(item.key()),
            "Duplicate key: {}",
            item.key()
        );
        self.items.push(item);
    }

    /// Replaces the element whose key is `old` with `new`, keeping its
    /// position in the sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if `new`'s key differs from `old` and collides with
    /// another element.
    ///
    /// # Panics
    ///
    /// Panics if no element with key `old` is present. Callers look the
    /// element up before building a replacement, so a missing key is a
    /// programming error rather than user input.
    pub fn replace(&mut self, old: &T::Key, new: T) -> Result<(), DuplicateKeyError> {
        let index = self
            .position(old)
            .unwrap_or_else(|| panic!("No element with key {old} to replace"));

        if new.key() != old && self.contains(new.key()) {
            return Err(DuplicateKeyError::new(new.key()));
        }

        self.items[index] = new;
        Ok(())
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> TryFrom<Vec<T>> for UniqueList<T> {
    type Error = DuplicateKeyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for item in items {
            if list.contains(item.key()) {
                return Err(DuplicateKeyError::new(item.key()));
            }
            list.items.push(item);
        }
        Ok(list)
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        key: String,
        value: u32,
    }

    impl Keyed for Entry {
        type Key = String;

        fn key(&self) -> &String {
            &self.key
        }
    }

    fn entry(key: &str, value: u32) -> Entry {
        Entry {
            key: key.to_string(),
            value,
        }
    }

    #[test]
    fn push_and_get() {
        let mut list = UniqueList::new();
        list.push(entry("a", 1));
        list.push(entry("b", 2));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&"b".to_string()), Some(&entry("b", 2)));
        assert!(list.contains(&"a".to_string()));
        assert!(!list.contains(&"c".to_string()));
    }

    #[test]
    #[should_panic(expected = "Duplicate key")]
    fn push_duplicate_key_panics() {
        let mut list = UniqueList::new();
        list.push(entry("a", 1));
        list.push(entry("a", 2));
    }

    #[test]
    fn replace_keeps_position() {
        let mut list = UniqueList::try_from(vec![entry("a", 1), entry("b", 2), entry("c", 3)])
            .unwrap();

        list.replace(&"b".to_string(), entry("b", 20)).unwrap();

        assert_eq!(list.position(&"b".to_string()), Some(1));
        assert_eq!(list.get(&"b".to_string()).unwrap().value, 20);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn replace_may_change_the_key() {
        let mut list = UniqueList::try_from(vec![entry("a", 1), entry("b", 2)]).unwrap();

        list.replace(&"a".to_string(), entry("z", 1)).unwrap();

        assert_eq!(list.position(&"z".to_string()), Some(0));
        assert!(!list.contains(&"a".to_string()));
    }

    #[test]
    fn replace_rejects_colliding_key() {
        let mut list = UniqueList::try_from(vec![entry("a", 1), entry("b", 2)]).unwrap();

        let result = list.replace(&"a".to_string(), entry("b", 9));

        assert!(result.is_err());
        // The list is untouched on failure.
        assert_eq!(list.get(&"a".to_string()).unwrap().value, 1);
        assert_eq!(list.get(&"b".to_string()).unwrap().value, 2);
    }

    #[test]
    fn replace_with_same_key_is_not_a_collision() {
        let mut list = UniqueList::try_from(vec![entry("a", 1)]).unwrap();
        list.replace(&"a".to_string(), entry("a", 2)).unwrap();
        assert_eq!(list.get(&"a".to_string()).unwrap().value, 2);
    }

    #[test]
    #[should_panic(expected = "to replace")]
    fn replace_missing_key_panics() {
        let mut list = UniqueList::try_from(vec![entry("a", 1)]).unwrap();
        let _ = list.replace(&"missing".to_string(), entry("x", 0));
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let result = UniqueList::try_from(vec![entry("a", 1), entry("a", 2)]);
        assert_eq!(result.unwrap_err().key(), "a");
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let list = UniqueList::try_from(vec![entry("c", 3), entry("a", 1), entry("b", 2)])
            .unwrap();
        let keys: Vec<_> = list.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }
}
