//! Identity-aware ordered collection
//!
//! Provides [`UniqueList`], an ordered list in which no two elements share an
//! identity. Identity is weaker than equality: insert and update are checked
//! against identity, removal matches on full equality.

use crate::error::ListError;

/// Weak identity between values
///
/// Two values may be distinct (`!=`) yet denote the same entity.
pub trait Identity {
    /// Check whether `self` and `other` denote the same entity
    fn is_same_identity(&self, other: &Self) -> bool;
}

/// Ordered list with no two same-identity elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity + PartialEq> UniqueList<T> {
    /// Create empty list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list, rejecting same-identity elements
    ///
    /// # Errors
    /// Returns [`ListError::Duplicate`] if any two items share an identity.
    pub fn from_items(items: Vec<T>) -> Result<Self, ListError> {
        let mut list = Self::new();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }

    /// Check whether an element with the same identity is present
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Index of the element sharing `item`'s identity
    #[inline]
    #[must_use]
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.is_same_identity(item))
    }

    /// Element sharing `item`'s identity
    #[inline]
    #[must_use]
    pub fn get(&self, item: &T) -> Option<&T> {
        self.position(item).map(|i| &self.items[i])
    }

    /// First element matching a predicate
    #[inline]
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Append an element
    ///
    /// # Errors
    /// Returns [`ListError::Duplicate`] if an element with the same identity
    /// exists. The list is unchanged on error.
    pub fn add(&mut self, item: T) -> Result<(), ListError> {
        if self.contains(&item) {
            return Err(ListError::Duplicate);
        }
        self.items.push(item);
        Ok(())
    }

    /// Check that `target` can be replaced by `edited`
    ///
    /// Returns the index of `target`.
    ///
    /// # Errors
    /// - [`ListError::NotFound`] if no element shares `target`'s identity
    /// - [`ListError::Duplicate`] if `edited` shares an identity with an
    ///   element other than `target`
    pub fn check_set(&self, target: &T, edited: &T) -> Result<usize, ListError> {
        let index = self.position(target).ok_or(ListError::NotFound)?;
        if !target.is_same_identity(edited) && self.contains(edited) {
            return Err(ListError::Duplicate);
        }
        Ok(index)
    }

    /// Replace the element sharing `target`'s identity with `edited`
    ///
    /// # Errors
    /// See [`UniqueList::check_set`]. The list is unchanged on error.
    pub fn set(&mut self, target: &T, edited: T) -> Result<(), ListError> {
        let index = self.check_set(target, &edited)?;
        self.items[index] = edited;
        Ok(())
    }

    /// Remove the element equal to `item`
    ///
    /// Only an exact match is removed; a same-identity element with
    /// different fields is left in place.
    ///
    /// # Errors
    /// Returns [`ListError::NotFound`] if no element equals `item`.
    pub fn remove(&mut self, item: &T) -> Result<T, ListError> {
        let index = self
            .items
            .iter()
            .position(|existing| existing == item)
            .ok_or(ListError::NotFound)?;
        Ok(self.items.remove(index))
    }

    /// Replace all contents
    ///
    /// # Errors
    /// Returns [`ListError::Duplicate`] if `items` holds same-identity
    /// elements. The list is unchanged on error.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), ListError> {
        *self = Self::from_items(items)?;
        Ok(())
    }

    /// Rebuild every element through `f`
    ///
    /// `f` must preserve identity.
    pub(crate) fn map_in_place(&mut self, f: impl Fn(&T) -> T) {
        for item in &mut self.items {
            let mapped = f(item);
            debug_assert!(mapped.is_same_identity(item));
            *item = mapped;
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
