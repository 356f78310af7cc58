//! Project-scoped identifiers.
//!
//! Objects receive their identifier when they are registered into an
//! [`Arena`], not when they are constructed. Identifiers are 1-based and
//! follow registration order, so the same input always yields the same ids.

use std::fmt;

use phx_serde::Scalar;
use serde::{Deserialize, Deserializer, Serialize};

/// A 1-based identifier within one [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(u32);

impl Id {
    /// Wraps a raw identifier. Returns `None` for `0`.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    fn from_index(index: usize) -> Self {
        Self(u32::try_from(index + 1).unwrap_or(u32::MAX))
    }

    fn index(self) -> Option<usize> {
        self.0.checked_sub(1).map(|i| i as usize)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Id> for Scalar {
    fn from(id: Id) -> Self {
        Scalar::Int(i64::from(id.0))
    }
}

/// Objects that can be looked up by name inside an [`Arena`].
pub trait Named {
    fn name(&self) -> &str;
}

/// An insertion-ordered collection that assigns sequential [`Id`]s.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `item` and returns its identifier.
    pub fn push(&mut self, item: T) -> Id {
        self.items.push(item);
        Id::from_index(self.items.len() - 1)
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        id.index().and_then(|i| self.items.get(i))
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        id.index().and_then(|i| self.items.get_mut(i))
    }

    pub fn contains(&self, id: Id) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in registration order together with each item's id.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (Id::from_index(i), item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Id, &mut T)> {
        self.items
            .iter_mut()
            .enumerate()
            .map(|(i, item)| (Id::from_index(i), item))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Named> Arena<T> {
    /// Finds the id of the first item called `name`.
    pub fn find(&self, name: &str) -> Option<Id> {
        self.iter()
            .find(|(_, item)| item.name() == name)
            .map(|(id, _)| id)
    }

    /// Returns the first name that occurs more than once.
    pub fn duplicate_name(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.values()
            .map(Named::name)
            .find(|name| !seen.insert(*name))
    }
}

impl<T> FromIterator<T> for Arena<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arena = Arena::new();
        for item in iter {
            arena.push(item);
        }
        arena
    }
}

/// Registers the elements of a JSON array in array order.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Arena<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}
