//! Generic arena for dense, ID-indexed storage of simulation entities.
//!
//! Entities are always appended and never removed, so an allocated ID
//! stays valid for the lifetime of the arena. The simulator uses this for
//! wire storage: wires are shared by every gate connected to them, and an
//! opaque copyable ID is the shared handle.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for opaque ID types used as arena keys.
///
/// Implementors provide a bijection between `u32` indices and the ID type.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// A dense, append-only container indexed by an opaque [`ArenaId`].
#[derive(Debug, Clone)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Allocates a new item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Returns a reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.as_raw() as usize]
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    struct TestId(u32);

    impl ArenaId for TestId {
        fn from_raw(index: u32) -> Self {
            Self(index)
        }

        fn as_raw(self) -> u32 {
            self.0
        }
    }

    #[test]
    fn alloc_and_get() {
        let mut arena: Arena<TestId, String> = Arena::new();
        let id = arena.alloc("hello".to_string());
        assert_eq!(arena[id], "hello");
    }

    #[test]
    fn ids_are_sequential() {
        let mut arena: Arena<TestId, u32> = Arena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        assert_eq!(a.as_raw(), 0);
        assert_eq!(b.as_raw(), 1);
        assert_eq!(arena[a], 10);
        assert_eq!(arena[b], 20);
    }

    #[test]
    fn get_mut_updates() {
        let mut arena: Arena<TestId, u32> = Arena::new();
        let id = arena.alloc(1);
        *arena.get_mut(id) = 99;
        assert_eq!(arena[id], 99);
    }

    #[test]
    fn len_and_empty() {
        let mut arena: Arena<TestId, u32> = Arena::new();
        assert!(arena.is_empty());
        arena.alloc(0);
        arena.alloc(1);
        assert_eq!(arena.len(), 2);
        assert!(!arena.is_empty());
    }

    #[test]
    fn iter_in_allocation_order() {
        let mut arena: Arena<TestId, u32> = Arena::new();
        arena.alloc(5);
        arena.alloc(6);
        let collected: Vec<u32> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(collected, vec![5, 6]);
    }
}
