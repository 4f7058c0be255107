//  Copyright 2025 slotlist Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Node storage: opaque slot tokens, the [`Arena`] allocator seam, and the
//! default slab-backed arena.

use std::num::NonZeroUsize;

use slab::Slab;

/// Opaque handle to an occupied arena slot.
///
/// The highest bit of the wrapped index serves as an occupancy tag so that
/// `Option<Token>` stays pointer-sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(NonZeroUsize);

impl Token {
    const TAG: usize = 1 << (usize::BITS - 1);

    /// Wraps a raw slot index.
    ///
    /// # Panics
    ///
    /// Panics if the index collides with the tag bit.
    pub fn from_slot(slot: usize) -> Self {
        assert_eq!(0, slot & Self::TAG, "slot index exceeds token range");
        // The tag bit guarantees a non-zero value.
        let inner = unsafe { NonZeroUsize::new_unchecked(slot | Self::TAG) };
        Self(inner)
    }

    /// Returns the raw slot index.
    pub fn slot(self) -> usize {
        self.0.get() & !Self::TAG
    }
}

/// Storage for nodes with stable tokens.
///
/// The arena is the sole construction and release path for the values it
/// holds: [`insert`](Arena::insert) allocates a slot and moves the value in,
/// [`remove`](Arena::remove) destroys the value and frees the slot. A token
/// stays valid until its slot is removed or the arena is cleared, and
/// dropping the arena releases every remaining slot.
///
/// Implement this trait to back a [`List`](crate::List) with a custom pool.
pub trait Arena<T> {
    /// Stores `value`, returning a token for the occupied slot.
    fn insert(&mut self, value: T) -> Token;

    /// Releases the slot behind `token` and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `token` does not refer to an occupied slot.
    fn remove(&mut self, token: Token) -> T;

    /// Returns a reference to the value behind `token`, if occupied.
    fn get(&self, token: Token) -> Option<&T>;

    /// Returns a mutable reference to the value behind `token`, if occupied.
    fn get_mut(&mut self, token: Token) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Checks whether no slot is occupied.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every occupied slot.
    fn clear(&mut self);
}

/// The default arena, backed by [`slab::Slab`].
#[derive(Debug, Clone)]
pub struct SlabArena<T> {
    slots: Slab<T>,
}

impl<T> SlabArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { slots: Slab::new() }
    }

    /// Creates an empty arena with room for `capacity` values before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
        }
    }
}

impl<T> Default for SlabArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> for SlabArena<T> {
    fn insert(&mut self, value: T) -> Token {
        Token::from_slot(self.slots.insert(value))
    }

    fn remove(&mut self, token: Token) -> T {
        self.slots.remove(token.slot())
    }

    fn get(&self, token: Token) -> Option<&T> {
        self.slots.get(token.slot())
    }

    fn get_mut(&mut self, token: Token) -> Option<&mut T> {
        self.slots.get_mut(token.slot())
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}
