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

//! Doubly linked list over arena storage.

use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::{
    arena::{Arena, SlabArena, Token},
    assert::OptionExt,
    error::{Error, Result},
    strict_assert, strict_assert_eq,
};

/// A list cell: one value plus the tokens of its neighbors.
///
/// Nodes are owned by the list's arena. The `prev` link is a plain
/// back-reference kept for O(1) splicing and is never a release path.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    prev: Option<Token>,
    next: Option<Token>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            prev: None,
            next: None,
        }
    }
}

/// A doubly linked list whose nodes live in an [`Arena`].
///
/// Links are [`Token`]s instead of pointers, so the container is safe code
/// throughout and a dangling link is unrepresentable. The arena is the
/// allocator: every node is constructed into it and released through it,
/// including on drop.
///
/// ```
/// use slotlist::List;
///
/// let mut list = List::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1], 2);
/// assert_eq!(list.remove(1), Ok(2));
/// assert_eq!(format!("{list:?}"), "[1, 3]");
/// ```
pub struct List<T, A = SlabArena<Node<T>>> {
    head: Option<Token>,
    tail: Option<Token>,
    len: usize,
    arena: A,
    _marker: PhantomData<T>,
}

impl<T> List<T> {
    /// Creates an empty list backed by a fresh [`SlabArena`].
    pub fn new() -> Self {
        Self::new_in(SlabArena::new())
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new_in(SlabArena::with_capacity(capacity))
    }
}

impl<T, A> List<T, A>
where
    A: Arena<Node<T>>,
{
    /// Creates an empty list backed by `arena`.
    ///
    /// Every node the list creates lives in `arena` and is released through
    /// it, never by any other path.
    pub fn new_in(arena: A) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            arena,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or [`Error::Empty`].
    pub fn front(&self) -> Result<&T> {
        let token = self.head.ok_or(Error::Empty)?;
        Ok(&self.node(token).value)
    }

    /// Returns a mutable reference to the first element, or [`Error::Empty`].
    pub fn front_mut(&mut self) -> Result<&mut T> {
        let token = self.head.ok_or(Error::Empty)?;
        Ok(&mut self.node_mut(token).value)
    }

    /// Returns a reference to the last element, or [`Error::Empty`].
    ///
    /// Goes through the stored tail token, O(1).
    pub fn back(&self) -> Result<&T> {
        let token = self.tail.ok_or(Error::Empty)?;
        Ok(&self.node(token).value)
    }

    /// Returns a mutable reference to the last element, or [`Error::Empty`].
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let token = self.tail.ok_or(Error::Empty)?;
        Ok(&mut self.node_mut(token).value)
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::OutOfRange`]. O(n).
    pub fn get(&self, index: usize) -> Result<&T> {
        let token = self.token_at(index)?;
        Ok(&self.node(token).value)
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`Error::OutOfRange`]. O(n).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let token = self.token_at(index)?;
        Ok(&mut self.node_mut(token).value)
    }

    /// Appends `value` at the back. O(1).
    pub fn push_back(&mut self, value: T) {
        self.cursor_mut().insert_before(value);
    }

    /// Prepends `value` at the front. O(1).
    pub fn push_front(&mut self, value: T) {
        self.cursor_mut().insert_after(value);
    }

    /// Removes and returns the first element. O(1).
    ///
    /// Returns [`Error::Empty`] on an empty list, before any mutation.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut cursor = self.cursor_mut();
        cursor.seek_front();
        cursor.remove()
    }

    /// Removes and returns the last element. O(1).
    ///
    /// Returns [`Error::Empty`] on an empty list, before any mutation.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut cursor = self.cursor_mut();
        cursor.seek_back();
        cursor.remove()
    }

    /// Removes and returns the element at `index`. O(n).
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`, before any
    /// mutation.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let token = self.token_at(index)?;
        let mut cursor = CursorMut {
            token: Some(token),
            list: self,
        };
        cursor.remove()
    }

    /// Inserts `value` before the element at `index`; an index past the end
    /// appends at the back. O(n).
    pub fn insert(&mut self, index: usize, value: T) {
        let token = self.token_at(index).ok();
        let mut cursor = CursorMut { token, list: self };
        cursor.insert_before(value);
    }

    /// Drops every element. The arena releases all slots.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns a cursor at the first element, or at the end sentinel if the
    /// list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T, A> {
        Cursor {
            token: self.head,
            list: self,
        }
    }

    /// Returns a cursor at the end sentinel.
    pub fn cursor_end(&self) -> Cursor<'_, T, A> {
        Cursor {
            token: None,
            list: self,
        }
    }

    /// Returns a mutable cursor at the null position.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            token: None,
            list: self,
        }
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Cursor<'_, T, A> {
        self.cursor_front()
    }

    fn token_at(&self, index: usize) -> Result<Token> {
        if index >= self.len {
            return Err(Error::OutOfRange);
        }
        let mut token = unsafe { self.head.strict_unwrap_unchecked() };
        for _ in 0..index {
            token = unsafe { self.node(token).next.strict_unwrap_unchecked() };
        }
        Ok(token)
    }

    fn node(&self, token: Token) -> &Node<T> {
        unsafe { self.arena.get(token).strict_unwrap_unchecked() }
    }

    fn node_mut(&mut self, token: Token) -> &mut Node<T> {
        unsafe { self.arena.get_mut(token).strict_unwrap_unchecked() }
    }
}

impl<T, A> Default for List<T, A>
where
    A: Arena<Node<T>> + Default,
{
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A> Clone for List<T, A>
where
    T: Clone,
    A: Arena<Node<T>> + Default,
{
    /// Deep copy: duplicates every element into a fresh arena. The source is
    /// untouched.
    fn clone(&self) -> Self {
        let mut list = Self::default();
        for value in self.iter() {
            list.push_back(value.clone());
        }
        list
    }
}

impl<T, A> Debug for List<T, A>
where
    T: Debug,
    A: Arena<Node<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A, B> PartialEq<List<T, B>> for List<T, A>
where
    T: PartialEq,
    A: Arena<Node<T>>,
    B: Arena<Node<T>>,
{
    fn eq(&self, other: &List<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, A> Index<usize> for List<T, A>
where
    A: Arena<Node<T>>,
{
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("index {index}: {err}"),
        }
    }
}

impl<T, A> IndexMut<usize> for List<T, A>
where
    A: Arena<Node<T>>,
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("index {index}: {err}"),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, A> Extend<T> for List<T, A>
where
    A: Arena<Node<T>>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, A> IntoIterator for &'a List<T, A>
where
    A: Arena<Node<T>>,
{
    type Item = &'a T;
    type IntoIter = Cursor<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draining iterator returned by [`List::into_iter`].
pub struct IntoIter<T, A = SlabArena<Node<T>>> {
    list: List<T, A>,
}

impl<T, A> Iterator for IntoIter<T, A>
where
    A: Arena<Node<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, A> IntoIterator for List<T, A>
where
    A: Arena<Node<T>>,
{
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter { list: self }
    }
}

/// Forward cursor over a shared list borrow.
///
/// The `None` position is the end sentinel. Comparing cursors compares the
/// referenced node, not the value. The cursor is `Copy`, so the
/// advance-and-return-previous idiom is a plain copy before [`advance`].
///
/// [`advance`]: Cursor::advance
pub struct Cursor<'a, T, A = SlabArena<Node<T>>> {
    token: Option<Token>,
    list: &'a List<T, A>,
}

impl<T, A> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for Cursor<'_, T, A> {}

impl<T, A> PartialEq for Cursor<'_, T, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.token == other.token
    }
}

impl<T, A> Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("token", &self.token).finish()
    }
}

impl<T, A> Eq for Cursor<'_, T, A> {}

impl<'a, T, A> Cursor<'a, T, A>
where
    A: Arena<Node<T>>,
{
    /// Checks whether the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.token.is_none()
    }

    /// Returns a reference to the current element.
    ///
    /// Returns [`Error::OutOfRange`] at the end sentinel.
    pub fn current(&self) -> Result<&'a T> {
        let token = self.token.ok_or(Error::OutOfRange)?;
        Ok(&self.list.node(token).value)
    }

    /// Steps to the successor. O(1).
    ///
    /// Stepping off the last element lands on the end sentinel; advancing
    /// the sentinel itself returns [`Error::OutOfRange`].
    pub fn advance(&mut self) -> Result<()> {
        let token = self.token.ok_or(Error::OutOfRange)?;
        self.token = self.list.node(token).next;
        Ok(())
    }
}

impl<'a, T, A> Iterator for Cursor<'a, T, A>
where
    A: Arena<Node<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current().ok()?;
        let _ = self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.list.len()))
    }
}

/// Mutable cursor: the splice engine behind every insertion and removal.
///
/// Starts at the null position. [`seek_front`] and [`seek_back`] jump to the
/// edges in O(1) through the stored head and tail tokens.
///
/// [`seek_front`]: CursorMut::seek_front
/// [`seek_back`]: CursorMut::seek_back
pub struct CursorMut<'a, T, A = SlabArena<Node<T>>> {
    token: Option<Token>,
    list: &'a mut List<T, A>,
}

impl<T, A> CursorMut<'_, T, A>
where
    A: Arena<Node<T>>,
{
    /// Checks whether the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.token.is_none()
    }

    /// Checks whether the cursor is at the first position.
    pub fn is_front(&self) -> bool {
        self.token == self.list.head
    }

    /// Checks whether the cursor is at the last position.
    pub fn is_back(&self) -> bool {
        self.token == self.list.tail
    }

    /// Jumps to the first element. O(1).
    pub fn seek_front(&mut self) {
        self.token = self.list.head;
    }

    /// Jumps to the last element. O(1).
    pub fn seek_back(&mut self) {
        self.token = self.list.tail;
    }

    /// Returns a reference to the current element.
    ///
    /// Returns [`Error::OutOfRange`] at the end sentinel.
    pub fn current(&self) -> Result<&T> {
        let token = self.token.ok_or(Error::OutOfRange)?;
        Ok(&self.list.node(token).value)
    }

    /// Returns a mutable reference to the current element.
    ///
    /// Returns [`Error::OutOfRange`] at the end sentinel.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        let token = self.token.ok_or(Error::OutOfRange)?;
        Ok(&mut self.list.node_mut(token).value)
    }

    /// Steps to the successor. O(1).
    ///
    /// Stepping off the last element lands on the end sentinel; advancing
    /// the sentinel itself returns [`Error::OutOfRange`].
    pub fn advance(&mut self) -> Result<()> {
        let token = self.token.ok_or(Error::OutOfRange)?;
        self.token = self.list.node(token).next;
        Ok(())
    }

    /// Removes the current element and returns it; the cursor lands on the
    /// successor. O(1).
    ///
    /// Head and tail are fixed up when removing at an edge, and the node is
    /// released through the arena immediately. Returns
    /// [`Error::OutOfRange`] at the end sentinel.
    pub fn remove(&mut self) -> Result<T> {
        let token = self.token.ok_or(Error::OutOfRange)?;

        let Node { value, prev, next } = self.list.arena.remove(token);

        if self.list.head == Some(token) {
            self.list.head = next;
        }
        if self.list.tail == Some(token) {
            self.list.tail = prev;
        }

        if let Some(prev) = prev {
            strict_assert!(self.list.node(prev).next == Some(token));
            self.list.node_mut(prev).next = next;
        }
        if let Some(next) = next {
            strict_assert!(self.list.node(next).prev == Some(token));
            self.list.node_mut(next).prev = prev;
        }

        self.list.len -= 1;
        strict_assert_eq!(self.list.len, self.list.arena.len());

        self.token = next;
        Ok(value)
    }

    /// Inserts `value` immediately before the current element; at the end
    /// sentinel it appends at the back. O(1).
    pub fn insert_before(&mut self, value: T) {
        let new = self.list.arena.insert(Node::new(value));

        match self.token {
            Some(token) => {
                let prev = self.list.node(token).prev;
                self.link_between(new, prev, Some(token));
            }
            None => {
                let tail = self.list.tail;
                self.link_between(new, tail, None);
                self.list.tail = Some(new);
            }
        }

        if self.list.head == self.token {
            self.list.head = Some(new);
        }

        self.list.len += 1;
        strict_assert_eq!(self.list.len, self.list.arena.len());
    }

    /// Inserts `value` immediately after the current element; at the null
    /// position it becomes the new front. O(1).
    pub fn insert_after(&mut self, value: T) {
        let new = self.list.arena.insert(Node::new(value));

        match self.token {
            Some(token) => {
                let next = self.list.node(token).next;
                self.link_between(new, Some(token), next);
            }
            None => {
                let head = self.list.head;
                self.link_between(new, None, head);
                self.list.head = Some(new);
            }
        }

        if self.list.tail == self.token {
            self.list.tail = Some(new);
        }

        self.list.len += 1;
        strict_assert_eq!(self.list.len, self.list.arena.len());
    }

    fn link_between(&mut self, token: Token, prev: Option<Token>, next: Option<Token>) {
        if let Some(prev) = prev {
            self.list.node_mut(prev).next = Some(token);
        }
        if let Some(next) = next {
            self.list.node_mut(next).prev = Some(token);
        }

        let node = self.list.node_mut(token);
        node.prev = prev;
        node.next = next;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::VecDeque, rc::Rc};

    use itertools::Itertools;
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;

    #[test]
    fn test_empty_list() {
        let mut list: List<i32> = List::new();

        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        assert_eq!(list.front_mut(), Err(Error::Empty));
        assert_eq!(list.back_mut(), Err(Error::Empty));
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert_eq!(list.get(0), Err(Error::OutOfRange));
        assert_eq!(list.remove(0), Err(Error::OutOfRange));
        assert_eq!(list.cursor_front(), list.cursor_end());
        assert!(list.iter().next().is_none());
    }

    #[test]
    fn test_push_and_index() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list[0], 1);
        assert_eq!(list[1], 2);
        assert_eq!(list[2], 3);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.get(3), Err(Error::OutOfRange));
    }

    #[test]
    fn test_push_front() {
        let mut list = List::new();
        list.push_front(5);

        assert_eq!(list.front(), Ok(&5));
        assert_eq!(list.back(), Ok(&5));
        assert_eq!(list.len(), 1);

        list.push_front(4);
        assert_eq!(list.iter().copied().collect_vec(), vec![4, 5]);
        // The former sole element is now the tail.
        assert_eq!(list.back(), Ok(&5));
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut list: List<_> = (1..=3).collect();

        list.push_back(4);
        assert_eq!(list.pop_back(), Ok(4));

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.iter().copied().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pop_mixed() {
        let mut list: List<_> = (1..=4).collect();

        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(4));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));
        assert!(list.is_empty());
        assert_eq!(list.pop_back(), Err(Error::Empty));
    }

    #[test]
    fn test_remove_by_index() {
        let mut list: List<_> = (1..=3).collect();

        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], 1);
        assert_eq!(list[1], 3);
        assert_eq!(list.remove(2), Err(Error::OutOfRange));
    }

    #[test]
    fn test_remove_only_element() {
        let mut list = List::new();
        list.push_back(7);

        assert_eq!(list.remove(0), Ok(7));
        assert_eq!(list.len(), 0);
        assert_eq!(list.cursor_front(), list.cursor_end());
    }

    #[test]
    fn test_insert_by_index() {
        let mut a: List<_> = (1..=3).collect();
        a.insert(0, 0);
        let mut b: List<_> = (1..=3).collect();
        b.push_front(0);
        assert_eq!(a, b);

        // An index past the end clamps to an append.
        let mut c: List<_> = (1..=3).collect();
        c.insert(10, 4);
        assert_eq!(c.len(), 4);
        assert_eq!(c.back(), Ok(&4));

        let mut d = List::new();
        d.push_back(1);
        d.push_back(3);
        d.insert(1, 2);
        assert_eq!(d.iter().copied().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_mut_and_index_mut() {
        let mut list: List<_> = (1..=3).collect();

        *list.get_mut(1).unwrap() = 20;
        list[2] = 30;
        *list.front_mut().unwrap() = 10;

        assert_eq!(format!("{list:?}"), "[10, 20, 30]");
        *list.back_mut().unwrap() = 3;
        assert_eq!(list.back(), Ok(&3));
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_index_out_of_range() {
        let list: List<_> = (1..=3).collect();
        let _ = list[3];
    }

    #[test]
    fn test_cursor_traversal() {
        let list: List<_> = (1..=3).collect();

        let mut it = list.cursor_front();
        let before = it;
        it.advance().unwrap();
        assert_eq!(before.current(), Ok(&1));
        assert_eq!(it.current(), Ok(&2));
        assert_ne!(before, it);

        it.advance().unwrap();
        assert_eq!(it.current(), Ok(&3));
        it.advance().unwrap();
        assert!(it.is_end());
        assert_eq!(it, list.cursor_end());
        assert_eq!(it.advance(), Err(Error::OutOfRange));
        assert_eq!(it.current(), Err(Error::OutOfRange));
        assert_eq!(format!("{:?}", list.cursor_end()), "Cursor { token: None }");
    }

    #[test]
    fn test_cursor_counts_elements() {
        let list: List<_> = (0..17).collect();
        assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn test_cursor_mut_splice() {
        let mut list = List::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.iter().copied().collect_vec(), vec![1, 2, 3]);

        let mut cursor = list.cursor_mut();
        cursor.seek_front();
        assert!(cursor.is_front());
        cursor.advance().unwrap();
        assert_eq!(cursor.current(), Ok(&2));

        let two = cursor.remove().unwrap();
        assert_eq!(two, 2);
        // The cursor lands on the successor of the removed node.
        assert_eq!(cursor.current(), Ok(&3));
        assert!(cursor.is_back());

        cursor.insert_before(9);
        assert_eq!(list.iter().copied().collect_vec(), vec![1, 9, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_cursor_mut_at_sentinel() {
        let mut list: List<_> = (1..=2).collect();

        let mut cursor = list.cursor_mut();
        assert!(cursor.is_end());
        assert_eq!(cursor.remove(), Err(Error::OutOfRange));
        assert_eq!(cursor.current_mut(), Err(Error::OutOfRange));

        // Inserting before the sentinel appends at the back.
        cursor.insert_before(3);
        // Inserting after the null position prepends at the front.
        cursor.insert_after(0);
        assert_eq!(list.iter().copied().collect_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_clone_is_deep() {
        let list: List<_> = (1..=3).collect();
        let mut copy = list.clone();

        copy.push_back(4);
        *copy.get_mut(0).unwrap() = 10;

        assert_eq!(list.iter().copied().collect_vec(), vec![1, 2, 3]);
        assert_eq!(copy.iter().copied().collect_vec(), vec![10, 2, 3, 4]);
    }

    #[test]
    fn test_extend_and_into_iter() {
        let mut list: List<_> = (1..=3).collect();
        list.extend(4..=5);

        let values: Vec<_> = list.into_iter().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clear() {
        let mut list: List<_> = (1..=3).collect();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.front(), Err(Error::Empty));

        list.push_back(1);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.len(), 1);
    }

    #[derive(Default)]
    struct CountingArena<T> {
        inner: SlabArena<T>,
        allocated: Rc<Cell<usize>>,
        released: Rc<Cell<usize>>,
    }

    impl<T> Arena<T> for CountingArena<T> {
        fn insert(&mut self, value: T) -> Token {
            self.allocated.set(self.allocated.get() + 1);
            self.inner.insert(value)
        }

        fn remove(&mut self, token: Token) -> T {
            self.released.set(self.released.get() + 1);
            self.inner.remove(token)
        }

        fn get(&self, token: Token) -> Option<&T> {
            self.inner.get(token)
        }

        fn get_mut(&mut self, token: Token) -> Option<&mut T> {
            self.inner.get_mut(token)
        }

        fn len(&self) -> usize {
            self.inner.len()
        }

        fn clear(&mut self) {
            self.released.set(self.released.get() + self.inner.len());
            self.inner.clear();
        }
    }

    #[test]
    fn test_custom_arena_release_pairing() {
        let allocated = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let arena = CountingArena {
            inner: SlabArena::new(),
            allocated: allocated.clone(),
            released: released.clone(),
        };

        let mut list = List::new_in(arena);
        for i in 0..8 {
            list.push_back(i);
        }
        assert_eq!(allocated.get(), 8);
        assert_eq!(released.get(), 0);

        list.pop_front().unwrap();
        list.remove(3).unwrap();
        assert_eq!(released.get(), 2);

        list.insert(2, 99);
        assert_eq!(allocated.get(), 9);

        list.clear();
        assert_eq!(released.get(), allocated.get());
    }

    #[test]
    fn test_random_ops_match_vecdeque() {
        let mut rng = SmallRng::seed_from_u64(0x5107);
        let mut list = List::new();
        let mut model = VecDeque::new();

        for i in 0..1000u32 {
            match rng.gen_range(0..6) {
                0 => {
                    list.push_back(i);
                    model.push_back(i);
                }
                1 => {
                    list.push_front(i);
                    model.push_front(i);
                }
                2 => assert_eq!(list.pop_back().ok(), model.pop_back()),
                3 => assert_eq!(list.pop_front().ok(), model.pop_front()),
                4 => {
                    let index = rng.gen_range(0..=model.len());
                    if index >= model.len() {
                        model.push_back(i);
                    } else {
                        model.insert(index, i);
                    }
                    list.insert(index, i);
                }
                _ => {
                    if !model.is_empty() {
                        let index = rng.gen_range(0..model.len());
                        assert_eq!(list.remove(index).ok(), model.remove(index));
                    }
                }
            }
            assert_eq!(list.len(), model.len());
        }

        assert_eq!(
            list.iter().copied().collect_vec(),
            model.iter().copied().collect_vec()
        );
        assert_eq!(list.iter().count(), list.len());
    }
}
