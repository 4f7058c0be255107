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

//! A doubly linked list whose nodes live in a slab-like arena.
//!
//! Links between nodes are opaque [`Token`]s instead of pointers, so the
//! whole container is expressible without raw pointers and a dangling link
//! is unrepresentable. The arena is the allocator: nodes are constructed
//! into it and released through it, never freed by any other path. Bring a
//! custom [`Arena`] implementation to back a list with your own pool.
//!
//! Traversal is forward-only through [`Cursor`] (shared) and [`CursorMut`]
//! (exclusive, the splice engine). The backward links exist solely to make
//! removal and insert-before O(1); they are never exposed.
//!
//! Operations that would dereference the end sentinel or touch an empty
//! list report [`Error`] instead of panicking; the indexing operators are
//! the one documented panicking surface.
//!
//! # Example
//!
//! ```
//! use slotlist::List;
//!
//! let mut list = List::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list[1], 2);
//! assert_eq!(list.back(), Ok(&3));
//!
//! assert_eq!(list.remove(1), Ok(2));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! ```

mod arena;
mod assert;
mod error;
mod list;

pub use arena::{Arena, SlabArena, Token};
pub use assert::OptionExt;
pub use error::{Error, Result};
pub use list::{Cursor, CursorMut, IntoIter, List, Node};
