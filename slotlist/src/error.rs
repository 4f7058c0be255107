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

//! Error types.

/// Precondition violations reported by list operations.
///
/// A failing operation returns its error before mutating anything, so the
/// list is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation requires a non-empty list.
    #[error("list is empty")]
    Empty,
    /// The position or index does not refer to an element.
    #[error("position out of range")]
    OutOfRange,
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, Error>;
