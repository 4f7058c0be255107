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

//! Assertion utilities gated behind the `strict_assertions` feature.

/// Asserts like [`assert!`] with `strict_assertions` enabled, and like
/// [`debug_assert!`] otherwise.
#[macro_export]
macro_rules! strict_assert {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict_assertions") {
            assert!($($arg)*);
        } else {
            debug_assert!($($arg)*);
        }
    };
}

/// Asserts like [`assert_eq!`] with `strict_assertions` enabled, and like
/// [`debug_assert_eq!`] otherwise.
#[macro_export]
macro_rules! strict_assert_eq {
    ($($arg:tt)*) => {
        if cfg!(feature = "strict_assertions") {
            assert_eq!($($arg)*);
        } else {
            debug_assert_eq!($($arg)*);
        }
    };
}

/// Strictness-aware unwrapping for [`Option`].
pub trait OptionExt<T> {
    /// Unwraps without checking, unless `strict_assertions` is enabled, in
    /// which case a `None` panics.
    ///
    /// # Safety
    ///
    /// The option must be `Some`.
    unsafe fn strict_unwrap_unchecked(self) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    unsafe fn strict_unwrap_unchecked(self) -> T {
        if cfg!(feature = "strict_assertions") {
            self.unwrap()
        } else {
            self.unwrap_unchecked()
        }
    }
}
