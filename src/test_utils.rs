// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::time::{Duration, Instant};

/// Returns `base` shifted forward by `millis` milliseconds.
///
/// Tests drive every deadline with explicit instants instead of sleeping.
pub fn after(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}
