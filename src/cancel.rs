/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
//! Progress/cancellation is modeled as a callback the caller supplies,
//! rather than as ambient global state.

/// Cooperative cancellation: the Driver polls `is_cancelled` every
/// `PROGRESS_INTERVAL` merges and returns promptly when it flips, without
/// rolling back partial merges.
pub trait Cancel {
    fn is_cancelled(&self) -> bool;
    fn report_progress(&self, done: usize, total: usize);
}

/// A `Cancel` that never cancels and ignores progress, for callers with no
/// need for either.
pub struct NoopCancel;
impl Cancel for NoopCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
    fn report_progress(&self, _done: usize, _total: usize) {}
}
