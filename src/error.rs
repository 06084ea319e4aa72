/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
// https://blog.burntsushi.net/rust-error-handling/

use thiserror::Error;

pub type CommunityResult<T> = std::result::Result<T, CommunityError>;

/// Errors the core can raise. `Cancelled` is deliberately not a variant here:
/// cooperative cancellation is a normal outcome of `try_compute`, carried by
/// `Outcome`, not by this type.
#[derive(Debug, Error)]
pub enum CommunityError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal invariant violated: {0}")]
    Internal(String),
}

impl CommunityError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
