// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Import text that is not JSON at all.
    #[error("could not read the JSON document: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("the JSON document is not an array of transactions")]
    NotAnArray,

    /// One element of an import failed the shape check; nothing was applied.
    #[error("transaction #{index} is invalid: {reason}")]
    Validation { index: usize, reason: String },

    #[error("stored transactions are malformed: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("could not encode transactions: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}
