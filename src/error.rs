// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for the simulation engine.
//!
//! Two kinds matter to callers: configuration problems are caught before
//! any trial runs, metric failures surface mid-run and abort the group
//! being processed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiegeError {
    /// Invalid attack invocation: both or neither of num/ratio, or a
    /// removal amount that exceeds the smallest group's pool.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A metric could not produce a value for the graph it was handed.
    /// Never retried; aborts the current group.
    #[error("metric `{metric}` failed: {reason}")]
    MetricEvaluation { metric: String, reason: String },

    /// Malformed or unreadable input data.
    #[error("dataset error: {0}")]
    Dataset(String),
}

pub type Result<T> = std::result::Result<T, SiegeError>;
