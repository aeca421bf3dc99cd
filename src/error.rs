// Copyright (C) 2024, NTNU
// Author: Jarle Vinje Kramer <jarlekramer@gmail.com; jarle.a.kramer@ntnu.no>
// License: GPL v3.0 (see separate file LICENSE or https://www.gnu.org/licenses/gpl-3.0.html)

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
/// Errors that can be returned by the models in the library.
///
/// None of the errors are meant to be recovered from inside a single evaluation. A solver that
/// probes states outside the valid domain should rather disable the heel angle check on the
/// apparent wind functions.
pub enum Error {
    /// A wind speed, wind angle or heel angle outside of its mathematically valid range
    #[error("domain error: {0}")]
    Domain(String),
    /// A geometry or shape parameter outside of its physically valid range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unknown sail type: {0}")]
    UnknownSailType(String),
    #[error("could not parse json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }

    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
