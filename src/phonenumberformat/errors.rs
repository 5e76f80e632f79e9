// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::num::ParseIntError;

use thiserror::Error;

use super::enums::{AreaKind, DistanceRule};

/// Reasons a number could not be resolved or formatted.
///
/// The string-returning operations of the engine collapse all of these into an
/// empty result; [`crate::PhoneNumberEngine::resolve`] reports them as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ResolveError {
    #[error("Input is empty or not a phone number")]
    MalformedInput,
    #[error("No country code matches the number")]
    UnknownCountryCode,
    #[error("No area or carrier code matches the number")]
    UnknownAreaCode,
    #[error("Nothing is left of the number for the local part")]
    EmptyLocalNumber,
    #[error("No {0} template is available for the user's country")]
    MissingFormat(DistanceRule),
}

/// Errors raised while building a reference dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Failed to parse reference data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Country id {0} is defined more than once")]
    DuplicateCountryId(u32),

    #[error("Country {country_id} has an invalid country code '{code}'")]
    InvalidCountryCode { country_id: u32, code: String },

    #[error("The {kind} id '{id}' is defined more than once")]
    DuplicateAreaId { kind: AreaKind, id: String },

    #[error("The {kind} id '{id}' must be '+' followed by digits")]
    InvalidAreaId { kind: AreaKind, id: String },
}

/// Errors raised while reading a locale configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Failed to parse locale config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse country id '{value}': {source}")]
    InvalidCountryId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Area code '{0}' must contain digits only")]
    InvalidAreaCode(String),

    #[error("Unknown distance rule '{0}' in variable '{1}'")]
    UnknownRule(String, String),
}
