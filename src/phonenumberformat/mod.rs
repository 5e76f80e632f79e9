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

mod helper_constants;
mod helper_functions;
mod helper_types;
mod format_sources;
pub mod enums;
pub mod errors;
pub mod phone_number_engine;

pub use enums::{AreaKind, DistanceRule};
pub use errors::{ConfigError, DataError, ResolveError};
pub use format_sources::LocaleOverrides;
pub use helper_constants::{MAX_AREACODE_LENGTH, MAX_COUNTRYCODE_LENGTH, PHONE_NUMBER_PATTERN};
pub use helper_types::{CountryCodeSource, ResolvedNumber};
pub use phone_number_engine::PhoneNumberEngine;
