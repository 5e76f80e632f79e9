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

use std::{borrow::Cow, sync::Arc};

use crate::interfaces::{FormatSource, LocaleDefaults};

use super::DistanceRule;

/// Exposes the user's own templates and country names as a [`FormatSource`].
#[derive(Clone)]
pub struct LocaleOverrides {
    locale: Arc<dyn LocaleDefaults>,
}

impl LocaleOverrides {
    pub fn new(locale: Arc<dyn LocaleDefaults>) -> Self {
        Self { locale }
    }
}

impl FormatSource for LocaleOverrides {
    fn phone_format(&self, country_id: u32, rule: DistanceRule) -> Option<Cow<'_, str>> {
        self.locale
            .format_override(country_id, rule)
            .map(Cow::Borrowed)
    }

    fn country_name(&self, country_id: u32) -> Option<Cow<'_, str>> {
        self.locale.country_name(country_id).map(Cow::Borrowed)
    }
}
