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

/// Iterates over a string and then ever-shorter prefixes of it, dropping one
/// trailing character per step, until the string is exhausted.
///
/// `"4935"` yields `"4935"`, `"493"`, `"49"`, `"4"`. Since the longest
/// candidate comes first, the first hit of a lookup is the longest match.
#[derive(Debug, Clone)]
pub struct ShrinkingPrefixes<'a> {
    remaining: &'a str,
}

impl<'a> ShrinkingPrefixes<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { remaining: s }
    }
}

impl<'a> Iterator for ShrinkingPrefixes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.remaining;
        let last = current.chars().next_back()?;
        self.remaining = &current[..current.len() - last.len_utf8()];
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len().min(1), Some(self.remaining.len()))
    }
}

/// Returns at most the first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
