// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::split_sections;
use crate::types::aliases::DeckName;

pub const DEFAULT_DECK: &str = "Japanese";

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"date: (\d{4}-\d{2}-\d{2})").expect("date pattern is a valid regex")
});

/// The date declared in the first non-blank block of a document, if any.
pub fn document_date(text: &str) -> Option<String> {
    let sections = split_sections(text);
    let first = sections
        .iter()
        .find(|lines| lines.iter().any(|line| !line.trim().is_empty()))?;
    first.iter().find_map(|line| {
        DATE_PATTERN
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Cards from a dated document go to a deck named after the date; everything
/// else goes to the default deck.
pub fn deck_name(text: &str, default: &str) -> DeckName {
    document_date(text).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_in_frontmatter() {
        let text = "---\ntags: [JPStudy]\ndate: 2024-01-05\n---\n# Vocabulary\n- 犬 ー dog";
        assert_eq!(deck_name(text, DEFAULT_DECK), "2024-01-05");
    }

    #[test]
    fn test_date_without_frontmatter() {
        let text = "date: 2023-11-30\n---\n# Vocabulary\n- 犬 ー dog";
        assert_eq!(deck_name(text, DEFAULT_DECK), "2023-11-30");
    }

    #[test]
    fn test_no_date() {
        let text = "---\ntags: [JPStudy]\n---\n# Vocabulary\n- 犬 ー dog";
        assert_eq!(deck_name(text, DEFAULT_DECK), "Japanese");
    }

    #[test]
    fn test_date_outside_first_block_is_ignored() {
        let text = "---\ntags: [JPStudy]\n---\n# Vocabulary\ndate: 2024-01-05";
        assert_eq!(document_date(text), None);
    }

    #[test]
    fn test_malformed_date_is_ignored() {
        let text = "---\ndate: 2024-1-5\n---\n";
        assert_eq!(deck_name(text, "Fallback"), "Fallback");
    }
}
