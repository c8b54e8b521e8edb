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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::entry::VocabularyEntry;

/// Separates the term (and reading) from the definition.
const SEPARATOR: char = 'ー';
/// Opens the reading clause.
const READING_OPEN: char = '「';
const READING_CLOSE: char = '」';
const LIST_MARKER: char = '-';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractErrorKind {
    /// The line has no `ー` separator.
    MissingSeparator,
    /// Nothing is left of the term once markers are stripped.
    EmptyTerm,
    /// Nothing follows the separator.
    EmptyDefinition,
    /// The term segment holds more than one reading marker.
    AmbiguousReading,
}

/// A vocabulary line that doesn't have the shape of an entry.
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractError {
    pub kind: ExtractErrorKind,
    pub line: String,
}

impl ExtractError {
    fn new(kind: ExtractErrorKind, line: &str) -> Self {
        Self {
            kind,
            line: line.to_string(),
        }
    }
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self.kind {
            ExtractErrorKind::MissingSeparator => "missing 'ー' separator",
            ExtractErrorKind::EmptyTerm => "empty term",
            ExtractErrorKind::EmptyDefinition => "empty definition",
            ExtractErrorKind::AmbiguousReading => "more than one '「' reading marker",
        };
        write!(f, "{message} in line `{}`", self.line)
    }
}

impl Error for ExtractError {}

/// Extract a vocabulary entry from a line like `- [[term]]「reading ー definition`
/// or `- term ー definition`.
pub fn extract(line: &str) -> Result<VocabularyEntry, ExtractError> {
    let (head, definition) = split_separator(line)
        .ok_or_else(|| ExtractError::new(ExtractErrorKind::MissingSeparator, line))?;
    let head = head.trim();
    let definition = definition.trim();

    let fragments: Vec<&str> = head
        .split(READING_OPEN)
        .filter(|fragment| !fragment.is_empty())
        .collect();
    let (raw_term, reading) = match fragments.as_slice() {
        [term] => (*term, None),
        [term, reading] => (*term, Some(clean_reading(reading))),
        [] => return Err(ExtractError::new(ExtractErrorKind::EmptyTerm, line)),
        _ => return Err(ExtractError::new(ExtractErrorKind::AmbiguousReading, line)),
    };

    let term = clean_term(raw_term);
    if term.is_empty() {
        return Err(ExtractError::new(ExtractErrorKind::EmptyTerm, line));
    }
    if definition.is_empty() {
        return Err(ExtractError::new(ExtractErrorKind::EmptyDefinition, line));
    }

    Ok(VocabularyEntry::new(
        term.to_string(),
        reading.map(str::to_string),
        definition.to_string(),
    ))
}

/// Split at the separator. `ー` doubles as the katakana long vowel mark, so a
/// separator standing on its own between whitespace takes precedence over the
/// first occurrence.
fn split_separator(line: &str) -> Option<(&str, &str)> {
    let standalone = line.match_indices(SEPARATOR).find(|(idx, sep)| {
        let before = line[..*idx].chars().next_back();
        let after = line[idx + sep.len()..].chars().next();
        before.is_none_or(char::is_whitespace) && after.is_none_or(char::is_whitespace)
    });
    let (idx, sep) = standalone.or_else(|| line.match_indices(SEPARATOR).next())?;
    Some((&line[..idx], &line[idx + sep.len()..]))
}

fn clean_term(raw: &str) -> &str {
    let raw = raw.trim_start();
    let term = match raw.strip_prefix(LIST_MARKER) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => raw,
    }
    .trim();
    term.strip_prefix("[[")
        .and_then(|inner| inner.strip_suffix("]]"))
        .map(str::trim)
        .unwrap_or(term)
}

fn clean_reading(raw: &str) -> &str {
    let reading = raw.trim();
    reading.strip_suffix(READING_CLOSE).unwrap_or(reading).trim_end()
}
