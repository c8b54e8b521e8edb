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

use crate::extract::ExtractError;
use crate::extract::extract;
use crate::stats::CountTable;
use crate::types::entry::VocabularyEntry;
use crate::types::section::SectionName;

const HEADING_MARKER: &str = "# ";
const DELIMITER: &str = "---";

/// The section the scanner is in. Reset at every delimiter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseState {
    /// Normalized heading text. Headings that name no known section are kept
    /// here too, they just never match a [`SectionName`].
    current_section: Option<String>,
}

impl ParseState {
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    pub fn section(&self) -> Option<SectionName> {
        self.current_section
            .as_deref()
            .and_then(SectionName::from_heading)
    }

    fn advance(self, line: &Line<'_>) -> Self {
        match line {
            Line::Heading(text) => ParseState {
                current_section: Some(text.trim().to_lowercase()),
            },
            Line::Delimiter => ParseState::default(),
            Line::Text(_) => self,
        }
    }
}

enum Line<'a> {
    /// A line like `# <heading>`.
    Heading(&'a str),
    /// A line that's just `---`.
    Delimiter,
    /// Any other line.
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn read(line: &'a str) -> Self {
        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            Line::Heading(heading)
        } else if is_delimiter(line) {
            Line::Delimiter
        } else {
            Line::Text(line)
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim() == DELIMITER
}

/// Feed one line to the section classifier.
pub fn classify(line: &str, state: ParseState) -> ParseState {
    state.advance(&Line::read(line))
}

/// Split a document into its delimiter-bounded blocks of lines.
pub fn split_sections(text: &str) -> Vec<Vec<&str>> {
    let mut sections = vec![Vec::new()];
    for line in text.lines() {
        if is_delimiter(line) {
            sections.push(Vec::new());
        } else if let Some(section) = sections.last_mut() {
            section.push(line);
        }
    }
    sections
}

/// A vocabulary line that could not be turned into an entry.
#[derive(Debug, PartialEq)]
pub struct MalformedLine {
    /// 1-based.
    pub line_num: usize,
    pub error: ExtractError,
}

/// Everything a single pass over a document produces.
#[derive(Debug, Default)]
pub struct DocumentScan {
    pub counts: CountTable,
    pub entries: Vec<VocabularyEntry>,
    pub malformed: Vec<MalformedLine>,
}

/// Scan a document top to bottom, counting section content and extracting
/// vocabulary entries. Malformed vocabulary lines are collected rather than
/// aborting the scan.
pub fn scan_document(text: &str) -> DocumentScan {
    let mut scan = DocumentScan::default();
    let mut state = ParseState::default();
    for (line_num, raw) in text.lines().enumerate() {
        let line = Line::read(raw);
        state = state.advance(&line);
        let Line::Text(content) = line else {
            continue;
        };
        let Some(section) = state.section() else {
            continue;
        };
        scan.counts.record(section, content);
        if section == SectionName::Vocabulary && !content.trim().is_empty() {
            match extract(content) {
                Ok(entry) => scan.entries.push(entry),
                Err(error) => scan.malformed.push(MalformedLine {
                    line_num: line_num + 1,
                    error,
                }),
            }
        }
    }
    scan
}
