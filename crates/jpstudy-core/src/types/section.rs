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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

/// The sections of a study note that carry countable content.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Vocabulary,
    Idioms,
    Materials,
    GrammarPoints,
}

/// How lines in a section qualify for counting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CountingStrategy {
    /// Only lines containing Japanese script are counted.
    ScriptAware,
    /// Every non-blank line is counted.
    CountAll,
}

impl SectionName {
    pub const ALL: [SectionName; 4] = [
        SectionName::Vocabulary,
        SectionName::Idioms,
        SectionName::Materials,
        SectionName::GrammarPoints,
    ];

    /// Match normalized heading text (trimmed, lower-cased) against the known
    /// sections.
    pub fn from_heading(heading: &str) -> Option<Self> {
        match heading {
            "vocabulary" => Some(SectionName::Vocabulary),
            "idioms" => Some(SectionName::Idioms),
            "materials" => Some(SectionName::Materials),
            "grammar points" => Some(SectionName::GrammarPoints),
            _ => None,
        }
    }

    pub fn counting(&self) -> CountingStrategy {
        match self {
            SectionName::Materials => CountingStrategy::CountAll,
            SectionName::Vocabulary | SectionName::Idioms | SectionName::GrammarPoints => {
                CountingStrategy::ScriptAware
            }
        }
    }
}

impl Display for SectionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionName::Vocabulary => write!(f, "vocabulary"),
            SectionName::Idioms => write!(f, "idioms"),
            SectionName::Materials => write!(f, "materials"),
            SectionName::GrammarPoints => write!(f, "grammar points"),
        }
    }
}
