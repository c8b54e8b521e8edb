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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::script::contains_japanese;
use crate::types::section::CountingStrategy;
use crate::types::section::SectionName;

/// Per-section line counts for a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountTable {
    counts: BTreeMap<SectionName, usize>,
}

impl Default for CountTable {
    fn default() -> Self {
        Self {
            counts: SectionName::ALL.iter().map(|s| (*s, 0)).collect(),
        }
    }
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a line found in the given section, if it qualifies. Returns
    /// whether it was counted.
    pub fn record(&mut self, section: SectionName, line: &str) -> bool {
        if line.trim().is_empty() || line.starts_with("---") {
            return false;
        }
        let qualifies = match section.counting() {
            CountingStrategy::ScriptAware => contains_japanese(line),
            CountingStrategy::CountAll => true,
        };
        if qualifies {
            *self.counts.entry(section).or_insert(0) += 1;
        }
        qualifies
    }

    pub fn get(&self, section: SectionName) -> usize {
        self.counts.get(&section).copied().unwrap_or(0)
    }

    pub fn merge(&mut self, other: &CountTable) {
        for (section, count) in &other.counts {
            *self.counts.entry(*section).or_insert(0) += count;
        }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionName, usize)> + '_ {
        self.counts.iter().map(|(section, count)| (*section, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_starts_at_zero() {
        let table = CountTable::new();
        for section in SectionName::ALL {
            assert_eq!(table.get(section), 0);
        }
    }

    #[test]
    fn test_latin_vocabulary_line_is_not_counted() {
        let mut table = CountTable::new();
        assert!(!table.record(SectionName::Vocabulary, "- cat: a small animal."));
        assert_eq!(table.get(SectionName::Vocabulary), 0);
    }

    #[test]
    fn test_hiragana_vocabulary_line_is_counted() {
        let mut table = CountTable::new();
        assert!(table.record(SectionName::Vocabulary, "- ねこ ー cat"));
        assert_eq!(table.get(SectionName::Vocabulary), 1);
    }

    #[test]
    fn test_materials_count_everything() {
        let mut table = CountTable::new();
        assert!(table.record(SectionName::Materials, "https://example.com/podcast"));
        assert!(table.record(SectionName::Materials, "NHK Easy"));
        assert_eq!(table.get(SectionName::Materials), 2);
    }

    #[test]
    fn test_blank_and_delimiter_lines_are_never_counted() {
        let mut table = CountTable::new();
        assert!(!table.record(SectionName::Materials, "   "));
        assert!(!table.record(SectionName::Materials, "---"));
        assert!(!table.record(SectionName::Materials, "----"));
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = CountTable::new();
        a.record(SectionName::Idioms, "猫の手も借りたい");
        let mut b = CountTable::new();
        b.record(SectionName::Idioms, "花より団子");
        b.record(SectionName::Materials, "Genki");
        a.merge(&b);
        assert_eq!(a.get(SectionName::Idioms), 2);
        assert_eq!(a.get(SectionName::Materials), 1);
        assert_eq!(a.total(), 3);
    }

    #[test]
    fn test_serialize() -> Fallible<()> {
        let mut table = CountTable::new();
        table.record(SectionName::GrammarPoints, "〜ている");
        let serialized = serde_json::to_string(&table)?;
        assert_eq!(
            serialized,
            r#"{"vocabulary":0,"idioms":0,"materials":0,"grammar_points":1}"#
        );
        Ok(())
    }
}
