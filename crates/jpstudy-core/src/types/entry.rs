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

/// A vocabulary item pulled out of a study note.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VocabularyEntry {
    term: String,
    reading: Option<String>,
    definition: String,
}

impl VocabularyEntry {
    pub fn new(term: String, reading: Option<String>, definition: String) -> Self {
        Self {
            term,
            reading: reading.filter(|r| !r.is_empty()),
            definition,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The back side of the card. The reading's opening bracket is never
    /// closed: existing note templates depend on this exact text.
    pub fn card_back(&self) -> String {
        match &self.reading {
            Some(reading) => format!("{}<br><br>「{}", self.definition, reading),
            None => self.definition.clone(),
        }
    }
}
