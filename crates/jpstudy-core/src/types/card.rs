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

use std::path::PathBuf;

use crate::types::aliases::DeckName;
use crate::types::entry::VocabularyEntry;

/// A vocabulary entry on its way to a deck.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    deck_name: DeckName,
    file_path: PathBuf,
    entry: VocabularyEntry,
}

impl Card {
    pub fn new(deck_name: DeckName, file_path: PathBuf, entry: VocabularyEntry) -> Self {
        Self {
            deck_name,
            file_path,
            entry,
        }
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    pub fn front(&self) -> &str {
        self.entry.term()
    }

    pub fn back(&self) -> String {
        self.entry.card_back()
    }
}
