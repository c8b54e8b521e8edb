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

//! jpstudy-core: Core library for jpstudy.
//!
//! Everything here is free of I/O:
//! - Classifying the lines of a study note into sections
//! - Extracting vocabulary entries from list items
//! - Counting study material per section
//! - Reading tags and deck names out of a document
//! - Batching notes for the flashcard service

pub mod batch;
pub mod deck;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod parser;
pub mod script;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use extract::{ExtractError, ExtractErrorKind, extract};
pub use parser::{DocumentScan, ParseState, classify, scan_document};
pub use stats::CountTable;
pub use types::card::Card;
pub use types::entry::VocabularyEntry;
pub use types::section::{CountingStrategy, SectionName};
