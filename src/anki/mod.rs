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

use jpstudy_core::types::card::Card;

pub mod connect;

/// A failed call to the flashcard service.
#[derive(Debug, PartialEq)]
pub enum AnkiError {
    /// The service answered, with an error.
    Service {
        action: &'static str,
        message: String,
    },
    /// The service could not be reached, or its answer could not be read.
    Unreachable {
        action: &'static str,
        message: String,
    },
}

impl Display for AnkiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnkiError::Service { action, message } => {
                write!(f, "AnkiConnect rejected '{action}': {message}")
            }
            AnkiError::Unreachable { action, message } => {
                write!(f, "could not reach AnkiConnect for '{action}': {message}")
            }
        }
    }
}

impl Error for AnkiError {}

/// The flashcard application the cards are pushed to.
#[allow(async_fn_in_trait)]
pub trait FlashcardService {
    async fn create_deck(&self, name: &str) -> Result<(), AnkiError>;

    async fn add_note(&self, card: &Card) -> Result<(), AnkiError>;
}
