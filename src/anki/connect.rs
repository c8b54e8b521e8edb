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

use jpstudy_core::types::card::Card;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::anki::AnkiError;
use crate::anki::FlashcardService;
use crate::config::Config;

const API_VERSION: u8 = 6;

/// Client for the AnkiConnect add-on's HTTP API.
pub struct AnkiConnect {
    client: Client,
    endpoint: String,
    model: String,
    front_field: String,
    back_field: String,
}

#[derive(Serialize)]
struct Request<'a> {
    action: &'a str,
    version: u8,
    params: Value,
}

#[derive(Deserialize)]
struct Response {
    error: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    deck_name: String,
    model_name: String,
    fields: BTreeMap<String, String>,
    options: NoteOptions,
    tags: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteOptions {
    allow_duplicate: bool,
}

impl AnkiConnect {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            front_field: config.front_field.clone(),
            back_field: config.back_field.clone(),
        }
    }

    /// The note AnkiConnect receives for a card.
    pub fn note(&self, card: &Card) -> Note {
        let mut fields = BTreeMap::new();
        fields.insert(self.front_field.clone(), card.front().to_string());
        fields.insert(self.back_field.clone(), card.back());
        Note {
            deck_name: card.deck_name().to_string(),
            model_name: self.model.clone(),
            fields,
            options: NoteOptions {
                allow_duplicate: false,
            },
            tags: Vec::new(),
        }
    }

    async fn request(&self, action: &'static str, params: Value) -> Result<(), AnkiError> {
        let body = Request {
            action,
            version: API_VERSION,
            params,
        };
        let unreachable = |e: reqwest::Error| AnkiError::Unreachable {
            action,
            message: e.to_string(),
        };
        let response: Response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(unreachable)?
            .json()
            .await
            .map_err(unreachable)?;
        match response.error {
            Some(message) => Err(AnkiError::Service { action, message }),
            None => Ok(()),
        }
    }
}

impl FlashcardService for AnkiConnect {
    async fn create_deck(&self, name: &str) -> Result<(), AnkiError> {
        self.request("createDeck", json!({ "deck": name })).await
    }

    async fn add_note(&self, card: &Card) -> Result<(), AnkiError> {
        let note = self.note(card);
        self.request("addNote", json!({ "note": note })).await
    }
}
