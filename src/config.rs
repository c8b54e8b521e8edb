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

use std::fs::read_to_string;
use std::path::Path;

use jpstudy_core::batch::DEFAULT_BATCH_SIZE;
use jpstudy_core::deck::DEFAULT_DECK;
use jpstudy_core::error::Fallible;
use jpstudy_core::error::fail;
use serde::Deserialize;

/// Name of the optional configuration file at the vault root.
pub const CONFIG_FILE_NAME: &str = "jpstudy.toml";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8765";

/// Settings that can be specified in `jpstudy.toml`. All keys are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    tag: Option<String>,
    template: Option<String>,
    default_deck: Option<String>,
    model: Option<String>,
    front_field: Option<String>,
    back_field: Option<String>,
    endpoint: Option<String>,
    batch_size: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Documents must carry this tag to be studied.
    pub tag: String,
    /// Name of the template document, which is never studied.
    pub template: String,
    /// Deck for documents that don't declare a date.
    pub default_deck: String,
    /// Anki note type.
    pub model: String,
    pub front_field: String,
    pub back_field: String,
    /// AnkiConnect URL.
    pub endpoint: String,
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: "JPStudy".to_string(),
            template: "Japanese study template".to_string(),
            default_deck: DEFAULT_DECK.to_string(),
            model: "Basic".to_string(),
            front_field: "Front".to_string(),
            back_field: "Back".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Values passed on the command line. These take precedence over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub tag: Option<String>,
    pub endpoint: Option<String>,
    pub batch_size: Option<usize>,
}

impl Config {
    /// Load the configuration for the vault at `root`, falling back to the
    /// defaults for anything not specified.
    pub fn load(root: &Path, overrides: Overrides) -> Fallible<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        let file: ConfigFile = if path.is_file() {
            log::debug!("Reading configuration from {}", path.display());
            toml::from_str(&read_to_string(&path)?)?
        } else {
            ConfigFile::default()
        };
        Self::default().merge(file, overrides)
    }

    fn merge(self, file: ConfigFile, overrides: Overrides) -> Fallible<Self> {
        let config = Config {
            tag: overrides.tag.or(file.tag).unwrap_or(self.tag),
            template: file.template.unwrap_or(self.template),
            default_deck: file.default_deck.unwrap_or(self.default_deck),
            model: file.model.unwrap_or(self.model),
            front_field: file.front_field.unwrap_or(self.front_field),
            back_field: file.back_field.unwrap_or(self.back_field),
            endpoint: overrides.endpoint.or(file.endpoint).unwrap_or(self.endpoint),
            batch_size: overrides
                .batch_size
                .or(file.batch_size)
                .unwrap_or(self.batch_size),
        };
        if config.batch_size == 0 {
            return fail("batch size must be at least 1.");
        }
        Ok(config)
    }
}
