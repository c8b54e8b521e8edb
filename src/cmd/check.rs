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
use std::path::PathBuf;

use jpstudy_core::error::Fallible;
use jpstudy_core::error::fail;
use jpstudy_core::extract::ExtractError;
use jpstudy_core::parser::scan_document;

use crate::config::Config;
use crate::config::Overrides;
use crate::vault::DocumentStore;
use crate::vault::FsVault;
use crate::vault::resolve_directory;
use crate::vault::study_documents;

/// A vocabulary line that would be skipped by `sync`.
pub struct Problem {
    path: PathBuf,
    line_num: usize,
    error: ExtractError,
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line_num, self.error)
    }
}

pub async fn check_collection(directory: Option<String>, tag: Option<String>) -> Fallible<()> {
    let root = resolve_directory(directory)?;
    let overrides = Overrides {
        tag,
        ..Overrides::default()
    };
    let config = Config::load(&root, overrides)?;
    let vault = FsVault::new(root);
    let problems = find_problems(&vault, &config).await?;
    for problem in &problems {
        println!("{problem}");
    }
    if problems.is_empty() {
        log::info!("All vocabulary lines are well-formed.");
        Ok(())
    } else {
        fail(format!("found {} malformed vocabulary lines.", problems.len()))
    }
}

pub async fn find_problems(store: &impl DocumentStore, config: &Config) -> Fallible<Vec<Problem>> {
    let mut problems = Vec::new();
    for document in study_documents(store, &config.tag, &config.template).await? {
        let text = store.read_contents(&document).await?;
        let scan = scan_document(&text);
        problems.extend(scan.malformed.into_iter().map(|malformed| Problem {
            path: document.path.clone(),
            line_num: malformed.line_num,
            error: malformed.error,
        }));
    }
    Ok(problems)
}
