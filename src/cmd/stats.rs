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

use clap::ValueEnum;
use jpstudy_core::error::Fallible;
use jpstudy_core::parser::scan_document;
use jpstudy_core::stats::CountTable;
use jpstudy_core::types::section::SectionName;

use crate::config::Config;
use crate::config::Overrides;
use crate::vault::DocumentStore;
use crate::vault::FsVault;
use crate::vault::resolve_directory;
use crate::vault::study_documents;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum StatsFormat {
    Text,
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub async fn print_stats(
    directory: Option<String>,
    tag: Option<String>,
    format: StatsFormat,
) -> Fallible<()> {
    let root = resolve_directory(directory)?;
    let overrides = Overrides {
        tag,
        ..Overrides::default()
    };
    let config = Config::load(&root, overrides)?;
    let vault = FsVault::new(root);
    let counts = collect_counts(&vault, &config).await?;
    match format {
        StatsFormat::Text => print!("{}", render_text(&counts)),
        StatsFormat::Json => println!("{}", render_json(&counts)?),
    }
    Ok(())
}

/// Tally every study document in the vault.
pub async fn collect_counts(store: &impl DocumentStore, config: &Config) -> Fallible<CountTable> {
    let mut counts = CountTable::new();
    for document in study_documents(store, &config.tag, &config.template).await? {
        let text = store.read_contents(&document).await?;
        let scan = scan_document(&text);
        log::debug!("{}: {} lines counted", document.name, scan.counts.total());
        counts.merge(&scan.counts);
    }
    Ok(counts)
}

fn label(section: SectionName) -> &'static str {
    match section {
        SectionName::Vocabulary => "Vocabulary",
        SectionName::Idioms => "Idioms",
        SectionName::Materials => "Materials",
        SectionName::GrammarPoints => "Grammar points",
    }
}

fn render_text(counts: &CountTable) -> String {
    counts
        .iter()
        .map(|(section, count)| format!("{}: {count}\n", label(section)))
        .collect()
}

fn render_json(counts: &CountTable) -> Fallible<String> {
    Ok(serde_json::to_string_pretty(counts)?)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::*;
    use crate::helper::create_tmp_vault;

    const DAY_ONE: &str = "---
tags: [JPStudy]
---
# Vocabulary
- [[魚]]「さかな ー fish
- cat: a small animal

# Idioms
猫の手も借りたい

# Materials
Genki I, chapter 3
";

    const DAY_TWO: &str = "---
tags:
  - JPStudy
---
# Vocabulary
- 犬 ー dog
# Grammar Points
〜ている
# Notes
ほかの話
";

    #[tokio::test]
    async fn test_collect_counts() -> Fallible<()> {
        let vault = create_tmp_vault(&[
            ("day-1.md", DAY_ONE),
            ("day-2.md", DAY_TWO),
            ("Japanese study template.md", DAY_ONE),
            ("untagged.md", "# Vocabulary\n- 猫 ー cat"),
        ])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let counts = collect_counts(&store, &Config::default()).await?;
        assert_eq!(counts.get(SectionName::Vocabulary), 2);
        assert_eq!(counts.get(SectionName::Idioms), 1);
        assert_eq!(counts.get(SectionName::Materials), 1);
        assert_eq!(counts.get(SectionName::GrammarPoints), 1);
        assert_eq!(
            render_text(&counts),
            "Vocabulary: 2\nIdioms: 1\nMaterials: 1\nGrammar points: 1\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_json_output() -> Fallible<()> {
        let vault = create_tmp_vault(&[("day-1.md", DAY_ONE), ("day-2.md", DAY_TWO)])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let counts = collect_counts(&store, &Config::default()).await?;
        let value: Value = serde_json::from_str(&render_json(&counts)?)?;
        assert_eq!(
            value,
            json!({
                "vocabulary": 2,
                "idioms": 1,
                "materials": 1,
                "grammar_points": 1
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_custom_tag() -> Fallible<()> {
        let vault = create_tmp_vault(&[("day-1.md", DAY_ONE)])?;
        let store = FsVault::new(vault.path().to_path_buf());
        let config = Config {
            tag: "Korean".to_string(),
            ..Config::default()
        };
        let counts = collect_counts(&store, &config).await?;
        assert_eq!(counts.total(), 0);
        Ok(())
    }
}
