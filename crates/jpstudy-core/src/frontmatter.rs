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

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::aliases::Tag;

/// The frontmatter keys we care about.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    tags: Option<Tags>,
}

/// Tags can be written as a YAML list or as a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Tags {
    Many(Vec<String>),
    One(String),
}

/// Extract the YAML frontmatter block from markdown text, if the text starts
/// with one.
fn extract_frontmatter(text: &str) -> Fallible<Option<String>> {
    let mut lines = text.lines();
    match lines.next() {
        Some(line) if line.trim() == "---" => {}
        _ => return Ok(None),
    }
    let mut frontmatter_lines = Vec::new();
    for line in lines {
        if line.trim() == "---" {
            return Ok(Some(frontmatter_lines.join("\n")));
        }
        frontmatter_lines.push(line);
    }
    Err(ErrorReport::new(
        "Frontmatter opening '---' found but no closing '---'",
    ))
}

/// The tags declared in a document's frontmatter. A leading `#` is dropped so
/// that `#JPStudy` and `JPStudy` are the same tag.
pub fn document_tags(text: &str) -> Fallible<Vec<Tag>> {
    let Some(yaml) = extract_frontmatter(text)? else {
        return Ok(Vec::new());
    };
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let frontmatter: Frontmatter = serde_yaml::from_str(&yaml)?;
    let tags = match frontmatter.tags {
        None => Vec::new(),
        Some(Tags::Many(tags)) => tags,
        Some(Tags::One(tags)) => tags
            .split([',', ' '])
            .map(str::to_string)
            .collect(),
    };
    Ok(tags
        .iter()
        .map(|tag| tag.trim().trim_start_matches('#'))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_list() -> Fallible<()> {
        let tags = document_tags("---\ntags: [JPStudy, daily]\n---\n# Vocabulary")?;
        assert_eq!(tags, vec!["JPStudy", "daily"]);
        Ok(())
    }

    #[test]
    fn test_block_list() -> Fallible<()> {
        let tags = document_tags("---\ndate: 2024-01-05\ntags:\n  - JPStudy\n  - '#n5'\n---\n")?;
        assert_eq!(tags, vec!["JPStudy", "n5"]);
        Ok(())
    }

    #[test]
    fn test_single_string() -> Fallible<()> {
        let tags = document_tags("---\ntags: JPStudy, reading\n---\n")?;
        assert_eq!(tags, vec!["JPStudy", "reading"]);
        Ok(())
    }

    #[test]
    fn test_no_frontmatter() -> Fallible<()> {
        assert!(document_tags("# Vocabulary\n- 犬 ー dog")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_frontmatter() -> Fallible<()> {
        assert!(document_tags("---\n---\n")?.is_empty());
        assert!(document_tags("---\ntags:\n---\n")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let result = document_tags("---\ntags: [JPStudy]\n# Vocabulary");
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: Frontmatter opening '---' found but no closing '---'"
        );
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(document_tags("---\ntags: [JPStudy\n---\n").is_err());
    }
}
