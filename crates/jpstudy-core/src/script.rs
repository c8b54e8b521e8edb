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

/// Whether the character belongs to the scripts used in Japanese study notes.
///
/// The ranges are fixed: existing counts were produced with exactly these.
pub fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{303F}' // CJK symbols and punctuation
        | '\u{3040}'..='\u{309F}' // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana
        | '\u{FF00}'..='\u{FFEF}' // Halfwidth and fullwidth forms
        | '\u{4E00}'..='\u{9FAF}' // CJK unified ideographs
        | '\u{2605}'..='\u{2606}' // Stars
        | '\u{2190}'..='\u{2195}' // Arrows
        | '\u{203B}' // Reference mark
    )
}

pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}
