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

use jpstudy_core::deck::deck_name;
use jpstudy_core::error::Fallible;
use jpstudy_core::parser::scan_document;
use jpstudy_core::types::card::Card;

use crate::anki::FlashcardService;
use crate::anki::connect::AnkiConnect;
use crate::anki::connect::Note;
use crate::config::Config;
use crate::config::Overrides;
use crate::dispatch::DispatchReport;
use crate::dispatch::dispatch;
use crate::vault::DocumentStore;
use crate::vault::FsVault;
use crate::vault::resolve_directory;
use crate::vault::study_documents;

pub struct SyncOptions {
    pub directory: Option<String>,
    pub tag: Option<String>,
    pub endpoint: Option<String>,
    pub batch_size: Option<usize>,
    pub dry_run: bool,
}

pub async fn sync_collection(options: SyncOptions) -> Fallible<()> {
    let root = resolve_directory(options.directory)?;
    let overrides = Overrides {
        tag: options.tag,
        endpoint: options.endpoint,
        batch_size: options.batch_size,
    };
    let config = Config::load(&root, overrides)?;
    let vault = FsVault::new(root);
    let anki = AnkiConnect::new(&config);
    let cards = collect_cards(&vault, &config).await?;
    if options.dry_run {
        println!("{}", render_notes(&anki, &cards)?);
        return Ok(());
    }
    let report = push_cards(&anki, &cards, config.batch_size).await;
    log::info!(
        "Added {} of {} cards in {} batches.",
        report.added,
        cards.len(),
        report.batches
    );
    if report.failed > 0 {
        log::warn!("{} cards could not be added.", report.failed);
    }
    Ok(())
}

/// Extract the cards of every study document, in vault order. Malformed
/// vocabulary lines are skipped with a warning.
pub async fn collect_cards(store: &impl DocumentStore, config: &Config) -> Fallible<Vec<Card>> {
    let mut cards = Vec::new();
    for document in study_documents(store, &config.tag, &config.template).await? {
        let text = store.read_contents(&document).await?;
        let scan = scan_document(&text);
        for malformed in &scan.malformed {
            log::warn!(
                "Skipping {}:{}: {}",
                document.path.display(),
                malformed.line_num,
                malformed.error
            );
        }
        let deck = deck_name(&text, &config.default_deck);
        log::debug!(
            "{}: {} entries for deck '{deck}'",
            document.name,
            scan.entries.len()
        );
        cards.extend(
            scan.entries
                .into_iter()
                .map(|entry| Card::new(deck.clone(), document.path.clone(), entry)),
        );
    }
    Ok(cards)
}

/// The `addNote` payloads for the cards, as a JSON array.
pub fn render_notes(anki: &AnkiConnect, cards: &[Card]) -> Fallible<String> {
    let notes: Vec<Note> = cards.iter().map(|card| anki.note(card)).collect();
    Ok(serde_json::to_string_pretty(&notes)?)
}

/// Create every deck the cards go to, then send the cards.
pub async fn push_cards(
    service: &impl FlashcardService,
    cards: &[Card],
    batch_size: usize,
) -> DispatchReport {
    let mut decks: Vec<&str> = Vec::new();
    for card in cards {
        if !decks.contains(&card.deck_name()) {
            decks.push(card.deck_name());
        }
    }
    for deck in decks {
        match service.create_deck(deck).await {
            Ok(()) => log::debug!("Created deck '{deck}'"),
            Err(e) => log::error!("Failed to create deck '{deck}': {e}"),
        }
    }
    dispatch(service, cards, batch_size).await
}
