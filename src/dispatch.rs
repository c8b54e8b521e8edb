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

use futures::future::join_all;
use jpstudy_core::batch::partition;
use jpstudy_core::types::card::Card;

use crate::anki::FlashcardService;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub batches: usize,
    pub added: usize,
    pub failed: usize,
}

/// Send cards to the service in batches of at most `batch_size`. The calls in
/// a batch run together; a batch starts only once the previous one has
/// settled. Failures are logged and don't stop the run.
pub async fn dispatch(
    service: &impl FlashcardService,
    cards: &[Card],
    batch_size: usize,
) -> DispatchReport {
    let mut report = DispatchReport::default();
    let batches = partition(cards, batch_size);
    let total = batches.len();
    for (idx, batch) in batches.into_iter().enumerate() {
        log::debug!("Sending batch {}/{total} ({} cards)", idx + 1, batch.len());
        let results = join_all(batch.iter().map(|card| service.add_note(card))).await;
        for (card, result) in batch.iter().zip(results) {
            match result {
                Ok(()) => report.added += 1,
                Err(e) => {
                    log::error!(
                        "Failed to add '{}' from {}: {e}",
                        card.front(),
                        card.file_path().display()
                    );
                    report.failed += 1;
                }
            }
        }
        report.batches += 1;
    }
    report
}
