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

use clap::Parser;
use jpstudy_core::error::Fallible;

use crate::cmd::check::check_collection;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::cmd::sync::SyncOptions;
use crate::cmd::sync::sync_collection;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Push the vocabulary of every study note to Anki.
    Sync {
        /// Path to the vault directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Only study notes with this tag. Default is JPStudy.
        #[arg(long)]
        tag: Option<String>,
        /// AnkiConnect URL. Default is http://localhost:8765.
        #[arg(long)]
        endpoint: Option<String>,
        /// Maximum number of notes sent per batch. Default is 500.
        #[arg(long)]
        batch_size: Option<usize>,
        /// Print the notes that would be sent instead of sending them.
        #[arg(long)]
        dry_run: bool,
    },
    /// Print how much has been studied, per section.
    Stats {
        /// Path to the vault directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Only study notes with this tag. Default is JPStudy.
        #[arg(long)]
        tag: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// List vocabulary lines that can't be turned into cards.
    Check {
        /// Path to the vault directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Only study notes with this tag. Default is JPStudy.
        #[arg(long)]
        tag: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Sync {
            directory,
            tag,
            endpoint,
            batch_size,
            dry_run,
        } => {
            let options = SyncOptions {
                directory,
                tag,
                endpoint,
                batch_size,
                dry_run,
            };
            sync_collection(options).await
        }
        Command::Stats {
            directory,
            tag,
            format,
        } => print_stats(directory, tag, format).await,
        Command::Check { directory, tag } => check_collection(directory, tag).await,
    }
}
