// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Context;
use badger::semantic::{EntryKind, Recognition};
use badger::{args, config, events, output, semantic};
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

/// Driver function of the application.
fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    log::info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let arguments = args::Arguments::try_from(args::cli().get_matches())?;
    log::debug!("{arguments:?}");
    let configuration = config::Loader::load(&arguments.config)?;
    log::debug!("{configuration:?}");

    let file = File::open(&arguments.input.file_name)
        .with_context(|| format!("failed to open the event file {}", arguments.input.file_name))?;
    let events = events::read(BufReader::new(file))?;
    log::info!("loaded {} events from {}", events.len(), arguments.input.file_name);

    let registry = semantic::tools::create(&configuration);
    let mut entries = Vec::new();
    for event in events {
        match registry.recognize(&event.execution) {
            Recognition::Recognized(recognized) => {
                for entry in recognized {
                    if entry.kind == EntryKind::Preprocess
                        && !configuration.output.include_preprocess
                    {
                        log::debug!("preprocess entry excluded: {}", entry.file.display());
                        continue;
                    }
                    entries.push(output::from_semantic(&entry, &configuration.output.format));
                }
            }
            Recognition::QueryOnly | Recognition::NotApplicable => {
                log::debug!("event dropped: {}", event.execution);
            }
            Recognition::Error(error) => {
                log::warn!("event dropped (pid {}): {}", event.pid, error);
            }
        }
    }

    let writer = output::DatabaseWriter::new(
        arguments.output.file_name.clone().into(),
        arguments.output.append,
    );
    let count = writer.write(entries)?;
    log::info!("wrote {} entries to {}", count, arguments.output.file_name);

    Ok(ExitCode::SUCCESS)
}
