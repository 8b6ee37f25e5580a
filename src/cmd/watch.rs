use super::build;
use crate::config::Config;
use crate::error::{Error, Result};
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::sync::mpsc;
use std::time::Duration;

/// Builds once, then rebuilds on every debounced change under the watched
/// paths. Runs until the watcher shuts down.
pub fn watch(config: &Config) -> Result<()> {
    build(config)?;

    let (tx, rx) = mpsc::channel();
    let timeout = Duration::from_millis(config.watch.debounce_ms);
    let tick_rate = None;

    let mut debouncer = new_debouncer(timeout, tick_rate, move |res: DebounceEventResult| {
        tx.send(res).unwrap_or_default();
    })
    .map_err(Error::Notify)?;

    for path in config.watch_paths() {
        debouncer
            .watcher()
            .watch(path.as_path(), RecursiveMode::Recursive)
            .map_err(Error::Notify)?;
        log::info!("watching {}", path.display());
    }

    for res in rx {
        match res {
            Ok(events) => {
                if let Some(event) = events.first() {
                    log::info!("change: {}", event.path.display());
                }

                if let Err(error) = build(config) {
                    log::error!("{}", error);
                }
            }
            Err(errors) => {
                for error in errors {
                    log::warn!("watch error: {:?}", error);
                }
            }
        }
    }

    Ok(())
}
