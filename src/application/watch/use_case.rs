//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::session::{FormEvent, FormSession};
use crate::domain::entities::UnloadDecision;
use crate::domain::ports::PanelNodes;
use crate::domain::value_objects::ContentHash;
use crate::error::TallyResult;
use crate::infrastructure::FileFormSource;

use super::event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};

/// Watch Use Case
///
/// Every content change of the form file counts as a checkbox change: it
/// marks the session dirty and schedules a recompute.
/// This is the main entry point for the `tally watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> TallyResult<()>
    where
        F: Fn(WatchEvent),
    {
        let form = self.options.form.clone();
        on_event(WatchEvent::WatchStarted {
            form: form.display().to_string(),
        });

        let source = FileFormSource::new(&form, self.options.conventions.clone());
        let mut session = FormSession::new(
            source,
            PanelNodes::default(),
            self.options.recompute.clone(),
        )
        .with_delays(self.options.delays);

        let initial = session.load(Instant::now())?;
        on_event(WatchEvent::recomputed(&initial));

        let mut last_hash = read_hash(&form);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if matches!(event.kind, EventKind::Access(_)) {
                        return;
                    }
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )?;

        // Editors often replace the file instead of writing it in place.
        watcher.watch(&watch_root(&form), RecursiveMode::NonRecursive)?;

        while running.load(Ordering::SeqCst) {
            let wait = session
                .time_until_recompute(Instant::now())
                .map_or(Duration::from_millis(POLL_INTERVAL_MS), |left| {
                    left.min(Duration::from_millis(POLL_INTERVAL_MS))
                });

            if let Ok(path) = rx.recv_timeout(wait) {
                if is_form_path(&path, &form) {
                    let hash = read_hash(&form);
                    if hash.is_some() && hash != last_hash {
                        if let Some(hash) = &hash {
                            on_event(WatchEvent::FormChanged {
                                hash: hash.to_string(),
                            });
                        }
                        last_hash = hash;
                        session.dispatch(FormEvent::CheckboxChanged, Instant::now())?;
                    }
                }
            }

            match session.poll(Instant::now()) {
                Ok(Some(recomputed)) => on_event(WatchEvent::recomputed(&recomputed)),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "recompute failed");
                    on_event(WatchEvent::Error {
                        message: e.to_string(),
                    });
                }
            }
        }

        if session.guard().on_before_unload() == UnloadDecision::Prompt {
            on_event(WatchEvent::UnsavedChanges {
                message: session.recompute().labels().leave_prompt.clone(),
            });
        }
        on_event(WatchEvent::Shutdown {
            dirty: session.guard().is_dirty(),
        });
        Ok(())
    }
}

fn read_hash(path: &Path) -> Option<ContentHash> {
    std::fs::read_to_string(path)
        .ok()
        .map(|content| ContentHash::from_content(&content))
}

fn watch_root(form: &Path) -> PathBuf {
    match form.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_form_path(path: &Path, form: &Path) -> bool {
    path.file_name().is_some() && path.file_name() == form.file_name()
}
