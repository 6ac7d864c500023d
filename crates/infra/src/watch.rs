// crates/infra/src/watch.rs
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    time::{Duration, SystemTime},
};

use log::{debug, warn};
use text_metrics_shared_kernel::{InfrastructureError, Result};

#[cfg(feature = "watch")]
use {
    log::info,
    notify::{Event, RecommendedWatcher, RecursiveMode, Watcher, event::EventKind},
    std::{collections::BTreeSet, path::Path, sync::mpsc, time::Instant},
};

#[cfg(feature = "watch")]
type EventReceiver = mpsc::Receiver<std::result::Result<Event, notify::Error>>;

pub struct WatchService;

impl WatchService {
    /// Call `on_change` whenever one of `paths` changes.
    ///
    /// Native notifications are preferred; when the watcher cannot be created the
    /// service falls back to polling modification times every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if `paths` is empty or `on_change` fails.
    pub fn run<F>(paths: &[PathBuf], interval: Duration, mut on_change: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        if paths.is_empty() {
            return Err(InfrastructureError::WatchError {
                path: PathBuf::new(),
                details: "no files to watch".to_string(),
            }
            .into());
        }
        Self::run_native(paths, interval, &mut on_change)
    }

    #[cfg(feature = "watch")]
    fn run_native<F>(paths: &[PathBuf], interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let targets: Vec<PathBuf> = paths.iter().map(|p| normalize(p)).collect();
        match Self::create_watcher(&targets) {
            Ok((watcher, rx)) => {
                info!("watching {} file(s)", targets.len());
                // Keep `watcher` alive while the loop runs.
                let _keep = watcher;
                Self::event_loop(&rx, &targets, interval, on_change)
            }
            Err(err) => {
                warn!("file watcher unavailable ({err}). Falling back to polling every {interval:?}.");
                Self::poll_loop(paths, interval, on_change)
            }
        }
    }

    #[cfg(not(feature = "watch"))]
    fn run_native<F>(paths: &[PathBuf], interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        warn!("built without native file notifications; polling every {interval:?}");
        Self::poll_loop(paths, interval, on_change)
    }

    /// Watch parent directories so editors that replace files by rename are still seen.
    #[cfg(feature = "watch")]
    fn create_watcher(targets: &[PathBuf]) -> std::result::Result<(RecommendedWatcher, EventReceiver), InfrastructureError> {
        let (tx, rx) = mpsc::channel();
        let mut watcher: RecommendedWatcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .map_err(|err| InfrastructureError::WatchError { path: PathBuf::new(), details: err.to_string() })?;

        let dirs: BTreeSet<PathBuf> = targets.iter().map(|t| watch_dir(t)).collect();
        for dir in dirs {
            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .map_err(|err| InfrastructureError::WatchError { path: dir.clone(), details: err.to_string() })?;
        }

        Ok((watcher, rx))
    }

    #[cfg(feature = "watch")]
    fn event_loop<F>(rx: &EventReceiver, targets: &[PathBuf], interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let mut pending: Option<Instant> = None;

        loop {
            let received = match pending {
                Some(start) => {
                    let remaining = interval.saturating_sub(start.elapsed());
                    if remaining.is_zero() {
                        Err(mpsc::RecvTimeoutError::Timeout)
                    } else {
                        rx.recv_timeout(remaining)
                    }
                }
                None => rx.recv().map_err(|_| mpsc::RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(Ok(event)) => {
                    if is_relevant(&event, targets) {
                        debug!("change detected: {:?}", event.paths);
                        pending = Some(Instant::now());
                    }
                }
                Ok(Err(err)) => warn!("watcher error: {err}"),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    pending = None;
                    on_change()?;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    warn!("watcher disconnected; falling back to polling");
                    return Self::poll_loop(targets, interval, on_change);
                }
            }
        }
    }

    fn poll_loop<F>(paths: &[PathBuf], interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let mut snapshot = ModifiedTimes::capture(paths);
        loop {
            std::thread::sleep(interval);
            let current = ModifiedTimes::capture(paths);
            if current != snapshot {
                debug!("modification time changed");
                snapshot = current;
                on_change()?;
            }
        }
    }
}

/// Last-modified time per watched path (`None` when the file is missing).
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModifiedTimes(HashMap<PathBuf, Option<SystemTime>>);

impl ModifiedTimes {
    fn capture(paths: &[PathBuf]) -> Self {
        Self(
            paths
                .iter()
                .map(|p| (p.clone(), fs::metadata(p).and_then(|m| m.modified()).ok()))
                .collect(),
        )
    }
}

#[cfg(feature = "watch")]
fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(feature = "watch")]
fn watch_dir(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(feature = "watch")]
fn is_relevant(event: &Event, targets: &[PathBuf]) -> bool {
    let kind = matches!(
        event.kind,
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Other
    );
    kind && event.paths.iter().any(|p| targets.iter().any(|t| t == p || t == &normalize(p)))
}
