//! Parallel discovery of desktop files.
//!
//! Every root gets its own walker thread. Walkers parse what they find and
//! push admitted entries into one bounded channel, blocking while it is full.
//! The channel closes when the last walker drops its sender, so draining
//! [`Discovery::entries`] to the end means every root has been walked.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::entry::{self, DesktopEntry};
use crate::error::{Error, Result};


/// Capacity of the entry channel shared by all walkers.
pub const CHANNEL_CAPACITY: usize = 1;

/// Outcome of walking one root.
#[derive(Debug)]
pub struct RootReport {
    /// Root that was walked.
    pub root: PathBuf,
    /// Number of entries sent, or the error that stopped the walk.
    pub outcome: Result<usize>,
}

/// A discovery run in progress.
#[derive(Debug)]
pub struct Discovery {
    entries: async_channel::Receiver<DesktopEntry>,
    workers: Vec<(PathBuf, JoinHandle<Result<usize>>)>,
}

/// Start walking `roots`, one thread per root.
pub fn discover(roots: &[PathBuf]) -> Discovery {
    let (tx, rx) = async_channel::bounded(CHANNEL_CAPACITY);
    let workers = roots
        .iter()
        .map(|root| {
            let tx = tx.clone();
            let walk_root = root.clone();
            let handle = std::thread::spawn(move || walk(&walk_root, &tx));
            (root.clone(), handle)
        })
        .collect();
    // Only the walkers hold senders now.
    drop(tx);

    Discovery {
        entries: rx,
        workers,
    }
}

impl Discovery {
    /// Entries as they arrive; ends once every walker has finished.
    pub fn entries(&self) -> impl Iterator<Item = DesktopEntry> + '_ {
        std::iter::from_fn(move || self.entries.recv_blocking().ok())
    }

    /// Whether every walker has finished and all entries were consumed.
    pub fn is_closed(&self) -> bool {
        self.entries.is_closed() && self.entries.is_empty()
    }

    /// Wait for all walkers and collect their reports, in root order.
    ///
    /// Entries not yet consumed are discarded, which also unblocks any
    /// walker still waiting on a full channel.
    pub fn finish(self) -> Vec<RootReport> {
        self.entries.close();
        self.workers
            .into_iter()
            .map(|(root, handle)| {
                let outcome = handle.join().unwrap_or_else(|_| {
                    Err(Error::WorkerPanicked { root: root.clone() })
                });
                RootReport { root, outcome }
            })
            .collect()
    }
}

/// Check a set of reports against the failure policy.
///
/// With `keep_going` failed roots are logged and skipped; otherwise the
/// first failure is returned.
pub fn check_reports(reports: Vec<RootReport>, keep_going: bool) -> Result<usize> {
    let mut total = 0;
    for report in reports {
        match report.outcome {
            Ok(n) => {
                debug!(root = %report.root.display(), entries = n, "root walked");
                total += n;
            }
            Err(e) if keep_going => warn!("{e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

fn walk(root: &Path, tx: &async_channel::Sender<DesktopEntry>) -> Result<usize> {
    let mut sent = 0;
    for item in WalkDir::new(root) {
        let item = match item {
            Ok(item) => item,
            Err(e) if e.depth() == 0 && is_not_found(&e) => {
                debug!(root = %root.display(), "root does not exist, skipping");
                break;
            }
            Err(source) => {
                return Err(Error::Walk {
                    root: root.to_path_buf(),
                    source,
                })
            }
        };
        if item.file_type().is_dir() || !has_desktop_extension(item.path()) {
            continue;
        }
        let Some(entry) = entry::load(item.path())? else {
            continue;
        };
        if tx.send_blocking(entry).is_err() {
            // Receiver gone; nobody wants the rest.
            break;
        }
        sent += 1;
    }
    Ok(sent)
}

fn has_desktop_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == entry::EXTENSION)
}

fn is_not_found(e: &walkdir::Error) -> bool {
    e.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound)
}
