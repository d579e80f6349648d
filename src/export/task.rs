//! Background export task
//!
//! Archive assembly and the final file write happen off the UI thread. The
//! task reports exactly one outcome (completed, cancelled, or failed) over a
//! channel that the UI polls each frame, so a failed export surfaces as a
//! visible error instead of vanishing into a dead thread.

use crate::error::Error;
use crate::export::archive::{build_bundle, BundleContents};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

// ─────────────────────────────────────────────────────────────────────────────
// Request and Outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the worker thread needs: a contents snapshot and a destination.
#[derive(Debug)]
pub struct ExportRequest {
    /// Where the archive file should be written
    pub destination: PathBuf,
    /// Snapshot of the bundle contents
    pub contents: BundleContents,
}

/// Terminal state of an export task.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Archive written successfully
    Completed {
        path: PathBuf,
        entries: usize,
        bytes_written: u64,
    },
    /// Task observed the cancel flag before writing anything durable
    Cancelled,
    /// Assembly or the file write failed
    Failed(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Task
// ─────────────────────────────────────────────────────────────────────────────

/// Handle to a running (or finished) export.
///
/// Poll with [`ExportTask::poll`] from the update loop; the outcome arrives
/// exactly once.
pub struct ExportTask {
    receiver: Receiver<ExportOutcome>,
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ExportTask {
    /// Spawn the export worker thread.
    pub fn spawn(request: ExportRequest) -> Self {
        let (sender, receiver) = channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = Arc::clone(&cancel);

        let handle = std::thread::spawn(move || {
            run_export(request, &worker_cancel, &sender);
        });

        Self {
            receiver,
            cancel,
            handle: Some(handle),
        }
    }

    /// Poll for the outcome without blocking.
    ///
    /// Returns `Some` exactly once, when the worker has finished.
    pub fn poll(&mut self) -> Option<ExportOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                if let Some(handle) = self.handle.take() {
                    let _ = handle.join();
                }
                Some(outcome)
            }
            Err(_) => None,
        }
    }

    /// Request cancellation.
    ///
    /// Best effort: the worker checks the flag between assembly and the file
    /// write, so a cancel that arrives too late still completes the export.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Worker
// ─────────────────────────────────────────────────────────────────────────────

fn run_export(request: ExportRequest, cancel: &AtomicBool, sender: &Sender<ExportOutcome>) {
    let outcome = export_once(&request, cancel);
    match &outcome {
        ExportOutcome::Completed {
            path,
            entries,
            bytes_written,
        } => info!(
            "Exported {} entries ({} bytes) to {}",
            entries,
            bytes_written,
            path.display()
        ),
        ExportOutcome::Cancelled => info!("Export cancelled"),
        ExportOutcome::Failed(msg) => warn!("Export failed: {}", msg),
    }
    // The UI may have been torn down; a dead receiver is not an error
    let _ = sender.send(outcome);
}

fn export_once(request: &ExportRequest, cancel: &AtomicBool) -> ExportOutcome {
    if cancel.load(Ordering::Relaxed) {
        return ExportOutcome::Cancelled;
    }

    let bytes = match build_bundle(&request.contents) {
        Ok(bytes) => bytes,
        Err(err) => return ExportOutcome::Failed(err.to_string()),
    };

    if cancel.load(Ordering::Relaxed) {
        return ExportOutcome::Cancelled;
    }

    let bytes_written = bytes.len() as u64;
    if let Err(err) = std::fs::write(&request.destination, &bytes) {
        return ExportOutcome::Failed(
            Error::FileWrite {
                path: request.destination.clone(),
                source: err,
            }
            .to_string(),
        );
    }

    ExportOutcome::Completed {
        path: request.destination.clone(),
        entries: request.contents.entry_count(),
        bytes_written,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::archive::BundleFile;
    use std::time::{Duration, Instant};

    fn sample_request(destination: PathBuf) -> ExportRequest {
        ExportRequest {
            destination,
            contents: BundleContents {
                document: "---\n---\n\n<p>hi</p>".to_string(),
                featured: BundleFile {
                    name: "hero.png".to_string(),
                    bytes: vec![1, 2, 3],
                },
                images: vec![BundleFile {
                    name: "cat.png".to_string(),
                    bytes: vec![4],
                }],
            },
        }
    }

    fn wait_for_outcome(task: &mut ExportTask) -> ExportOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = task.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "export task never finished");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_export_writes_archive_to_destination() {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("my-post.zip");
        let mut task = ExportTask::spawn(sample_request(dest.clone()));

        match wait_for_outcome(&mut task) {
            ExportOutcome::Completed {
                path,
                entries,
                bytes_written,
            } => {
                assert_eq!(path, dest);
                assert_eq!(entries, 3);
                assert_eq!(bytes_written, std::fs::metadata(&dest).unwrap().len());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        // The written file is a readable archive
        let file = std::fs::File::open(&dest).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 3);
    }

    #[test]
    fn test_export_failure_is_reported_not_swallowed() {
        let dest = PathBuf::from("/nonexistent-dir/deeper/post.zip");
        let mut task = ExportTask::spawn(sample_request(dest));

        match wait_for_outcome(&mut task) {
            ExportOutcome::Failed(msg) => assert!(msg.contains("Failed to write")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_cancelled_export_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("cancelled.zip");
        let request = sample_request(dest.clone());

        let cancel = AtomicBool::new(true);
        let outcome = export_once(&request, &cancel);

        assert!(matches!(outcome, ExportOutcome::Cancelled));
        assert!(!dest.exists());
    }

    #[test]
    fn test_poll_returns_outcome_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut task = ExportTask::spawn(sample_request(dir.path().join("p.zip")));

        wait_for_outcome(&mut task);
        assert!(task.poll().is_none());
    }
}
