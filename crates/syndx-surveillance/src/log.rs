//! The shared case log.
//!
//! Appends are serialized behind one lock so insertion order matches the
//! order cases were recorded. With a backing file, each record is written
//! as one JSON line and flushed before it becomes visible to readers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use syndx_core::models::case::{CaseDraft, CaseRecord};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::SurveillanceError;
use crate::history::CaseHistory;

/// Append-only JSON Lines file backing a [`CaseLog`].
///
/// The file is reopened for every append, so a store that disappears fails
/// the next case.
#[derive(Debug)]
pub struct CaseStore {
    path: PathBuf,
}

impl CaseStore {
    /// Open (creating the parent directory if needed) the file at `path`
    /// and replay its records.
    ///
    /// A final line cut short by an interrupted write is dropped and the
    /// file is truncated back to the last complete record. A malformed
    /// line anywhere else is a [`SurveillanceError::CorruptLog`].
    pub async fn open(path: &Path) -> Result<(Self, Vec<CaseRecord>), SurveillanceError> {
        let io_err = |source: std::io::Error| SurveillanceError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(io_err(e)),
        };

        let replay = replay(&contents)?;
        match replay.tail {
            Tail::Clean => {}
            Tail::Torn { keep } => {
                warn!(
                    path = %path.display(),
                    dropped_bytes = contents.len() - keep,
                    "dropping incomplete final case log line"
                );
                let file = OpenOptions::new()
                    .write(true)
                    .open(path)
                    .await
                    .map_err(io_err)?;
                file.set_len(keep as u64).await.map_err(io_err)?;
            }
            Tail::Unterminated => {
                let mut file = OpenOptions::new()
                    .append(true)
                    .open(path)
                    .await
                    .map_err(io_err)?;
                write_line(&mut file, b"\n").await.map_err(io_err)?;
            }
        }

        Ok((
            Self {
                path: path.to_path_buf(),
            },
            replay.records,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one record as a JSON line. On failure the file is cut back to
    /// its previous length so no partial line is left behind.
    async fn append(&self, record: &CaseRecord) -> Result<(), SurveillanceError> {
        let io_err = |source: std::io::Error| SurveillanceError::Io {
            path: self.path.clone(),
            source,
        };

        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(io_err)?;
        let len = file.metadata().await.map_err(io_err)?.len();

        if let Err(source) = write_line(&mut file, &line).await {
            if let Err(e) = file.set_len(len).await {
                warn!(path = %self.path.display(), error = %e, "could not roll back partial case log write");
            }
            return Err(io_err(source));
        }
        Ok(())
    }
}

async fn write_line(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

/// State of the last line of a replayed log.
#[derive(Debug, PartialEq, Eq)]
enum Tail {
    Clean,
    /// The final line has no newline and does not parse. `keep` is the
    /// byte length of everything before it.
    Torn { keep: usize },
    /// The final line parses but has no trailing newline.
    Unterminated,
}

struct Replay {
    records: Vec<CaseRecord>,
    tail: Tail,
}

fn replay(contents: &str) -> Result<Replay, SurveillanceError> {
    let mut records = Vec::new();
    let mut tail = Tail::Clean;
    let mut offset = 0;

    for (idx, chunk) in contents.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += chunk.len();

        let line = chunk.trim();
        if line.is_empty() {
            continue;
        }
        let terminated = chunk.ends_with('\n');

        match serde_json::from_str(line) {
            Ok(record) => {
                records.push(record);
                if !terminated {
                    tail = Tail::Unterminated;
                }
            }
            Err(_) if !terminated => tail = Tail::Torn { keep: start },
            Err(source) => {
                return Err(SurveillanceError::CorruptLog {
                    line: idx + 1,
                    source,
                });
            }
        }
    }

    Ok(Replay { records, tail })
}

#[derive(Debug)]
struct Inner {
    history: CaseHistory,
    store: Option<CaseStore>,
}

/// Shared, cloneable handle to the case history.
#[derive(Debug, Clone)]
pub struct CaseLog {
    inner: Arc<Mutex<Inner>>,
}

impl CaseLog {
    /// A log that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::from_parts(CaseHistory::new(), None)
    }

    /// Open a file-backed log, replaying existing records.
    pub async fn open(path: &Path) -> Result<Self, SurveillanceError> {
        let (store, records) = CaseStore::open(path).await?;
        info!(path = %path.display(), cases = records.len(), "case log opened");
        Ok(Self::from_parts(CaseHistory::from_records(records), Some(store)))
    }

    fn from_parts(history: CaseHistory, store: Option<CaseStore>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { history, store })),
        }
    }

    /// Assign an id and timestamp to a draft, persist it, then make it
    /// visible. On a write failure nothing is appended.
    pub async fn record(&self, draft: CaseDraft) -> Result<CaseRecord, SurveillanceError> {
        let mut inner = self.inner.lock().await;
        let case_id = inner.history.next_case_id();
        let record = draft.into_record(case_id, jiff::Timestamp::now());

        if let Some(store) = inner.store.as_ref() {
            store.append(&record).await?;
        }
        inner.history.append(record.clone());

        info!(
            case_id,
            triage = %record.triage,
            triage_score = record.triage_score,
            "case logged"
        );
        Ok(record)
    }

    /// A point-in-time copy of the history.
    pub async fn snapshot(&self) -> CaseHistory {
        self.inner.lock().await.history.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.history.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
