//! JSONL file writer for activity events.
//!
//! Each [`ActivityEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use photofeed_application::{ActivityEvent, ActivityLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL activity logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file.
pub struct JsonlActivityLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlActivityLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create activity log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open activity log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityLogger for JsonlActivityLogger {
    fn log(&self, event: ActivityEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlActivityLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
