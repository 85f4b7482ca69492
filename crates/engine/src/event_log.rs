//! JSONL event log.
//!
//! A background task appends each [`SessionEvent`] as one JSON line. Write
//! failures end the task; the session keeps running without a log.

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::session::SessionEvent;

/// Spawn the writer task for `path`. Must be called inside a tokio runtime.
///
/// The task drains everything queued and exits once the sender is dropped.
pub fn spawn_event_log(path: String) -> (mpsc::UnboundedSender<SessionEvent>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<SessionEvent>();

    let handle = tokio::spawn(async move {
        let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
            Ok(f) => f,
            Err(e) => {
                eprintln!("[EventLog] cannot open {}: {}", path, e);
                return;
            }
        };

        let mut buf: Vec<u8> = Vec::with_capacity(256);

        while let Some(event) = rx.recv().await {
            buf.clear();
            if let Err(e) = serde_json::to_writer(&mut buf, &event) {
                eprintln!("[EventLog] cannot encode {:?}: {}", event, e);
                continue;
            }
            buf.push(b'\n');
            if let Err(e) = file.write_all(&buf).await {
                eprintln!("[EventLog] write failed: {}", e);
                break;
            }
        }

        let _ = file.flush().await;
    });

    (tx, handle)
}
