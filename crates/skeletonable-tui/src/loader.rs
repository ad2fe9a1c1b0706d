//! Simulated content fetch running on the tokio runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::demo::DemoContent;

/// Result of an async content load
#[derive(Debug)]
pub struct LoadResult {
    /// Load this result answers. Older generations are stale
    pub generation: u64,
    pub content: DemoContent,
}

/// Deliver the sample content over `tx` after `delay`
pub fn spawn_content_load(
    delay: Duration,
    generation: u64,
    tx: mpsc::UnboundedSender<LoadResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!(generation, "content load finished");
        // Receiver gone means the UI already quit
        let _ = tx.send(LoadResult {
            generation,
            content: DemoContent::sample(),
        });
    })
}
