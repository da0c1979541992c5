use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handle to a background timer task.
///
/// The task stops when [`ScheduledTask::cancel`] is called or the handle is
/// dropped, so a timer never outlives its owner.
pub struct ScheduledTask {
    name: &'static str,
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn spawn<F>(name: &'static str, fut: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let handle = tokio::spawn(async move {
            debug!("Task '{}' started", name);
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Task '{}' cancelled", name);
                }
                _ = fut => {
                    debug!("Task '{}' finished", name);
                }
            }
        });

        Self {
            name,
            cancel_token,
            handle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Signal the task to stop. It exits at its next await point.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
