//! Background worker draining the automation task queue.

use tokio::sync::mpsc;

use crate::domain::task_event::AutomationTask;

/// Drains the automation queue until every sender is dropped.
///
/// Task execution itself is delegated work; here each task is acknowledged
/// and logged. A task that cannot be handled is logged and skipped so one bad
/// task never stalls the queue.
pub async fn run_task_worker(mut rx: mpsc::Receiver<AutomationTask>) {
    while let Some(task) = rx.recv().await {
        tracing::info!(task_id = %task.id, task_type = %task.task_type, "processing automation task");
    }

    tracing::info!("automation task queue closed, worker stopping");
}
