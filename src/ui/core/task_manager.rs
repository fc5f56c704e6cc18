use super::actions::Action;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// Bumped by [`TaskManager::reset`]; results tagged with an older value are stale.
pub type Generation = u64;

#[derive(Debug)]
struct BackgroundTask {
    handle: JoinHandle<()>,
    description: String,
    started_at: Instant,
}

/// A background operation that ran to completion (or was aborted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedTask {
    pub id: TaskId,
    pub description: String,
    pub elapsed: Duration,
}

/// Runs API calls and dialog round-trips off the UI loop.
///
/// Each operation resolves to an [`Action`], which is delivered on the
/// channel returned by [`TaskManager::new`] together with the generation the
/// operation was started in.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    generation: Generation,
    action_sender: mpsc::UnboundedSender<(Generation, Action)>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(Generation, Action)>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                generation: 0,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn an operation whose outcome is sent back as an action.
    /// `Action::None` outcomes are dropped.
    pub fn spawn_operation<Fut>(&mut self, description: impl Into<String>, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let description = description.into();
        log::debug!("Starting background operation #{}: {}", task_id, description);

        let action_sender = self.action_sender.clone();
        let generation = self.generation;
        let handle = tokio::spawn(async move {
            let action = operation.await;
            if action != Action::None {
                let _ = action_sender.send((generation, action));
            }
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished operations and report them.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<FinishedTask> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| {
                self.tasks.remove(&id).map(|task| FinishedTask {
                    id,
                    description: task.description,
                    elapsed: task.started_at.elapsed(),
                })
            })
            .collect()
    }

    /// Check if any operation is still running
    pub fn is_busy(&self) -> bool {
        self.tasks.values().any(|task| !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Cancel everything and start a new generation. Results already in the
    /// channel are recognisable as stale through [`Self::is_current`].
    pub fn reset(&mut self) {
        self.cancel_all_tasks();
        self.generation += 1;
        log::debug!("Background operations reset, generation {}", self.generation);
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Get the number of tracked tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn outcomes_are_delivered_and_none_is_dropped() {
        let (mut manager, mut rx) = TaskManager::new();
        manager.spawn_operation("silent", async { Action::None });
        let id = manager.spawn_operation("status", async { Action::SetStatus("done".to_string()) });

        assert_eq!(rx.recv().await, Some((0, Action::SetStatus("done".to_string()))));

        while manager.is_busy() {
            tokio::task::yield_now().await;
        }
        let mut finished = manager.cleanup_finished_tasks();
        finished.sort_by_key(|task| task.id);
        assert_eq!(finished.len(), 2);
        assert_eq!(finished[1].id, id);
        assert_eq!(finished[1].description, "status");
        assert_eq!(manager.task_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancel_aborts_pending_operations() {
        let (mut manager, mut rx) = TaskManager::new();
        manager.spawn_operation("forever", std::future::pending::<Action>());
        assert!(manager.is_busy());

        manager.cancel_all_tasks();
        assert_eq!(manager.task_count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn results_from_before_a_reset_are_stale() {
        let (mut manager, mut rx) = TaskManager::new();
        manager.spawn_operation("old", async { Action::LoadProjects });
        while manager.is_busy() {
            tokio::task::yield_now().await;
        }

        manager.reset();
        let (generation, action) = rx.recv().await.unwrap();
        assert_eq!(action, Action::LoadProjects);
        assert!(!manager.is_current(generation));

        manager.spawn_operation("new", async { Action::LoadProjects });
        let (generation, _) = rx.recv().await.unwrap();
        assert!(manager.is_current(generation));
    }
}
