use super::actions::Action;
use crate::backend::{EventPayload, EventsBackend, StatsFilter};
use crate::constants::{
    LOG_ERROR_DELETE_EVENT, LOG_ERROR_FETCH_BARS, LOG_ERROR_FETCH_CATEGORIES, LOG_ERROR_FETCH_EVENT,
    LOG_ERROR_FETCH_EVENTS, LOG_ERROR_FETCH_STATISTICS, LOG_ERROR_SUBMIT_EVENT,
};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// Mount generation of the view that issued a background task
pub type Generation = u64;

/// An action produced by a background task, tagged with the issuing view's generation
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundAction {
    pub generation: Generation,
    pub action: Action,
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Spawns backend calls on the runtime and reports their outcome as actions.
///
/// Failures are reported as [`Action::RequestFailed`] and never retried.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    generation: Generation,
    action_sender: mpsc::UnboundedSender<BackgroundAction>,
}

/// Sender handed to a spawned task, pinned to one generation
#[derive(Clone)]
struct Reporter {
    generation: Generation,
    sender: mpsc::UnboundedSender<BackgroundAction>,
}

impl Reporter {
    fn send(&self, action: Action) {
        // The receiver only disappears on shutdown
        let _ = self.sender.send(BackgroundAction {
            generation: self.generation,
            action,
        });
    }

    fn failed(&self, context: &str, error: impl std::fmt::Display) {
        self.send(Action::RequestFailed {
            context: context.to_string(),
            error: error.to_string(),
        });
    }
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BackgroundAction>) {
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

    /// Generation of the currently mounted view
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Start a new generation for a freshly mounted view. Tasks already in
    /// flight run to completion and report under their own generation.
    pub fn begin_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    fn reporter(&self) -> Reporter {
        Reporter {
            generation: self.generation,
            sender: self.action_sender.clone(),
        }
    }

    fn spawn<F, Fut>(&mut self, description: String, operation: F) -> TaskId
    where
        F: FnOnce(Reporter) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let handle = tokio::spawn(operation(self.reporter()));

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Fetch the full event collection
    pub fn spawn_events_load(&mut self, backend: Arc<dyn EventsBackend>) -> TaskId {
        self.spawn("Loading events".to_string(), move |reporter| async move {
            match backend.fetch_events().await {
                Ok(events) => reporter.send(Action::EventsLoaded(events)),
                Err(e) => reporter.failed(LOG_ERROR_FETCH_EVENTS, e),
            }
        })
    }

    /// Delete one event; success is reported only after the service confirms
    pub fn spawn_event_delete(&mut self, backend: Arc<dyn EventsBackend>, event_id: i64) -> TaskId {
        self.spawn(format!("Delete event {}", event_id), move |reporter| async move {
            match backend.delete_event(event_id).await {
                Ok(()) => reporter.send(Action::EventDeleted(event_id)),
                Err(e) => reporter.failed(LOG_ERROR_DELETE_EVENT, e),
            }
        })
    }

    /// Load bars, categories and (when editing) the event, joined before reporting
    pub fn spawn_form_load(&mut self, backend: Arc<dyn EventsBackend>, event_id: Option<i64>) -> TaskId {
        let description = match event_id {
            Some(id) => format!("Loading form data for event {}", id),
            None => "Loading form data".to_string(),
        };

        self.spawn(description, move |reporter| async move {
            let event_fetch = async {
                match event_id {
                    Some(id) => Some(backend.fetch_event(id).await),
                    None => None,
                }
            };

            let (bars, categories, event) =
                tokio::join!(backend.fetch_bars(), backend.fetch_categories(), event_fetch);

            let bars = bars.map_err(|e| reporter.failed(LOG_ERROR_FETCH_BARS, e)).ok();
            let categories = categories
                .map_err(|e| reporter.failed(LOG_ERROR_FETCH_CATEGORIES, e))
                .ok();
            let event = event.and_then(|result| result.map_err(|e| reporter.failed(LOG_ERROR_FETCH_EVENT, e)).ok());

            reporter.send(Action::FormDataLoaded {
                bars,
                categories,
                event,
            });
        })
    }

    /// Create (no id) or update (id) an event
    pub fn spawn_event_submit(
        &mut self,
        backend: Arc<dyn EventsBackend>,
        event_id: Option<i64>,
        payload: EventPayload,
    ) -> TaskId {
        let description = match event_id {
            Some(id) => format!("Update event {}", id),
            None => format!("Create event '{}'", payload.title),
        };

        self.spawn(description, move |reporter| async move {
            let result = match event_id {
                Some(id) => backend.update_event(id, &payload).await,
                None => backend.create_event(&payload).await,
            };

            match result {
                Ok(()) => reporter.send(Action::EventSaved),
                Err(e) => reporter.failed(LOG_ERROR_SUBMIT_EVENT, e),
            }
        })
    }

    /// Load bars and categories for the statistics filter selectors
    pub fn spawn_reference_load(&mut self, backend: Arc<dyn EventsBackend>) -> TaskId {
        self.spawn("Loading bars and categories".to_string(), move |reporter| async move {
            let (bars, categories) = tokio::join!(backend.fetch_bars(), backend.fetch_categories());

            let bars = bars.map_err(|e| reporter.failed(LOG_ERROR_FETCH_BARS, e)).ok();
            let categories = categories
                .map_err(|e| reporter.failed(LOG_ERROR_FETCH_CATEGORIES, e))
                .ok();

            reporter.send(Action::ReferenceDataLoaded { bars, categories });
        })
    }

    /// Fetch statistics, then the matching events. A failed statistics call
    /// skips the event fetch.
    pub fn spawn_statistics_fetch(&mut self, backend: Arc<dyn EventsBackend>, filter: StatsFilter) -> TaskId {
        self.spawn("Fetching event statistics".to_string(), move |reporter| async move {
            match backend.fetch_event_stats(&filter).await {
                Ok(stats) => reporter.send(Action::StatisticsLoaded(stats)),
                Err(e) => {
                    reporter.failed(LOG_ERROR_FETCH_STATISTICS, e);
                    return;
                }
            }

            match backend.fetch_filtered_events(&filter).await {
                Ok(events) => reporter.send(Action::FilteredEventsLoaded(events)),
                Err(e) => reporter.failed(LOG_ERROR_FETCH_STATISTICS, e),
            }
        })
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Descriptions of running tasks, oldest first
    pub fn running_task_descriptions(&self) -> Vec<String> {
        let mut running: Vec<&BackgroundTask> = self.tasks.values().collect();
        running.sort_by_key(|task| task.started_at);
        running.iter().map(|task| task.description.clone()).collect()
    }

    /// Cancel all running tasks
    fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
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
