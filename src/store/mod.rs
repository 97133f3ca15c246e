//! In-memory task list with derived views and change notifications.
//!
//! [`TaskStore`] owns the ordered task collection. All operations are
//! synchronous; nothing here fails. Empty text and unknown ids degrade to
//! no-ops, which publish no [`StoreEvent`].
//!
//! Observers call [`TaskStore::subscribe`] and receive one event per
//! effective mutation over a `tokio::sync::broadcast` channel.

pub mod events;
mod samples;

use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::models::{Category, Filter, Priority, Stats, Task, TaskId};

pub use events::StoreEvent;

/// Buffered events per subscriber before older ones are dropped.
const EVENT_CAPACITY: usize = 64;

/// Ordered, id-unique collection of tasks.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            tasks: Vec::new(),
            next_id: 1,
            events,
        }
    }

    /// Construct a store holding the four starter tasks.
    #[must_use]
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        for (text, priority, category, completed) in samples::SAMPLE_TASKS {
            let id = store.allocate_id();
            let mut task = Task::new(id, text.to_owned(), priority, category);
            task.completed = completed;
            store.tasks.push(task);
        }
        debug!(count = store.tasks.len(), "seeded sample tasks");
        store
    }

    /// Register an observer for subsequent mutations.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Append a new pending task.
    ///
    /// The text is trimmed; if nothing remains the call is ignored and
    /// `None` is returned.
    pub fn add(&mut self, text: &str, priority: Priority, category: Category) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            trace!("ignoring add with empty text");
            return None;
        }

        let id = self.allocate_id();
        let task = Task::new(id, text.to_owned(), priority, category);
        self.tasks.push(task.clone());
        debug!(%id, %priority, %category, "task added");

        self.publish(StoreEvent::Added {
            task: task.clone(),
            stats: self.stats(),
        });
        Some(task)
    }

    /// Flip the completion flag of the task with `id`, if present.
    pub fn toggle(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            trace!(%id, "ignoring toggle of unknown task");
            return;
        };

        task.completed = !task.completed;
        let completed = task.completed;
        debug!(%id, completed, "task toggled");

        self.publish(StoreEvent::Toggled {
            id,
            completed,
            stats: self.stats(),
        });
    }

    /// Remove the task with `id`, if present. Remaining order is preserved.
    pub fn delete(&mut self, id: TaskId) {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            trace!(%id, "ignoring delete of unknown task");
            return;
        };

        self.tasks.remove(index);
        debug!(%id, remaining = self.tasks.len(), "task deleted");

        self.publish(StoreEvent::Deleted {
            id,
            stats: self.stats(),
        });
    }

    /// Counters recomputed from the current tasks.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::from_tasks(&self.tasks)
    }

    /// Tasks matching `filter`, in insertion order.
    #[must_use]
    pub fn filter(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    /// Every task, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    fn publish(&self, event: StoreEvent) {
        // No receivers is fine; nobody is rendering.
        let _ = self.events.send(event);
    }
}
