//! In-memory repository implementation.
//!
//! [`InMemoryStore`] keeps one ordered map per entity type plus a counter
//! per map for id generation. Both maps sit behind a single
//! `Arc<RwLock<...>>`, so a task and the context it is joined with are
//! always read from the same snapshot.
//!
//! # Features
//!
//! - Ids start at 1, increase strictly, and are never reused
//! - Listing follows id order, which is creation order
//! - All operations return boxed futures for use behind `dyn` traits

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::domain::{
    Context, ContextId, NewContext, NewTask, Task, TaskId, TaskPatch, TaskWithContext,
    default_contexts,
};
use crate::infrastructure::{
    ContextCreation, ContextRepository, RepositoryError, TaskRepository,
};

// =============================================================================
// Store State
// =============================================================================

#[derive(Debug)]
struct StoreState {
    contexts: BTreeMap<ContextId, Context>,
    tasks: BTreeMap<TaskId, Task>,
    next_context_id: u64,
    next_task_id: u64,
}

impl StoreState {
    const fn new() -> Self {
        Self {
            contexts: BTreeMap::new(),
            tasks: BTreeMap::new(),
            next_context_id: 1,
            next_task_id: 1,
        }
    }

    fn allocate_context_id(&mut self) -> Result<ContextId, RepositoryError> {
        let id = self.next_context_id;
        self.next_context_id = id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("context id space exhausted".to_string()))?;
        Ok(ContextId::new(id))
    }

    fn allocate_task_id(&mut self) -> Result<TaskId, RepositoryError> {
        let id = self.next_task_id;
        self.next_task_id = id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("task id space exhausted".to_string()))?;
        Ok(TaskId::new(id))
    }

    fn insert_context(&mut self, context: NewContext) -> Result<Context, RepositoryError> {
        let id = self.allocate_context_id()?;
        let context = context.into_context(id);
        self.contexts.insert(id, context.clone());
        Ok(context)
    }

    fn context_named(&self, name: &str) -> Option<&Context> {
        self.contexts.values().find(|context| context.has_name(name))
    }

    /// Joins a task with its context; dangling ids resolve to `None`.
    fn resolve(&self, task: Task) -> TaskWithContext {
        let context = task
            .context_id
            .and_then(|id| self.contexts.get(&id))
            .cloned();
        task.with_context(context)
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory implementation of [`ContextRepository`] and [`TaskRepository`].
///
/// Cloning is cheap and every clone shares the same data, so one instance
/// can back both traits in the application state.
///
/// # Example
///
/// ```ignore
/// use context_tasks::domain::NewTask;
/// use context_tasks::infrastructure::{InMemoryStore, TaskRepository};
///
/// let store = InMemoryStore::new();
/// let created = TaskRepository::create(&store, NewTask::new("Buy milk", "2% milk")).await?;
/// let found = TaskRepository::find_by_id(&store, created.task.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::new())),
        }
    }

    /// Creates a store pre-populated with `contexts`, in order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the id space is exhausted.
    pub fn seeded<I>(contexts: I) -> Result<Self, RepositoryError>
    where
        I: IntoIterator<Item = NewContext>,
    {
        let mut state = StoreState::new();
        for context in contexts {
            state.insert_context(context)?;
        }
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Creates a store holding the four default contexts (ids 1 to 4).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the id space is exhausted.
    pub fn with_default_contexts() -> Result<Self, RepositoryError> {
        Self::seeded(default_contexts())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::significant_drop_tightening)]
impl ContextRepository for InMemoryStore {
    fn create(&self, context: NewContext) -> BoxFuture<'static, Result<Context, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            guard.insert_context(context)
        }
        .boxed()
    }

    fn list(&self) -> BoxFuture<'static, Result<Vec<Context>, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            Ok(guard.contexts.values().cloned().collect())
        }
        .boxed()
    }

    fn find_by_id(
        &self,
        id: ContextId,
    ) -> BoxFuture<'static, Result<Option<Context>, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            Ok(guard.contexts.get(&id).cloned())
        }
        .boxed()
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> BoxFuture<'static, Result<Option<Context>, RepositoryError>> {
        let state = Arc::clone(&self.state);
        let name = name.to_owned();
        async move {
            let guard = state.read().await;
            Ok(guard.context_named(&name).cloned())
        }
        .boxed()
    }

    fn find_or_create(
        &self,
        context: NewContext,
    ) -> BoxFuture<'static, Result<ContextCreation, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;

            if let Some(existing) = guard.context_named(&context.name) {
                return Ok(ContextCreation {
                    context: existing.clone(),
                    created: false,
                });
            }

            let context = guard.insert_context(context)?;
            Ok(ContextCreation {
                context,
                created: true,
            })
        }
        .boxed()
    }
}

#[allow(clippy::significant_drop_tightening)]
impl TaskRepository for InMemoryStore {
    fn create(&self, task: NewTask) -> BoxFuture<'static, Result<TaskWithContext, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            let id = guard.allocate_task_id()?;
            let task = task.into_task(id);
            guard.tasks.insert(id, task.clone());
            Ok(guard.resolve(task))
        }
        .boxed()
    }

    fn list(&self) -> BoxFuture<'static, Result<Vec<TaskWithContext>, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            Ok(guard
                .tasks
                .values()
                .map(|task| guard.resolve(task.clone()))
                .collect())
        }
        .boxed()
    }

    fn list_by_context(
        &self,
        context_id: ContextId,
    ) -> BoxFuture<'static, Result<Vec<TaskWithContext>, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            Ok(guard
                .tasks
                .values()
                .filter(|task| task.context_id == Some(context_id))
                .map(|task| guard.resolve(task.clone()))
                .collect())
        }
        .boxed()
    }

    fn find_by_id(
        &self,
        id: TaskId,
    ) -> BoxFuture<'static, Result<Option<TaskWithContext>, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let guard = state.read().await;
            Ok(guard.tasks.get(&id).map(|task| guard.resolve(task.clone())))
        }
        .boxed()
    }

    fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> BoxFuture<'static, Result<TaskWithContext, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;

            let Some(existing) = guard.tasks.remove(&id) else {
                return Err(RepositoryError::NotFound(format!("task {id}")));
            };

            let updated = existing.apply(patch);
            guard.tasks.insert(id, updated.clone());
            Ok(guard.resolve(updated))
        }
        .boxed()
    }

    fn delete(&self, id: TaskId) -> BoxFuture<'static, Result<bool, RepositoryError>> {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.write().await;
            Ok(guard.tasks.remove(&id).is_some())
        }
        .boxed()
    }
}

// =============================================================================
// Tests
// =============================================================================
