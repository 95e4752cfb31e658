use std::future::Future;
use tokio::task::JoinSet;

/// Background work bound to the lifetime of one screen.
///
/// Tasks spawned here are aborted by `cancel_all` or when the scope is
/// dropped. An aborted task stops at its next `.await` and runs nothing after it.
#[derive(Debug, Default)]
pub struct ScreenScope {
    tasks: JoinSet<()>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.reap();
        self.tasks.spawn(task);
    }

    /// Number of tasks that have not finished yet.
    pub fn pending(&mut self) -> usize {
        self.reap();
        self.tasks.len()
    }

    pub fn cancel_all(&mut self) {
        self.tasks.abort_all();
    }

    fn reap(&mut self) {
        while self.tasks.try_join_next().is_some() {}
    }
}
