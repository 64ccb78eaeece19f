//! Named-task wall clock timer with a tabular summary.

use std::time::{Duration, Instant};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StopWatchError {
    #[error("cannot start {requested:?}: {running:?} is still running")]
    AlreadyRunning { running: String, requested: String },
    #[error("no task is running")]
    NotRunning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub name: String,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct StopWatch {
    id: String,
    tasks: Vec<TaskInfo>,
    running: Option<(String, Instant)>,
}

impl StopWatch {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tasks: Vec::new(),
            running: None,
        }
    }

    /// # Errors
    ///
    /// If another task has not been stopped yet.
    pub fn start(&mut self, name: impl Into<String>) -> Result<(), StopWatchError> {
        let name = name.into();
        if let Some((running, _)) = &self.running {
            return Err(StopWatchError::AlreadyRunning {
                running: running.clone(),
                requested: name,
            });
        }
        self.running = Some((name, Instant::now()));
        Ok(())
    }

    /// Stop the current task and return how long it ran.
    ///
    /// # Errors
    ///
    /// If no task is running.
    pub fn stop(&mut self) -> Result<Duration, StopWatchError> {
        let (name, started) = self.running.take().ok_or(StopWatchError::NotRunning)?;
        let elapsed = started.elapsed();
        tracing::debug!(
            stopwatch = self.id.as_str(),
            task = name.as_str(),
            ?elapsed,
            "task finished"
        );
        self.record(name, elapsed);
        Ok(elapsed)
    }

    /// Run `f` as a task named `name`.
    ///
    /// # Errors
    ///
    /// If another task is already running.
    pub fn time<T>(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce() -> T,
    ) -> Result<T, StopWatchError> {
        self.start(name)?;
        let out = f();
        self.stop()?;
        Ok(out)
    }

    /// Add an already measured task.
    pub fn record(&mut self, name: impl Into<String>, elapsed: Duration) {
        self.tasks.push(TaskInfo {
            name: name.into(),
            elapsed,
        });
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskInfo] {
        &self.tasks
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.tasks.iter().map(|t| t.elapsed).sum()
    }

    #[must_use]
    pub fn short_summary(&self) -> String {
        format!(
            "StopWatch '{}': running time = {} ns",
            self.id,
            self.total().as_nanos()
        )
    }

    #[must_use]
    pub fn pretty_print(&self) -> String {
        const RULE: &str = "---------------------------------------------";
        let total = self.total().as_nanos();
        let rows: String = self
            .tasks
            .iter()
            .map(|task| {
                let ns = task.elapsed.as_nanos();
                let percent = if total == 0 { 0 } else { ns * 100 / total };
                format!("{ns:09}  {percent:03}%  {}\n", task.name)
            })
            .collect();
        format!(
            "{}\n{RULE}\nns         %     Task name\n{RULE}\n{rows}",
            self.short_summary()
        )
    }
}
