use super::*;
use std::thread;

/// Configuration for parallel execution.
/// Allows setting the number of threads and the minimum number of output rows handled by a single task.
/// If not set, the global thread pool is used and the granularity is derived from the number of rows.
#[derive(Debug, Default, Clone)]
pub struct ExecutionConfig {
    num_threads: Option<usize>,
    min_rows_per_task: Option<usize>,
}

impl ExecutionConfig {
    /// Sets the number of threads to use for the parallel computation.
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads.max(1));
        self
    }

    /// Sets the minimum number of rows processed by a single task.
    pub fn with_min_rows_per_task(mut self, min_rows: usize) -> Self {
        self.min_rows_per_task = Some(min_rows.max(1));
        self
    }

    pub(crate) fn get_num_threads(&self) -> usize {
        self.num_threads
            .unwrap_or_else(|| thread::available_parallelism().map_or(4, |n| n.get()))
    }

    pub(crate) fn get_min_rows_per_task(&self, total_rows: usize) -> usize {
        let num_threads = self.get_num_threads();
        self.min_rows_per_task
            .unwrap_or_else(|| (total_rows / (num_threads * 4)).max(1))
    }

    /// Builds a dedicated pool when the number of threads is set explicitly.
    pub(crate) fn build_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        let Some(num_threads) = self.num_threads else {
            return Ok(None);
        };

        log::debug!("building thread pool with {num_threads} threads");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;

        Ok(Some(pool))
    }
}
