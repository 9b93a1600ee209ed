/// Configuration for corpus search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Run the data-parallel search when the `parallel` feature is compiled in.
    /// Ignored otherwise.
    pub parallel: bool,
    /// Lower bound on corpus members handed to one parallel task.
    /// Small corpora stay on a single task.
    pub min_series_per_task: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            parallel: false,
            min_series_per_task: 16,
        }
    }

    /// Enable or disable the parallel search path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the minimum chunk size for parallel tasks (clamped to at least 1).
    pub fn with_min_series_per_task(mut self, n: usize) -> Self {
        self.min_series_per_task = n.max(1);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
