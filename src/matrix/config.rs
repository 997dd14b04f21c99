//! Configuration for multiplication and text loading

/// How `multiply` finds the entries of the right operand that meet a
/// given non-zero of the left operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplyStrategy {
    /// Build a compressed row index of the right operand once, then walk
    /// only the stored entries of the matching row
    RowIndexed,
    /// Probe every declared column of the right operand for the matching
    /// row; costs `nnz(left) * cols(right)` lookups
    ColumnScan,
}

impl MultiplyStrategy {
    /// Name used on the command line and in log output
    pub fn name(&self) -> &'static str {
        match self {
            MultiplyStrategy::RowIndexed => "row-indexed",
            MultiplyStrategy::ColumnScan => "column-scan",
        }
    }
}

/// System parameters for performance tuning
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of row blocks handed to the thread pool
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

/// Configuration for sparse matrix multiplication
#[derive(Debug, Clone)]
pub struct MultiplyConfig {
    /// Lookup strategy for the right operand
    pub strategy: MultiplyStrategy,

    /// Whether to split the product into parallel row blocks
    pub parallel: bool,

    /// Minimum number of non-empty left rows before going parallel
    pub parallel_row_threshold: usize,

    /// System parameters for performance tuning
    pub system_params: SystemParameters,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            strategy: MultiplyStrategy::RowIndexed,
            parallel: false,
            parallel_row_threshold: 64,
            system_params: SystemParameters::default(),
        }
    }
}

impl MultiplyConfig {
    /// Select the right-operand lookup strategy
    pub fn with_strategy(mut self, strategy: MultiplyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable row-block parallelism
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the non-empty row count that triggers parallel execution
    pub fn with_parallel_row_threshold(mut self, threshold: usize) -> Self {
        self.parallel_row_threshold = threshold;
        self
    }

    /// Override the number of row blocks
    pub fn with_threads(mut self, n_threads: usize) -> Self {
        self.system_params.n_threads = n_threads.max(1);
        self
    }

    /// Whether a left operand with `active_rows` non-empty rows should be
    /// multiplied in parallel
    pub fn use_parallel(&self, active_rows: usize) -> bool {
        self.parallel
            && self.system_params.n_threads > 1
            && active_rows >= self.parallel_row_threshold
    }
}

/// What the loader does with an entry outside the declared dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Fail the whole parse with `OutOfBounds`
    #[default]
    Reject,
    /// Log a warning, drop the entry and keep loading
    Skip,
}

/// Options for the text loader
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub on_out_of_bounds: BoundsPolicy,
}

impl ParseOptions {
    /// Loader that drops out-of-bounds entries instead of failing
    pub fn skipping_out_of_bounds() -> Self {
        Self {
            on_out_of_bounds: BoundsPolicy::Skip,
        }
    }
}
