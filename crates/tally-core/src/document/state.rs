use crate::config::SheetConfig;
use tally_engine::engine::{Evaluator, Grid};

/// UI-agnostic cell store for the spreadsheet.
///
/// Cells hold raw strings; nothing is interpreted until a cell is read.
/// Writes take `&mut self`, so a read can never observe a half-finished
/// update. Callers that share a sheet between threads wrap it in a lock.
#[derive(Debug, Default)]
pub struct Sheet {
    /// The spreadsheet grid: cell id -> raw stored string
    pub(crate) grid: Grid,
    /// Loaded configuration
    pub(crate) config: SheetConfig,
}

impl Sheet {
    /// Create an empty sheet with default configuration.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Self::with_config(SheetConfig::default())
    }

    pub fn with_config(config: SheetConfig) -> Self {
        Sheet {
            grid: Grid::new(),
            config,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Evaluator reading from this sheet's grid.
    pub(crate) fn evaluator(&self) -> Evaluator<'_, Grid> {
        Evaluator::with_options(&self.grid, self.config.eval_options())
    }
}
