//! Per-file progress reporting for the materialization pipeline.
//!
//! Reported progress is monotonically non-decreasing and reaches 100%
//! once a step completes; it is not required to be exact.

use std::cell::Cell;
use std::io::Write;

/// Observer for pipeline steps that process many files.
pub trait ProgressReporter {
    /// Announces a step and the number of items it will process.
    fn begin(&self, step: &str, total: u64);
    /// Records one processed item.
    fn advance(&self, item: &str);
    /// Marks the step complete.
    fn finish(&self);
}

/// Console reporter printing a percentage that only ever moves forward.
pub struct ConsoleReporter {
    total: Cell<u64>,
    done: Cell<u64>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { total: Cell::new(1), done: Cell::new(0) }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        ConsoleReporter::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn begin(&self, step: &str, total: u64) {
        self.total.set(total.max(1));
        self.done.set(0);
        println!("{} ({} files)", step, total);
    }

    fn advance(&self, item: &str) {
        let done = (self.done.get() + 1).min(self.total.get());
        self.done.set(done);
        log::debug!("processed '{}'", item);
        print!("\r  {:>3} %", done * 100 / self.total.get());
        let _ = std::io::stdout().flush();
    }

    fn finish(&self) {
        self.done.set(self.total.get());
        println!("\r  100 %");
    }
}

/// Reporter that discards all progress events.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn begin(&self, _step: &str, _total: u64) {}
    fn advance(&self, _item: &str) {}
    fn finish(&self) {}
}
