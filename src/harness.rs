//! Minimal observational test harness
//!
//! Assertions print a coloured `[PASS]`/`[FAIL]` line and bump a counter.
//! They never panic or unwind, so a test body keeps running after a failed
//! check; the returned `bool` lets a caller bail out early if it wants to.
//!
//! ```no_run
//! use rust_logkit::harness::{self, Summary};
//!
//! fn arithmetic() {
//!     harness::assert_equal(4, 2 + 2, "addition");
//!     harness::assert_true(3 > 2, "ordering");
//! }
//!
//! fn main() -> Summary {
//!     harness::run("arithmetic", arithmetic);
//!     harness::print_summary()
//! }
//! ```

use colored::{Color, Colorize};
use parking_lot::Mutex;
use std::fmt::Debug;
use std::io::{self, Write};
use std::process::{ExitCode, Termination};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// Pass/fail totals at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub passed: u64,
    pub failed: u64,
}

impl Summary {
    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Non-zero when any assertion failed
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl Termination for Summary {
    fn report(self) -> ExitCode {
        self.exit_code()
    }
}

pub struct Harness {
    passed: AtomicU64,
    failed: AtomicU64,
    output: Mutex<Box<dyn Write + Send>>,
    use_colors: bool,
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

impl Harness {
    /// Harness printing coloured lines to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout()).with_colors(true)
    }

    /// Harness printing plain lines to `output`, e.g. an in-memory buffer
    pub fn with_output(output: impl Write + Send + 'static) -> Self {
        Self {
            passed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            output: Mutex::new(Box::new(output)),
            use_colors: false,
        }
    }

    /// Toggle ANSI colours. When enabled, `colored` still drops them if
    /// stdout is not a terminal or `NO_COLOR` is set.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text
        }
    }

    fn emit(&self, line: &str) {
        let mut output = self.output.lock();
        if let Err(e) = writeln!(output, "{}", line).and_then(|_| output.flush()) {
            eprintln!("[HARNESS ERROR] Cannot write test output: {}", e);
        }
    }

    fn record(&self, passed: bool, name: &str, failure: impl FnOnce() -> String, started: Instant) -> bool {
        let ms = millis(started.elapsed());
        if passed {
            self.passed.fetch_add(1, Ordering::Relaxed);
            self.emit(&self.paint(format!("[PASS] {} - [{:.2}ms]", name, ms), Color::Green));
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
            self.emit(&self.paint(
                format!("[FAIL] {}: {} - [{:.2}ms]", name, failure(), ms),
                Color::Red,
            ));
        }
        passed
    }

    /// Run one test procedure, printing its name and how long it took
    pub fn run<F: FnOnce()>(&self, name: &str, test: F) -> Duration {
        self.emit(name);
        let started = Instant::now();
        test();
        let elapsed = started.elapsed();
        self.emit(&self.paint(
            format!("[INFO] Test time {}: {:.2}ms", name, millis(elapsed)),
            Color::Blue,
        ));
        elapsed
    }

    pub fn assert_equal<T: PartialEq + Debug>(&self, expected: T, actual: T, name: &str) -> bool {
        let started = Instant::now();
        let passed = expected == actual;
        self.record(
            passed,
            name,
            || format!("expected {:?}, got {:?}", expected, actual),
            started,
        )
    }

    pub fn assert_true(&self, condition: bool, name: &str) -> bool {
        let started = Instant::now();
        self.record(condition, name, || "condition is false".to_string(), started)
    }

    pub fn assert_is_absent<T>(&self, value: Option<T>, name: &str) -> bool {
        let started = Instant::now();
        self.record(value.is_none(), name, || "value is present".to_string(), started)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.passed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }

    /// Print totals and the overall verdict
    pub fn print_summary(&self) -> Summary {
        let summary = self.summary();
        self.emit("\n   -------------");
        self.emit(&self.paint("[SUMMARY] End of tests".to_string(), Color::Blue));
        self.emit(&self.paint(
            format!(
                "[TESTS] total: {}  passed: {}  failed: {}",
                summary.total(),
                summary.passed,
                summary.failed
            ),
            Color::Blue,
        ));
        if summary.is_success() {
            self.emit(&self.paint("[RESULT] PASSED\n".to_string(), Color::Green));
        } else {
            self.emit(&self.paint("[RESULT] FAILED\n".to_string(), Color::Red));
        }
        summary
    }

    pub fn reset(&self) {
        self.passed.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_HARNESS: OnceLock<Harness> = OnceLock::new();

/// The process-wide harness, printing to stdout
pub fn harness() -> &'static Harness {
    GLOBAL_HARNESS.get_or_init(Harness::new)
}

pub fn run<F: FnOnce()>(name: &str, test: F) -> Duration {
    harness().run(name, test)
}

pub fn assert_equal<T: PartialEq + Debug>(expected: T, actual: T, name: &str) -> bool {
    harness().assert_equal(expected, actual, name)
}

pub fn assert_true(condition: bool, name: &str) -> bool {
    harness().assert_true(condition, name)
}

pub fn assert_is_absent<T>(value: Option<T>, name: &str) -> bool {
    harness().assert_is_absent(value, name)
}

pub fn summary() -> Summary {
    harness().summary()
}

pub fn print_summary() -> Summary {
    harness().print_summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capturing_harness() -> (Harness, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Harness::with_output(buffer.clone()), buffer)
    }

    #[test]
    fn test_assert_equal_pass() {
        let (harness, out) = capturing_harness();
        assert!(harness.assert_equal(2, 2, "t"));
        assert_eq!(harness.summary(), Summary { passed: 1, failed: 0 });

        let text = out.text();
        assert!(text.contains("[PASS] t"));
    }

    #[test]
    fn test_assert_equal_fail() {
        let (harness, out) = capturing_harness();
        assert!(!harness.assert_equal(2, 3, "t"));
        assert_eq!(harness.summary(), Summary { passed: 0, failed: 1 });

        let text = out.text();
        assert!(text.contains("[FAIL] t"));
        assert!(text.contains("expected 2, got 3"));
    }

    #[test]
    fn test_assert_true_and_absent() {
        let (harness, out) = capturing_harness();
        harness.assert_true(true, "yes");
        harness.assert_true(false, "no");
        harness.assert_is_absent(None::<u8>, "none");
        harness.assert_is_absent(Some(7), "some");

        assert_eq!(harness.summary(), Summary { passed: 2, failed: 2 });
        let text = out.text();
        assert!(text.contains("[FAIL] no: condition is false"));
        assert!(text.contains("[FAIL] some: value is present"));
    }

    #[test]
    fn test_failed_assertion_does_not_stop_test_body() {
        let (harness, out) = capturing_harness();
        let mut reached_end = false;
        harness.run("keeps going", || {
            harness.assert_equal(1, 2, "first");
            harness.assert_true(true, "second");
            reached_end = true;
        });

        assert!(reached_end);
        assert_eq!(harness.summary(), Summary { passed: 1, failed: 1 });
        let text = out.text();
        assert!(text.starts_with("keeps going\n"));
        assert!(text.contains("[INFO] Test time keeps going:"));
    }

    #[test]
    fn test_print_summary() {
        let (harness, out) = capturing_harness();
        harness.assert_true(true, "a");
        let summary = harness.print_summary();
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
        assert!(out.text().contains("[TESTS] total: 1  passed: 1  failed: 0"));
        assert!(out.text().contains("[RESULT] PASSED"));

        harness.assert_true(false, "b");
        let summary = harness.print_summary();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.exit_code(), ExitCode::FAILURE);
        assert!(out.text().contains("[RESULT] FAILED"));
    }

    #[test]
    fn test_injected_output_is_uncoloured() {
        colored::control::set_override(true);
        let (harness, out) = capturing_harness();
        harness.assert_equal(2, 3, "plain");
        harness.run("plain run", || {});
        harness.print_summary();
        colored::control::unset_override();

        let text = out.text();
        assert!(!text.contains('\x1b'), "unexpected ANSI escape in {:?}", text);
        assert!(text.contains("[FAIL] plain: expected 2, got 3"));
    }

    #[test]
    fn test_reset() {
        let (harness, _out) = capturing_harness();
        harness.assert_true(false, "x");
        harness.reset();
        assert_eq!(harness.summary(), Summary::default());
    }
}
