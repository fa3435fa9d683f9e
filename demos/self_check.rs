//! Logger self-check
//!
//! Exercises the process-wide logger through the test harness and exits
//! non-zero if any check fails.
//!
//! Run with: cargo run --example self_check

use rust_logkit::harness::{self, Summary};
use rust_logkit::{error, global, info, origin, warning};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

fn file_contains(path: &Path, needle: &str) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().any(|line| line.contains(needle)),
        Err(e) => {
            eprintln!("Cannot read {}: {}", path.display(), e);
            false
        }
    }
}

fn logging_to_console_and_file(dir: &Path) {
    let path = dir.join("test_log.txt");
    let _ = global::set_destination(&path);
    harness::assert_true(global::is_destination_open(), "destination opened");

    info!(global::logger(), origin!(), "This is an info message for logging tests.");
    harness::assert_true(file_contains(&path, "[INFO]"), "INFO tag in file");
    harness::assert_true(file_contains(&path, "an info message"), "INFO body in file");

    warning!(global::logger(), origin!(), "This is a warning message for logging tests.");
    harness::assert_true(file_contains(&path, "[WARNING]"), "WARNING tag in file");

    error!(global::logger(), origin!(), "This is an error message for logging tests.");
    harness::assert_true(file_contains(&path, "[ERROR]"), "ERROR tag in file");

    global::close_destination();
    harness::assert_true(!global::is_destination_open(), "destination closed");
}

fn logging_edge_cases(dir: &Path) {
    let path = dir.join("test_edge_log.txt");
    let _ = global::set_destination(&path);

    info!(global::logger(), origin!(), "");
    harness::assert_true(file_contains(&path, "(NULL)"), "empty template placeholder");

    let long_message = "A".repeat(1023);
    warning!(global::logger(), origin!(), "{}", long_message);
    harness::assert_true(file_contains(&path, "[WARNING]"), "long message logged");
    harness::assert_true(
        !file_contains(&path, &"A".repeat(512)),
        "long message truncated",
    );

    error!(global::logger(), origin!());
    harness::assert_true(file_contains(&path, "[ERROR]"), "missing template logged");

    global::close_destination();
}

fn multithread_logging(dir: &Path) {
    let path = dir.join("test_multithread_log.txt");
    let _ = global::set_destination(&path);

    let handles: Vec<_> = (0..5)
        .map(|id| {
            thread::spawn(move || {
                info!(global::logger(), origin!(), "Thread {}: testing parallel logging", id);
            })
        })
        .collect();
    for handle in handles {
        let joined = handle.join().is_ok();
        harness::assert_true(joined, "worker thread joined");
    }
    global::close_destination();

    let lines = fs::read_to_string(&path).map(|c| c.lines().count()).unwrap_or(0);
    harness::assert_equal(5, lines, "one line per thread");
}

fn logging_after_close(dir: &Path) {
    let path = dir.join("test_after_close_log.txt");
    let _ = global::set_destination(&path);
    harness::assert_true(global::is_destination_open(), "destination opened");

    global::close_destination();
    harness::assert_true(!global::is_destination_open(), "destination closed");

    info!(global::logger(), origin!(), "This is a test after the file was closed.");
    harness::assert_true(
        !file_contains(&path, "after the file was closed"),
        "no write after close",
    );
}

fn missing_directory(dir: &Path) {
    let path: PathBuf = dir.join("missing").join("dir").join("x.txt");
    let opened = global::set_destination(&path).is_ok();
    harness::assert_true(!opened, "open failure reported");
    harness::assert_true(!global::is_destination_open(), "sink left closed");
    info!(global::logger(), origin!(), "console only");
}

fn main() -> Summary {
    let _guard = global::shutdown_guard();
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Cannot create scratch directory: {}", e);
            return Summary { passed: 0, failed: 1 };
        }
    };

    println!("\n[TEST] Running logger self-check");

    harness::run("Logging to console and file", || logging_to_console_and_file(dir.path()));
    harness::run("Logging edge cases", || logging_edge_cases(dir.path()));
    harness::run("Multithreaded logging", || multithread_logging(dir.path()));
    harness::run("Logging after close", || logging_after_close(dir.path()));
    harness::run("Unopenable destination", || missing_directory(dir.path()));

    harness::print_summary()
}
