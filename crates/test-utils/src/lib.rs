pub mod builders;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Write a graph document named `file_name` into `dir` and return its path.
pub fn write_document(dir: &Path, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, contents).with_context(|| format!("writing {:?}", path))?;
    tracing::debug!(?path, "wrote test graph document");
    Ok(path)
}
