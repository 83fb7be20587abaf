pub mod builders;
pub mod fake_backend;
pub mod scripts;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Upper bound for tests that spawn real processes.
pub const PROCESS_TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Initialise tracing for tests. Output is captured per test and only shown
/// for failures; set `RUST_LOG=debug` for more detail.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if a child process hangs past
/// [`PROCESS_TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    tokio::time::timeout(PROCESS_TEST_TIMEOUT, f)
        .await
        .expect("tool process did not finish in time")
}
