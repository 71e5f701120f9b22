//! Shared fixtures for in-memory integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use studyboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskStoreService};

/// Service type used by the integration tests.
pub type TestService = TaskStoreService<InMemoryTaskRepository, FixedClock>;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns midnight UTC on the given date.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Installs a test-writer subscriber so `RUST_LOG` surfaces store events.
pub fn init_tracing() {
    // Another test in this binary may already have installed one.
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init(),
    );
}

/// Fresh store whose clock reads 2024-12-14.
#[fixture]
pub fn service() -> TestService {
    init_tracing();
    TaskStoreService::new(InMemoryTaskRepository::new(), FixedClock(date(2024, 12, 14)))
}
