pub mod executor;
pub mod reporter;
pub mod types;

pub use executor::CaseExecutor;
pub use reporter::{ConsoleReporter, Reporter};
pub use types::{AbortCause, CaseResult, CaseStatus, RunSummary};
