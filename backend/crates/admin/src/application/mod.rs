//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod issue_session;
pub mod read_content;
pub mod write_content;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AdminConfig;
pub use issue_session::{IssueSessionOutput, IssueSessionUseCase};
pub use read_content::ReadContentUseCase;
pub use write_content::{RESET_COMMIT_MESSAGE, UPDATE_COMMIT_MESSAGE, WriteContentUseCase};
