pub mod database;
pub mod orchestrator;
pub mod providers;
pub mod session;

pub use database::ChatDb;
pub use orchestrator::ChatOrchestrator;
