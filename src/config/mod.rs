mod logging;

pub mod database;

pub use database::{database_url, init_database, migrate_database};
pub use logging::init_logging;
