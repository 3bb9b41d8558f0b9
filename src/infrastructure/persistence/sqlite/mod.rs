//! SQLite Persistence - 数据库连接与仓储实现

mod database;
mod tender_repo;

pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
pub use tender_repo::SqliteTenderRepository;
