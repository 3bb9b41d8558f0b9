//! 应用层 - 查询（读操作）

mod tender_queries;

pub mod handlers;

pub use tender_queries::*;
