//! Application State
//!
//! 包含 Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{ListTendersHandler, TenderRepositoryPort};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub tender_repo: Arc<dyn TenderRepositoryPort>,

    // ========== Query Handlers ==========
    pub list_tenders_handler: ListTendersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(tender_repo: Arc<dyn TenderRepositoryPort>) -> Self {
        Self {
            tender_repo: tender_repo.clone(),
            list_tenders_handler: ListTendersHandler::new(tender_repo),
        }
    }
}
