//! Query Handlers

mod tender_handlers;

pub use tender_handlers::{ListTendersHandler, TenderPageView, TenderStatsView};
