//! HTTP API module for the HR record store.
//!
//! This module exposes the store's commands and derivations as JSON
//! endpoints for dashboard front ends.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DecisionRequest, PayrollQuery, RecentLeaveQuery, SummaryQuery};
pub use response::{ApiError, ApiErrorResponse, DecisionResponse, PayslipView};
pub use state::AppState;
