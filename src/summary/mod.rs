//! Summary Provider
//!
//! The backend capability that returns aggregate business metrics
//! (products, customers, receivables, revenue, monthly sales) for a
//! revenue period.

mod client;
mod error;
mod types;

pub use client::{BackendConfig, OdooRpcClient};
pub use error::{SummaryError, SummaryResult};
pub use types::{PeriodKey, SalesPoint, SummaryResponse};

use async_trait::async_trait;

/// Source of dashboard summaries.
///
/// One call, one summary: implementations must not split the request into
/// several backend queries.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Fetch the summary for `period`
    async fn fetch_summary(&self, period: &PeriodKey) -> SummaryResult<SummaryResponse>;
}
