//! Dashboard View State
//!
//! The always-fully-defined mirror of the last successful summary fetch.

use serde::Serialize;

use crate::summary::{PeriodKey, SalesPoint, SummaryResponse};

/// Shown for currency fields the backend did not report
pub const DEFAULT_AMOUNT: &str = "Rp 0";

/// Shown when the backend did not report a period label
pub const DEFAULT_PERIOD_LABEL: &str = "Bulan Ini";

/// View state owned by one dashboard controller.
///
/// Built in a single pass from a [`SummaryResponse`]; never patched field by
/// field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewState {
    pub total_products: u64,
    pub total_customers: u64,
    pub unpaid_invoices: u64,
    pub total_outstanding: String,
    pub overdue_count: u64,
    pub partial_count: u64,
    pub total_revenue: String,
    pub revenue_period: PeriodKey,
    pub revenue_period_label: String,
    pub revenue_payment_count: u64,
    pub revenue_invoice_count: u64,
    pub monthly_sales: Vec<SalesPoint>,
}

impl Default for DashboardViewState {
    fn default() -> Self {
        Self {
            total_products: 0,
            total_customers: 0,
            unpaid_invoices: 0,
            total_outstanding: DEFAULT_AMOUNT.to_string(),
            overdue_count: 0,
            partial_count: 0,
            total_revenue: DEFAULT_AMOUNT.to_string(),
            revenue_period: PeriodKey::Month,
            revenue_period_label: DEFAULT_PERIOD_LABEL.to_string(),
            revenue_payment_count: 0,
            revenue_invoice_count: 0,
            monthly_sales: Vec::new(),
        }
    }
}

impl From<SummaryResponse> for DashboardViewState {
    fn from(summary: SummaryResponse) -> Self {
        Self {
            total_products: summary.total_products.unwrap_or(0),
            total_customers: summary.total_customers.unwrap_or(0),
            unpaid_invoices: summary.unpaid_invoices.unwrap_or(0),
            total_outstanding: summary
                .total_outstanding
                .unwrap_or_else(|| DEFAULT_AMOUNT.to_string()),
            overdue_count: summary.overdue_count.unwrap_or(0),
            partial_count: summary.partial_count.unwrap_or(0),
            total_revenue: summary
                .total_revenue
                .unwrap_or_else(|| DEFAULT_AMOUNT.to_string()),
            revenue_period: summary.revenue_period.unwrap_or_default(),
            revenue_period_label: summary
                .revenue_period_label
                .unwrap_or_else(|| DEFAULT_PERIOD_LABEL.to_string()),
            revenue_payment_count: summary.revenue_payment_count.unwrap_or(0),
            revenue_invoice_count: summary.revenue_invoice_count.unwrap_or(0),
            monthly_sales: summary.monthly_sales.unwrap_or_default(),
        }
    }
}

impl DashboardViewState {
    /// Sum of the monthly sales amounts
    pub fn sales_total(&self) -> f64 {
        self.monthly_sales.iter().map(|p| p.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fully_defined() {
        let state = DashboardViewState::default();
        assert_eq!(state.total_outstanding, "Rp 0");
        assert_eq!(state.total_revenue, "Rp 0");
        assert_eq!(state.revenue_period, PeriodKey::Month);
        assert_eq!(state.revenue_period_label, "Bulan Ini");
        assert!(state.monthly_sales.is_empty());
    }

    #[test]
    fn test_empty_summary_maps_to_defaults() {
        let state = DashboardViewState::from(SummaryResponse::default());
        assert_eq!(state, DashboardViewState::default());
    }

    #[test]
    fn test_partial_summary_defaults_missing_fields() {
        let summary = SummaryResponse {
            total_products: Some(42),
            revenue_period: Some(PeriodKey::Year),
            revenue_period_label: Some("This Year".to_string()),
            monthly_sales: Some(vec![
                SalesPoint::new("Jan", 15000.0),
                SalesPoint::new("Feb", 23000.0),
            ]),
            ..Default::default()
        };

        let state = DashboardViewState::from(summary);
        assert_eq!(state.total_products, 42);
        assert_eq!(state.total_customers, 0);
        assert_eq!(state.total_revenue, "Rp 0");
        assert_eq!(state.revenue_period, PeriodKey::Year);
        assert_eq!(state.revenue_period_label, "This Year");
        assert_eq!(state.sales_total(), 38000.0);
    }
}
