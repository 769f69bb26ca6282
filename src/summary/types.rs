//! Summary wire types
//!
//! Shapes returned by the backend `get_dashboard_summary` call.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation window for the revenue figures.
///
/// Keys outside the known set are carried through unchanged; the backend
/// decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PeriodKey {
    #[default]
    Month,
    Year,
    All,
    Other(String),
}

impl PeriodKey {
    pub fn as_str(&self) -> &str {
        match self {
            PeriodKey::Month => "month",
            PeriodKey::Year => "year",
            PeriodKey::All => "all",
            PeriodKey::Other(raw) => raw,
        }
    }

    /// Whether this is one of the enumerated keys
    pub fn is_known(&self) -> bool {
        !matches!(self, PeriodKey::Other(_))
    }

    /// Human-readable label used by selectors
    pub fn label(&self) -> &str {
        match self {
            PeriodKey::Month => "Bulan Ini",
            PeriodKey::Year => "Tahun Ini",
            PeriodKey::All => "Semua Waktu",
            PeriodKey::Other(raw) => raw,
        }
    }

    /// The enumerated keys, in selector order
    pub fn known() -> [PeriodKey; 3] {
        [PeriodKey::Month, PeriodKey::Year, PeriodKey::All]
    }
}

impl From<String> for PeriodKey {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "month" => PeriodKey::Month,
            "year" => PeriodKey::Year,
            "all" => PeriodKey::All,
            _ => PeriodKey::Other(raw),
        }
    }
}

impl From<&str> for PeriodKey {
    fn from(raw: &str) -> Self {
        PeriodKey::from(raw.to_string())
    }
}

impl From<PeriodKey> for String {
    fn from(key: PeriodKey) -> Self {
        match key {
            PeriodKey::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PeriodKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PeriodKey::from(s))
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bucket of the monthly sales series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub amount: f64,
}

impl SalesPoint {
    pub fn new(month: impl Into<String>, amount: f64) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}

/// Raw summary as reported by the backend.
///
/// Every field is optional: the backend answers `{}` when its own
/// aggregation fails, and uses `false` for "no value" on string fields.
/// Wrong-typed values are rejected during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub total_products: Option<u64>,
    #[serde(default)]
    pub total_customers: Option<u64>,
    #[serde(default)]
    pub unpaid_invoices: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_outstanding: Option<String>,
    #[serde(default)]
    pub overdue_count: Option<u64>,
    #[serde(default)]
    pub partial_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_revenue: Option<String>,
    #[serde(default, deserialize_with = "lenient_period")]
    pub revenue_period: Option<PeriodKey>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub revenue_period_label: Option<String>,
    #[serde(default)]
    pub revenue_payment_count: Option<u64>,
    #[serde(default)]
    pub revenue_invoice_count: Option<u64>,
    #[serde(default)]
    pub monthly_sales: Option<Vec<SalesPoint>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFalse {
    Text(String),
    Flag(bool),
}

/// Accepts a string, `null` or `false`; anything else is an error.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFalse>::deserialize(deserializer)? {
        Some(StringOrFalse::Text(s)) => Ok(Some(s)),
        Some(StringOrFalse::Flag(false)) | None => Ok(None),
        Some(StringOrFalse::Flag(true)) => Err(serde::de::Error::custom(
            "expected a string, null or false, found true",
        )),
    }
}

fn lenient_period<'de, D>(deserializer: D) -> Result<Option<PeriodKey>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.map(PeriodKey::from))
}
