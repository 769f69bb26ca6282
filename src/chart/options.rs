//! Chart Definition
//!
//! Data/options contract handed to the charting surface. The serialized
//! form follows the ApexCharts options object.

use serde::Serialize;

use super::format::CurrencyFormat;
use crate::summary::SalesPoint;

/// Visual settings for the sales chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub height: u32,
    /// Name of the single series
    pub series_name: String,
    /// Series color (CSS hex)
    pub color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            height: 350,
            series_name: "Penjualan".to_string(),
            color: "#4e73df".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Area,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Show {
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enabled {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub height: u32,
    pub toolbar: Show,
    pub zoom: Enabled,
}

/// A named data array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub curve: String,
    pub width: u32,
}

/// Complete chart definition for one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSpec,
    pub series: Vec<Series>,
    pub xaxis: XAxis,
    pub data_labels: Enabled,
    pub stroke: Stroke,
    pub colors: Vec<String>,
    /// Formatting for tooltips and axis labels; surfaces turn this into
    /// formatter functions.
    #[serde(skip)]
    pub currency: CurrencyFormat,
}

impl ChartOptions {
    /// Single-series area chart over the monthly sales, order preserved.
    pub fn sales_area(sales: &[SalesPoint], style: &ChartStyle, currency: &CurrencyFormat) -> Self {
        let (categories, data): (Vec<String>, Vec<f64>) = sales
            .iter()
            .map(|point| (point.month.clone(), point.amount))
            .unzip();

        Self {
            chart: ChartSpec {
                kind: ChartKind::Area,
                height: style.height,
                toolbar: Show { show: false },
                zoom: Enabled { enabled: false },
            },
            series: vec![Series {
                name: style.series_name.clone(),
                data,
            }],
            xaxis: XAxis { categories },
            data_labels: Enabled { enabled: false },
            stroke: Stroke {
                curve: "smooth".to_string(),
                width: 2,
            },
            colors: vec![style.color.clone()],
            currency: currency.clone(),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.xaxis.categories
    }

    /// Amounts of the first series
    pub fn amounts(&self) -> &[f64] {
        self.series.first().map(|s| s.data.as_slice()).unwrap_or(&[])
    }

    pub fn point_count(&self) -> usize {
        self.amounts().len()
    }

    /// Tooltip labels for each data point
    pub fn formatted_amounts(&self) -> Vec<String> {
        self.amounts()
            .iter()
            .map(|amount| self.currency.format(*amount))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<SalesPoint> {
        vec![
            SalesPoint::new("Jan", 15000.0),
            SalesPoint::new("Feb", 23000.0),
        ]
    }

    #[test]
    fn test_sales_area_preserves_order() {
        let options = ChartOptions::sales_area(&sample(), &ChartStyle::default(), &CurrencyFormat::rupiah());

        assert_eq!(options.categories(), ["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(options.amounts(), [15000.0, 23000.0]);
        assert_eq!(options.series.len(), 1);
        assert_eq!(options.series[0].name, "Penjualan");
        assert_eq!(options.chart.kind, ChartKind::Area);
    }

    #[test]
    fn test_empty_sales_has_no_points() {
        let options = ChartOptions::sales_area(&[], &ChartStyle::default(), &CurrencyFormat::rupiah());
        assert_eq!(options.point_count(), 0);
        assert!(options.categories().is_empty());
        assert_eq!(options.series.len(), 1);
    }

    #[test]
    fn test_formatted_amounts() {
        let options = ChartOptions::sales_area(&sample(), &ChartStyle::default(), &CurrencyFormat::rupiah());
        assert_eq!(options.formatted_amounts(), vec!["Rp 15.000", "Rp 23.000"]);
    }

    #[test]
    fn test_serialized_shape() {
        let options = ChartOptions::sales_area(&sample(), &ChartStyle::default(), &CurrencyFormat::rupiah());
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["chart"]["type"], "area");
        assert_eq!(json["chart"]["toolbar"]["show"], false);
        assert_eq!(json["dataLabels"]["enabled"], false);
        assert_eq!(json["xaxis"]["categories"][1], "Feb");
        assert_eq!(json["series"][0]["data"][0], 15000.0);
        assert!(json.get("currency").is_none());
    }
}
