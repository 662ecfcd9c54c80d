use serde::{Deserialize, Serialize};

/// One bar or point on a dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub label: String,
    pub average_price: f64,
}

impl PricePoint {
    pub fn new(label: impl Into<String>, average_price: f64) -> Self {
        Self {
            label: label.into(),
            average_price,
        }
    }
}

/// Both chart series, computed over the full unfiltered quotation list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    pub by_date: Vec<PricePoint>,
    pub by_feed: Vec<PricePoint>,
}
