use serde::{Deserialize, Serialize};

/// Query options accepted by the quotation listing.
///
/// Empty strings are treated the same as absent values, which is what the
/// dashboard sends when a filter input is left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl QuotationFilter {
    pub fn feed_name(&self) -> Option<&str> {
        self.feed_name.as_deref().filter(|v| !v.is_empty())
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|v| !v.is_empty())
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort_order.as_deref())
    }

    pub fn with_feed_name(mut self, feed_name: impl Into<String>) -> Self {
        self.feed_name = Some(feed_name.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: impl Into<String>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Newest date first, feed name ascending within a date
    Default,
}

impl SortOrder {
    /// `asc` and `desc` are recognised exactly; anything else is the default order
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::PriceAsc,
            Some("desc") => SortOrder::PriceDesc,
            _ => SortOrder::Default,
        }
    }
}
