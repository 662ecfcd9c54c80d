use crate::model::Id;
use serde::{Deserialize, Serialize};

/// A single feed price observed at an establishment on a given day.
///
/// `establishment_name` is a soft reference: it is not checked against the
/// establishment collection and is left untouched when that establishment
/// is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(default)]
    pub id: Id,
    pub feed_name: String,
    pub price: f64,
    pub date: String, // YYYY-MM-DD
    pub establishment_name: String,
}

/// Input model for recording a quotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuotation {
    pub feed_name: Option<String>,
    pub price: Option<f64>,
    pub date: Option<String>,
    pub establishment_name: Option<String>,
}

impl NewQuotation {
    pub fn new(
        feed_name: impl Into<String>,
        price: f64,
        date: impl Into<String>,
        establishment_name: impl Into<String>,
    ) -> Self {
        Self {
            feed_name: Some(feed_name.into()),
            price: Some(price),
            date: Some(date.into()),
            establishment_name: Some(establishment_name.into()),
        }
    }

    /// Convert to a stored record with a server-assigned id
    pub fn into_quotation(self, id: Id) -> Quotation {
        Quotation {
            id,
            feed_name: self.feed_name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            establishment_name: self.establishment_name.unwrap_or_default(),
        }
    }
}
