use crate::model::Id;
use serde::{Deserialize, Serialize};

/// A place that issues feed quotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    #[serde(default)]
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub contact: String,
}

/// Input model for registering an establishment.
///
/// Every field is optional at the wire level so that a missing name is
/// reported as a validation failure instead of a JSON shape error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEstablishment {
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl NewEstablishment {
    pub fn new(name: impl Into<String>, contact: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            contact,
        }
    }

    /// Convert to a stored record with a server-assigned id
    pub fn into_establishment(self, id: Id) -> Establishment {
        Establishment {
            id,
            name: self.name.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
        }
    }
}
