use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Reliability;

/// A piece of evidence. Referenced by id, never owned, by other records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evidence {
    pub id: String,
    pub descriptor: String,
    pub reliability: Reliability,
}
