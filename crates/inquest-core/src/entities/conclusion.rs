use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A concluding statement, citing the causal factors it rests on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Conclusion {
    pub statement: String,
    /// Ids of `CausalFactor` records.
    pub causal_factor_refs: Vec<String>,
}
