use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Address fields resolved from a CEP.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub district: String,
    pub city: String,
    /// Two-letter state code, upper-cased.
    pub state: String,
}
