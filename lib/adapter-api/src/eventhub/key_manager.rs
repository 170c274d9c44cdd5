use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A token-issuing key manager and its provider-specific settings
///
/// `configuration` is schema-less; it is forwarded to the enforcer as encoded
/// JSON text. The parameter exists so callers holding typed settings can pass
/// them through without first converting to a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyManager<C = Map<String, Value>> {
    pub name: String,
    #[serde(rename = "type")]
    pub key_manager_type: String,
    pub enabled: bool,
    pub tenant_domain: String,
    pub configuration: C,
}
