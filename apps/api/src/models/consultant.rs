use serde::{Deserialize, Serialize};

/// A consultant on the roster. Loaded once from the roster source and never
/// mutated afterwards; identity is `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub location: String,
    pub years_of_exp: u32,
    pub skills: Vec<String>,
    pub bio: String,
}
