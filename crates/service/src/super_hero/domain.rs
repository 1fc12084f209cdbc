use serde::{Deserialize, Serialize};

/// Hero data as supplied on creation. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuperHero {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}
