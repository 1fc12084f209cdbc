use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A registered hero. Serialized in camelCase to match the public API.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "super_hero")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_fields() {
        let hero = Model {
            id: 1,
            name: "Spiderman".into(),
            first_name: "Peter".into(),
            last_name: "Parker".into(),
            city: "New York".into(),
        };
        let v = serde_json::to_value(&hero).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "id": 1,
                "name": "Spiderman",
                "firstName": "Peter",
                "lastName": "Parker",
                "city": "New York"
            })
        );
    }

    #[test]
    fn json_without_id_is_rejected() {
        let res = serde_json::from_str::<Model>(
            r#"{"name":"Batman","firstName":"Bruce","lastName":"Wayne","city":"Gotham"}"#,
        );
        assert!(res.is_err());
    }
}
