use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db;
use crate::types::dto::to_rfc3339;

/// Response model representing a user. The stored password is deliberately
/// absent from this shape.
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Server-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Optional age
    pub age: Option<i32>,

    /// Optional mobile number
    #[oai(rename = "mobileNumber")]
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,

    /// Email address
    pub email: String,

    /// Creation timestamp (ISO 8601 format)
    #[oai(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Last modification timestamp (ISO 8601 format)
    #[oai(rename = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<db::user::Model> for UserResponse {
    fn from(m: db::user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            age: m.age,
            mobile_number: m.mobile_number,
            email: m.email,
            created_at: to_rfc3339(m.created_at),
            updated_at: to_rfc3339(m.updated_at),
        }
    }
}
