use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `resource` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Resource {
    #[sqlx(rename = "resource_id")]
    pub id: i64,
    #[sqlx(rename = "resource_name")]
    pub name: String,
    pub timeline: String,
    pub quantity: i64,
    pub cost: f64,
}

/// Validated insert payload; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewResource {
    pub name: String,
    pub timeline: String,
    pub quantity: i64,
    pub cost: f64,
}

impl NewResource {
    pub fn into_resource(self, id: i64) -> Resource {
        Resource {
            id,
            name: self.name,
            timeline: self.timeline,
            quantity: self.quantity,
            cost: self.cost,
        }
    }
}

/// One row of the append-only `access_requests` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessRequest {
    pub username: String,
    pub requested_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}
