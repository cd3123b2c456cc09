use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,       // assigned by the store
    pub email: String, // stored as given
    pub created_at: OffsetDateTime, // set on insert
}
