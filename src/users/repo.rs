use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::User;

/// Persistence for [`User`] records. Inserts are committed before they return.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, email: &str) -> anyhow::Result<User>;
    async fn list(&self) -> anyhow::Result<Vec<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    /// Insert a new user; id and created_at come from the table defaults.
    async fn create(&self, email: &str) -> anyhow::Result<User> {
        let mut tx = self.db.begin().await.context("begin transaction")?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email)
            VALUES ($1)
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .context("insert user")?;
        tx.commit().await.context("commit user insert")?;
        Ok(user)
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list users")?;
        Ok(users)
    }
}
