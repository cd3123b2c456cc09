use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::users::{repo::UserStore, repo_types::User};

/// In-process store with Postgres-like id assignment, used by tests.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, email: &str) -> anyhow::Result<User> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| anyhow::anyhow!("user store poisoned"))?;
        let user = User {
            id: users.last().map_or(1, |u| u.id + 1),
            email: email.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = self
            .users
            .lock()
            .map_err(|_| anyhow::anyhow!("user store poisoned"))?;
        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemoryUserStore::default();
        let a = store.create("a@example.com").await.unwrap();
        let b = store.create("b@example.com").await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert!(b.created_at >= a.created_at);
    }

    #[tokio::test]
    async fn list_returns_records_in_insertion_order() {
        let store = MemoryUserStore::default();
        assert!(store.list().await.unwrap().is_empty());

        store.create("first@example.com").await.unwrap();
        store.create("second@example.com").await.unwrap();

        let emails: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, ["first@example.com", "second@example.com"]);
    }

    #[tokio::test]
    async fn duplicate_emails_are_stored_separately() {
        let store = MemoryUserStore::default();
        store.create("same@example.com").await.unwrap();
        store.create("same@example.com").await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
