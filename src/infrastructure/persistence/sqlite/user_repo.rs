//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{NewUserRecord, RepositoryError, UserRecord, UserRepositoryPort};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// 按错误种类归类 sqlx 错误
fn classify(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicate(db_err.message().to_string())
        }
        err @ (sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)) => {
            RepositoryError::SerializationError(err.to_string())
        }
        other => RepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    async fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, RepositoryError> {
        sqlx::query_scalar("SELECT id FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)
    }

    async fn insert(&self, user: &NewUserRecord) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, user: &UserRecord) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteUserRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteUserRepository::new(pool)
    }

    fn new_user(name: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_all_in_insertion_order() {
        let repo = repo().await;

        let first = repo.insert(&new_user("carol", "c@x.com")).await.unwrap();
        let second = repo.insert(&new_user("alice", "a@x.com")).await.unwrap();
        assert!(second > first);

        let users = repo.find_all().await.unwrap();
        assert_eq!(
            users,
            vec![
                UserRecord { id: first, name: "carol".into(), email: "c@x.com".into() },
                UserRecord { id: second, name: "alice".into(), email: "a@x.com".into() },
            ]
        );
    }

    #[tokio::test]
    async fn test_find_id_by_name() {
        let repo = repo().await;
        let id = repo.insert(&new_user("alice", "a@x.com")).await.unwrap();

        assert_eq!(repo.find_id_by_name("alice").await.unwrap(), Some(id));
        assert_eq!(repo.find_id_by_name("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_classified() {
        let repo = repo().await;
        repo.insert(&new_user("alice", "a@x.com")).await.unwrap();

        let err = repo.insert(&new_user("alice", "b@x.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_update_is_classified() {
        let repo = repo().await;
        repo.insert(&new_user("alice", "a@x.com")).await.unwrap();
        let bob = repo.insert(&new_user("bob", "b@x.com")).await.unwrap();

        let err = repo
            .update(&UserRecord { id: bob, name: "alice".into(), email: "b@x.com".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_update_touches_only_target_row() {
        let repo = repo().await;
        let alice = repo.insert(&new_user("alice", "a@x.com")).await.unwrap();
        let bob = repo.insert(&new_user("bob", "b@x.com")).await.unwrap();

        let rows = repo
            .update(&UserRecord { id: bob, name: "robert".into(), email: "r@x.com".into() })
            .await
            .unwrap();
        assert_eq!(rows, 1);

        let users = repo.find_all().await.unwrap();
        assert_eq!(users[0], UserRecord { id: alice, name: "alice".into(), email: "a@x.com".into() });
        assert_eq!(users[1], UserRecord { id: bob, name: "robert".into(), email: "r@x.com".into() });
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows_affect_nothing() {
        let repo = repo().await;
        repo.insert(&new_user("alice", "a@x.com")).await.unwrap();

        let updated = repo
            .update(&UserRecord { id: 99, name: "ghost".into(), email: "g@x.com".into() })
            .await
            .unwrap();
        let deleted = repo.delete(99).await.unwrap();

        assert_eq!(updated, 0);
        assert_eq!(deleted, 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;
        let id = repo.insert(&new_user("alice", "a@x.com")).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;
        let first = repo.insert(&new_user("alice", "a@x.com")).await.unwrap();
        repo.delete(first).await.unwrap();

        let second = repo.insert(&new_user("bob", "b@x.com")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_values_are_bound_not_interpolated() {
        let repo = repo().await;
        let name = "x'); DROP TABLE users; --";
        repo.insert(&new_user(name, "e@x.com")).await.unwrap();

        assert!(repo.find_id_by_name(name).await.unwrap().is_some());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
