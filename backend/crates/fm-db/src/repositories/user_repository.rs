//! User repository: identity reconciliation against the `users` table.
//!
//! Reconciliation is a single `INSERT ... ON CONFLICT(telegram_id) DO UPDATE`
//! statement. The unique index on `telegram_id` is what prevents duplicate
//! rows when two first logins for the same identity race; there is no
//! check-then-insert in application code.

use crate::{DbError, Result as DbErrorResult};

use fm_core::{IdentityClaim, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, telegram_id, username, first_name, last_name, photo_url, \
                            auth_date, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    telegram_id: i64,
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    photo_url: Option<String>,
    auth_date: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: Uuid::parse_str(&r.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            telegram_id: r.telegram_id,
            username: r.username,
            first_name: r.first_name,
            last_name: r.last_name,
            photo_url: r.photo_url,
            auth_date: r.auth_date,
            created_at: DateTime::from_timestamp(r.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            updated_at: DateTime::from_timestamp(r.updated_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.updated_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reconcile a verified claim with the stored user.
    ///
    /// Inserts a new user populated from the claim, or overwrites the profile
    /// fields and `auth_date` of the existing row for the same `telegram_id`.
    /// The existing `id` and `created_at` are kept. Returns the merged row.
    pub async fn upsert_claim(&self, claim: &IdentityClaim) -> DbErrorResult<User> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp();

        let sql = format!(
            r#"
                INSERT INTO users (
                    id, telegram_id, username, first_name, last_name, photo_url,
                    auth_date, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(telegram_id) DO UPDATE SET
                    username = excluded.username,
                    first_name = excluded.first_name,
                    last_name = excluded.last_name,
                    photo_url = excluded.photo_url,
                    auth_date = excluded.auth_date,
                    updated_at = excluded.updated_at
                RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id)
            .bind(claim.telegram_id)
            .bind(&claim.username)
            .bind(&claim.first_name)
            .bind(&claim.last_name)
            .bind(&claim.photo_url)
            .bind(claim.auth_date)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        User::try_from(row)
    }

    /// Look up a user by Telegram id (equality on the unique index)
    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE telegram_id = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(telegram_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    /// Number of rows stored for a Telegram id (0 or 1 while the index holds)
    pub async fn count_by_telegram_id(&self, telegram_id: i64) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE telegram_id = ?")
            .bind(telegram_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Cheap round trip used by readiness checks
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
