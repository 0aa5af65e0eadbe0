//! Pricing Lot Repository
//!
//! Owns the single-active-lot invariant: activation deactivates every other
//! lot and activates the target inside one transaction, so no reader ever
//! observes two active lots.

use super::{RepoError, RepoResult};
use shared::models::{Lot, LotCreate, LotUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Lot>> {
    let rows = sqlx::query_as::<_, Lot>(
        "SELECT id, name, abada_price_cents, pulseira_price_cents, active, created_at, updated_at FROM lot ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Lot>> {
    let row = sqlx::query_as::<_, Lot>(
        "SELECT id, name, abada_price_cents, pulseira_price_cents, active, created_at, updated_at FROM lot WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// The currently active lot, if any. The system guarantees at most one.
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Option<Lot>> {
    let row = sqlx::query_as::<_, Lot>(
        "SELECT id, name, abada_price_cents, pulseira_price_cents, active, created_at, updated_at FROM lot WHERE active = 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn count_active(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lot WHERE active = 1")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Create a lot. New lots are never active implicitly; activation only goes
/// through [`activate`].
pub async fn create(pool: &SqlitePool, data: LotCreate) -> RepoResult<Lot> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO lot (id, name, abada_price_cents, pulseira_price_cents, active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.abada_price_cents)
    .bind(data.pulseira_price_cents)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create lot".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: LotUpdate) -> RepoResult<Lot> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE lot SET name = COALESCE(?1, name), abada_price_cents = COALESCE(?2, abada_price_cents), pulseira_price_cents = COALESCE(?3, pulseira_price_cents), updated_at = ?4 WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(data.abada_price_cents)
    .bind(data.pulseira_price_cents)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Lot {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Lot {id} not found")))
}

/// Activate a lot, deactivating all others atomically.
///
/// Inside one transaction: existence check, deactivation sweep, target
/// activation, then a recount of active lots (diagnostic, expected 1).
/// A missing id rolls everything back — the set of active lots is unchanged.
/// Re-running with the same id is a state no-op.
pub async fn activate(pool: &SqlitePool, id: i64) -> RepoResult<(Lot, i64)> {
    let now = shared::util::now_millis();
    // IMMEDIATE takes the write lock up front. The transaction opens with a
    // read, and under WAL a deferred read-to-write upgrade fails with
    // SQLITE_BUSY instead of honoring busy_timeout; with IMMEDIATE,
    // concurrent activations queue on the lock and serialize.
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

    // Existence check inside the transaction so the sweep below never commits
    // against a missing target
    let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lot WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    if exists == 0 {
        return Err(RepoError::NotFound(format!("Lot {id} not found")));
    }

    sqlx::query("UPDATE lot SET active = 0, updated_at = ?1 WHERE active = 1")
        .bind(now)
        .execute(&mut *tx)
        .await?;

    sqlx::query("UPDATE lot SET active = 1, updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let active_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM lot WHERE active = 1")
        .fetch_one(&mut *tx)
        .await?;

    let lot = sqlx::query_as::<_, Lot>(
        "SELECT id, name, abada_price_cents, pulseira_price_cents, active, created_at, updated_at FROM lot WHERE id = ?",
    )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    if active_count != 1 {
        tracing::warn!(active_count, lot_id = id, "active lot count is not 1 after activation");
    }

    Ok((lot, active_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory SQLite pool with the lot schema and three seeded lots,
    /// lot 1 active.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE lot (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                abada_price_cents INTEGER NOT NULL,
                pulseira_price_cents INTEGER NOT NULL,
                active INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query("INSERT INTO lot (id, name, abada_price_cents, pulseira_price_cents, active) VALUES (1, 'Lote 1', 8000, 3000, 1)")
            .execute(&pool).await.unwrap();
        sqlx::query("INSERT INTO lot (id, name, abada_price_cents, pulseira_price_cents, active) VALUES (2, 'Lote 2', 9000, 3500, 0)")
            .execute(&pool).await.unwrap();
        sqlx::query("INSERT INTO lot (id, name, abada_price_cents, pulseira_price_cents, active) VALUES (3, 'Lote 3', 10000, 4000, 0)")
            .execute(&pool).await.unwrap();

        pool
    }

    #[tokio::test]
    async fn activate_switches_active_lot() {
        let pool = test_pool().await;
        let (lot, active_count) = activate(&pool, 2).await.unwrap();
        assert_eq!(lot.id, 2);
        assert!(lot.active);
        assert_eq!(active_count, 1);

        let active = find_active(&pool).await.unwrap().unwrap();
        assert_eq!(active.id, 2);
    }

    #[tokio::test]
    async fn exactly_one_active_after_each_activation() {
        let pool = test_pool().await;
        for id in [2, 3, 1, 3, 2] {
            let (_, active_count) = activate(&pool, id).await.unwrap();
            assert_eq!(active_count, 1);
            assert_eq!(count_active(&pool).await.unwrap(), 1);
            assert_eq!(find_active(&pool).await.unwrap().unwrap().id, id);
        }
    }

    #[tokio::test]
    async fn activate_same_lot_is_noop() {
        let pool = test_pool().await;
        activate(&pool, 2).await.unwrap();
        let (lot, active_count) = activate(&pool, 2).await.unwrap();
        assert_eq!(lot.id, 2);
        assert_eq!(active_count, 1);
    }

    #[tokio::test]
    async fn activate_missing_lot_leaves_state_unchanged() {
        let pool = test_pool().await;
        let err = activate(&pool, 999).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        // Lot 1 is still the one active lot
        assert_eq!(find_active(&pool).await.unwrap().unwrap().id, 1);
        assert_eq!(count_active(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_is_never_active() {
        let pool = test_pool().await;
        let lot = create(
            &pool,
            LotCreate {
                name: "Lote Virada".into(),
                abada_price_cents: 12000,
                pulseira_price_cents: 5000,
            },
        )
        .await
        .unwrap();
        assert!(!lot.active);
        assert_eq!(find_active(&pool).await.unwrap().unwrap().id, 1);
    }

    #[tokio::test]
    async fn update_does_not_touch_active_flag() {
        let pool = test_pool().await;
        let lot = update(
            &pool,
            1,
            LotUpdate {
                name: Some("Lote Promocional".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(lot.name, "Lote Promocional");
        assert!(lot.active);
    }

    #[tokio::test]
    async fn update_missing_lot_is_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, 42, LotUpdate::default()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    /// Concurrent activations must serialize on the write lock, not fail
    /// with SQLITE_BUSY. Needs a file-backed pool so both tasks see the same
    /// database across connections.
    #[tokio::test]
    async fn concurrent_activations_serialize() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lots.db");
        let db = crate::db::DbService::new(path.to_str().unwrap())
            .await
            .unwrap();

        for id in [1_i64, 2, 3] {
            sqlx::query(
                "INSERT INTO lot (id, name, abada_price_cents, pulseira_price_cents, active, created_at, updated_at) VALUES (?1, 'Lote', 8000, 3000, 0, ?1, ?1)",
            )
            .bind(id)
            .execute(&db.pool)
            .await
            .unwrap();
        }

        let (a, b) = tokio::join!(activate(&db.pool, 2), activate(&db.pool, 3));
        a.unwrap();
        b.unwrap();

        assert_eq!(count_active(&db.pool).await.unwrap(), 1);
        let winner = find_active(&db.pool).await.unwrap().unwrap().id;
        assert!(winner == 2 || winner == 3);
    }
}
