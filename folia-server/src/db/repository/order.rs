//! Order Repository
//!
//! Orders are created by the storefront checkout and mutated by payment
//! webhooks; this backend only reads, hard-deletes (with cascading item
//! removal) and bulk-archives them.

use super::{RepoError, RepoResult};
use shared::models::{ArchiveOptions, Order, OrderDetail, OrderItem, OrderStatus};
use sqlx::SqlitePool;

/// Paginated admin list, newest first. Archived orders are hidden unless
/// `include_archived` is set; `status` narrows to a single status.
pub async fn find_all(
    pool: &SqlitePool,
    status: Option<OrderStatus>,
    include_archived: bool,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, Order>(
        "SELECT id, customer_name, customer_email, status, payment_status, total_cents, archived_at, created_at, updated_at FROM orders WHERE (?1 IS NULL OR status = ?1) AND (?2 OR archived_at IS NULL) ORDER BY created_at DESC LIMIT ?3 OFFSET ?4",
    )
    .bind(status)
    .bind(include_archived)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let row = sqlx::query_as::<_, Order>(
        "SELECT id, customer_name, customer_email, status, payment_status, total_cents, archived_at, created_at, updated_at FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let rows = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product, size, quantity, unit_price_cents FROM order_item WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderDetail>> {
    let Some(order) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let items = find_items(pool, id).await?;
    Ok(Some(OrderDetail { order, items }))
}

/// Hard-delete an order and its items.
///
/// The existence check runs first so a missing order surfaces as a distinct
/// NotFound. Items are deleted before the parent inside one transaction —
/// no orphan survives, and no partial deletion is ever visible.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    if find_by_id(pool, id).await?.is_none() {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM order_item WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Bulk-archive orders, returning the number of rows archived.
///
/// Filter priority: an explicit `status` wins regardless of
/// `include_pendentes`; otherwise PENDENTE orders are excluded unless
/// `include_pendentes` is set. Only rows with `archived_at IS NULL` are
/// eligible, which makes a repeated call a no-op by construction. The whole
/// batch shares a single timestamp.
pub async fn archive(pool: &SqlitePool, opts: ArchiveOptions) -> RepoResult<u64> {
    let now = shared::util::now_millis();

    let result = match opts.status {
        Some(status) => {
            sqlx::query(
                "UPDATE orders SET archived_at = ?1, updated_at = ?1 WHERE archived_at IS NULL AND status = ?2",
            )
            .bind(now)
            .bind(status)
            .execute(pool)
            .await?
        }
        None if opts.include_pendentes => {
            sqlx::query("UPDATE orders SET archived_at = ?1, updated_at = ?1 WHERE archived_at IS NULL")
                .bind(now)
                .execute(pool)
                .await?
        }
        None => {
            sqlx::query(
                "UPDATE orders SET archived_at = ?1, updated_at = ?1 WHERE archived_at IS NULL AND status IN ('PAGO', 'RETIRADO', 'CANCELADO')",
            )
            .bind(now)
            .execute(pool)
            .await?
        }
    };

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory pool with one order per status, each with two items.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE orders (
                id INTEGER PRIMARY KEY,
                customer_name TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'PENDENTE',
                payment_status TEXT,
                total_cents INTEGER NOT NULL DEFAULT 0,
                archived_at INTEGER,
                created_at INTEGER NOT NULL DEFAULT 0,
                updated_at INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE order_item (
                id INTEGER PRIMARY KEY,
                order_id INTEGER NOT NULL REFERENCES orders(id),
                product TEXT NOT NULL,
                size TEXT,
                quantity INTEGER NOT NULL DEFAULT 1,
                unit_price_cents INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        for (id, status) in [
            (1, "PENDENTE"),
            (2, "PAGO"),
            (3, "RETIRADO"),
            (4, "CANCELADO"),
        ] {
            sqlx::query(
                "INSERT INTO orders (id, customer_name, customer_email, status, total_cents, created_at) VALUES (?1, 'Maria', 'maria@example.com', ?2, 11000, ?1)",
            )
            .bind(id)
            .bind(status)
            .execute(&pool)
            .await
            .unwrap();

            sqlx::query(
                "INSERT INTO order_item (order_id, product, size, quantity, unit_price_cents) VALUES (?1, 'ABADA', 'M', 1, 8000)",
            )
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
            sqlx::query(
                "INSERT INTO order_item (order_id, product, quantity, unit_price_cents) VALUES (?1, 'PULSEIRA', 1, 3000)",
            )
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
        }

        pool
    }

    async fn statuses_archived(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar::<_, String>(
            "SELECT status FROM orders WHERE archived_at IS NOT NULL ORDER BY id",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn delete_removes_order_and_items() {
        let pool = test_pool().await;
        delete(&pool, 2).await.unwrap();

        assert!(find_by_id(&pool, 2).await.unwrap().is_none());
        let orphans =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_item WHERE order_id = 2")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(orphans, 0);

        // Other orders untouched
        assert!(find_by_id(&pool, 3).await.unwrap().is_some());
        assert_eq!(find_items(&pool, 3).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() {
        let pool = test_pool().await;
        let err = delete(&pool, 999).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn archive_defaults_exclude_pendente() {
        let pool = test_pool().await;
        let count = archive(&pool, ArchiveOptions::default()).await.unwrap();
        assert_eq!(count, 3);
        assert_eq!(statuses_archived(&pool).await, ["PAGO", "RETIRADO", "CANCELADO"]);
    }

    #[tokio::test]
    async fn archive_include_pendentes_takes_everything() {
        let pool = test_pool().await;
        let count = archive(
            &pool,
            ArchiveOptions {
                include_pendentes: true,
                status: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn archive_explicit_status_wins_over_include_pendentes() {
        let pool = test_pool().await;
        let count = archive(
            &pool,
            ArchiveOptions {
                include_pendentes: true,
                status: Some(OrderStatus::Pago),
            },
        )
        .await
        .unwrap();
        assert_eq!(count, 1);
        assert_eq!(statuses_archived(&pool).await, ["PAGO"]);
    }

    #[tokio::test]
    async fn archive_twice_is_idempotent() {
        let pool = test_pool().await;
        assert_eq!(archive(&pool, ArchiveOptions::default()).await.unwrap(), 3);
        assert_eq!(archive(&pool, ArchiveOptions::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn archive_batch_shares_one_timestamp() {
        let pool = test_pool().await;
        archive(&pool, ArchiveOptions::default()).await.unwrap();
        let distinct = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT archived_at) FROM orders WHERE archived_at IS NOT NULL",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(distinct, 1);
    }

    #[tokio::test]
    async fn list_hides_archived_by_default() {
        let pool = test_pool().await;
        archive(&pool, ArchiveOptions::default()).await.unwrap();

        let visible = find_all(&pool, None, false, 50, 0).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].status, OrderStatus::Pendente);

        let all = find_all(&pool, None, true, 50, 0).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let pool = test_pool().await;
        let pagos = find_all(&pool, Some(OrderStatus::Pago), false, 50, 0)
            .await
            .unwrap();
        assert_eq!(pagos.len(), 1);
        assert_eq!(pagos[0].id, 2);
    }

    #[tokio::test]
    async fn detail_includes_items() {
        let pool = test_pool().await;
        let detail = find_detail(&pool, 1).await.unwrap().unwrap();
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[0].product, "ABADA");
    }
}
