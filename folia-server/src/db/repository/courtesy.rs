//! Courtesy Repository
//!
//! Courtesies are complimentary allocations created by the admin. The purge
//! is a destructive, unconditional reset used between events.

use super::RepoResult;
use shared::models::CourtesySummary;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<CourtesySummary>> {
    let rows = sqlx::query_as::<_, CourtesySummary>(
        "SELECT c.id, c.recipient_name, c.reason, COUNT(ci.id) AS item_count, c.created_at FROM courtesy c LEFT JOIN courtesy_item ci ON ci.courtesy_id = c.id GROUP BY c.id ORDER BY c.created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Delete every courtesy and every courtesy item, returning the counts of
/// rows removed. Children go before parents inside one transaction.
///
/// Irreversible; confirmation is a UI concern, not enforced here.
pub async fn purge_all(pool: &SqlitePool) -> RepoResult<(u64, u64)> {
    let mut tx = pool.begin().await?;

    let items = sqlx::query("DELETE FROM courtesy_item")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let courtesies = sqlx::query("DELETE FROM courtesy")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    tracing::info!(items, courtesies, "purged all courtesies");
    Ok((items, courtesies))
}
