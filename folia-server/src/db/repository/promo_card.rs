//! Promo Card Repository

use super::{RepoError, RepoResult};
use shared::models::{PromoCard, PromoCardDetail, PromoCardMedia};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<PromoCard>> {
    let rows = sqlx::query_as::<_, PromoCard>(
        "SELECT id, title, body, created_at, updated_at FROM promo_card ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_media(pool: &SqlitePool, card_id: i64) -> RepoResult<Vec<PromoCardMedia>> {
    let rows = sqlx::query_as::<_, PromoCardMedia>(
        "SELECT id, promo_card_id, url, media_type, display_order FROM promo_card_media WHERE promo_card_id = ? ORDER BY display_order, id",
    )
    .bind(card_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Cards with their media, ordered by `display_order` (storefront view)
pub async fn find_all_with_media(pool: &SqlitePool) -> RepoResult<Vec<PromoCardDetail>> {
    let cards = find_all(pool).await?;
    let mut out = Vec::with_capacity(cards.len());
    for card in cards {
        let media = find_media(pool, card.id).await?;
        out.push(PromoCardDetail { card, media });
    }
    Ok(out)
}

/// Delete one media row. The delete is keyed on the media id (unique); the
/// owning card id constrains the address so a mismatched card reads as
/// missing. Zero rows affected maps to NotFound, sibling ordering is left
/// untouched.
pub async fn delete_media(pool: &SqlitePool, card_id: i64, media_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM promo_card_media WHERE id = ?1 AND promo_card_id = ?2")
        .bind(media_id)
        .bind(card_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Media {media_id} not found on card {card_id}"
        )));
    }
    Ok(())
}
