//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;
pub mod user_token;

#[cfg(test)]
mod test;

use sea_orm::{
    sea_query::LikeExpr, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QuerySelect, Select,
};

use crate::server::util::pagination::ListParams;

const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `search` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped so user input never
/// acts as a wildcard.
pub(crate) fn substring_pattern(search: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// Maps the listing's sort direction onto a SeaORM order.
pub(crate) fn sort_direction(params: &ListParams) -> Order {
    if params.ascending {
        Order::Asc
    } else {
        Order::Desc
    }
}

/// Fetches one page of a filtered, sorted query along with the total row count.
///
/// When the listing asks for every row the query runs without a limit and the
/// total is the number of rows returned. A page beyond the last row yields no
/// rows but still reports the total.
///
/// # Arguments
/// - `db` - Database connection
/// - `query` - Filtered and ordered select
/// - `params` - Page size and 1-based page number
///
/// # Returns
/// - `Ok((models, total))` - Rows for the page and rows matching the filter
/// - `Err(DbErr)` - Database error during count or fetch
pub(crate) async fn fetch_page<E>(
    db: &DatabaseConnection,
    query: Select<E>,
    params: &ListParams,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    match params.per_page {
        Some(per_page) => {
            let total = query.clone().count(db).await?;
            // Pages past the end, including ones whose offset overflows, are empty.
            let offset = match (params.page - 1).checked_mul(per_page) {
                Some(offset) if offset < total => offset,
                _ => return Ok((Vec::new(), total)),
            };
            let models = query.offset(offset).limit(per_page).all(db).await?;
            Ok((models, total))
        }
        None => {
            let models = query.all(db).await?;
            let total = models.len() as u64;
            Ok((models, total))
        }
    }
}
