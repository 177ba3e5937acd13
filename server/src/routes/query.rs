//! Query-string parsing shared by the list endpoints.
//!
//! Bad values never fail the request: unparsable or out-of-range numbers fall
//! back to their defaults and malformed `order_by` clauses are dropped.

use serde::Deserialize;

use crate::services::category::{Direction, ListParams, OrderBy};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_SKIP: i64 = 0;
pub const MAX_SKIP: i64 = 2_147_483_647;

/// Raw `?limit=&skip=&order_by=` parameters. `order_by` may repeat, which is
/// why this is read through `axum_extra::extract::Query`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub skip: Option<String>,
    #[serde(default)]
    pub order_by: Vec<String>,
}

impl ListQuery {
    #[must_use]
    pub fn into_params(self) -> ListParams {
        ListParams {
            limit: parse_number(self.limit.as_deref(), DEFAULT_LIMIT, 1, MAX_LIMIT),
            skip: parse_number(self.skip.as_deref(), DEFAULT_SKIP, 0, MAX_SKIP),
            order_by: self.order_by.iter().filter_map(|raw| parse_order_by(raw)).collect(),
        }
    }
}

/// Parse `input` as an integer in `min..=max`, else `default`.
#[must_use]
pub fn parse_number(input: Option<&str>, default: i64, min: i64, max: i64) -> i64 {
    input
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| (min..=max).contains(n))
        .unwrap_or(default)
}

/// Parse `"<field> <direction>"`, split on single spaces. Only `desc` and
/// `DESC` sort descending; any other direction is ascending.
#[must_use]
pub fn parse_order_by(raw: &str) -> Option<OrderBy> {
    let mut tokens = raw.split(' ');
    let (Some(field), Some(direction), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };
    if field.is_empty() {
        return None;
    }
    let direction = match direction {
        "desc" | "DESC" => Direction::Desc,
        _ => Direction::Asc,
    };
    Some(OrderBy { field: field.to_owned(), direction })
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
