//! Postgres-backed [`CategoryStore`].
//!
//! `order_by` fields are mapped through the column allow-lists in
//! `services::category` before being pushed into SQL; values are always bound.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

use super::category::{
    CategoryError, CategoryRow, CategoryStore, ListParams, WordRow, category_order_column, word_order_column,
};

pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append `ORDER BY <allowed clauses>, <tiebreak> LIMIT $n OFFSET $m`.
fn push_order_and_page(
    builder: &mut QueryBuilder<'_, Postgres>,
    params: &ListParams,
    column: fn(&str) -> Option<&'static str>,
    tiebreak: &str,
) {
    builder.push(" ORDER BY ");
    for order in &params.order_by {
        if let Some(col) = column(&order.field) {
            builder.push(col);
            builder.push(" ");
            builder.push(order.direction.as_sql());
            builder.push(", ");
        }
    }
    builder.push(tiebreak);
    builder.push(" ASC LIMIT ");
    builder.push_bind(params.limit);
    builder.push(" OFFSET ");
    builder.push_bind(params.skip);
}

fn map_insert_error(err: sqlx::Error, name: &str) -> CategoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return CategoryError::Duplicate(name.to_owned());
    }
    CategoryError::Database(err)
}

const CATEGORY_SELECT: &str = "SELECT c.name, c.description, COUNT(w.id) AS amount
     FROM categories c
     LEFT JOIN words w ON w.category_id = c.id";

#[async_trait::async_trait]
impl CategoryStore for PgCategoryStore {
    async fn list_categories(&self, params: &ListParams) -> Result<Vec<CategoryRow>, CategoryError> {
        let mut builder = QueryBuilder::<Postgres>::new(CATEGORY_SELECT);
        builder.push(" GROUP BY c.id, c.name, c.description");
        push_order_and_page(&mut builder, params, category_order_column, "c.id");

        let rows = builder
            .build_query_as::<(String, String, i64)>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, description, amount)| CategoryRow { name, description, amount })
            .collect())
    }

    async fn get_category(&self, name: &str) -> Result<CategoryRow, CategoryError> {
        let sql = format!("{CATEGORY_SELECT} WHERE c.name = $1 GROUP BY c.id, c.name, c.description");
        let row = sqlx::query_as::<_, (String, String, i64)>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CategoryError::NotFound(name.to_owned()))?;

        Ok(CategoryRow { name: row.0, description: row.1, amount: row.2 })
    }

    async fn create_category(&self, name: &str, description: &str) -> Result<CategoryRow, CategoryError> {
        sqlx::query("INSERT INTO categories (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, name))?;

        info!(%name, "category inserted");
        Ok(CategoryRow { name: name.to_owned(), description: description.to_owned(), amount: 0 })
    }

    async fn delete_category(&self, name: &str) -> Result<u64, CategoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_words(&self, category: &str, params: &ListParams) -> Result<Vec<WordRow>, CategoryError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT w.term, w.definition
             FROM words w
             INNER JOIN categories c ON c.id = w.category_id
             WHERE c.name = ",
        );
        builder.push_bind(category);
        push_order_and_page(&mut builder, params, word_order_column, "w.id");

        let rows = builder
            .build_query_as::<(String, String)>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(term, definition)| WordRow { term, definition })
            .collect())
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    async fn live_store() -> PgCategoryStore {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect should succeed");
        sqlx::migrate!("src/db/migrations")
            .run(&pool)
            .await
            .expect("migrations should run");
        PgCategoryStore::new(pool)
    }

    #[tokio::test]
    async fn create_duplicate_then_delete_round_trip() {
        let store = live_store().await;
        let name = format!("live-test-{}", std::process::id());

        let created = store.create_category(&name, "desc").await.expect("create should succeed");
        assert_eq!(created.amount, 0);

        let dup = store.create_category(&name, "again").await;
        assert!(matches!(dup, Err(CategoryError::Duplicate(_))));

        let fetched = store.get_category(&name).await.expect("get should succeed");
        assert_eq!(fetched.description, "desc");

        assert_eq!(store.delete_category(&name).await.expect("delete should succeed"), 1);
        assert!(matches!(store.get_category(&name).await, Err(CategoryError::NotFound(_))));
    }
}
