//! Document store backed by PostgreSQL `JSONB`.
//!
//! Every collection is a table inside one schema:
//! `row_id BIGSERIAL` (internal key), `doc_id TEXT UNIQUE` (the application `id`),
//! `body JSONB` (the whole document, `id` included).

use super::{
    check_ident, check_list_options, format_timestamp, record_id, strip_protected,
    timestamp_now, Document, DocumentStore, Filter, ListOptions, StoreError, StoreResult,
    CREATED_AT_FIELD, UPDATED_AT_FIELD,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

/// Renders a timestamptz expression the same way [`format_timestamp`] does.
const SQL_TIMESTAMP_FORMAT: &str = r#"'YYYY-MM-DD"T"HH24:MI:SS.US"Z"'"#;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
    schema: String,
}

impl PgDocumentStore {
    /// Connects a pool and checks the schema name. Collections are created lazily
    /// through [`DocumentStore::ensure_collection`].
    pub async fn connect(
        database_url: &str,
        schema: &str,
        max_connections: u32,
    ) -> StoreResult<Self> {
        check_ident(schema)?;
        let pool = PgPoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(database_url)
            .await?;
        Ok(Self {
            pool,
            schema: schema.to_string(),
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn table(&self, collection: &str) -> StoreResult<String> {
        check_ident(collection)?;
        Ok(format!("\"{}\".\"{}\"", self.schema, collection))
    }
}

fn push_where(qb: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    let mut first = true;
    for (field, value) in filter.iter() {
        qb.push(if first { " WHERE " } else { " AND " });
        first = false;
        qb.push("body -> '")
            .push(field)
            .push("' = ")
            .push_bind(value.clone())
            .push("::jsonb");
    }
}

fn body_of(row: &PgRow) -> StoreResult<Document> {
    let body: JsonValue = row.try_get("body")?;
    match body {
        JsonValue::Object(doc) => Ok(doc),
        other => Err(StoreError::InvalidRecord(format!(
            "stored body is not an object: {}",
            other
        ))),
    }
}

fn map_insert_error(err: sqlx::Error, collection: &str, id: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateId {
                collection: collection.to_string(),
                id: id.to_string(),
            };
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn ensure_collection(&self, collection: &str) -> StoreResult<()> {
        let table = self.table(collection)?;

        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", self.schema))
            .execute(&self.pool)
            .await?;

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                row_id BIGSERIAL PRIMARY KEY,
                doc_id TEXT NOT NULL UNIQUE,
                body JSONB NOT NULL
            )",
            table
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create(&self, collection: &str, mut record: Document) -> StoreResult<Document> {
        let table = self.table(collection)?;
        let id = record_id(&record)?;

        let now = JsonValue::String(format_timestamp(&timestamp_now()));
        record.insert(CREATED_AT_FIELD.to_string(), now.clone());
        record.insert(UPDATED_AT_FIELD.to_string(), now);

        let row = sqlx::query(&format!(
            "INSERT INTO {} (doc_id, body) VALUES ($1, $2::jsonb) RETURNING body",
            table
        ))
        .bind(&id)
        .bind(JsonValue::Object(record))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, collection, &id))?;

        body_of(&row)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let table = self.table(collection)?;
        let row = sqlx::query(&format!("SELECT body FROM {} WHERE doc_id = $1", table))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(body_of).transpose()
    }

    async fn list(&self, collection: &str, options: &ListOptions) -> StoreResult<Vec<Document>> {
        let table = self.table(collection)?;
        check_list_options(options)?;

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT body FROM ");
        qb.push(&table);
        push_where(&mut qb, &options.filter);

        // Missing fields sort like JSON null; row_id keeps ties in insertion order.
        qb.push(" ORDER BY ");
        for key in &options.sort {
            qb.push("COALESCE(body -> '")
                .push(&key.field)
                .push("', 'null'::jsonb) ")
                .push(key.direction.as_sql())
                .push(", ");
        }
        qb.push("row_id ASC");

        // OFFSET/LIMIT are BIGINT; larger values mean "past the end" / "unbounded".
        if let Some(skip) = options.skip {
            qb.push(" OFFSET ").push_bind(i64::try_from(skip).unwrap_or(i64::MAX));
        }
        if let Some(limit) = options.limit {
            qb.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.iter().map(body_of).collect()
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        let table = self.table(collection)?;
        let fields = strip_protected(fields);

        // updated_at never moves backwards, even when two writes share a microsecond.
        let sql = format!(
            "UPDATE {table} SET body = body || $1::jsonb || jsonb_build_object(
                '{updated}',
                to_char(
                    GREATEST($2::timestamptz, (body ->> '{updated}')::timestamptz + interval '1 microsecond')
                        AT TIME ZONE 'UTC',
                    {format}
                )
            )
            WHERE doc_id = $3
            RETURNING body",
            table = table,
            updated = UPDATED_AT_FIELD,
            format = SQL_TIMESTAMP_FORMAT,
        );

        let row = sqlx::query(&sql)
            .bind(JsonValue::Object(fields))
            .bind(timestamp_now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(body_of).transpose()
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let table = self.table(collection)?;
        let result = sqlx::query(&format!("DELETE FROM {} WHERE doc_id = $1", table))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let table = self.table(collection)?;
        for (field, _) in filter.iter() {
            check_ident(field)?;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM ");
        qb.push(&table);
        push_where(&mut qb, filter);

        let count: i64 = qb.build_query_scalar::<i64>().fetch_one(&self.pool).await?;
        Ok(count.max(0) as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
