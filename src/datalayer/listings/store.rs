use async_trait::async_trait;
use sea_query::{Value, Values};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use crate::datalayer::db_ops::{DatabaseHealth, DbManager};
use crate::datalayer::listings::eps::active_eps_query;
use crate::datalayer::listings::molecules::active_molecules_query;
use crate::datalayer::listings::organizations::organization_listing_query;
use crate::datalayer::listings::types::{EpsRow, OrganizationRow};
use crate::errors::errors::ServiceResult;

/// Read access to the relational store.
///
/// Handlers depend on this trait instead of a concrete pool, so tests swap
/// in doubles without standing up Postgres. The production implementation
/// is [`PgListingStore`].
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Every organization joined with its member aggregate, ordered by name
    async fn organization_rows(&self) -> ServiceResult<Vec<OrganizationRow>>;

    /// Active EPS records, ordered by name
    async fn active_eps_rows(&self) -> ServiceResult<Vec<EpsRow>>;

    /// Distinct molecules of active products, as the store returns them.
    /// Callers still run the defensive cleanup over these rows.
    async fn active_molecule_rows(&self) -> ServiceResult<Vec<Option<String>>>;

    /// Connectivity probe for the health route
    async fn ping(&self) -> ServiceResult<DatabaseHealth>;
}

/// Postgres-backed listing store
pub struct PgListingStore {
    db: DbManager,
}

impl PgListingStore {
    pub fn new(db: DbManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn organization_rows(&self) -> ServiceResult<Vec<OrganizationRow>> {
        let (sql, values) = organization_listing_query();
        let query = bind_values(sqlx::query_as::<Postgres, OrganizationRow>(&sql), values);
        let rows = query.fetch_all(self.db.pool()).await?;
        Ok(rows)
    }

    async fn active_eps_rows(&self) -> ServiceResult<Vec<EpsRow>> {
        let (sql, values) = active_eps_query();
        let query = bind_values(sqlx::query_as::<Postgres, EpsRow>(&sql), values);
        let rows = query.fetch_all(self.db.pool()).await?;
        Ok(rows)
    }

    async fn active_molecule_rows(&self) -> ServiceResult<Vec<Option<String>>> {
        let (sql, values) = active_molecules_query();
        let query = bind_values(sqlx::query_as::<Postgres, (Option<String>,)>(&sql), values);
        let rows = query.fetch_all(self.db.pool()).await?;
        Ok(rows.into_iter().map(|(molecule,)| molecule).collect())
    }

    async fn ping(&self) -> ServiceResult<DatabaseHealth> {
        let health = self.db.health_check().await?;
        Ok(health)
    }
}

/// Bind rendered sea-query values onto a typed sqlx query, in placeholder
/// order. The match is exhaustive over the value kinds our feature set
/// enables, so a new value kind fails compilation instead of binding wrong.
fn bind_values<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    values: Values,
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for value in values.0 {
        query = match value {
            Value::Bool(v) => query.bind(v),
            Value::TinyInt(v) => query.bind(v.map(|x| x as i16)),
            Value::SmallInt(v) => query.bind(v),
            Value::Int(v) => query.bind(v),
            Value::BigInt(v) => query.bind(v),
            Value::TinyUnsigned(v) => query.bind(v.map(|x| x as i16)),
            Value::SmallUnsigned(v) => query.bind(v.map(|x| x as i32)),
            Value::Unsigned(v) => query.bind(v.map(|x| x as i64)),
            Value::BigUnsigned(v) => query.bind(v.map(|x| x as i64)),
            Value::Float(v) => query.bind(v),
            Value::Double(v) => query.bind(v),
            Value::String(v) => query.bind(v.map(|s| *s)),
            Value::Char(v) => query.bind(v.map(|c| c.to_string())),
            Value::Bytes(v) => query.bind(v.map(|b| *b)),
            Value::ChronoDate(v) => query.bind(v.map(|d| *d)),
            Value::ChronoTime(v) => query.bind(v.map(|t| *t)),
            Value::ChronoDateTime(v) => query.bind(v.map(|dt| *dt)),
            Value::ChronoDateTimeUtc(v) => query.bind(v.map(|dt| *dt)),
            Value::ChronoDateTimeLocal(v) => query.bind(v.map(|dt| *dt)),
            Value::ChronoDateTimeWithTimeZone(v) => query.bind(v.map(|dt| *dt)),
            Value::Uuid(v) => query.bind(v.map(|u| *u)),
        };
    }
    query
}
