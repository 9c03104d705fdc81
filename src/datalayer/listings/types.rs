use chrono::{DateTime, Utc};
use sea_query::Iden;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

// ===== TABLE IDENTIFIERS =====

/// `organizations` table
#[derive(Debug, Clone, Copy)]
pub enum Organizations {
    Table,
    Id,
    Name,
    Slug,
    CreatedAt,
}

impl Iden for Organizations {
    fn unquoted(&self, s: &mut dyn fmt::Write) {
        let ident = match self {
            Organizations::Table => "organizations",
            Organizations::Id => "id",
            Organizations::Name => "name",
            Organizations::Slug => "slug",
            Organizations::CreatedAt => "created_at",
        };
        write!(s, "{}", ident).unwrap();
    }
}

/// `organization_members` table, joined for the member aggregate
#[derive(Debug, Clone, Copy)]
pub enum OrganizationMembers {
    Table,
    Id,
    OrganizationId,
}

impl Iden for OrganizationMembers {
    fn unquoted(&self, s: &mut dyn fmt::Write) {
        let ident = match self {
            OrganizationMembers::Table => "organization_members",
            OrganizationMembers::Id => "id",
            OrganizationMembers::OrganizationId => "organization_id",
        };
        write!(s, "{}", ident).unwrap();
    }
}

/// `eps` table (health insurance providers)
#[derive(Debug, Clone, Copy)]
pub enum Eps {
    Table,
    Id,
    Code,
    Name,
    Active,
}

impl Iden for Eps {
    fn unquoted(&self, s: &mut dyn fmt::Write) {
        let ident = match self {
            Eps::Table => "eps",
            Eps::Id => "id",
            Eps::Code => "code",
            Eps::Name => "name",
            Eps::Active => "active",
        };
        write!(s, "{}", ident).unwrap();
    }
}

/// `products` table; only the columns the molecule listing touches
#[derive(Debug, Clone, Copy)]
pub enum Products {
    Table,
    Molecule,
    Active,
}

impl Iden for Products {
    fn unquoted(&self, s: &mut dyn fmt::Write) {
        let ident = match self {
            Products::Table => "products",
            Products::Molecule => "molecule",
            Products::Active => "active",
        };
        write!(s, "{}", ident).unwrap();
    }
}

// ===== ROW TYPES =====

/// One organization with its aggregated member count, as projected by the
/// listing query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrganizationRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub member_count: i64,
}

/// One active EPS record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EpsRow {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}
