use sea_query::{Expr, Order, Values};

use crate::datalayer::listings::query_builder::FluentSelect;
use crate::datalayer::listings::types::{OrganizationMembers, Organizations};

/// Query for the organization listing: every organization joined against its
/// members, aggregated to a `member_count` column. Organizations without
/// members still appear (LEFT JOIN counts them as zero). Ordered by name so
/// pagination-free consumers get a stable listing.
pub fn organization_listing_query() -> (String, Values) {
    FluentSelect::from(Organizations::Table)
        .column((Organizations::Table, Organizations::Id))
        .column((Organizations::Table, Organizations::Name))
        .column((Organizations::Table, Organizations::Slug))
        .column((Organizations::Table, Organizations::CreatedAt))
        .count_as(
            (OrganizationMembers::Table, OrganizationMembers::Id),
            "member_count",
        )
        .left_join(
            OrganizationMembers::Table,
            Expr::col((OrganizationMembers::Table, OrganizationMembers::OrganizationId))
                .equals((Organizations::Table, Organizations::Id)),
        )
        .group_by((Organizations::Table, Organizations::Id))
        .group_by((Organizations::Table, Organizations::Name))
        .group_by((Organizations::Table, Organizations::Slug))
        .group_by((Organizations::Table, Organizations::CreatedAt))
        .order_by((Organizations::Table, Organizations::Name), Order::Asc)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_listing_projects_member_count() {
        let (sql, values) = organization_listing_query();

        assert!(sql.contains(r#"COUNT("organization_members"."id") AS "member_count""#));
        assert!(values.0.is_empty());
    }

    #[test]
    fn test_organization_listing_left_joins_members() {
        let (sql, _) = organization_listing_query();

        assert!(sql.contains(
            r#"LEFT JOIN "organization_members" ON "organization_members"."organization_id" = "organizations"."id""#
        ));
    }

    #[test]
    fn test_organization_listing_groups_by_every_projected_column() {
        let (sql, _) = organization_listing_query();

        assert!(sql.contains(
            r#"GROUP BY "organizations"."id", "organizations"."name", "organizations"."slug", "organizations"."created_at""#
        ));
    }

    #[test]
    fn test_organization_listing_orders_by_name() {
        let (sql, _) = organization_listing_query();

        assert!(sql.ends_with(r#"ORDER BY "organizations"."name" ASC"#));
    }
}
