use sea_query::{Expr, Order, Values};

use crate::datalayer::listings::query_builder::FluentSelect;
use crate::datalayer::listings::types::Products;

/// Query for the molecule catalog: distinct molecule names across active
/// products. NULL molecules are excluded in SQL; the handler still runs
/// [`sanitize_molecules`] over the rows it gets back.
pub fn active_molecules_query() -> (String, Values) {
    FluentSelect::from(Products::Table)
        .distinct()
        .column(Products::Molecule)
        .filter(Products::Active, true)
        .and_where(Expr::col(Products::Molecule).is_not_null())
        .order_by(Products::Molecule, Order::Asc)
        .render()
}

/// Cleanup applied to whatever the store hands back, so the route contract
/// holds even against a store that skipped the DISTINCT or NULL guards:
/// drops NULLs and empty strings, collapses duplicates, sorts ascending.
pub fn sanitize_molecules(raw: Vec<Option<String>>) -> Vec<String> {
    let mut molecules: Vec<String> = raw
        .into_iter()
        .flatten()
        .filter(|molecule| !molecule.is_empty())
        .collect();

    molecules.sort();
    molecules.dedup();
    molecules
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::Value;

    #[test]
    fn test_active_molecules_query_sql() {
        let (sql, _) = active_molecules_query();

        assert_eq!(
            sql,
            r#"SELECT DISTINCT "molecule" FROM "products" WHERE "active" = $1 AND "molecule" IS NOT NULL ORDER BY "molecule" ASC"#
        );
    }

    #[test]
    fn test_active_molecules_query_binds_active_flag() {
        let (_, values) = active_molecules_query();

        assert_eq!(values.0.len(), 1);
        assert!(matches!(values.0[0], Value::Bool(Some(true))));
    }

    #[test]
    fn test_sanitize_drops_nulls_and_empty_strings() {
        let raw = vec![
            Some("Ibuprofeno".to_string()),
            None,
            Some(String::new()),
            Some("Amoxicilina".to_string()),
        ];

        assert_eq!(
            sanitize_molecules(raw),
            vec!["Amoxicilina".to_string(), "Ibuprofeno".to_string()]
        );
    }

    #[test]
    fn test_sanitize_collapses_duplicates() {
        let raw = vec![
            Some("Ibuprofeno".to_string()),
            Some("Ibuprofeno".to_string()),
            Some("Ibuprofeno".to_string()),
        ];

        assert_eq!(sanitize_molecules(raw), vec!["Ibuprofeno".to_string()]);
    }

    #[test]
    fn test_sanitize_sorts_ascending() {
        let raw = vec![
            Some("Paracetamol".to_string()),
            Some("Amoxicilina".to_string()),
            Some("Ibuprofeno".to_string()),
        ];

        assert_eq!(
            sanitize_molecules(raw),
            vec![
                "Amoxicilina".to_string(),
                "Ibuprofeno".to_string(),
                "Paracetamol".to_string()
            ]
        );
    }

    #[test]
    fn test_sanitize_empty_input_yields_empty_catalog() {
        assert!(sanitize_molecules(Vec::new()).is_empty());
    }
}
