use sea_query::{
    Alias, ColumnRef, Expr, Func, Iden, IntoColumnRef, Order, PostgresQueryBuilder, Query,
    SimpleExpr, Value, Values,
};

/// Fluent builder for the read-only listing queries.
///
/// Wraps sea-query's `SelectStatement` behind a small chainable surface so
/// each listing module states its projection declaratively and renders to a
/// parameterized Postgres statement. Values are always bound, never inlined
/// into the SQL text.
#[derive(Default)]
pub struct FluentSelect {
    table: Option<Alias>,
    distinct: bool,
    columns: Vec<ColumnRef>,
    aggregates: Vec<(SimpleExpr, Alias)>,
    joins: Vec<(Alias, SimpleExpr)>,
    filters: Vec<(ColumnRef, Value)>,
    conditions: Vec<SimpleExpr>,
    group_by: Vec<ColumnRef>,
    order_by: Option<(ColumnRef, Order)>,
}

impl FluentSelect {
    /// Start a SELECT against the given table
    pub fn from<T: Iden>(table: T) -> Self {
        Self {
            table: Some(Alias::new(table.to_string())),
            ..Self::default()
        }
    }

    /// Collapse duplicate result rows (SELECT DISTINCT)
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Project a column; accepts a bare column or a (table, column) pair
    pub fn column<C: IntoColumnRef>(mut self, col: C) -> Self {
        self.columns.push(col.into_column_ref());
        self
    }

    /// Project `COUNT(col) AS alias`
    pub fn count_as<C: IntoColumnRef>(mut self, col: C, alias: &str) -> Self {
        self.aggregates
            .push((Func::count(Expr::col(col)).into(), Alias::new(alias)));
        self
    }

    /// LEFT JOIN another table on the given condition
    pub fn left_join<T: Iden>(mut self, table: T, on: SimpleExpr) -> Self {
        self.joins.push((Alias::new(table.to_string()), on));
        self
    }

    /// Add an equality filter; the value is bound as a parameter
    pub fn filter<C, V>(mut self, col: C, value: V) -> Self
    where
        C: IntoColumnRef,
        V: Into<Value>,
    {
        self.filters.push((col.into_column_ref(), value.into()));
        self
    }

    /// Add an arbitrary WHERE condition (IS NOT NULL and friends)
    pub fn and_where(mut self, condition: SimpleExpr) -> Self {
        self.conditions.push(condition);
        self
    }

    /// GROUP BY a column; call once per grouped column
    pub fn group_by<C: IntoColumnRef>(mut self, col: C) -> Self {
        self.group_by.push(col.into_column_ref());
        self
    }

    /// ORDER BY a single column
    pub fn order_by<C: IntoColumnRef>(mut self, col: C, order: Order) -> Self {
        self.order_by = Some((col.into_column_ref(), order));
        self
    }

    /// Render to SQL text plus the values to bind, in placeholder order
    pub fn render(self) -> (String, Values) {
        let mut query = Query::select();

        if let Some(table) = self.table {
            query.from(table);
        }

        if self.distinct {
            query.distinct();
        }

        for col in self.columns {
            query.column(col);
        }

        for (expr, alias) in self.aggregates {
            query.expr_as(expr, alias);
        }

        for (table, on) in self.joins {
            query.left_join(table, on);
        }

        for (col, value) in self.filters {
            query.and_where(Expr::col(col).eq(value));
        }

        for condition in self.conditions {
            query.and_where(condition);
        }

        for col in self.group_by {
            query.group_by_col(col);
        }

        if let Some((col, order)) = self.order_by {
            query.order_by(col, order);
        }

        query.build(PostgresQueryBuilder)
    }
}
