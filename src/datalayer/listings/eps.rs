use sea_query::{Order, Values};

use crate::datalayer::listings::query_builder::FluentSelect;
use crate::datalayer::listings::types::Eps;

/// Query for the EPS directory: active records only, ascending by name.
/// Inactive EPS stay in the table for historical billing but never ship to
/// clients.
pub fn active_eps_query() -> (String, Values) {
    FluentSelect::from(Eps::Table)
        .column(Eps::Id)
        .column(Eps::Code)
        .column(Eps::Name)
        .filter(Eps::Active, true)
        .order_by(Eps::Name, Order::Asc)
        .render()
}
