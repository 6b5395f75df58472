use crate::schema::aggregates;
use crate::schema::nested_ids;

use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = aggregates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AggregateRow {
  pub id: i32,
  pub kind: String,
  pub position: i32,
  pub body: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = aggregates)]
pub struct NewAggregateRow<'a> {
  pub kind: &'a str,
  pub position: i32,
  pub body: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = nested_ids)]
pub struct NewNestedIdRow {
  pub root_id: i32,
}
