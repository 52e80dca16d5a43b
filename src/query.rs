//! Owner-scoped lookups with an optional single field filter.

use std::{fmt::Display, str::FromStr};

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    record::{Category, Record, UserId},
    table::{all_records, row_mapper, select_columns},
};

/// A record field that can be used in a [Predicate].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The record ID.
    Id,
    /// The record name.
    Name,
    /// Only expenses have this field.
    BudgetId,
    /// Only budgets have this field.
    Color,
}

impl Field {
    /// The column for this field in `category`'s table, or `None` if records
    /// of that category do not have the field.
    fn column(&self, category: Category) -> Option<&'static str> {
        match (self, category) {
            (Field::Id, _) => Some("id"),
            (Field::Name, _) => Some("name"),
            (Field::BudgetId, Category::Expenses) => Some("budget_id"),
            (Field::Color, Category::Budgets) => Some("color"),
            (Field::BudgetId, Category::Budgets) | (Field::Color, Category::Expenses) => None,
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "budgetId" | "budget_id" => Ok(Field::BudgetId),
            "color" => Ok(Field::Color),
            other => Err(Error::Validation(format!("\"{other}\" is not a record field"))),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::BudgetId => "budgetId",
            Field::Color => "color",
        };

        write!(f, "{name}")
    }
}

/// An equality test on one field, e.g. `budgetId == "abc"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// The field to compare.
    pub field: Field,
    /// The value the field must be equal to.
    pub value: String,
}

impl Predicate {
    /// Create a predicate that tests `field == value`.
    pub fn new(field: Field, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}

/// Retrieve the records in `category` owned by `user_id` that satisfy
/// `predicate`, in insertion order.
///
/// Without a predicate this returns all of the owner's records. A predicate
/// on a field the category does not have matches nothing. No matches is not
/// an error, an empty vector is returned instead.
pub fn match_records(
    category: Category,
    user_id: &UserId,
    predicate: Option<&Predicate>,
    connection: &Connection,
) -> Result<Vec<Record>, Error> {
    let Some(predicate) = predicate else {
        return all_records(category, user_id, connection);
    };

    let Some(column) = predicate.field.column(category) else {
        tracing::debug!(
            "{} has no field {}, returning no matches",
            category,
            predicate.field
        );
        return Ok(Vec::new());
    };

    let query = format!(
        "SELECT {} FROM {} WHERE user_id = :user_id AND {column} = :value ORDER BY rowid ASC;",
        select_columns(category),
        category.table_name(),
    );

    connection
        .prepare(&query)?
        .query_map(
            &[
                (":user_id", user_id.as_ref()),
                (":value", predicate.value.as_str()),
            ],
            row_mapper(category),
        )?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}
