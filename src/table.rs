//! Database operations for the budget and expense tables.
//!
//! Each category lives in its own table. Rows are keyed by `(user_id, id)` and
//! every function here takes the owner's ID, so one user's records are never
//! read or removed on behalf of another user.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    id::RecordId,
    record::{Budget, BudgetColor, Category, Expense, Record, RecordName, UserId},
};

const BUDGET_COLUMNS: &str = "id, user_id, name, amount, color, created_at";
const EXPENSE_COLUMNS: &str = "id, user_id, name, amount, budget_id, created_at";

/// Create the budget and expense tables if they do not exist yet.
pub fn create_record_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            color TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (user_id, id)
        );

        CREATE TABLE IF NOT EXISTS expense (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            budget_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (user_id, id)
        );

        CREATE INDEX IF NOT EXISTS idx_expense_budget ON expense(user_id, budget_id);",
    )?;

    Ok(())
}

/// Retrieve every record in `category` owned by `user_id`, oldest first.
pub fn all_records(
    category: Category,
    user_id: &UserId,
    connection: &Connection,
) -> Result<Vec<Record>, Error> {
    let query = format!(
        "SELECT {} FROM {} WHERE user_id = :user_id ORDER BY rowid ASC;",
        select_columns(category),
        category.table_name()
    );

    connection
        .prepare(&query)?
        .query_map(&[(":user_id", user_id.as_ref())], row_mapper(category))?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Count the records in `category` owned by `user_id`.
pub fn count_records(
    category: Category,
    user_id: &UserId,
    connection: &Connection,
) -> Result<usize, Error> {
    let query = format!(
        "SELECT COUNT(id) FROM {} WHERE user_id = ?1;",
        category.table_name()
    );

    let count: i64 = connection.query_row(&query, [user_id.as_ref()], |row| row.get(0))?;

    usize::try_from(count).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, count).into())
}

/// Append a record to the table for its category.
///
/// # Errors
///
/// Returns an [Error::Validation] if the record has a blank owner, a blank name
/// or an amount that is not a positive number, and [Error::DuplicateRecordId]
/// if the owner already has a record with the same ID.
pub fn insert_record(record: &Record, connection: &Connection) -> Result<(), Error> {
    record.validate()?;

    match record {
        Record::Budget(budget) => connection.execute(
            "INSERT INTO budget (id, user_id, name, amount, color, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            (
                budget.id.as_ref(),
                budget.user_id.as_ref(),
                budget.name.as_ref(),
                budget.amount,
                budget.color.as_ref(),
                budget.created_at,
            ),
        )?,
        Record::Expense(expense) => connection.execute(
            "INSERT INTO expense (id, user_id, name, amount, budget_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            (
                expense.id.as_ref(),
                expense.user_id.as_ref(),
                expense.name.as_ref(),
                expense.amount,
                expense.budget_id.as_ref(),
                expense.created_at,
            ),
        )?,
    };

    Ok(())
}

/// Delete the record with `id` owned by `user_id`.
///
/// # Errors
///
/// Returns [Error::NotFound] if no such record exists, including when the ID
/// belongs to a record of another user.
pub fn remove_record(
    category: Category,
    id: &RecordId,
    user_id: &UserId,
    connection: &Connection,
) -> Result<(), Error> {
    let query = format!(
        "DELETE FROM {} WHERE id = ?1 AND user_id = ?2;",
        category.table_name()
    );
    let rows_affected = connection.execute(&query, (id.as_ref(), user_id.as_ref()))?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete every expense owned by `user_id` that refers to `budget_id`.
///
/// Returns the number of expenses removed, which may be zero.
pub fn remove_expenses_for_budget(
    budget_id: &RecordId,
    user_id: &UserId,
    connection: &Connection,
) -> Result<usize, Error> {
    connection
        .execute(
            "DELETE FROM expense WHERE budget_id = ?1 AND user_id = ?2;",
            (budget_id.as_ref(), user_id.as_ref()),
        )
        .map_err(|error| error.into())
}

pub(crate) fn select_columns(category: Category) -> &'static str {
    match category {
        Category::Budgets => BUDGET_COLUMNS,
        Category::Expenses => EXPENSE_COLUMNS,
    }
}

pub(crate) fn row_mapper(category: Category) -> fn(&Row) -> Result<Record, rusqlite::Error> {
    match category {
        Category::Budgets => map_budget_row,
        Category::Expenses => map_expense_row,
    }
}

fn map_budget_row(row: &Row) -> Result<Record, rusqlite::Error> {
    let raw_id: String = row.get(0)?;
    let raw_user_id: String = row.get(1)?;
    let raw_name: String = row.get(2)?;
    let amount = row.get(3)?;
    let raw_color: String = row.get(4)?;
    let created_at = row.get(5)?;

    Ok(Record::Budget(Budget {
        id: RecordId::new(&raw_id),
        user_id: UserId::new_unchecked(&raw_user_id),
        name: RecordName::new_unchecked(&raw_name),
        amount,
        color: BudgetColor::new_unchecked(&raw_color),
        created_at,
    }))
}

fn map_expense_row(row: &Row) -> Result<Record, rusqlite::Error> {
    let raw_id: String = row.get(0)?;
    let raw_user_id: String = row.get(1)?;
    let raw_name: String = row.get(2)?;
    let amount = row.get(3)?;
    let raw_budget_id: String = row.get(4)?;
    let created_at = row.get(5)?;

    Ok(Record::Expense(Expense {
        id: RecordId::new(&raw_id),
        user_id: UserId::new_unchecked(&raw_user_id),
        name: RecordName::new_unchecked(&raw_name),
        amount,
        budget_id: RecordId::new(&raw_budget_id),
        created_at,
    }))
}
