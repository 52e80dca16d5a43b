//! Sets up the application's database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::table::create_record_tables;

/// Create the tables for the domain models if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_record_tables(&transaction)?;

    transaction.commit()?;

    Ok(())
}
