//! Budget Store keeps the budgets and expenses of a personal budgeting app.
//!
//! Records are partitioned by the user that owns them and grouped into two
//! categories, "budgets" and "expenses". Every operation on [Store] is
//! asynchronous and waits for a configurable, simulated [Latency] so that
//! callers can exercise their loading states.
//!
//! ```no_run
//! use budget_store::{Category, NewBudget, Store, StoreConfig};
//!
//! # async fn example() -> Result<(), budget_store::Error> {
//! let store = Store::open(&StoreConfig::default())?;
//! let budget = store
//!     .create_budget(NewBudget {
//!         name: "Groceries".to_owned(),
//!         amount: Some(300.0),
//!         user_id: Some("u1".to_owned()),
//!     })
//!     .await?;
//! let budgets = store.fetch_all(Category::Budgets, Some("u1")).await?;
//! assert_eq!(budgets[0].id(), &budget.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod db;
mod error;
mod id;
mod latency;
mod query;
mod record;
mod store;
mod summary;
mod table;

pub use config::{DeletePolicy, StoreConfig};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use id::RecordId;
pub use latency::Latency;
pub use query::{Field, Predicate};
pub use record::{Budget, BudgetColor, Category, Expense, Record, RecordName, UserId};
pub use store::{DeleteRequest, MatchQuery, NewBudget, NewExpense, Store};
pub use summary::{BudgetOverview, RECENT_EXPENSES_LIMIT};
