//! Settings used to construct a [Store](crate::Store).

use std::path::PathBuf;

use crate::latency::Latency;

/// What happens to a budget's expenses when the budget is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Leave the expenses in place. Their `budget_id` will no longer resolve
    /// to a budget, and looking the budget up returns no records.
    #[default]
    Orphan,
    /// Delete the budget's expenses together with the budget.
    Cascade,
}

/// The configuration for a [Store](crate::Store).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreConfig {
    /// File path to the SQLite database. `None` keeps the data in memory,
    /// which is lost when the store is dropped.
    pub db_path: Option<PathBuf>,

    /// The simulated delay applied to every operation.
    pub latency: Latency,

    /// How deleting a budget affects its expenses.
    pub delete_policy: DeletePolicy,
}

impl StoreConfig {
    /// An in-memory store without simulated latency.
    pub fn in_memory_without_latency() -> Self {
        Self {
            db_path: None,
            latency: Latency::None,
            delete_policy: DeletePolicy::Orphan,
        }
    }
}
