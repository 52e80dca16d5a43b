//! The public operations of the store.
//!
//! [Store] is the only way to reach the budget and expense tables. Every
//! operation waits for the configured [Latency] first, then resolves the
//! caller's user ID, validates the input and finally runs its single database
//! effect while holding the connection lock.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    Error,
    config::{DeletePolicy, StoreConfig},
    db::initialize,
    id::RecordId,
    latency::Latency,
    query::{Field, Predicate, match_records},
    record::{Budget, BudgetColor, Category, Expense, Record, RecordName, UserId, validate_amount},
    summary::{BudgetOverview, budget_overviews, recent_expenses},
    table::{all_records, count_records, insert_record, remove_expenses_for_budget, remove_record},
};

/// The input for [Store::create_budget].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    /// Must not be empty.
    pub name: String,
    /// Must be a positive number.
    pub amount: Option<f64>,
    /// The signed in user, if any.
    pub user_id: Option<String>,
}

/// The input for [Store::create_expense].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    /// Must not be empty.
    pub name: String,
    /// Must be a positive number.
    pub amount: Option<f64>,
    /// The budget to record the expense against. Must not be empty.
    pub budget_id: String,
    /// The signed in user, if any.
    pub user_id: Option<String>,
}

/// The input for [Store::find_matching].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    /// The category to search.
    pub category: Category,
    /// The field to compare.
    pub key: Field,
    /// The value `key` must be equal to.
    pub value: String,
    /// The signed in user, if any.
    pub user_id: Option<String>,
}

/// The input for [Store::delete_record].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    /// The category the record is in.
    pub category: Category,
    /// The ID of the record to delete.
    pub id: String,
    /// The signed in user, if any.
    pub user_id: Option<String>,
}

/// Stores budgets and expenses for any number of users.
///
/// Create one store per process and clone it to share it, clones refer to the
/// same database connection.
#[derive(Debug, Clone)]
pub struct Store {
    connection: Arc<Mutex<Connection>>,
    latency: Latency,
    delete_policy: DeletePolicy,
}

impl Store {
    /// Create a store from an open SQLite connection.
    ///
    /// This function will initialize the database by adding the tables for the records.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        connection: Connection,
        latency: Latency,
        delete_policy: DeletePolicy,
    ) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
            latency,
            delete_policy,
        })
    }

    /// Open the database described by `config` and create a store for it.
    ///
    /// # Errors
    /// Returns an error if the database file cannot be opened or initialized.
    pub fn open(config: &StoreConfig) -> Result<Self, Error> {
        let connection = match &config.db_path {
            Some(path) => {
                tracing::debug!("Opening database at {}", path.display());
                Connection::open(path)?
            }
            None => {
                tracing::debug!("Opening in-memory database");
                Connection::open_in_memory()?
            }
        };

        Self::new(connection, config.latency, config.delete_policy)
    }

    /// Get every record in `category` owned by `user_id`, in the order they were created.
    ///
    /// # Errors
    /// Returns [Error::AuthRequired] if `user_id` is missing or blank.
    pub async fn fetch_all(
        &self,
        category: Category,
        user_id: Option<&str>,
    ) -> Result<Vec<Record>, Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(user_id)?;

        let connection = self.lock()?;
        let records = all_records(category, &user_id, &connection)?;
        tracing::debug!(
            "Fetched {} {} for user {}",
            records.len(),
            category,
            user_id
        );

        Ok(records)
    }

    /// Get the records owned by the user in `query` whose `key` field equals `value`.
    ///
    /// Returns an empty vector when nothing matches, e.g. when looking up the
    /// budget of an expense whose budget has been deleted.
    ///
    /// # Errors
    /// Returns [Error::AuthRequired] if the user ID is missing or blank.
    pub async fn find_matching(&self, query: MatchQuery) -> Result<Vec<Record>, Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(query.user_id.as_deref())?;
        let predicate = Predicate::new(query.key, &query.value);

        let connection = self.lock()?;
        let records = match_records(query.category, &user_id, Some(&predicate), &connection)?;
        tracing::debug!(
            "Found {} {} with {} = {:?} for user {}",
            records.len(),
            query.category,
            query.key,
            query.value,
            user_id
        );

        Ok(records)
    }

    /// Create a budget and return it with its generated ID, colour and creation time.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::AuthRequired] if the user ID is missing or blank,
    /// - [Error::Validation] if the name is empty or the amount is missing or not positive.
    pub async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget, Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(new_budget.user_id.as_deref())?;
        let name = RecordName::new(&new_budget.name)?;
        let amount = validate_amount(new_budget.amount)?;

        let connection = self.lock()?;
        let existing_budgets = count_records(Category::Budgets, &user_id, &connection)?;
        let budget = Budget {
            id: RecordId::generate(),
            user_id,
            name,
            amount,
            color: BudgetColor::for_position(existing_budgets),
            created_at: OffsetDateTime::now_utc(),
        };

        insert_record(&Record::Budget(budget.clone()), &connection)?;
        tracing::info!("Created budget {} for user {}", budget.id, budget.user_id);

        Ok(budget)
    }

    /// Create an expense and return it with its generated ID and creation time.
    ///
    /// The budget ID is stored as given, the budget does not have to exist.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::AuthRequired] if the user ID is missing or blank,
    /// - [Error::Validation] if the name or budget ID is empty or the amount is missing or not
    ///   positive.
    pub async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(new_expense.user_id.as_deref())?;
        let name = RecordName::new(&new_expense.name)?;
        let amount = validate_amount(new_expense.amount)?;
        let budget_id = RecordId::new(new_expense.budget_id.trim());
        if budget_id.is_blank() {
            return Err(Error::Validation("budget ID is required".to_owned()));
        }

        let connection = self.lock()?;
        let expense = Expense {
            id: RecordId::generate(),
            user_id,
            name,
            amount,
            budget_id,
            created_at: OffsetDateTime::now_utc(),
        };

        insert_record(&Record::Expense(expense.clone()), &connection)?;
        tracing::info!("Created expense {} for user {}", expense.id, expense.user_id);

        Ok(expense)
    }

    /// Delete a record owned by the user in `request`.
    ///
    /// Under [DeletePolicy::Orphan] deleting a budget leaves its expenses in
    /// place. Under [DeletePolicy::Cascade] they are deleted in the same
    /// database transaction as the budget.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::AuthRequired] if the user ID is missing or blank,
    /// - [Error::NotFound] if the user has no record with that ID in the category.
    pub async fn delete_record(&self, request: DeleteRequest) -> Result<(), Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(request.user_id.as_deref())?;
        let id = RecordId::new(&request.id);

        let connection = self.lock()?;
        let result = self.remove_with_policy(request.category, &id, &user_id, &connection);

        match &result {
            Ok(()) => tracing::info!("Deleted {} {} for user {}", request.category, id, user_id),
            Err(Error::NotFound) => tracing::warn!(
                "Tried to delete {} {} for user {} but it does not exist",
                request.category,
                id,
                user_id
            ),
            Err(error) => tracing::error!("Could not delete {} {}: {}", request.category, id, error),
        }

        result
    }

    /// Get each of the user's budgets with how much has been spent against it.
    ///
    /// # Errors
    /// Returns [Error::AuthRequired] if `user_id` is missing or blank.
    pub async fn budget_overviews(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<BudgetOverview>, Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(user_id)?;

        let connection = self.lock()?;
        let budgets = all_records(Category::Budgets, &user_id, &connection)?
            .into_iter()
            .filter_map(Record::into_budget)
            .collect();
        let expenses: Vec<Expense> = all_records(Category::Expenses, &user_id, &connection)?
            .into_iter()
            .filter_map(Record::into_expense)
            .collect();

        Ok(budget_overviews(budgets, &expenses))
    }

    /// Get the user's `limit` most recent expenses, newest first.
    ///
    /// # Errors
    /// Returns [Error::AuthRequired] if `user_id` is missing or blank.
    pub async fn recent_expenses(
        &self,
        user_id: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Expense>, Error> {
        self.latency.delay().await;
        let user_id = UserId::resolve(user_id)?;

        let connection = self.lock()?;
        let expenses = all_records(Category::Expenses, &user_id, &connection)?
            .into_iter()
            .filter_map(Record::into_expense)
            .collect();

        Ok(recent_expenses(expenses, limit))
    }

    fn remove_with_policy(
        &self,
        category: Category,
        id: &RecordId,
        user_id: &UserId,
        connection: &Connection,
    ) -> Result<(), Error> {
        match (category, self.delete_policy) {
            (Category::Budgets, DeletePolicy::Cascade) => {
                let transaction = connection.unchecked_transaction()?;
                remove_record(Category::Budgets, id, user_id, &transaction)?;
                let removed = remove_expenses_for_budget(id, user_id, &transaction)?;
                transaction.commit()?;
                tracing::info!("Deleted {removed} expenses of budget {id} for user {user_id}");

                Ok(())
            }
            (category, _) => remove_record(category, id, user_id, connection),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

#[cfg(test)]
mod store_tests {
    use crate::{
        Error,
        config::{DeletePolicy, StoreConfig},
        latency::Latency,
        query::Field,
        record::{Category, Record},
    };

    use super::{DeleteRequest, MatchQuery, NewBudget, NewExpense, Store};

    fn get_test_store() -> Store {
        Store::open(&StoreConfig::in_memory_without_latency()).expect("Could not create store")
    }

    fn new_budget(name: &str, amount: f64, user_id: &str) -> NewBudget {
        NewBudget {
            name: name.to_owned(),
            amount: Some(amount),
            user_id: Some(user_id.to_owned()),
        }
    }

    fn new_expense(name: &str, amount: f64, budget_id: &str, user_id: &str) -> NewExpense {
        NewExpense {
            name: name.to_owned(),
            amount: Some(amount),
            budget_id: budget_id.to_owned(),
            user_id: Some(user_id.to_owned()),
        }
    }

    fn delete(category: Category, id: &str, user_id: &str) -> DeleteRequest {
        DeleteRequest {
            category,
            id: id.to_owned(),
            user_id: Some(user_id.to_owned()),
        }
    }

    fn find(category: Category, key: Field, value: &str, user_id: &str) -> MatchQuery {
        MatchQuery {
            category,
            key,
            value: value.to_owned(),
            user_id: Some(user_id.to_owned()),
        }
    }

    #[tokio::test]
    async fn create_budget_assigns_id_and_creation_time() {
        let store = get_test_store();

        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .expect("Could not create budget");

        assert!(!budget.id.is_blank());
        assert_eq!(budget.user_id.as_ref(), "u1");
        assert_eq!(budget.name.as_ref(), "Groceries");
        assert_eq!(budget.amount, 300.0);
        assert!(budget.created_at <= time::OffsetDateTime::now_utc());
    }

    #[tokio::test]
    async fn created_records_are_fetched_for_their_owner() {
        let store = get_test_store();
        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();

        let got = store.fetch_all(Category::Budgets, Some("u1")).await.unwrap();

        assert_eq!(got, vec![Record::Budget(budget)]);
    }

    #[tokio::test]
    async fn fetch_all_never_returns_other_users_records() {
        let store = get_test_store();
        store
            .create_budget(new_budget("Mine", 10.0, "u1"))
            .await
            .unwrap();
        store
            .create_budget(new_budget("Theirs", 20.0, "u2"))
            .await
            .unwrap();

        let got = store.fetch_all(Category::Budgets, Some("u1")).await.unwrap();

        assert_eq!(got.len(), 1);
        assert!(got.iter().all(|record| record.user_id().as_ref() == "u1"));
    }

    #[tokio::test]
    async fn budget_then_expense_scenario() {
        let store = get_test_store();
        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();
        store
            .create_expense(new_expense("Milk", 4.0, budget.id.as_ref(), "u1"))
            .await
            .unwrap();

        let got = store
            .find_matching(find(
                Category::Expenses,
                Field::BudgetId,
                budget.id.as_ref(),
                "u1",
            ))
            .await
            .unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name().as_ref(), "Milk");
    }

    #[tokio::test]
    async fn create_budget_with_empty_name_fails() {
        let store = get_test_store();

        let result = store.create_budget(new_budget("", 100.0, "u1")).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_budget_without_amount_fails() {
        let store = get_test_store();
        let mut request = new_budget("Groceries", 1.0, "u1");
        request.amount = None;

        let result = store.create_budget(request).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_expense_without_budget_id_fails() {
        let store = get_test_store();

        let result = store.create_expense(new_expense("Milk", 4.0, " ", "u1")).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn create_without_user_requires_auth() {
        let store = get_test_store();
        let mut request = new_budget("Groceries", 300.0, "u1");
        request.user_id = None;

        let result = store.create_budget(request).await;

        assert_eq!(result, Err(Error::AuthRequired));
    }

    #[tokio::test]
    async fn fetch_all_without_user_requires_auth() {
        let store = get_test_store();

        let result = store.fetch_all(Category::Budgets, None).await;

        assert_eq!(result, Err(Error::AuthRequired));
    }

    #[tokio::test]
    async fn find_matching_without_user_requires_auth() {
        let store = get_test_store();
        let mut query = find(Category::Budgets, Field::Id, "x", "u1");
        query.user_id = None;

        let result = store.find_matching(query).await;

        assert_eq!(result, Err(Error::AuthRequired));
    }

    #[tokio::test]
    async fn find_matching_without_matches_is_empty() {
        let store = get_test_store();
        store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();

        let got = store
            .find_matching(find(Category::Budgets, Field::Id, "does-not-exist", "u1"))
            .await;

        assert_eq!(got, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn deleted_record_is_not_fetched() {
        let store = get_test_store();
        let keep = store
            .create_budget(new_budget("Keep", 1.0, "u1"))
            .await
            .unwrap();
        let drop = store
            .create_budget(new_budget("Drop", 1.0, "u1"))
            .await
            .unwrap();

        store
            .delete_record(delete(Category::Budgets, drop.id.as_ref(), "u1"))
            .await
            .expect("Could not delete budget");

        let got = store.fetch_all(Category::Budgets, Some("u1")).await.unwrap();
        assert_eq!(got, vec![Record::Budget(keep)]);
    }

    #[tokio::test]
    async fn deleting_missing_record_is_not_found() {
        let store = get_test_store();

        let result = store
            .delete_record(delete(Category::Expenses, "missing", "u1"))
            .await;

        assert_eq!(result, Err(Error::NotFound));
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found_the_second_time() {
        let store = get_test_store();
        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();
        let request = delete(Category::Budgets, budget.id.as_ref(), "u1");

        let first = store.delete_record(request.clone()).await;
        let second = store.delete_record(request).await;

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(Error::NotFound));
    }

    #[tokio::test]
    async fn cannot_delete_another_users_record() {
        let store = get_test_store();
        let budget = store
            .create_budget(new_budget("Theirs", 300.0, "u2"))
            .await
            .unwrap();

        let result = store
            .delete_record(delete(Category::Budgets, budget.id.as_ref(), "u1"))
            .await;

        assert_eq!(result, Err(Error::NotFound));
        let theirs = store.fetch_all(Category::Budgets, Some("u2")).await.unwrap();
        assert_eq!(theirs.len(), 1);
    }

    #[tokio::test]
    async fn deleting_budget_orphans_its_expenses() {
        let store = get_test_store();
        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();
        let expense = store
            .create_expense(new_expense("Milk", 4.0, budget.id.as_ref(), "u1"))
            .await
            .unwrap();

        store
            .delete_record(delete(Category::Budgets, budget.id.as_ref(), "u1"))
            .await
            .unwrap();

        let expenses = store.fetch_all(Category::Expenses, Some("u1")).await.unwrap();
        assert_eq!(expenses, vec![Record::Expense(expense)]);
        let budget_lookup = store
            .find_matching(find(Category::Budgets, Field::Id, budget.id.as_ref(), "u1"))
            .await
            .unwrap();
        assert!(budget_lookup.is_empty());
    }

    #[tokio::test]
    async fn cascade_policy_deletes_budget_expenses() {
        let store = Store::open(&StoreConfig {
            delete_policy: DeletePolicy::Cascade,
            ..StoreConfig::in_memory_without_latency()
        })
        .unwrap();
        let groceries = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();
        let rent = store
            .create_budget(new_budget("Rent", 1200.0, "u1"))
            .await
            .unwrap();
        store
            .create_expense(new_expense("Milk", 4.0, groceries.id.as_ref(), "u1"))
            .await
            .unwrap();
        let march = store
            .create_expense(new_expense("March", 1200.0, rent.id.as_ref(), "u1"))
            .await
            .unwrap();

        store
            .delete_record(delete(Category::Budgets, groceries.id.as_ref(), "u1"))
            .await
            .unwrap();

        let expenses = store.fetch_all(Category::Expenses, Some("u1")).await.unwrap();
        assert_eq!(expenses, vec![Record::Expense(march)]);
    }

    #[tokio::test]
    async fn cascade_policy_still_reports_missing_budget() {
        let store = Store::open(&StoreConfig {
            delete_policy: DeletePolicy::Cascade,
            ..StoreConfig::in_memory_without_latency()
        })
        .unwrap();

        let result = store
            .delete_record(delete(Category::Budgets, "missing", "u1"))
            .await;

        assert_eq!(result, Err(Error::NotFound));
    }

    #[tokio::test]
    async fn budget_colors_rotate_per_user() {
        let store = get_test_store();
        let first = store
            .create_budget(new_budget("A", 1.0, "u1"))
            .await
            .unwrap();
        let second = store
            .create_budget(new_budget("B", 1.0, "u1"))
            .await
            .unwrap();
        let other_user = store
            .create_budget(new_budget("C", 1.0, "u2"))
            .await
            .unwrap();

        assert_eq!(first.color.as_ref(), "0 65% 50%");
        assert_eq!(second.color.as_ref(), "34 65% 50%");
        assert_eq!(other_user.color.as_ref(), "0 65% 50%");
    }

    #[tokio::test]
    async fn budget_overviews_sum_spending() {
        let store = get_test_store();
        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();
        for amount in [4.0, 6.0] {
            store
                .create_expense(new_expense("Food", amount, budget.id.as_ref(), "u1"))
                .await
                .unwrap();
        }

        let overviews = store.budget_overviews(Some("u1")).await.unwrap();

        assert_eq!(overviews.len(), 1);
        assert_eq!(overviews[0].spent, 10.0);
        assert_eq!(overviews[0].remaining, 290.0);
    }

    #[tokio::test]
    async fn recent_expenses_are_newest_first() {
        let store = get_test_store();
        for name in ["first", "second", "third"] {
            store
                .create_expense(new_expense(name, 1.0, "budget", "u1"))
                .await
                .unwrap();
        }

        let got = store.recent_expenses(Some("u1"), 2).await.unwrap();

        let names: Vec<_> = got.iter().map(|expense| expense.name.as_ref()).collect();
        assert_eq!(names, vec!["third", "second"]);
    }

    #[tokio::test]
    async fn new_store_uses_given_connection_and_policy() {
        let connection = rusqlite::Connection::open_in_memory().unwrap();
        let store = Store::new(connection, Latency::None, DeletePolicy::Cascade).unwrap();
        let budget = store
            .create_budget(new_budget("Groceries", 300.0, "u1"))
            .await
            .unwrap();
        store
            .create_expense(new_expense("Milk", 4.0, budget.id.as_ref(), "u1"))
            .await
            .unwrap();

        store
            .delete_record(delete(Category::Budgets, budget.id.as_ref(), "u1"))
            .await
            .unwrap();

        assert_eq!(
            store.fetch_all(Category::Expenses, Some("u1")).await,
            Ok(Vec::new())
        );
    }

    #[tokio::test]
    async fn padded_user_id_is_a_separate_owner() {
        let store = get_test_store();

        let budget = store
            .create_budget(new_budget("Groceries", 300.0, " u1"))
            .await
            .unwrap();

        assert_eq!(budget.user_id.as_ref(), " u1");
        assert_eq!(
            store.fetch_all(Category::Budgets, Some(" u1")).await,
            Ok(vec![Record::Budget(budget.clone())])
        );
        assert_eq!(
            store.fetch_all(Category::Budgets, Some("u1")).await,
            Ok(Vec::new())
        );
        assert_eq!(
            store
                .delete_record(delete(Category::Budgets, budget.id.as_ref(), "u1"))
                .await,
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn records_persist_across_reopening_the_database() {
        let db_path = std::env::temp_dir().join(format!(
            "budget_store_test_{}.db",
            crate::id::RecordId::generate()
        ));
        let config = StoreConfig {
            db_path: Some(db_path.clone()),
            latency: Latency::None,
            delete_policy: DeletePolicy::Orphan,
        };

        let budget = {
            let store = Store::open(&config).unwrap();
            store
                .create_budget(new_budget("Groceries", 300.0, "u1"))
                .await
                .unwrap()
        };

        let reopened = Store::open(&config).unwrap();
        let got = reopened.fetch_all(Category::Budgets, Some("u1")).await;

        drop(reopened);
        let _ = std::fs::remove_file(&db_path);
        assert_eq!(got, Ok(vec![Record::Budget(budget)]));
    }

    #[tokio::test(start_paused = true)]
    async fn operations_wait_for_simulated_latency() {
        let store = Store::open(&StoreConfig {
            latency: Latency::Uniform {
                min: std::time::Duration::from_millis(100),
                max: std::time::Duration::from_millis(200),
            },
            ..StoreConfig::in_memory_without_latency()
        })
        .unwrap();
        let start = tokio::time::Instant::now();

        let result = store.fetch_all(Category::Budgets, Some("u1")).await;

        assert_eq!(result, Ok(Vec::new()));
        assert!(start.elapsed() >= std::time::Duration::from_millis(100));
    }
}
