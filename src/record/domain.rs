//! Core record domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, id::RecordId};

/// The named partitions of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Spending limits, see [Budget].
    Budgets,
    /// Money spent against a budget, see [Expense].
    Expenses,
}

impl Category {
    /// The name of the category, e.g. "budgets".
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Budgets => "budgets",
            Category::Expenses => "expenses",
        }
    }

    /// The SQL table holding records of this category.
    pub(crate) fn table_name(&self) -> &'static str {
        match self {
            Category::Budgets => "budget",
            Category::Expenses => "expense",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "budgets" => Ok(Category::Budgets),
            "expenses" => Ok(Category::Expenses),
            other => Err(Error::Validation(format!(
                "\"{other}\" is not a category, expected \"budgets\" or \"expenses\""
            ))),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The identity of the user that owns a record.
///
/// The store does not interpret user IDs, it only requires them to be
/// non-empty and uses them to keep each user's records apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID. The ID is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [Error::AuthRequired] if `id` is empty or only whitespace.
    pub fn new(id: &str) -> Result<Self, Error> {
        if id.trim().is_empty() {
            Err(Error::AuthRequired)
        } else {
            Ok(Self(id.to_owned()))
        }
    }

    /// Resolve an optional user ID from a request.
    ///
    /// # Errors
    ///
    /// Returns [Error::AuthRequired] if `id` is `None` or blank.
    pub fn resolve(id: Option<&str>) -> Result<Self, Error> {
        id.map_or(Err(Error::AuthRequired), Self::new)
    }

    /// Create a user ID without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, non-empty record name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct RecordName(String);

impl RecordName {
    /// Create a record name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::Validation] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::Validation("name cannot be empty".to_owned()))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a record name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty
    /// invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordName::new(s)
    }
}

impl Display for RecordName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check that `amount` is present, finite and greater than zero.
///
/// # Errors
///
/// Returns an [Error::Validation] describing the problem.
pub fn validate_amount(amount: Option<f64>) -> Result<f64, Error> {
    match amount {
        None => Err(Error::Validation("amount is required".to_owned())),
        Some(amount) if !amount.is_finite() => Err(Error::Validation(format!(
            "amount must be a number, got {amount}"
        ))),
        Some(amount) if amount <= 0.0 => Err(Error::Validation(format!(
            "amount must be greater than zero, got {amount}"
        ))),
        Some(amount) => Ok(amount),
    }
}

/// The accent colour of a budget as an HSL triple, e.g. "34 65% 50%".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct BudgetColor(String);

impl BudgetColor {
    /// The hue step between consecutive budgets, in degrees.
    pub const HUE_STEP: usize = 34;

    /// The colour for a user's budget given how many budgets they already have.
    ///
    /// Each new budget rotates the hue so that neighbouring budgets are easy
    /// to tell apart.
    pub fn for_position(existing_budgets: usize) -> Self {
        let hue = (existing_budgets * Self::HUE_STEP) % 360;

        Self(format!("{hue} 65% 50%"))
    }

    /// Wrap a colour loaded from the database.
    pub fn new_unchecked(color: &str) -> Self {
        Self(color.to_owned())
    }
}

impl AsRef<str> for BudgetColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A spending limit that expenses are recorded against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Assigned when the budget is created.
    pub id: RecordId,
    /// The owner of the budget.
    pub user_id: UserId,
    /// A label such as "Groceries".
    pub name: RecordName,
    /// The amount of money that may be spent.
    pub amount: f64,
    /// Accent colour used when displaying the budget.
    pub color: BudgetColor,
    /// When the budget was created, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Money spent against a budget.
///
/// `budget_id` is not checked by the store and may refer to a budget that has
/// since been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Assigned when the expense is created.
    pub id: RecordId,
    /// The owner of the expense.
    pub user_id: UserId,
    /// What the money was spent on.
    pub name: RecordName,
    /// The amount of money spent.
    pub amount: f64,
    /// The budget the expense counts against.
    pub budget_id: RecordId,
    /// When the expense was created, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A record from any category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Record {
    /// A record from [Category::Budgets].
    Budget(Budget),
    /// A record from [Category::Expenses].
    Expense(Expense),
}

impl Record {
    /// The category the record is stored in.
    pub fn category(&self) -> Category {
        match self {
            Record::Budget(_) => Category::Budgets,
            Record::Expense(_) => Category::Expenses,
        }
    }

    /// The ID of the record.
    pub fn id(&self) -> &RecordId {
        match self {
            Record::Budget(budget) => &budget.id,
            Record::Expense(expense) => &expense.id,
        }
    }

    /// The owner of the record.
    pub fn user_id(&self) -> &UserId {
        match self {
            Record::Budget(budget) => &budget.user_id,
            Record::Expense(expense) => &expense.user_id,
        }
    }

    /// The name of the record.
    pub fn name(&self) -> &RecordName {
        match self {
            Record::Budget(budget) => &budget.name,
            Record::Expense(expense) => &expense.name,
        }
    }

    /// The budget's limit or the expense's cost.
    pub fn amount(&self) -> f64 {
        match self {
            Record::Budget(budget) => budget.amount,
            Record::Expense(expense) => expense.amount,
        }
    }

    /// When the record was created, in UTC.
    pub fn created_at(&self) -> OffsetDateTime {
        match self {
            Record::Budget(budget) => budget.created_at,
            Record::Expense(expense) => expense.created_at,
        }
    }

    /// Check the fields shared by all records before they are stored.
    ///
    /// # Errors
    ///
    /// Returns an [Error::Validation] if the owner or name is blank, the amount
    /// is not a positive number, or an expense has a blank budget ID.
    pub fn validate(&self) -> Result<(), Error> {
        if self.user_id().as_ref().trim().is_empty() {
            return Err(Error::Validation("user ID is required".to_owned()));
        }

        if self.name().as_ref().trim().is_empty() {
            return Err(Error::Validation("name cannot be empty".to_owned()));
        }

        validate_amount(Some(self.amount()))?;

        match self {
            Record::Expense(expense) if expense.budget_id.is_blank() => {
                Err(Error::Validation("budget ID is required".to_owned()))
            }
            _ => Ok(()),
        }
    }

    /// Take the budget out of the record, if it is one.
    pub fn into_budget(self) -> Option<Budget> {
        match self {
            Record::Budget(budget) => Some(budget),
            Record::Expense(_) => None,
        }
    }

    /// Take the expense out of the record, if it is one.
    pub fn into_expense(self) -> Option<Expense> {
        match self {
            Record::Expense(expense) => Some(expense),
            Record::Budget(_) => None,
        }
    }
}

impl From<Budget> for Record {
    fn from(budget: Budget) -> Self {
        Record::Budget(budget)
    }
}

impl From<Expense> for Record {
    fn from(expense: Expense) -> Self {
        Record::Expense(expense)
    }
}



#[cfg(test)]
mod amount_tests {
    use crate::{Error, record::validate_amount};

    #[test]
    fn missing_amount_is_rejected() {
        assert!(matches!(validate_amount(None), Err(Error::Validation(_))));
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert!(matches!(validate_amount(Some(0.0)), Err(Error::Validation(_))));
        assert!(matches!(validate_amount(Some(-5.0)), Err(Error::Validation(_))));
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        assert!(matches!(
            validate_amount(Some(f64::NAN)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            validate_amount(Some(f64::INFINITY)),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn positive_amount_is_accepted() {
        assert_eq!(validate_amount(Some(4.5)), Ok(4.5));
    }
}
