//! Budgets, expenses and the types they are built from.

mod domain;

pub use domain::{
    Budget, BudgetColor, Category, Expense, Record, RecordName, UserId, validate_amount,
};
