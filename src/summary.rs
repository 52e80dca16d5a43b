//! Aggregates shown on the dashboard and budget pages.

use serde::Serialize;

use crate::{
    id::RecordId,
    record::{Budget, Expense},
};

/// The number of expenses the dashboard lists before linking to the full list.
pub const RECENT_EXPENSES_LIMIT: usize = 8;

/// A budget together with how much of it has been used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    /// The budget being summarised.
    pub budget: Budget,
    /// The sum of the budget's expenses.
    pub spent: f64,
    /// `budget.amount - spent`. Negative when the budget is overspent.
    pub remaining: f64,
}

/// Sum the amounts of the expenses recorded against `budget_id`.
pub fn spent_by_budget(expenses: &[Expense], budget_id: &RecordId) -> f64 {
    expenses
        .iter()
        .filter(|expense| &expense.budget_id == budget_id)
        .map(|expense| expense.amount)
        .sum()
}

/// Pair each budget with its spending, keeping the order of `budgets`.
///
/// Expenses whose budget is not in `budgets` are ignored.
pub fn budget_overviews(budgets: Vec<Budget>, expenses: &[Expense]) -> Vec<BudgetOverview> {
    budgets
        .into_iter()
        .map(|budget| {
            let spent = spent_by_budget(expenses, &budget.id);
            let remaining = budget.amount - spent;

            BudgetOverview {
                budget,
                spent,
                remaining,
            }
        })
        .collect()
}

/// The `limit` most recently created expenses, newest first.
///
/// `expenses` must be in insertion order. Expenses created at the same instant
/// are ordered by insertion, latest first.
pub fn recent_expenses(mut expenses: Vec<Expense>, limit: usize) -> Vec<Expense> {
    // The sort is stable, so reversing first puts later inserts ahead on ties.
    expenses.reverse();
    expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    expenses.truncate(limit);
    expenses
}
