//! Expense ranking by category

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{CategoryId, Money, Transaction};

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// Category name ("Sem categoria" for uncategorized spending)
    pub category: String,
    pub category_id: Option<CategoryId>,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the grand expense total, unrounded; 0 when nothing was spent
    pub percentage_of_total: f64,
}

/// Rank expense categories by total spent
///
/// Groups expense magnitudes by category name, then orders by total
/// descending with ties broken by name ascending.
pub fn rank_expense_categories(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut totals: BTreeMap<&str, (Option<CategoryId>, Money, usize)> = BTreeMap::new();

    for txn in transactions.iter().filter(|txn| txn.is_expense()) {
        let entry = totals
            .entry(txn.category_label())
            .or_insert((txn.category_id, Money::zero(), 0));
        entry.1 += txn.magnitude();
        entry.2 += 1;
    }

    let grand_total: Money = totals.values().map(|(_, total, _)| *total).sum();

    let mut ranked: Vec<CategoryShare> = totals
        .into_iter()
        .map(|(name, (category_id, total, count))| CategoryShare {
            category: name.to_string(),
            category_id,
            total,
            transaction_count: count,
            percentage_of_total: total.percent_of(grand_total).unwrap_or(0.0),
        })
        .collect();

    ranked.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn expense(category: &str, cents: i64) -> Transaction {
        Transaction::expense("gasto", Money::from_cents(cents), date())
            .with_category(CategoryId::new(), category)
    }

    #[test]
    fn test_ranking_order_and_percentages() {
        let txns = vec![
            expense("Alimentação", -65000),
            expense("Transporte", -32000),
            expense("Lazer", -38000),
        ];
        let ranked = rank_expense_categories(&txns);

        let names: Vec<&str> = ranked.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Alimentação", "Lazer", "Transporte"]);
        assert_eq!(ranked[0].total, Money::from_reais(650));
        assert_eq!(ranked[1].total, Money::from_reais(380));
        assert_eq!(ranked[2].total, Money::from_reais(320));

        let sum: f64 = ranked.iter().map(|s| s.percentage_of_total).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_break_by_name() {
        let txns = vec![expense("Saúde", 10000), expense("Moradia", 10000), expense("Lazer", 5000)];
        let ranked = rank_expense_categories(&txns);
        let names: Vec<&str> = ranked.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Moradia", "Saúde", "Lazer"]);
    }

    #[test]
    fn test_groups_by_name_and_ignores_income() {
        let txns = vec![
            expense("Alimentação", 1000),
            expense("Alimentação", 2000),
            Transaction::income("Salário", Money::from_reais(5000), date()),
            Transaction::expense("Avulso", Money::from_cents(500), date()),
        ];
        let ranked = rank_expense_categories(&txns);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category, "Alimentação");
        assert_eq!(ranked[0].transaction_count, 2);
        assert_eq!(ranked[1].category, "Sem categoria");
        assert!(ranked[1].category_id.is_none());
    }

    #[test]
    fn test_zero_grand_total_gives_zero_percentages() {
        let txns = vec![expense("Lazer", 0), expense("Moradia", 0)];
        let ranked = rank_expense_categories(&txns);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.percentage_of_total == 0.0));

        assert!(rank_expense_categories(&[]).is_empty());
    }
}
