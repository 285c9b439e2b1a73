//! Demonstration records
//!
//! One place for the sample data every screen used to hardcode. Dates are
//! laid out relative to `today` so the current month always holds the
//! headline numbers: R$ 5.500,00 income against R$ 4.200,00 expenses, with
//! the Alimentação (800/650), Transporte (400/320) and Lazer (300/380)
//! budgets. The five months before it carry the income/expense trend.

use chrono::{Datelike, Duration, NaiveDate};

use super::dataset::Dataset;
use crate::models::{
    months_before, Budget, BudgetId, BudgetPeriod, Category, CategoryId, Goal, GoalId, Money,
    Transaction, TransactionId, TransactionKind,
};

const FOOD: CategoryId = CategoryId::from_u128(0x0c01);
const TRANSPORT: CategoryId = CategoryId::from_u128(0x0c02);
const HOUSING: CategoryId = CategoryId::from_u128(0x0c03);
const LEISURE: CategoryId = CategoryId::from_u128(0x0c04);
const HEALTH: CategoryId = CategoryId::from_u128(0x0c05);
const SALARY: CategoryId = CategoryId::from_u128(0x0c06);
const FREELANCE: CategoryId = CategoryId::from_u128(0x0c07);
const INVESTMENTS: CategoryId = CategoryId::from_u128(0x0c08);

/// (id, name, kind, description, color, icon)
const CATEGORIES: &[(CategoryId, &str, TransactionKind, &str, &str, &str)] = &[
    (FOOD, "Alimentação", TransactionKind::Expense, "Gastos com comida e bebida", "#EF4444", "utensils"),
    (TRANSPORT, "Transporte", TransactionKind::Expense, "Gastos com locomoção", "#F59E0B", "car"),
    (HOUSING, "Moradia", TransactionKind::Expense, "Aluguel, contas da casa", "#8B5CF6", "home"),
    (LEISURE, "Lazer", TransactionKind::Expense, "Entretenimento e diversão", "#10B981", "gamepad-2"),
    (HEALTH, "Saúde", TransactionKind::Expense, "Consultas, exames e remédios", "#EC4899", "heart"),
    (SALARY, "Salário", TransactionKind::Income, "Renda do trabalho", "#059669", "briefcase"),
    (FREELANCE, "Freelance", TransactionKind::Income, "Trabalhos extras", "#0D9488", "laptop"),
    (INVESTMENTS, "Investimentos", TransactionKind::Income, "Rendimentos e dividendos", "#3B82F6", "trending-up"),
];

/// Current-month records: (day of month, description, cents, kind, category)
const CURRENT_MONTH: &[(u32, &str, i64, TransactionKind, Option<CategoryId>)] = &[
    (1, "Salário", 470000, TransactionKind::Income, Some(SALARY)),
    (1, "Aluguel", 160000, TransactionKind::Expense, Some(HOUSING)),
    (1, "Netflix", 5590, TransactionKind::Expense, Some(LEISURE)),
    (2, "Supermercado Extra", 25000, TransactionKind::Expense, Some(FOOD)),
    (3, "Posto Shell - Combustível", 20000, TransactionKind::Expense, Some(TRANSPORT)),
    (4, "Consulta médica", 28000, TransactionKind::Expense, Some(HEALTH)),
    (5, "Restaurante Sabor Caseiro", 18000, TransactionKind::Expense, Some(FOOD)),
    (6, "Uber - Corrida para trabalho", 2550, TransactionKind::Expense, Some(TRANSPORT)),
    (7, "Cinema - Filme com amigos", 4500, TransactionKind::Expense, Some(LEISURE)),
    (8, "Padaria Pão Quente", 9500, TransactionKind::Expense, Some(FOOD)),
    (9, "Conta de energia", 25000, TransactionKind::Expense, Some(HOUSING)),
    (9, "Internet fibra", 15000, TransactionKind::Expense, Some(HOUSING)),
    (10, "Uber - Aeroporto", 9450, TransactionKind::Expense, Some(TRANSPORT)),
    (11, "Show de rock", 27910, TransactionKind::Expense, Some(LEISURE)),
    (12, "iFood pedido", 12500, TransactionKind::Expense, Some(FOOD)),
    (13, "Drogaria Raia", 12000, TransactionKind::Expense, None),
    (14, "Presente de aniversário", 45000, TransactionKind::Expense, None),
    (15, "Freelance - Projeto Web", 80000, TransactionKind::Income, Some(FREELANCE)),
];

/// Earlier months, oldest first: (salary, rent, groceries) in reais
const PREVIOUS_MONTHS: &[(i64, i64, i64)] = &[
    (5200, 1600, 2500),
    (5400, 1600, 2700),
    (5500, 1600, 2600),
    (5600, 1600, 2800),
    (5500, 1600, 2600),
];

fn category_name(id: CategoryId) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(cat_id, ..)| *cat_id == id)
        .map(|(_, name, ..)| *name)
        .unwrap_or_default()
}

/// The demonstration dataset as seen on `today`
pub fn demo_dataset(today: NaiveDate) -> Dataset {
    let categories = CATEGORIES
        .iter()
        .map(|&(id, name, kind, description, color, icon)| Category {
            id,
            name: name.to_string(),
            kind,
            description: Some(description.to_string()),
            color: Some(color.to_string()),
            icon: Some(icon.to_string()),
            is_default: true,
        })
        .collect();

    let mut transactions = Vec::new();
    let mut next_id = 0x7000_u128;
    let mut push = |description: &str, cents: i64, kind, category: Option<CategoryId>, date| {
        let mut txn = Transaction::new(description, Money::from_cents(cents), kind, date);
        txn.id = TransactionId::from_u128(next_id);
        next_id += 1;
        if let Some(id) = category {
            txn = txn.with_category(id, category_name(id));
        }
        transactions.push(txn);
    };

    let month_start = today - Duration::days(i64::from(today.day0()));
    for &(day, description, cents, kind, category) in CURRENT_MONTH {
        // Clamp to today so early in the month nothing lands in the future
        let date = month_start + Duration::days(i64::from(day.min(today.day()) - 1));
        push(description, cents, kind, category, date);
    }

    let months = PREVIOUS_MONTHS.len() as u32;
    for (i, &(salary, rent, groceries)) in PREVIOUS_MONTHS.iter().enumerate() {
        let (year, month) = months_before(today, months - i as u32);
        let on = |day| NaiveDate::from_ymd_opt(year, month, day);
        let (Some(payday), Some(rent_day), Some(market_day)) = (on(5), on(10), on(18)) else {
            continue;
        };
        push("Salário", salary * 100, TransactionKind::Income, Some(SALARY), payday);
        push("Aluguel", rent * 100, TransactionKind::Expense, Some(HOUSING), rent_day);
        push("Supermercado Extra", groceries * 100, TransactionKind::Expense, Some(FOOD), market_day);
    }

    let budgets = [
        (0x0b01, FOOD, 800),
        (0x0b02, TRANSPORT, 400),
        (0x0b03, LEISURE, 300),
    ]
    .into_iter()
    .map(|(id, category, limit)| {
        let name = category_name(category);
        let mut budget = Budget::new(
            format!("Orçamento {}", name),
            category,
            name,
            Money::from_reais(limit),
            BudgetPeriod::Monthly,
            today,
        );
        budget.id = BudgetId::from_u128(id);
        budget
    })
    .collect();

    let year_end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
    let goals = vec![
        demo_goal(0x0901, "Reserva de Emergência", "6 meses de gastos essenciais", 10000, 6500, year_end),
        demo_goal(0x0902, "Viagem para Europa", "Férias de verão", 8000, 2400, today + Duration::days(120)),
        demo_goal(0x0903, "Notebook Novo", "Para trabalho e estudos", 3500, 3500, today - Duration::days(30)),
    ];

    Dataset {
        categories,
        transactions,
        budgets,
        goals,
    }
}

fn demo_goal(
    id: u128,
    name: &str,
    description: &str,
    target: i64,
    current: i64,
    target_date: NaiveDate,
) -> Goal {
    let mut goal = Goal::new(name, Money::from_reais(target), target_date)
        .with_description(description)
        .with_current_amount(Money::from_reais(current));
    goal.id = GoalId::from_u128(id);
    goal
}
