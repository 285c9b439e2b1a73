//! Keyword-based transaction categorization
//!
//! Each category name has a list of keywords. A description scores, per
//! category, the total length of the keywords it contains once both sides
//! are normalized (lowercase, accents stripped, punctuation collapsed), so
//! longer and more specific keywords weigh more. Only categories that exist
//! in the caller's category list are ever suggested.

use serde::Serialize;
use tracing::debug;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::{Category, CategoryId, Transaction, TransactionId, TransactionKind};

/// Keywords per category name
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Alimentação",
        &[
            "restaurante", "lanchonete", "padaria", "supermercado", "mercado", "ifood",
            "uber eats", "delivery", "pizza", "hamburguer", "mcdonalds", "burger king",
            "subway", "starbucks", "cafe", "bar", "boteco", "açougue", "hortifruti", "feira",
            "comida", "alimento",
        ],
    ),
    (
        "Transporte",
        &[
            "uber", "taxi", "posto", "combustivel", "gasolina", "etanol", "onibus", "metro",
            "trem", "passagem", "estacionamento", "pedagio", "mecanica", "oficina", "pneu",
            "oleo", "revisao",
        ],
    ),
    (
        "Moradia",
        &[
            "aluguel", "condominio", "iptu", "energia", "luz", "agua", "gas", "internet",
            "telefone", "limpeza", "reforma", "material construcao", "tinta", "eletricista",
            "encanador",
        ],
    ),
    (
        "Saúde",
        &[
            "farmacia", "drogaria", "medico", "dentista", "hospital", "clinica", "laboratorio",
            "exame", "consulta", "remedio", "medicamento", "plano saude", "convenio",
            "fisioterapia",
        ],
    ),
    (
        "Educação",
        &[
            "escola", "faculdade", "universidade", "curso", "livro", "material escolar",
            "mensalidade", "matricula", "aula", "professor", "educacao", "estudo",
        ],
    ),
    (
        "Lazer",
        &[
            "cinema", "teatro", "show", "festa", "balada", "viagem", "hotel", "pousada",
            "turismo", "parque", "shopping", "jogo", "netflix", "spotify", "streaming",
            "academia", "esporte", "ginasio",
        ],
    ),
    (
        "Compras",
        &[
            "loja", "shopping", "roupa", "sapato", "calcado", "acessorio", "eletronico",
            "celular", "computador", "notebook", "tv", "geladeira", "fogao", "microondas",
            "presente", "gift",
        ],
    ),
    (
        "Serviços",
        &[
            "banco", "cartorio", "advogado", "contador", "seguro", "manutencao", "conserto",
            "lavanderia", "cabeleireiro", "salao", "barbeiro", "estetica",
        ],
    ),
    (
        "Salário",
        &[
            "salario", "ordenado", "pagamento", "empresa", "trabalho", "pix salario",
            "deposito salario", "folha pagamento",
        ],
    ),
    (
        "Freelance",
        &[
            "freelance", "freela", "autonomo", "servico prestado", "consultoria", "projeto",
            "trabalho extra",
        ],
    ),
    (
        "Investimentos",
        &[
            "dividendo", "juros", "rendimento", "aplicacao", "investimento", "cdb", "tesouro",
            "acao", "fundo", "poupanca",
        ],
    ),
    (
        "Vendas",
        &[
            "venda", "vendeu", "mercado livre", "olx", "marketplace", "comissao",
            "produto vendido",
        ],
    ),
];

/// Default number of suggestions returned
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Default number of transactions a batch run processes
pub const DEFAULT_BATCH_LIMIT: usize = 100;

/// Lowercase, strip accents, turn anything but `[a-z0-9]` into a space and
/// collapse runs of whitespace
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = true;
    for ch in text.nfd().filter(|ch| !is_combining_mark(*ch)) {
        for lower in ch.to_lowercase() {
            if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
                out.push(lower);
                prev_space = false;
            } else if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// A scored category candidate for a description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySuggestion {
    pub category_id: CategoryId,
    pub category_name: String,
    pub kind: TransactionKind,
    /// Sum of the normalized lengths of the matched keywords
    pub score: usize,
    /// `min(score / 10, 1)`
    pub confidence: f64,
    pub matched_keywords: Vec<&'static str>,
}

/// Score every known category that exists in `categories`
///
/// Results keep keyword-table order among equal scores.
fn score_categories<'a>(
    description: &str,
    categories: impl Iterator<Item = &'a Category> + Clone,
) -> Vec<CategorySuggestion> {
    let normalized = normalize_text(description);
    if normalized.is_empty() {
        return Vec::new();
    }

    CATEGORY_KEYWORDS
        .iter()
        .filter_map(|(name, keywords)| {
            let key = normalize_text(name);
            let category = categories.clone().find(|c| normalize_text(&c.name) == key)?;

            let matched: Vec<&'static str> = keywords
                .iter()
                .copied()
                .filter(|kw| normalized.contains(normalize_text(kw).as_str()))
                .collect();
            let score: usize = matched.iter().map(|kw| normalize_text(kw).len()).sum();

            Some(CategorySuggestion {
                category_id: category.id,
                category_name: category.name.clone(),
                kind: category.kind,
                score,
                confidence: (score as f64 / 10.0).min(1.0),
                matched_keywords: matched,
            })
        })
        .collect()
}

/// Suggest up to `limit` categories for a description, best first
pub fn suggest_categories(
    description: &str,
    categories: &[Category],
    limit: usize,
) -> Vec<CategorySuggestion> {
    let mut scored: Vec<CategorySuggestion> = score_categories(description, categories.iter())
        .into_iter()
        .filter(|s| s.score > 0)
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Pick the best category of `kind` for a description
///
/// A later category only wins with a strictly higher score, so ties go to
/// the one listed first in the keyword table.
pub fn categorize(
    description: &str,
    kind: TransactionKind,
    categories: &[Category],
) -> Option<CategorySuggestion> {
    score_categories(description, categories.iter().filter(|c| c.kind == kind))
        .into_iter()
        .fold(None, |best: Option<CategorySuggestion>, candidate| match best {
            Some(b) if candidate.score <= b.score => Some(b),
            _ if candidate.score > 0 => Some(candidate),
            other => other,
        })
}

/// Outcome for one transaction in a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchDetail {
    pub transaction_id: TransactionId,
    pub description: String,
    /// Name of the assigned category, `None` when nothing matched
    pub suggested_category: Option<String>,
}

/// Totals and details of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub total_processed: usize,
    pub categorized: usize,
    pub uncategorized: usize,
    pub details: Vec<BatchDetail>,
}

/// Assign categories to up to `limit` uncategorized transactions in place
pub fn batch_categorize(
    transactions: &mut [Transaction],
    categories: &[Category],
    limit: usize,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for txn in transactions
        .iter_mut()
        .filter(|t| !t.is_categorized())
        .take(limit)
    {
        outcome.total_processed += 1;

        match categorize(&txn.description, txn.kind, categories) {
            Some(found) => {
                debug!(
                    description = %txn.description,
                    category = %found.category_name,
                    score = found.score,
                    "Categorized transaction"
                );
                txn.category_id = Some(found.category_id);
                txn.category_name = found.category_name.clone();
                outcome.categorized += 1;
                outcome.details.push(BatchDetail {
                    transaction_id: txn.id,
                    description: txn.description.clone(),
                    suggested_category: Some(found.category_name),
                });
            }
            None => {
                outcome.uncategorized += 1;
                outcome.details.push(BatchDetail {
                    transaction_id: txn.id,
                    description: txn.description.clone(),
                    suggested_category: None,
                });
            }
        }
    }

    outcome
}
