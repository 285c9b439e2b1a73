//! Financial advisor
//!
//! A keyword-driven chat responder plus the insights, suggestions and
//! budget analyses shown next to it. No language understanding is involved:
//! the responder is a static rule table and everything else is derived from
//! the metrics engine.

pub mod insights;
pub mod responder;

pub use insights::{
    analyze_budget, generate_insights, generate_suggestions, BudgetAnalysis, FinancialAnalysis,
    Suggestion, NO_DATA_INSIGHT,
};
pub use responder::{
    match_rule, respond, ResponseRule, FALLBACK_RESPONSE, GREETING, QUICK_QUESTIONS,
    RESPONSE_RULES,
};
