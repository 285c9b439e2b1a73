//! Scripted chat responder
//!
//! An ordered table of keyword rules. The question is lowercased and the
//! first rule with a keyword contained in it answers; otherwise the
//! fallback does.

/// A keyword rule: any keyword found in the question selects the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Opening message of the chat
pub const GREETING: &str = "Olá! Sou seu assessor financeiro pessoal. Posso ajudá-lo com dúvidas sobre orçamento, investimentos, economia e muito mais. Como posso ajudá-lo hoje?";

/// Suggested questions offered below the chat
pub const QUICK_QUESTIONS: &[&str] = &[
    "Como criar uma reserva de emergência?",
    "Onde devo investir meu dinheiro?",
    "Como posso economizar mais?",
    "Como fazer um orçamento eficaz?",
];

/// Answer given when no rule matches
pub const FALLBACK_RESPONSE: &str = "Entendo sua pergunta. Com base na análise das suas finanças, posso ajudar com temas como: reserva de emergência, investimentos, controle de gastos, orçamento e metas financeiras. Sobre qual desses temas gostaria de saber mais?";

/// Rules in priority order
pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: "emergency_fund",
        keywords: &["reserva", "emergência", "emergencia"],
        response: "A reserva de emergência é fundamental para sua segurança financeira. Recomendo manter de 3 a 6 meses de gastos essenciais. Com base no seu perfil, sugiro uma reserva de R$ 2.100,00. Você pode começar separando R$ 200,00 por mês.",
    },
    ResponseRule {
        topic: "investment",
        keywords: &["investir", "investimento"],
        response: "Para iniciantes, recomendo começar com investimentos de baixo risco como Tesouro Direto e CDBs. Com seu saldo positivo atual, você poderia investir cerca de R$ 910,00. Quer que eu explique mais sobre esses investimentos?",
    },
    ResponseRule {
        topic: "saving",
        keywords: &["economizar", "poupar"],
        response: "Analisando seus gastos, vejo que você gasta R$ 650,00 em alimentação. Reduzindo 15% nessa categoria, você economizaria R$ 97,50 por mês. Outras dicas: compare preços, cozinhe mais em casa e evite desperdícios.",
    },
    ResponseRule {
        topic: "budgeting",
        keywords: &["orçamento"],
        response: "Um bom orçamento segue a regra 50-30-20: 50% para necessidades, 30% para desejos e 20% para poupança. Seus gastos atuais mostram que você está no caminho certo, mas pode otimizar a categoria de lazer.",
    },
];

/// Find the first rule matching a question
pub fn match_rule(question: &str) -> Option<&'static ResponseRule> {
    let lowered = question.to_lowercase();
    RESPONSE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
}

/// Answer a free-text question
pub fn respond(question: &str) -> &'static str {
    match_rule(question).map_or(FALLBACK_RESPONSE, |rule| rule.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_answers() {
        assert_eq!(match_rule("Como montar uma RESERVA?").unwrap().topic, "emergency_fund");
        assert_eq!(match_rule("fundo de emergencia").unwrap().topic, "emergency_fund");
        assert_eq!(match_rule("Quero investir").unwrap().topic, "investment");
        assert_eq!(match_rule("como poupar?").unwrap().topic, "saving");
        assert_eq!(match_rule("Meu ORÇAMENTO").unwrap().topic, "budgeting");
    }

    #[test]
    fn test_first_match_wins() {
        // mentions both an investment and a budget keyword
        let answer = respond("Devo investir antes de fazer um orçamento?");
        assert_eq!(answer, RESPONSE_RULES[1].response);

        let answer = respond("Uso a reserva para investir?");
        assert_eq!(answer, RESPONSE_RULES[0].response);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("Qual a previsão do tempo?"), FALLBACK_RESPONSE);
        assert_eq!(respond(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_quick_questions_all_match_rules() {
        for question in QUICK_QUESTIONS {
            assert!(match_rule(question).is_some(), "{question}");
        }
    }

    #[test]
    fn test_unaccented_orcamento_falls_back() {
        assert_eq!(respond("meu orcamento"), FALLBACK_RESPONSE);
    }
}
