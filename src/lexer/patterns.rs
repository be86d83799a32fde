use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{Language, TokenCategory};

/// One entry in a language's ordered rule table. The regex is compiled
/// anchored so a match can only start at the current scan offset.
pub struct PatternRule {
    pub category: TokenCategory,
    pub regex: Regex,
}

fn rule(category: TokenCategory, pattern: &str) -> PatternRule {
    // The `^` anchor keeps `find` from scanning ahead of the offset.
    // Patterns are fixed at compile time, so construction cannot fail
    // for any user input.
    PatternRule {
        category,
        regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
    }
}

// Rule order is significant: the first rule that matches at an offset
// wins, even when a later rule would consume more characters. Comments
// are declared before operators so `--` and `//` never split into
// operator pairs, and operator alternations list longer forms first so
// `===` beats `==` beats `=`.
lazy_static! {
    static ref SCRIPTING_RULES: Vec<PatternRule> = vec![
        rule(TokenCategory::Whitespace, r"\s+"),
        rule(TokenCategory::Comment, r"#[^\n]*"),
        rule(TokenCategory::String, r#""""(?s:.*?)"""|'''(?s:.*?)'''"#),
        rule(TokenCategory::String, r#""[^"\n]*"|'[^'\n]*'"#),
        rule(TokenCategory::Number, r"\d+(\.\d+)?"),
        rule(TokenCategory::Identifier, r"[a-zA-Z_]\w*"),
        rule(TokenCategory::Operator, r"==|!=|<=|>=|[+\-*/=<>]"),
        rule(TokenCategory::Delimiter, r"[():,\[\]{}]"),
    ];

    static ref QUERY_RULES: Vec<PatternRule> = vec![
        rule(TokenCategory::Whitespace, r"\s+"),
        rule(TokenCategory::Comment, r"--[^\n]*"),
        rule(TokenCategory::String, r"'\w*'"),
        rule(TokenCategory::Number, r"\d+"),
        rule(TokenCategory::Identifier, r"[a-zA-Z_]\w*"),
        rule(TokenCategory::Operator, r"<>|<=|>=|=|<|>"),
        rule(TokenCategory::Delimiter, r"[,;()]"),
    ];

    static ref CLIKE_RULES: Vec<PatternRule> = vec![
        rule(TokenCategory::Whitespace, r"\s+"),
        rule(TokenCategory::Comment, r"//[^\n]*"),
        rule(TokenCategory::Comment, r"/\*(?s:.*?)\*/"),
        rule(TokenCategory::String, r#""[^"\n]*"|'[^'\n]*'"#),
        rule(TokenCategory::Number, r"\d+(\.\d+)?"),
        rule(TokenCategory::Identifier, r"[a-zA-Z_$]\w*"),
        rule(TokenCategory::Operator, r"===|==|!==|!=|<=|>=|[+\-*/=<>]"),
        rule(TokenCategory::Delimiter, r"[();,{}]"),
    ];
}

/// Returns the ordered rule table for a language. Tables are compiled
/// once on first use and shared by every scan after that.
pub fn rules_for(language: Language) -> &'static [PatternRule] {
    match language {
        Language::Scripting => &SCRIPTING_RULES,
        Language::Query => &QUERY_RULES,
        Language::CLike => &CLIKE_RULES,
    }
}
