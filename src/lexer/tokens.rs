use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref SCRIPTING_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("def");
        set.insert("class");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("return");
        set.insert("import");
        set.insert("from");
        set.insert("as");
        set
    };

    // Stored uppercase; lookups uppercase the candidate first.
    pub static ref QUERY_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("SELECT");
        set.insert("FROM");
        set.insert("WHERE");
        set.insert("INSERT");
        set.insert("UPDATE");
        set.insert("DELETE");
        set.insert("CREATE");
        set.insert("DROP");
        set
    };

    pub static ref CLIKE_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("function");
        set.insert("var");
        set.insert("let");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("return");
        set
    };
}

/// The three supported input grammars. Each variant owns its own rule
/// table (see `patterns`), reserved-word set, and case rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Language {
    Scripting,
    Query,
    CLike,
}

impl Language {
    /// Short name used in output file names and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Scripting => "scripting",
            Language::Query => "query",
            Language::CLike => "clike",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Operator,
    Number,
    String,
    Comment,
    Delimiter,
    Whitespace,
    Error,
    EOF,
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned span of source text. `line` and `column` are
/// 1-based and point at the first character of the span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:?}) at {}:{}",
            self.category, self.value, self.line, self.column
        )
    }
}

/// Counts the tokens a report surfaces: everything except the EOF
/// sentinel and whitespace runs. The batch report and the rendered
/// page both use this, so their numbers always agree.
pub fn significant_token_count(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| t.category != TokenCategory::EOF && t.category != TokenCategory::Whitespace)
        .count()
}

/// Resolves an identifier-shaped match to Keyword or Identifier.
///
/// Scripting and CLike reserve words case-sensitively; Query uppercases
/// the candidate before looking it up, so `select` and `SELECT` both
/// classify as keywords while `Selection` stays an identifier.
pub fn classify_word(language: Language, word: &str) -> TokenCategory {
    let reserved = match language {
        Language::Scripting => SCRIPTING_KEYWORDS.contains(word),
        Language::Query => QUERY_KEYWORDS.contains(word.to_uppercase().as_str()),
        Language::CLike => CLIKE_KEYWORDS.contains(word),
    };

    if reserved {
        TokenCategory::Keyword
    } else {
        TokenCategory::Identifier
    }
}
