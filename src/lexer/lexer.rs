use super::patterns::rules_for;
use super::position;
use super::tokens::{classify_word, Language, Token, TokenCategory};

/// Scan options.
///
/// With `emit_whitespace` unset, whitespace is skipped silently one
/// character at a time and positions still advance. With it set, each
/// whitespace run comes back as its own token, so concatenating all
/// token values reproduces the input byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    pub emit_whitespace: bool,
}

/// Tokenizes `text` under the given language's rule table.
///
/// Rules are tried in declared order at each offset and the first match
/// wins; a position's decision is never revisited. Identifier-shaped
/// matches are reclassified against the language's reserved words. A
/// character no rule covers becomes a one-character Error token and the
/// scan continues. The returned sequence always ends with an EOF token
/// whose position is just past the last consumed character.
pub fn tokenize(text: &str, language: Language, config: ScanConfig) -> Vec<Token> {
    let rules = rules_for(language);

    let mut tokens = Vec::new();
    let mut offset = 0;
    let mut line = 1;
    let mut column = 1;

    while offset < text.len() {
        let rest = &text[offset..];
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };

        // Silent mode skips whitespace character by character before any
        // rule runs, which leaves the run-based Whitespace rule reachable
        // only when emit_whitespace is set.
        if !config.emit_whitespace && ch.is_whitespace() {
            let consumed = &rest[..ch.len_utf8()];
            (line, column) = position::advance(line, column, consumed);
            offset += ch.len_utf8();
            continue;
        }

        let mut matched = false;
        for rule in rules {
            if let Some(found) = rule.regex.find(rest) {
                let value = found.as_str();

                let category = match rule.category {
                    TokenCategory::Identifier => classify_word(language, value),
                    other => other,
                };

                tokens.push(Token {
                    category,
                    value: value.to_string(),
                    line,
                    column,
                });

                (line, column) = position::advance(line, column, value);
                offset += value.len();
                matched = true;
                break;
            }
        }

        if !matched {
            // Recoverable: cover exactly one character and keep going.
            let consumed = &rest[..ch.len_utf8()];
            tokens.push(Token {
                category: TokenCategory::Error,
                value: consumed.to_string(),
                line,
                column,
            });

            (line, column) = position::advance(line, column, consumed);
            offset += ch.len_utf8();
        }
    }

    tokens.push(Token {
        category: TokenCategory::EOF,
        value: String::new(),
        line,
        column,
    });

    tokens
}
