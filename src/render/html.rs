use std::time::Duration;

use crate::lexer::lexer::ScanConfig;
use crate::lexer::tokens::{significant_token_count, Language, Token, TokenCategory};

/// Maps a token category to its CSS class. Number and String share the
/// `literal` class so the page styles them as one family.
pub fn css_class(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Keyword => "keyword",
        TokenCategory::Identifier => "identifier",
        TokenCategory::Operator => "operator",
        TokenCategory::Number | TokenCategory::String => "literal",
        TokenCategory::Comment => "comment",
        TokenCategory::Delimiter => "delimiter",
        TokenCategory::Whitespace => "whitespace",
        TokenCategory::Error => "error",
        TokenCategory::EOF => "eof",
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = r#"        body {
            font-family: 'Arial', sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background-color: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .keyword { color: #0000ff; font-weight: bold; }
        .identifier { color: #000000; }
        .operator { color: #a52a2a; }
        .literal { color: #008000; }
        .comment { color: #808080; font-style: italic; }
        .delimiter { color: #666666; }
        .error { color: #ffffff; background-color: #cc0000; }
        .stats {
            margin-top: 20px;
            padding: 15px;
            background-color: #f8f9fa;
            border-radius: 4px;
            border: 1px solid #dee2e6;
        }
        .code {
            background-color: #f8f9fa;
            padding: 15px;
            border-radius: 4px;
            border: 1px solid #dee2e6;
            overflow-x: auto;
            margin: 20px 0;
            white-space: pre-wrap;
            line-height: 1.5;
        }
        h2, h3 {
            color: #333;
        }"#;

/// Renders the token stream of one file as a span per token.
///
/// When the scan kept whitespace tokens, they are emitted verbatim so
/// the `pre-wrap` code block reproduces the source layout exactly.
/// Otherwise layout is approximated the break-only way: `<br>` runs
/// proportional to the line delta between consecutive tokens, and a
/// space after each span.
pub fn render_tokens(tokens: &[Token], config: ScanConfig) -> String {
    let exact = config.emit_whitespace;

    let mut html = String::new();
    let mut current_line = 1;

    for token in tokens {
        if token.category == TokenCategory::EOF {
            break;
        }

        if token.category == TokenCategory::Whitespace {
            html.push_str(&escape_html(&token.value));
            current_line = token.line;
            continue;
        }

        if !exact && token.line > current_line {
            for _ in current_line..token.line {
                html.push_str("<br>");
            }
            current_line = token.line;
        }

        html.push_str(&format!(
            "<span class=\"{}\">{}</span>",
            css_class(token.category),
            escape_html(&token.value)
        ));

        if !exact {
            html.push(' ');
        }
    }

    html
}

/// Builds the full HTML report page for one analyzed file.
pub fn render_page(
    file_name: &str,
    language: Language,
    tokens: &[Token],
    elapsed: Duration,
    config: ScanConfig,
) -> String {
    let token_count = significant_token_count(tokens);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lexical Analysis - {title}</title>
    <style>
{style}
    </style>
</head>
<body>
    <div class="container">
        <h2>Lexical analysis of: {title}</h2>
        <h3>Language: {language}</h3>
        <div class="code">{code}</div>
        <div class="stats">
            <h3>Statistics:</h3>
            <p>Tokens found: {token_count}</p>
            <p>Processing time: {seconds:.4} seconds</p>
        </div>
    </div>
</body>
</html>
"#,
        title = escape_html(file_name),
        style = STYLE,
        language = escape_html(&language.name().to_uppercase()),
        code = render_tokens(tokens, config),
        token_count = token_count,
        seconds = elapsed.as_secs_f64(),
    )
}
