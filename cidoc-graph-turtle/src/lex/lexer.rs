//! Turtle lexer implementation using winnow.
//!
//! Tokenizes Turtle input into a stream of tokens with source spans.
//! Fails fast on the first lexical error with line/column context.

use std::sync::Arc;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::stream::{AsChar, Location};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::token::{Token, TokenKind};
use crate::error::{Result, TurtleError};

/// Input type for the lexer - tracks position for spans.
pub type Input<'a> = LocatingSlice<&'a str>;

/// Lexer for Turtle documents.
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tokenize the entire input. The last token is always `Eof`.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.input);

        loop {
            skip_trivia(&mut input);

            let start = input.current_token_start();
            if input.is_empty() {
                tokens.push(Token::new(TokenKind::Eof, start, start));
                return Ok(tokens);
            }

            match next_token(&mut input) {
                Ok(kind) => tokens.push(Token::new(kind, start, input.current_token_start())),
                Err(_) => return Err(self.error_at(start)),
            }
        }
    }

    fn error_at(&self, position: usize) -> TurtleError {
        let before = &self.input[..position];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        let line_text = self.input[line_start..].lines().next().unwrap_or("");

        let what = match self.input[position..].chars().next() {
            Some('"') | Some('\'') => "unterminated string literal".to_string(),
            Some('<') => "invalid or unterminated IRI".to_string(),
            Some(c) => format!("unexpected character '{}'", c.escape_default()),
            None => "unexpected end of input".to_string(),
        };
        let pointer = " ".repeat(column.saturating_sub(1));

        TurtleError::Lexer {
            position,
            line,
            column,
            message: format!("{what}\n  |\n  | {line_text}\n  | {pointer}^"),
        }
    }
}

/// Tokenize a Turtle document.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

fn backtrack<T>() -> ModalResult<T> {
    Err(ErrMode::Backtrack(ContextError::new()))
}

fn skip_trivia(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str> = take_while(0.., is_ws).parse_next(input);
        if !input.starts_with('#') {
            return;
        }
        let _: ModalResult<&str> = take_till(0.., ['\n', '\r']).parse_next(input);
    }
}

fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        "^^".value(TokenKind::DoubleCaret),
        iri_ref,
        blank_node_label,
        string_literal,
        at_keyword_or_lang,
        // after blank labels so `_:` is not read as a default-prefix name
        name_or_keyword,
        number,
        punctuation,
    ))
    .parse_next(input)
}

// =============================================================================
// Character classes (Turtle grammar PN_* productions)
// =============================================================================

fn is_pn_chars_base(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c,
            '\u{00C0}'..='\u{00D6}'
            | '\u{00D8}'..='\u{00F6}'
            | '\u{00F8}'..='\u{02FF}'
            | '\u{0370}'..='\u{037D}'
            | '\u{037F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}')
}

fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || matches!(c, '\u{00B7}' | '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

fn is_local_char(c: char) -> bool {
    is_pn_chars(c) || c == ':'
}

fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}

/// Consume a run of `allowed` chars in which `.` may appear, but not last.
fn dotted_run(input: &mut Input<'_>, allowed: fn(char) -> bool) -> ModalResult<String> {
    let mut out = String::new();
    loop {
        let chunk: &str = take_while(0.., allowed).parse_next(input)?;
        out.push_str(chunk);

        let mut ahead = input.chars();
        if ahead.next() == Some('.') && ahead.next().is_some_and(allowed) {
            '.'.parse_next(input)?;
            out.push('.');
        } else {
            return Ok(out);
        }
    }
}

// =============================================================================
// IRIs and names
// =============================================================================

fn iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '<'.parse_next(input)?;
    let mut iri = String::new();
    loop {
        let chunk: &str = take_while(0.., is_iri_char).parse_next(input)?;
        iri.push_str(chunk);

        if input.starts_with('>') {
            '>'.parse_next(input)?;
            return Ok(TokenKind::Iri(Arc::from(iri)));
        }
        if !input.starts_with('\\') {
            return backtrack();
        }
        '\\'.parse_next(input)?;
        iri.push(unicode_escape(input)?);
    }
}

/// `uXXXX` or `UXXXXXXXX` (after the backslash)
fn unicode_escape(input: &mut Input<'_>) -> ModalResult<char> {
    let hex: &str = alt((
        preceded('u', take_while(4, AsChar::is_hex_digit)),
        preceded('U', take_while(8, AsChar::is_hex_digit)),
    ))
    .parse_next(input)?;

    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => Ok(c),
        None => backtrack(),
    }
}

fn blank_node_label(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "_:".parse_next(input)?;
    let first: char = one_of(|c: char| is_pn_chars_u(c) || c.is_ascii_digit()).parse_next(input)?;
    let mut label = String::from(first);
    label.push_str(&dotted_run(input, is_pn_chars)?);
    Ok(TokenKind::BlankNodeLabel(Arc::from(label)))
}

/// `@prefix`, `@base` or a language tag
fn at_keyword_or_lang(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let word: &str = preceded(
        '@',
        (
            take_while(1.., AsChar::is_alpha),
            take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
        )
            .take(),
    )
    .parse_next(input)?;

    Ok(match word {
        "prefix" => TokenKind::KwPrefix,
        "base" => TokenKind::KwBase,
        tag => TokenKind::LangTag(Arc::from(tag)),
    })
}

/// Prefixed names (`crm:E21_Person`, `:local`, `ex:`) and bare keywords.
fn name_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let prefix = match input.chars().next() {
        Some(c) if is_pn_chars_base(c) => {
            let _: char = any.parse_next(input)?;
            let mut word = String::from(c);
            word.push_str(&dotted_run(input, is_pn_chars)?);
            word
        }
        _ => String::new(),
    };

    if input.starts_with(':') {
        ':'.parse_next(input)?;
        let local = pn_local(input)?;
        return Ok(TokenKind::PrefixedName {
            prefix: Arc::from(prefix),
            local: Arc::from(local),
        });
    }

    match prefix.as_str() {
        "a" => Ok(TokenKind::KwA),
        "true" => Ok(TokenKind::KwTrue),
        "false" => Ok(TokenKind::KwFalse),
        w if w.eq_ignore_ascii_case("PREFIX") => Ok(TokenKind::KwSparqlPrefix),
        w if w.eq_ignore_ascii_case("BASE") => Ok(TokenKind::KwSparqlBase),
        _ => backtrack(),
    }
}

/// Local part of a prefixed name; empty for a bare namespace (`ex:`).
///
/// `%XX` sequences are kept as written, `\` escapes are decoded.
fn pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let starts_local = input
        .chars()
        .next()
        .is_some_and(|c| is_pn_chars_u(c) || c.is_ascii_digit() || matches!(c, ':' | '%' | '\\'));
    if !starts_local {
        return Ok(String::new());
    }

    let mut out = String::new();
    loop {
        let chunk: &str = take_while(0.., is_local_char).parse_next(input)?;
        out.push_str(chunk);

        if input.starts_with('%') {
            let hex: &str = preceded('%', take_while(2, AsChar::is_hex_digit)).parse_next(input)?;
            out.push('%');
            out.push_str(hex);
            continue;
        }
        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let c: char =
                one_of(|c: char| "_~.-!$&'()*+,;=/?#@%".contains(c)).parse_next(input)?;
            out.push(c);
            continue;
        }

        let mut ahead = input.chars();
        let dot_continues = ahead.next() == Some('.')
            && ahead
                .next()
                .is_some_and(|c| is_local_char(c) || c == '%' || c == '\\');
        if !dot_continues {
            return Ok(out);
        }
        '.'.parse_next(input)?;
        out.push('.');
    }
}

// =============================================================================
// Literals
// =============================================================================

fn string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let value = alt((
        delimited("\"\"\"", |i: &mut Input<'_>| long_string(i, '"', "\"\"\""), "\"\"\""),
        delimited("'''", |i: &mut Input<'_>| long_string(i, '\'', "'''"), "'''"),
        delimited('"', |i: &mut Input<'_>| short_string(i, '"'), '"'),
        delimited('\'', |i: &mut Input<'_>| short_string(i, '\''), '\''),
    ))
    .parse_next(input)?;
    Ok(TokenKind::String(Arc::from(value)))
}

fn short_string(input: &mut Input<'_>, quote: char) -> ModalResult<String> {
    let mut out = String::new();
    loop {
        let chunk: &str = take_till(0.., |c: char| {
            c == quote || c == '\\' || c == '\n' || c == '\r'
        })
        .parse_next(input)?;
        out.push_str(chunk);

        if !input.starts_with('\\') {
            return Ok(out);
        }
        '\\'.parse_next(input)?;
        out.push(echar(input)?);
    }
}

fn long_string(input: &mut Input<'_>, quote: char, delim: &str) -> ModalResult<String> {
    let mut out = String::new();
    loop {
        let chunk: &str = take_till(0.., |c: char| c == quote || c == '\\').parse_next(input)?;
        out.push_str(chunk);

        if input.is_empty() || input.starts_with(delim) {
            return Ok(out);
        }
        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            out.push(echar(input)?);
        } else {
            // a lone quote inside the long string
            let c: char = any.parse_next(input)?;
            out.push(c);
        }
    }
}

/// Escape sequence body (after the backslash)
fn echar(input: &mut Input<'_>) -> ModalResult<char> {
    if input.starts_with('u') || input.starts_with('U') {
        return unicode_escape(input);
    }
    let c: char = any.parse_next(input)?;
    match c {
        't' => Ok('\t'),
        'b' => Ok('\x08'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\x0C'),
        '"' | '\'' | '\\' => Ok(c),
        _ => backtrack(),
    }
}

fn number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let text: &str = (
        opt(one_of(['+', '-'])),
        alt((
            (digit1, opt(('.', digit1))).void(),
            ('.', digit1).void(),
        )),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)?;

    let lexical = Arc::from(text);
    Ok(if text.contains(|c| c == 'e' || c == 'E') {
        TokenKind::Double(lexical)
    } else if text.contains('.') {
        TokenKind::Decimal(lexical)
    } else {
        TokenKind::Integer(lexical)
    })
}

fn punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let c: char = one_of(['.', ',', ';', '[', ']', '(', ')']).parse_next(input)?;
    Ok(match c {
        '.' => TokenKind::Dot,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        '(' => TokenKind::LParen,
        _ => TokenKind::RParen,
    })
}
