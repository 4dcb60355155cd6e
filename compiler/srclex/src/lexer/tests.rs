use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;

type Popped = Option<(TokenKind, String, u32, u32)>;

fn tok(kind: TokenKind, text: &str, line: u32, column: u32) -> Popped {
    Some((kind, text.to_owned(), line, column))
}

fn pop(lexer: &mut Lexer) -> Popped {
    lexer
        .pop_token()
        .map(|t| (t.kind, t.lexeme.text, t.lexeme.line, t.lexeme.column))
}

fn kw(text: &str) -> TokenKind {
    TokenKind::Keyword(text.to_owned())
}

fn sym(text: &str) -> TokenKind {
    TokenKind::Symbol(text.to_owned())
}

// === End of stream ===

#[test]
fn empty_source_is_immediately_exhausted() {
    let mut lexer = Lexer::new(LexerConfig::new());
    lexer.analyze("");
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn pop_before_analyze_is_end_of_stream() {
    let mut lexer = Lexer::new(LexerConfig::new());
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn end_of_stream_is_sticky() {
    let mut lexer = Lexer::new(LexerConfig::new());
    lexer.analyze("a");
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "a", 1, 1));
    for _ in 0..3 {
        assert_eq!(pop(&mut lexer), None);
    }
}

// === Keywords ===

#[test]
fn recognizes_keywords() {
    let mut lexer = Lexer::new(LexerConfig::new().with_keywords(["struct", "enum"]));
    lexer.analyze("struct structenum enum");
    assert_eq!(pop(&mut lexer), tok(kw("struct"), "struct", 1, 1));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "structenum", 1, 8));
    assert_eq!(pop(&mut lexer), tok(kw("enum"), "enum", 1, 19));
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn exposes_normalized_keywords_and_symbols() {
    let lexer = Lexer::new(
        LexerConfig::new()
            .with_keywords(["struct", "", "struct", "enum"])
            .with_symbols(["{", "", "}", "{"])
            .with_line_comment("//"),
    );
    assert_eq!(lexer.keywords(), ["struct", "enum"]);
    assert_eq!(lexer.symbols(), ["{", "}"]);
    assert!(lexer.config().is_keyword("enum"));
    assert_eq!(lexer.config().line_comment(), Some("//"));
    assert_eq!(lexer.config().block_comment(), None);
}

// === Symbols ===

#[test]
fn recognizes_symbols() {
    let mut lexer = Lexer::new(LexerConfig::new().with_symbols(["..", ","]));
    lexer.analyze(".. A ,");
    assert_eq!(pop(&mut lexer), tok(sym(".."), "..", 1, 1));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "A", 1, 4));
    assert_eq!(pop(&mut lexer), tok(sym(","), ",", 1, 6));
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn symbols_between_keywords() {
    let mut lexer = Lexer::new(
        LexerConfig::new()
            .with_keywords(["A", "B"])
            .with_symbols([","]),
    );
    lexer.analyze("A,B");
    assert_eq!(pop(&mut lexer), tok(kw("A"), "A", 1, 1));
    assert_eq!(pop(&mut lexer), tok(sym(","), ",", 1, 2));
    assert_eq!(pop(&mut lexer), tok(kw("B"), "B", 1, 3));
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn longest_symbol_is_one_token() {
    let mut lexer = Lexer::new(LexerConfig::new().with_symbols(["=", "=="]));
    lexer.analyze("A == B");
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "A", 1, 1));
    assert_eq!(pop(&mut lexer), tok(sym("=="), "==", 1, 3));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "B", 1, 6));
    assert_eq!(pop(&mut lexer), None);
}

// === Comments ===

#[test]
fn skips_line_comment() {
    let mut lexer = Lexer::new(LexerConfig::new().with_line_comment("//"));
    lexer.analyze("      A//comment\n      B\n    ");
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "A", 1, 7));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "B", 2, 7));
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn skips_multi_line_comment() {
    let mut lexer = Lexer::new(
        LexerConfig::new()
            .with_line_comment("//")
            .with_block_comment("/*", "*/"),
    );
    lexer.analyze("      A/*comment\n      B//still in comment*/C\n    ");
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "A", 1, 7));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "C", 2, 28));
    assert_eq!(pop(&mut lexer), None);
}

// === Literals ===

#[test]
fn classifies_numbers() {
    let mut lexer = Lexer::new(LexerConfig::new());
    lexer.analyze("9 1.5");
    assert_eq!(pop(&mut lexer), tok(TokenKind::Number, "9", 1, 1));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Number, "1.5", 1, 3));
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn classifies_string_literals() {
    let mut lexer = Lexer::new(
        LexerConfig::new()
            .with_string_delimiters("\"", "\"")
            .with_line_comment("//")
            .with_block_comment("/*", "*/"),
    );
    lexer.analyze("A\"//\"B\"/**/\"C");
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "A", 1, 1));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Str, "\"//\"", 1, 2));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "B", 1, 6));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Str, "\"/**/\"", 1, 7));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "C", 1, 13));
    assert_eq!(pop(&mut lexer), None);
}

// === Re-analysis ===

#[test]
fn analyze_resets_state() {
    let mut lexer = Lexer::new(LexerConfig::new().with_string_delimiters("\"", "\""));
    lexer.analyze("\"open");
    assert_eq!(lexer.issues().len(), 1);
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "\"open", 1, 1));

    lexer.analyze("x y");
    assert!(lexer.issues().is_empty());
    assert_eq!(lexer.source(), "x y");
    assert_eq!(lexer.remaining(), 2);
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "x", 1, 1));
    assert_eq!(pop(&mut lexer), tok(TokenKind::Ident, "y", 1, 3));
    assert_eq!(pop(&mut lexer), None);
}

#[test]
fn popping_does_not_discard_lexemes() {
    let mut lexer = Lexer::new(LexerConfig::new());
    lexer.analyze("a b c");
    let _ = lexer.pop_token();
    assert_eq!(lexer.remaining(), 2);
    assert_eq!(lexer.lexemes().len(), 3);
}

#[test]
fn iterator_drains_remaining_tokens() {
    let mut lexer = Lexer::new(LexerConfig::new().with_symbols([";"]));
    lexer.analyze("a; b;");
    let _ = lexer.pop_token();
    assert_eq!(lexer.len(), 3);
    let texts: Vec<String> = lexer.by_ref().map(|t| t.lexeme.text).collect();
    assert_eq!(texts, [";", "b", ";"]);
    assert_eq!(lexer.next(), None);
}

#[test]
fn analyze_is_chainable() {
    let mut lexer = Lexer::new(LexerConfig::new());
    let token = lexer.analyze("x").pop_token();
    assert_eq!(token.map(|t| t.to_string()), Some("IDENT \"x\" @ 1:1".to_owned()));
}
