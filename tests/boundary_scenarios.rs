//! End-to-end coverage of the compiled engine's documented boundary cases.

use sonavara_regex::{LexResult, Lexer, LexerRule, Regex};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn group_star_then_literal() {
    init();
    let re = Regex::compile("(ab)*d").unwrap();
    assert!(re.is_match(b"d"));
    assert!(re.is_match(b"ababd"));
    assert!(!re.is_match(b"xd"));
}

#[test]
fn simple_alternation() {
    init();
    let re = Regex::compile("a|b").unwrap();
    assert!(re.is_match(b"a"));
    assert!(re.is_match(b"b"));
    assert!(!re.is_match(b"ab"));
    assert!(!re.is_match(b""));
}

#[test]
fn character_class_plus() {
    init();
    let re = Regex::compile("[a-c]+").unwrap();
    assert!(re.is_match(b"abc"));
    assert!(!re.is_match(b""));
    assert_eq!(re.match_prefix(b"abcz"), 3);
}

#[test]
fn posix_identifier_pattern() {
    init();
    let re = Regex::compile("[[:alpha:]][[:alnum:]_]*").unwrap();
    assert_eq!(re.match_prefix(b"foo_bar 42"), 7);
    assert_eq!(re.match_prefix(b"9lives"), -1);
}

#[test]
fn bounded_repetition() {
    init();
    let re = Regex::compile("a{2,4}").unwrap();
    assert!(!re.is_match(b"a"));
    assert!(re.is_match(b"aa"));
    assert!(re.is_match(b"aaaa"));
    assert!(!re.is_match(b"aaaaa"));
}

#[test]
fn inline_case_insensitive_flag_and_scoped_group() {
    init();
    let re = Regex::compile("(?i)Foo").unwrap();
    assert!(re.is_match(b"foo"));
    assert!(re.is_match(b"FOO"));

    let scoped = Regex::compile("(?i:a)b").unwrap();
    assert!(scoped.is_match(b"Ab"));
    assert!(!scoped.is_match(b"AB"));
}

#[test]
fn binary_class_subtract() {
    init();
    let re = Regex::compile("[a-z]{-}[aeiou]").unwrap();
    assert!(re.is_match(b"b"));
    assert!(!re.is_match(b"a"));
}

#[test]
fn binary_class_add() {
    init();
    let re = Regex::compile("[[:alnum:]]{+}[_]").unwrap();
    assert!(re.is_match(b"_"));
    assert!(re.is_match(b"a"));
    assert!(re.is_match(b"9"));
}

#[test]
fn invalid_patterns_are_rejected() {
    init();
    assert!(Regex::compile("(").is_err());
    assert!(Regex::compile("a{").is_err());
    assert!(Regex::compile("*a").is_err());
    assert!(Regex::compile("[").is_err());
}

#[derive(Debug, PartialEq, Eq)]
enum Tok {
    Ident,
    Eq,
    Num,
    Plus,
}

#[test]
fn lexer_rule_table_over_an_assignment_expression() {
    init();
    let rules = vec![
        LexerRule::token("[[:alpha:]][[:alnum:]_]*", |_| Tok::Ident),
        LexerRule::token("=", |_| Tok::Eq),
        LexerRule::token("[[:digit:]]+", |_| Tok::Num),
        LexerRule::token(r"\+", |_| Tok::Plus),
        LexerRule::skip("[[:space:]]+"),
    ];
    let mut lexer = Lexer::from_str(rules, "a = 1 + 2").unwrap();

    assert!(matches!(lexer.lex(), LexResult::Token(Tok::Ident)));
    assert!(matches!(lexer.lex(), LexResult::Token(Tok::Eq)));
    assert!(matches!(lexer.lex(), LexResult::Token(Tok::Num)));
    assert!(matches!(lexer.lex(), LexResult::Token(Tok::Plus)));
    assert!(matches!(lexer.lex(), LexResult::Token(Tok::Num)));
    assert!(matches!(lexer.lex(), LexResult::Eof));
}
