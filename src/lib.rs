// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A byte-oriented regular expression engine built on Thompson's
//! construction and parallel NFA simulation, plus a longest-prefix lexer
//! driver built on top of it.
//!
//! The engine is deliberately narrow: no capture groups, no backreferences,
//! no anchors, no Unicode (the input alphabet is the 256 byte values), no
//! lazy quantifiers, and no unanchored substring search. What it does do,
//! it does without backtracking: every [`Regex`] is simulated in
//! worst-case `O(n * m)` time, where `n` is the input length and `m` is
//! the size of the compiled automaton.
//!
//! ```
//! use sonavara_regex::Regex;
//!
//! let re = Regex::compile(r"[a-z]+[0-9]*").unwrap();
//! assert!(re.is_match(b"hello42"));
//! assert_eq!(re.match_prefix(b"hello42 world"), 7);
//! ```
//!
//! [`Lexer`] turns an ordered table of `(pattern, action)` rules into a
//! longest-prefix, first-rule-wins tokenizer:
//!
//! ```
//! use sonavara_regex::{Lexer, LexerRule, LexResult};
//!
//! #[derive(Debug, PartialEq)]
//! enum Token { Ident(String), Number(i64) }
//!
//! let rules = vec![
//!     LexerRule::skip(r"[ \t]+"),
//!     LexerRule::token("[[:alpha:]][[:alnum:]]*", |m| {
//!         Token::Ident(String::from_utf8_lossy(m).into_owned())
//!     }),
//!     LexerRule::token("[0-9]+", |m| {
//!         Token::Number(std::str::from_utf8(m).unwrap().parse().unwrap())
//!     }),
//! ];
//!
//! let mut lexer = Lexer::from_str(rules, "abc 123").unwrap();
//! assert!(matches!(lexer.lex(), LexResult::Token(Token::Ident(_))));
//! assert!(matches!(lexer.lex(), LexResult::Token(Token::Number(123))));
//! assert!(matches!(lexer.lex(), LexResult::Eof));
//! ```

mod bitset;
mod error;
mod lexer;
mod nfa;
mod parser;
mod regex;
mod sim;
mod token;

pub use crate::error::{Error, Result};
pub use crate::lexer::{LexResult, Lexer, LexerRule};
pub use crate::regex::Regex;
