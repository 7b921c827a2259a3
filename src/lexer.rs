// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A longest-prefix, first-rule-wins lexer driver over an ordered rule
//! table, grounded on `lexer.c`'s `lexer_start`/`lexer_lex`/`lexer_free`
//! (the simple variant's `goto start` loop) and `lexer_init`/
//! `lexer_start_file` (the full sonavara variant's up-front rule
//! compilation and whole-stream read).

use std::io::Read;

use crate::error::{Error, Result};
use crate::regex::Regex;

/// An action invoked with a rule's matched bytes, producing a token.
type Action<T> = Box<dyn Fn(&[u8]) -> T>;

/// One entry in a lexer's rule table: a pattern and what to do when it
/// wins. A rule with no action is a "skip" rule (whitespace, comments):
/// matching it advances the cursor and restarts the scan without
/// producing a token, exactly like the original's `if (!rule->action)
/// goto start;`.
pub struct LexerRule<T> {
    pattern: String,
    action: Option<Action<T>>,
}

impl<T> LexerRule<T> {
    /// A rule whose match is discarded: the cursor advances past it but no
    /// token is produced.
    pub fn skip(pattern: impl Into<String>) -> LexerRule<T> {
        LexerRule {
            pattern: pattern.into(),
            action: None,
        }
    }

    /// A rule whose match is turned into a token by `action`.
    pub fn token(pattern: impl Into<String>, action: impl Fn(&[u8]) -> T + 'static) -> LexerRule<T> {
        LexerRule {
            pattern: pattern.into(),
            action: Some(Box::new(action)),
        }
    }
}

struct CompiledRule<T> {
    pattern: String,
    action: Option<Action<T>>,
    regex: Regex,
}

/// The outcome of one call to [`Lexer::lex`].
#[derive(Debug)]
pub enum LexResult<T> {
    /// The cursor was already at the end of the input.
    Eof,
    /// The cursor is not at EOF, but no rule matched a nonempty prefix.
    Error,
    /// A rule matched and its action produced this token.
    Token(T),
}

/// A compiled lexer: an ordered rule table plus a cursor into its input.
pub struct Lexer<T> {
    rules: Vec<CompiledRule<T>>,
    src: Vec<u8>,
    pos: usize,
}

impl<T> Lexer<T> {
    fn new(rules: Vec<LexerRule<T>>, src: Vec<u8>) -> Result<Lexer<T>> {
        let mut compiled = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            let regex = Regex::compile(&rule.pattern).map_err(|source| Error::LexerRuleCompile {
                index,
                pattern: rule.pattern.clone(),
                source: Box::new(source),
            })?;
            compiled.push(CompiledRule {
                pattern: rule.pattern,
                action: rule.action,
                regex,
            });
        }
        log::debug!("lexer compiled {} rules", compiled.len());
        Ok(Lexer {
            rules: compiled,
            src,
            pos: 0,
        })
    }

    /// Build a lexer over an in-memory string, compiling every rule.
    pub fn from_str(rules: Vec<LexerRule<T>>, src: &str) -> Result<Lexer<T>> {
        Lexer::new(rules, src.as_bytes().to_vec())
    }

    /// Build a lexer by reading `reader` to EOF into an owned buffer, then
    /// compiling every rule. Mirrors `lexer_start_file`'s growable-buffer
    /// read loop.
    pub fn from_reader<R: Read>(
        rules: Vec<LexerRule<T>>,
        mut reader: R,
    ) -> std::io::Result<Result<Lexer<T>>> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(Lexer::new(rules, buffer))
    }

    /// How many bytes of the input remain unconsumed.
    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    /// Scan the next token, advancing the cursor past it (or past any
    /// skip rules consumed along the way).
    pub fn lex(&mut self) -> LexResult<T> {
        'restart: loop {
            if self.pos >= self.src.len() {
                return LexResult::Eof;
            }

            for rule in &self.rules {
                let remaining = &self.src[self.pos..];
                let len = rule.regex.match_prefix(remaining);
                if len <= 0 {
                    continue;
                }
                let len = len as usize;
                let text = remaining[..len].to_vec();
                self.pos += len;
                log::trace!("rule {:?} matched {} bytes", rule.pattern, len);

                match &rule.action {
                    None => continue 'restart,
                    Some(action) => return LexResult::Token(action(&text)),
                }
            }

            return LexResult::Error;
        }
    }
}
