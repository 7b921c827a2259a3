// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for pattern compilation and lexer construction.

use thiserror::Error as ThisError;

/// Everything that can go wrong compiling a pattern or building a lexer.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A paren, bracket or brace was opened but never closed.
    #[error("unbalanced '{0}' in pattern")]
    Unbalanced(char),

    /// A `*`, `+` or `?` had nothing to its left to quantify.
    #[error("quantifier with nothing to repeat")]
    DanglingQuantifier,

    /// A `|` appeared with nothing to its left in the current group.
    #[error("alternation with an empty left-hand side")]
    EmptyAlternative,

    /// `\` was the last byte of the pattern, or of a class.
    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    /// `[...]` was never closed.
    #[error("unterminated character class")]
    UnterminatedClass,

    /// `[:name:]` used a name that isn't one of the twelve POSIX classes.
    #[error("unknown POSIX class name {0:?}")]
    UnknownPosixClass(String),

    /// `(?i:...)` negated `[:lower:]`/`[:upper:]`, which is ambiguous.
    #[error("negated [:lower:] or [:upper:] under the (?i) option is ambiguous")]
    AmbiguousCaseFold,

    /// `[...]{-}` or `[...]{+}` was not immediately followed by `[`.
    #[error("'{{-}}' or '{{+}}' must be followed by a character class")]
    BinaryClassNotFollowedByClass,

    /// `{m,n}` with non-digit content, no closing `}`, or `m > n`.
    #[error("malformed bounded repetition {{m,n}}")]
    MalformedRepetition,

    /// `{0}` or `{0,0}`: zero repetitions is rejected rather than silently
    /// accepted or turned into a no-op.
    #[error("{{0}} and {{0,0}} repetition counts are rejected")]
    ZeroRepetition,

    /// `(?flags)` used a flag letter other than `i`, `s`, `x`.
    #[error("invalid inline option flag {0:?}")]
    InvalidOption(char),

    /// The Thompson builder's fragment stack did not end with exactly one
    /// fragment. This indicates a parser/builder mismatch and should never
    /// be reachable from well-formed input.
    #[error("internal error: builder stack size {0} at end of token stream")]
    BuilderStackMismatch(usize),

    /// A lexer rule's pattern failed to compile.
    #[error("lexer rule {index} ({pattern:?}) failed to compile: {source}")]
    LexerRuleCompile {
        /// Index of the offending rule in the rule table.
        index: usize,
        /// The offending pattern, for diagnostics.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: Box<Error>,
    },
}

/// A specialized `Result` for this crate.
pub type Result<T> = ::std::result::Result<T, Error>;
