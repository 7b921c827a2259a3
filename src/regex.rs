// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The public compiled-regex type: `Nfa::compile` wires the parser, the
//! Thompson builder and the simulator behind one constructor, the way
//! `regex_compile`/`regex_match`/`regex_match_prefix` do in `engine.c`.

use crate::error::Result;
use crate::nfa::{self, Nfa as CompiledNfa};
use crate::parser;
use crate::sim;

/// A compiled regular expression.
///
/// Compilation is anchored at the start of the input and has no notion of
/// capture groups, backreferences or substring search; see the crate docs
/// for the full list of non-goals. Once compiled, a `Regex` is immutable
/// and safe to share across threads.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    nfa: CompiledNfa,
}

impl Regex {
    /// Compile `pattern` into a `Regex`.
    pub fn compile(pattern: &str) -> Result<Regex> {
        log::debug!("compiling pattern {:?}", pattern);
        let tokens = parser::tokenize(pattern.as_bytes())?;
        let nfa = nfa::build(&tokens)?;
        Ok(Regex {
            pattern: pattern.to_string(),
            nfa,
        })
    }

    /// The pattern this `Regex` was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether `input` matches this regex in its entirety.
    pub fn is_match(&self, input: &[u8]) -> bool {
        let r = sim::is_match(&self.nfa, input);
        log::trace!("is_match({:?}, {} bytes) = {}", self.pattern, input.len(), r);
        r
    }

    /// The length of the longest prefix of `input` this regex accepts, or
    /// -1 if none (including the empty prefix) is accepted.
    pub fn match_prefix(&self, input: &[u8]) -> isize {
        let r = sim::match_prefix(&self.nfa, input);
        log::trace!("match_prefix({:?}, {} bytes) = {}", self.pattern, input.len(), r);
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_reports_syntax_errors() {
        assert!(Regex::compile("(a").is_err());
        assert!(Regex::compile("a{0}").is_err());
        assert!(Regex::compile("*a").is_err());
    }

    #[test]
    fn as_str_round_trips_the_pattern() {
        let re = Regex::compile("a[bc]+").unwrap();
        assert_eq!(re.as_str(), "a[bc]+");
    }

    #[test]
    fn end_to_end_match() {
        let re = Regex::compile("[a-z]+([0-9]+)?").unwrap();
        assert!(re.is_match(b"abc123"));
        assert!(re.is_match(b"abc"));
        assert!(!re.is_match(b"123"));
        assert_eq!(re.match_prefix(b"abc123!"), 6);
    }
}
