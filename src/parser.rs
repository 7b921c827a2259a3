// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The pattern tokenizer: a mode-tagged state machine that turns a byte
//! pattern into a postfix [`Token`] stream. This is a direct translation of
//! `tokeniser.c`'s `struct tokeniser` and its per-mode handler functions,
//! with the one deliberate change noted in `DESIGN.md`: inline option
//! groups and comments are resolved by a short bounded lookahead rather
//! than their own per-byte modes, since both forms are fully determined by
//! a 2-3 byte prefix anyway.

use crate::bitset::ByteSet;
use crate::error::{Error, Result};
use crate::token::Token;

const OPT_I: u8 = 1 << 0;
const OPT_S: u8 = 1 << 1;
const OPT_X: u8 = 1 << 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BinaryOp {
    Subtract,
    Add,
}

/// The tokenizer's current mode. Mirrors `enum tokeniser_state`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Default,
    BracePreComma,
    BracePostComma,
    BraceCclassSubtract,
    BraceCclassAdd,
    Escape,
    CclassStart,
    CclassMid,
    CclassRange,
    CclassEscape,
    CclassPost,
}

struct ParenFrame {
    natom: i32,
    nalt: i32,
    opts: u8,
    last: Option<usize>,
}

struct Parser<'a> {
    pattern: &'a [u8],
    pos: usize,
    state: Mode,
    tokens: Vec<Token>,

    paren: Vec<ParenFrame>,
    natom: i32,
    nalt: i32,
    opts: u8,
    /// Byte offset of the last complete atom or group, i.e. the thing a
    /// following quantifier or `{m,n}` would repeat.
    last: Option<usize>,

    brace_start: usize,
    brace_low: i32,
    brace_high: i32,

    cclass_negated: bool,
    cclass_last: Option<u8>,
    cclass_binary: Option<BinaryOp>,
    cclass_atom: ByteSet,
    cclass_atom_parent: ByteSet,
}

/// Tokenize `pattern` into a postfix [`Token`] stream, or fail with the
/// first syntax error encountered.
pub fn tokenize(pattern: &[u8]) -> Result<Vec<Token>> {
    log::trace!("tokenizing pattern of {} bytes", pattern.len());
    let mut p = Parser {
        pattern,
        pos: 0,
        state: Mode::Default,
        tokens: Vec::new(),
        paren: Vec::new(),
        natom: 0,
        nalt: 0,
        opts: 0,
        last: None,
        brace_start: 0,
        brace_low: -1,
        brace_high: -1,
        cclass_negated: false,
        cclass_last: None,
        cclass_binary: None,
        cclass_atom: ByteSet::new(),
        cclass_atom_parent: ByteSet::new(),
    };

    p.process(0, pattern.len())?;

    if !p.paren.is_empty() {
        return Err(Error::Unbalanced('('));
    }

    if p.state == Mode::CclassPost {
        p.cclass_post_cleanup();
    }

    match p.state {
        Mode::Default => {}
        Mode::Escape => return Err(Error::DanglingEscape),
        Mode::CclassStart
        | Mode::CclassMid
        | Mode::CclassRange
        | Mode::CclassEscape
        | Mode::CclassPost => return Err(Error::UnterminatedClass),
        Mode::BracePreComma | Mode::BracePostComma => {
            return Err(Error::MalformedRepetition)
        }
        Mode::BraceCclassSubtract | Mode::BraceCclassAdd => {
            return Err(Error::BinaryClassNotFollowedByClass)
        }
    }

    p.flush_concats();
    for _ in 0..p.nalt {
        p.tokens.push(Token::Alt);
    }
    p.nalt = 0;

    log::trace!("produced {} tokens", p.tokens.len());
    Ok(p.tokens)
}

impl<'a> Parser<'a> {
    /// Drive the state machine over `pattern[start..stop]`. Re-entrant: used
    /// both for the top-level parse and for the bounded re-parses that
    /// implement `{m,n}`.
    fn process(&mut self, start: usize, stop: usize) -> Result<()> {
        let saved_pos = self.pos;
        self.pos = start;
        while self.pos < stop {
            match self.state {
                Mode::Default => self.tokenise_default()?,
                Mode::BracePreComma => {
                    let v = self.pattern[self.pos];
                    self.tokenise_brace_pre_comma(v)?
                }
                Mode::BracePostComma => {
                    let v = self.pattern[self.pos];
                    self.tokenise_brace_post_comma(v)?
                }
                Mode::BraceCclassSubtract | Mode::BraceCclassAdd => {
                    if self.pattern[self.pos] != b'[' {
                        return Err(Error::BinaryClassNotFollowedByClass);
                    }
                    self.cclass_atom_parent = self.cclass_atom.clone();
                    let op = if self.state == Mode::BraceCclassSubtract {
                        BinaryOp::Subtract
                    } else {
                        BinaryOp::Add
                    };
                    self.tokenise_default()?;
                    self.cclass_binary = Some(op);
                }
                Mode::Escape => self.tokenise_escape()?,
                Mode::CclassStart => self.tokenise_cclass_start()?,
                Mode::CclassMid => self.tokenise_cclass_mid()?,
                Mode::CclassRange => self.tokenise_cclass_range()?,
                Mode::CclassEscape => {
                    self.state = Mode::CclassMid;
                    let v = self.process_escape();
                    if self.opts & OPT_I != 0 {
                        self.cclass_atom.set_case_insensitive(v);
                    } else {
                        self.cclass_atom.set(v);
                    }
                }
                Mode::CclassPost => self.tokenise_cclass_post()?,
            }
            self.pos += 1;
        }
        // A re-parse (`{m,n}` re-driving the tokenizer over a recorded
        // byte range) must not disturb the outer cursor; the top-level
        // call's range covers the whole pattern, so restoring is a no-op
        // there since `self.pos` already landed at `stop`.
        self.pos = saved_pos;
        Ok(())
    }

    fn byte(&self) -> u8 {
        self.pattern[self.pos]
    }

    fn starts_with(&self, prefix: &[u8]) -> bool {
        self.pattern[self.pos..].starts_with(prefix)
    }

    fn flush_concats(&mut self) {
        self.natom -= 1;
        while self.natom > 0 {
            self.tokens.push(Token::Concat);
            self.natom -= 1;
        }
    }

    fn push_atom(&mut self, set: ByteSet) {
        if self.natom > 1 {
            self.natom -= 1;
            self.tokens.push(Token::Concat);
        }
        self.tokens.push(Token::Atom(set));
        self.natom += 1;
    }

    fn tokenise_default(&mut self) -> Result<()> {
        match self.byte() {
            b'{' => {
                if self.last.is_none() {
                    return Err(Error::DanglingQuantifier);
                }
                self.state = Mode::BracePreComma;
                self.brace_low = -1;
                self.brace_high = -1;
                self.brace_start = self.pos;
            }

            b'\\' => {
                self.last = Some(self.pos);
                self.state = Mode::Escape;
            }

            b'[' => {
                self.state = Mode::CclassStart;
                self.cclass_negated = false;
                self.cclass_last = None;
                self.cclass_binary = None;
                self.cclass_atom = ByteSet::new();
                self.last = Some(self.pos);
            }

            b'(' => {
                if self.starts_with(b"(?#") {
                    self.skip_comment()?;
                    return Ok(());
                }
                if self.starts_with(b"(?") {
                    let consumed = self.try_inline_option_group()?;
                    self.pos += consumed - 1;
                    return Ok(());
                }

                if self.natom > 1 {
                    self.natom -= 1;
                    self.tokens.push(Token::Concat);
                }

                self.paren.push(ParenFrame {
                    natom: self.natom,
                    nalt: self.nalt,
                    opts: self.opts,
                    last: Some(self.pos),
                });
                self.nalt = 0;
                self.natom = 0;
                self.last = None;
            }

            b')' => {
                let frame = match self.paren.pop() {
                    Some(f) if self.natom != 0 => f,
                    _ => return Err(Error::Unbalanced(')')),
                };

                self.flush_concats();
                for _ in 0..self.nalt {
                    self.tokens.push(Token::Alt);
                }

                self.nalt = frame.nalt;
                self.natom = frame.natom;
                self.opts = frame.opts;
                self.last = frame.last;
                self.natom += 1;
            }

            b'|' => {
                if self.natom == 0 {
                    return Err(Error::EmptyAlternative);
                }
                self.flush_concats();
                self.nalt += 1;
                self.last = None;
            }

            b'*' => {
                if self.natom == 0 {
                    return Err(Error::DanglingQuantifier);
                }
                self.tokens.push(Token::Star);
                self.last = None;
            }

            b'+' => {
                if self.natom == 0 {
                    return Err(Error::DanglingQuantifier);
                }
                self.tokens.push(Token::Plus);
                self.last = None;
            }

            b'?' => {
                if self.natom == 0 {
                    return Err(Error::DanglingQuantifier);
                }
                self.tokens.push(Token::Opt);
                self.last = None;
            }

            b'.' => {
                let mut set = ByteSet::all();
                if self.opts & OPT_S == 0 {
                    set.clear(b'\n');
                }
                self.last = Some(self.pos);
                self.push_atom(set);
            }

            b @ (b' ' | b'\r' | b'\n' | b'\t') if self.opts & OPT_X != 0 => {
                let _ = b;
            }

            b => {
                let mut set = ByteSet::new();
                if self.opts & OPT_I != 0 {
                    set.set_case_insensitive(b);
                } else {
                    set.set(b);
                }
                self.last = Some(self.pos);
                self.push_atom(set);
            }
        }
        Ok(())
    }

    /// Scan a `(?flags[-flags](:|\))` prefix starting at `self.pos` (which
    /// points at the `(`). Returns the number of bytes consumed, including
    /// the opening `(`.
    fn try_inline_option_group(&mut self) -> Result<usize> {
        let mut i = self.pos + 2; // past "(?"
        let mut disable = false;
        let mut opts = self.opts;
        loop {
            if i >= self.pattern.len() {
                return Err(Error::Unbalanced('('));
            }
            match self.pattern[i] {
                b':' => {
                    // Scoped group: push a real paren frame so the matching
                    // `)` restores the prior option set.
                    if self.natom > 1 {
                        self.natom -= 1;
                        self.tokens.push(Token::Concat);
                    }
                    self.paren.push(ParenFrame {
                        natom: self.natom,
                        nalt: self.nalt,
                        opts: self.opts,
                        last: Some(self.pos),
                    });
                    self.nalt = 0;
                    self.natom = 0;
                    self.last = None;
                    self.opts = opts;
                    return Ok(i + 1 - self.pos);
                }
                b')' => {
                    // Flag-only directive: applies to the remainder of the
                    // enclosing group, no new scope.
                    self.opts = opts;
                    return Ok(i + 1 - self.pos);
                }
                b'-' if !disable => {
                    disable = true;
                }
                c @ (b'i' | b's' | b'x') => {
                    let bit = match c {
                        b'i' => OPT_I,
                        b's' => OPT_S,
                        b'x' => OPT_X,
                        _ => unreachable!(),
                    };
                    if disable {
                        opts &= !bit;
                    } else {
                        opts |= bit;
                    }
                }
                other => return Err(Error::InvalidOption(other as char)),
            }
            i += 1;
        }
    }

    /// Skip a `(?#...)` comment, honoring `\)` as a non-terminating escape.
    fn skip_comment(&mut self) -> Result<()> {
        let mut i = self.pos + 3; // past "(?#"
        loop {
            if i >= self.pattern.len() {
                return Err(Error::Unbalanced('('));
            }
            match self.pattern[i] {
                b'\\' => i += 2,
                b')' => {
                    self.pos = i;
                    return Ok(());
                }
                _ => i += 1,
            }
        }
    }

    fn process_escape(&mut self) -> u8 {
        let b = self.byte();
        if (b'0'..=b'7').contains(&b) {
            let mut v: u32 = 0;
            let mut count = 0;
            while count < 3
                && self.pos < self.pattern.len()
                && (b'0'..=b'7').contains(&self.pattern[self.pos])
            {
                v = v * 8 + (self.pattern[self.pos] - b'0') as u32;
                self.pos += 1;
                count += 1;
            }
            self.pos -= 1;
            (v & 0xFF) as u8
        } else if b == b'x' {
            self.pos += 1;
            let mut v: u32 = 0;
            let mut count = 0;
            while count < 2
                && self.pos < self.pattern.len()
                && self.pattern[self.pos].is_ascii_hexdigit()
            {
                let d = (self.pattern[self.pos] as char).to_digit(16).unwrap();
                v = v * 16 + d;
                self.pos += 1;
                count += 1;
            }
            self.pos -= 1;
            v as u8
        } else {
            match b {
                b'a' => 0x07,
                b'b' => 0x08,
                b'f' => 0x0c,
                b'n' => b'\n',
                b'r' => b'\r',
                b't' => b'\t',
                b'v' => 0x0b,
                other => other,
            }
        }
    }

    fn tokenise_escape(&mut self) -> Result<()> {
        self.state = Mode::Default;
        let v = self.process_escape();
        let mut set = ByteSet::new();
        if self.opts & OPT_I != 0 {
            set.set_case_insensitive(v);
        } else {
            set.set(v);
        }
        self.push_atom(set);
        Ok(())
    }

    fn tokenise_brace_pre_comma(&mut self, v: u8) -> Result<()> {
        if v == b',' {
            self.state = Mode::BracePostComma;
            return Ok(());
        }

        if v == b'}' {
            if self.brace_low == -1 {
                return Err(Error::MalformedRepetition);
            }
            if self.brace_low == 0 {
                return Err(Error::ZeroRepetition);
            }

            self.state = Mode::Default;
            let last = self.last.ok_or(Error::DanglingQuantifier)?;
            let brace_start = self.brace_start;
            let brace_low = self.brace_low;

            for _ in 0..(brace_low - 1) {
                self.process(last, brace_start)?;
            }
            return Ok(());
        }

        if !v.is_ascii_digit() {
            return Err(Error::MalformedRepetition);
        }

        if self.brace_low == -1 {
            self.brace_low = 0;
        }
        self.brace_low = self.brace_low * 10 + (v - b'0') as i32;
        Ok(())
    }

    fn tokenise_brace_post_comma(&mut self, v: u8) -> Result<()> {
        if v == b'}' {
            self.state = Mode::Default;

            let last = self.last.ok_or(Error::DanglingQuantifier)?;
            let brace_start = self.brace_start;
            let brace_low = if self.brace_low < 1 { 0 } else { self.brace_low };
            let mut brace_high = self.brace_high;

            if brace_high != -1 && brace_high < brace_low {
                return Err(Error::MalformedRepetition);
            }
            if brace_low == 0 && brace_high == 0 {
                return Err(Error::ZeroRepetition);
            }

            if brace_low == 0 && brace_high == -1 {
                self.tokens.push(Token::Star);
            } else if brace_low == 1 && brace_high == -1 {
                self.tokens.push(Token::Plus);
            } else if brace_high == -1 {
                for _ in 1..brace_low {
                    self.process(last, brace_start)?;
                }
                self.tokens.push(Token::Plus);
            } else {
                if brace_low == 0 {
                    self.tokens.push(Token::Opt);
                    brace_high -= 1;
                }
                for _ in 1..brace_low {
                    self.process(last, brace_start)?;
                }
                for _ in brace_low..brace_high {
                    self.process(last, brace_start)?;
                    self.tokens.push(Token::Opt);
                }
            }

            return Ok(());
        }

        if !v.is_ascii_digit() {
            return Err(Error::MalformedRepetition);
        }

        if self.brace_high == -1 {
            self.brace_high = 0;
        }
        self.brace_high = self.brace_high * 10 + (v - b'0') as i32;
        Ok(())
    }

    fn tokenise_cclass_start(&mut self) -> Result<()> {
        self.state = Mode::CclassMid;
        if self.byte() == b'^' {
            self.cclass_negated = true;
            return Ok(());
        }
        self.tokenise_cclass_mid()
    }

    fn tokenise_cclass_mid(&mut self) -> Result<()> {
        match self.byte() {
            b'\\' => {
                self.state = Mode::CclassEscape;
            }

            b']' => {
                self.state = Mode::CclassPost;
                if self.cclass_negated {
                    self.cclass_atom.complement();
                }
                if let Some(op) = self.cclass_binary {
                    match op {
                        BinaryOp::Subtract => {
                            self.cclass_atom_parent.difference(&self.cclass_atom)
                        }
                        BinaryOp::Add => self.cclass_atom_parent.union(&self.cclass_atom),
                    }
                    self.cclass_atom = self.cclass_atom_parent.clone();
                }
            }

            b'-' => {
                if self.cclass_last.is_none() {
                    self.cclass_last = Some(b'-');
                    self.cclass_atom.set(b'-');
                } else {
                    self.state = Mode::CclassRange;
                }
            }

            _ if self.starts_with(b"[:") => {
                self.attempt_posix_class()?;
            }

            b => {
                self.cclass_last = Some(b);
                if self.opts & OPT_I != 0 {
                    self.cclass_atom.set_case_insensitive(b);
                } else {
                    self.cclass_atom.set(b);
                }
            }
        }
        Ok(())
    }

    fn tokenise_cclass_range(&mut self) -> Result<()> {
        if self.byte() == b']' {
            // A trailing `-` before `]` (e.g. `[a-]`) is a literal member,
            // not a range start.
            if self.opts & OPT_I != 0 {
                self.cclass_atom.set_case_insensitive(b'-');
            } else {
                self.cclass_atom.set(b'-');
            }
            return self.tokenise_cclass_mid();
        }

        let last = self.cclass_last.unwrap_or(0);
        let hi = self.byte();
        // A reversed range (e.g. `[z-a]`) contributes no bytes, matching
        // `tokeniser.c`'s `for (i = last; i <= hi; ++i)`, which simply
        // doesn't iterate when `last > hi`.
        if last <= hi {
            for i in last..=hi {
                if self.opts & OPT_I != 0 {
                    self.cclass_atom.set_case_insensitive(i);
                } else {
                    self.cclass_atom.set(i);
                }
            }
        }
        self.cclass_last = None;
        self.state = Mode::CclassMid;
        Ok(())
    }

    fn tokenise_cclass_post(&mut self) -> Result<()> {
        if self.starts_with(b"{-}") {
            self.pos += 2;
            self.state = Mode::BraceCclassSubtract;
            return Ok(());
        }
        if self.starts_with(b"{+}") {
            self.pos += 2;
            self.state = Mode::BraceCclassAdd;
            return Ok(());
        }

        self.cclass_post_cleanup();
        self.tokenise_default()
    }

    fn cclass_post_cleanup(&mut self) {
        let set = std::mem::take(&mut self.cclass_atom);
        self.push_atom(set);
        self.state = Mode::Default;
    }

    fn attempt_posix_class(&mut self) -> Result<()> {
        // self.pos points at '[', self.pattern[self.pos+1] == ':'
        let rest = &self.pattern[self.pos + 2..];
        let negate = rest.first() == Some(&b'^');
        let rest = if negate { &rest[1..] } else { rest };

        for &(name, f) in POSIX_CLASSES {
            if rest.starts_with(name.as_bytes())
                && rest[name.len()..].starts_with(b":]")
            {
                if self.opts & OPT_I != 0
                    && negate
                    && (name == "lower" || name == "upper")
                {
                    return Err(Error::AmbiguousCaseFold);
                }

                for i in 0u16..=255 {
                    let b = i as u8;
                    let member = f(b);
                    if negate {
                        if !member {
                            self.cclass_atom.set(b);
                        }
                    } else if member {
                        if self.opts & OPT_I != 0 {
                            self.cclass_atom.set_case_insensitive(b);
                        } else {
                            self.cclass_atom.set(b);
                        }
                    }
                }

                self.pos += 2 + (negate as usize) + name.len() + 1;
                return Ok(());
            }
        }

        let end = rest.iter().position(|&b| b == b':' || b == b']')
            .unwrap_or(rest.len());
        Err(Error::UnknownPosixClass(
            String::from_utf8_lossy(&rest[..end]).into_owned(),
        ))
    }
}

type PosixFn = fn(u8) -> bool;

const POSIX_CLASSES: &[(&str, PosixFn)] = &[
    ("alnum", |b| b.is_ascii_alphanumeric()),
    ("alpha", |b| b.is_ascii_alphabetic()),
    ("blank", |b| b == b' ' || b == b'\t'),
    ("cntrl", |b| b < 0x20 || b == 0x7f),
    ("digit", |b| b.is_ascii_digit()),
    ("graph", |b| b.is_ascii_graphic()),
    ("lower", |b| b.is_ascii_lowercase()),
    ("print", |b| b.is_ascii_graphic() || b == b' '),
    ("punct", |b| b.is_ascii_punctuation()),
    ("space", |b| matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')),
    ("upper", |b| b.is_ascii_uppercase()),
    ("xdigit", |b| b.is_ascii_hexdigit()),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(pattern: &str) -> Vec<Token> {
        tokenize(pattern.as_bytes()).expect("should tokenize")
    }

    fn counts(tokens: &[Token]) -> (usize, usize) {
        let atoms = tokens.iter().filter(|t| matches!(t, Token::Atom(_))).count();
        (atoms, tokens.len())
    }

    #[test]
    fn simple_concat() {
        let t = toks("ab");
        let (atoms, total) = counts(&t);
        assert_eq!(atoms, 2);
        assert_eq!(total, 3); // Atom, Atom, Concat
    }

    #[test]
    fn alternation() {
        let t = toks("a|b");
        assert!(matches!(t.last(), Some(Token::Alt)));
    }

    #[test]
    fn star_plus_opt_require_an_atom() {
        assert!(tokenize(b"*a").is_err());
        assert!(tokenize(b"+a").is_err());
        assert!(tokenize(b"?a").is_err());
        assert!(tokenize(b"a*").is_ok());
    }

    #[test]
    fn unbalanced_parens() {
        assert!(tokenize(b"(").is_err());
        assert!(tokenize(b")").is_err());
        assert!(tokenize(b"(a").is_err());
    }

    #[test]
    fn unterminated_class_or_escape() {
        assert!(tokenize(b"[").is_err());
        assert!(tokenize(b"[a").is_err());
        assert!(tokenize(b"a\\").is_err());
    }

    #[test]
    fn dot_excludes_newline_by_default() {
        let t = toks(".");
        match &t[0] {
            Token::Atom(s) => {
                assert!(s.test(b'x'));
                assert!(!s.test(b'\n'));
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn dotall_option_includes_newline() {
        let t = toks("(?s).");
        match t.last().unwrap() {
            Token::Atom(s) => assert!(s.test(b'\n')),
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn case_insensitive_option() {
        let t = toks("(?i)a");
        match t.last().unwrap() {
            Token::Atom(s) => {
                assert!(s.test(b'a'));
                assert!(s.test(b'A'));
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn zero_repetition_is_rejected() {
        assert!(tokenize(b"a{0}").is_err());
        assert!(tokenize(b"a{0,0}").is_err());
    }

    #[test]
    fn leading_brace_with_no_atom_is_rejected() {
        assert!(tokenize(b"{2,3}").is_err());
    }

    #[test]
    fn comment_is_skipped() {
        let t1 = toks("a(?#a comment)b");
        let t2 = toks("ab");
        assert_eq!(counts(&t1), counts(&t2));
    }

    #[test]
    fn posix_class_unknown_name_errors() {
        assert!(tokenize(b"[[:bogus:]]").is_err());
    }

    #[test]
    fn binary_class_requires_bracket() {
        assert!(tokenize(b"[a-z]{-}x").is_err());
    }

    #[test]
    fn trailing_dash_before_close_bracket_is_a_member() {
        let t = toks("[a-]");
        match &t[0] {
            Token::Atom(s) => {
                assert!(s.test(b'a'));
                assert!(s.test(b'-'));
                assert!(!s.test(b']'));
            }
            _ => panic!("expected atom"),
        }
    }

    #[test]
    fn reversed_range_contributes_no_members() {
        // `z` was already recorded as a member when it was read as a plain
        // byte, before the `-` turned it into a (reversed) range start; the
        // range itself adds nothing, so `a` never becomes a member.
        let t = toks("[z-a]");
        match &t[0] {
            Token::Atom(s) => {
                assert!(s.test(b'z'));
                assert!(!s.test(b'a'));
                for b in b'b'..=b'y' {
                    assert!(!s.test(b), "byte {b} unexpectedly a member of [z-a]");
                }
            }
            _ => panic!("expected atom"),
        }
    }
}
