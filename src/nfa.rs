// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Thompson construction: turns a postfix [`Token`] stream into an NFA.
//!
//! This is `token2nfa` from `nfa.c`, with one change: states live in a
//! single arena (`Vec<State>`) addressed by index instead of being
//! individually `malloc`'d and linked by pointer. `ptrlist`'s job — holding
//! a fragment's dangling out-edges until the thing that follows it is
//! known — is played here by `Vec<(StateIdx, Slot)>`, patched the same way
//! `ptrlist_patch` walks and overwrites its pointers.
//!
//! The arena also retires the original's two-pass `state_mark_recursive` /
//! `state_free_recursive` destructor: a `Vec<State>` has no cycles to
//! protect against, so dropping it is just dropping a `Vec`.

use crate::error::{Error, Result};
use crate::token::Token;

/// Index of a [`State`] in an [`Nfa`]'s arena.
pub type StateIdx = usize;

const NULL: StateIdx = StateIdx::MAX;

/// One node of the NFA graph.
#[derive(Clone, Debug)]
pub enum State {
    /// Matches one input byte in the given set, then continues at the
    /// stored index.
    Atom(crate::bitset::ByteSet, StateIdx),
    /// Epsilon-splits to two successor states (`*`, `+`, `?`, `|`).
    Split(StateIdx, StateIdx),
    /// Accepting state. Exactly one exists per compiled NFA.
    Match,
}

/// A compiled NFA: an arena of states plus its start index.
#[derive(Clone, Debug)]
pub struct Nfa {
    states: Vec<State>,
    start: StateIdx,
}

impl Nfa {
    pub(crate) fn state(&self, idx: StateIdx) -> &State {
        &self.states[idx]
    }

    pub(crate) fn start(&self) -> StateIdx {
        self.start
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}

#[derive(Clone, Copy, Debug)]
enum Slot {
    Atom,
    Out2,
}

struct Fragment {
    start: StateIdx,
    dangling: Vec<(StateIdx, Slot)>,
}

fn patch(states: &mut [State], dangling: &[(StateIdx, Slot)], target: StateIdx) {
    for &(idx, slot) in dangling {
        match (&mut states[idx], slot) {
            (State::Atom(_, out), Slot::Atom) => *out = target,
            (State::Split(_, o2), Slot::Out2) => *o2 = target,
            _ => unreachable!("dangling slot does not match state shape"),
        }
    }
}

/// Build an NFA from a postfix token stream via Thompson's construction.
pub fn build(tokens: &[Token]) -> Result<Nfa> {
    let mut states: Vec<State> = Vec::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for token in tokens {
        match token {
            Token::Atom(set) => {
                let idx = states.len();
                states.push(State::Atom(set.clone(), NULL));
                stack.push(Fragment {
                    start: idx,
                    dangling: vec![(idx, Slot::Atom)],
                });
            }

            Token::Concat => {
                let e2 = pop(&mut stack)?;
                let mut e1 = pop(&mut stack)?;
                patch(&mut states, &e1.dangling, e2.start);
                e1.dangling = e2.dangling;
                stack.push(Fragment {
                    start: e1.start,
                    dangling: e1.dangling,
                });
            }

            Token::Alt => {
                let e2 = pop(&mut stack)?;
                let mut e1 = pop(&mut stack)?;
                let idx = states.len();
                states.push(State::Split(e1.start, e2.start));
                e1.dangling.extend(e2.dangling);
                stack.push(Fragment {
                    start: idx,
                    dangling: e1.dangling,
                });
            }

            Token::Star => {
                let e1 = pop(&mut stack)?;
                let idx = states.len();
                states.push(State::Split(e1.start, NULL));
                patch(&mut states, &e1.dangling, idx);
                stack.push(Fragment {
                    start: idx,
                    dangling: vec![(idx, Slot::Out2)],
                });
            }

            Token::Plus => {
                let e1 = pop(&mut stack)?;
                let idx = states.len();
                states.push(State::Split(e1.start, NULL));
                patch(&mut states, &e1.dangling, idx);
                stack.push(Fragment {
                    start: e1.start,
                    dangling: vec![(idx, Slot::Out2)],
                });
            }

            Token::Opt => {
                let mut e1 = pop(&mut stack)?;
                let idx = states.len();
                states.push(State::Split(e1.start, NULL));
                e1.dangling.push((idx, Slot::Out2));
                stack.push(Fragment {
                    start: idx,
                    dangling: e1.dangling,
                });
            }
        }
    }

    let last = pop(&mut stack)?;
    if !stack.is_empty() {
        return Err(Error::BuilderStackMismatch(stack.len() + 1));
    }

    let match_idx = states.len();
    states.push(State::Match);
    patch(&mut states, &last.dangling, match_idx);

    log::trace!("built NFA with {} states from {} tokens", states.len(), tokens.len());

    Ok(Nfa {
        states,
        start: last.start,
    })
}

fn pop(stack: &mut Vec<Fragment>) -> Result<Fragment> {
    stack.pop().ok_or(Error::BuilderStackMismatch(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitset::ByteSet;

    fn atom(b: u8) -> Token {
        let mut s = ByteSet::new();
        s.set(b);
        Token::Atom(s)
    }

    #[test]
    fn single_atom() {
        let nfa = build(&[atom(b'a')]).unwrap();
        assert_eq!(nfa.len(), 2); // atom + match
        match nfa.state(nfa.start()) {
            State::Atom(set, next) => {
                assert!(set.test(b'a'));
                assert!(matches!(nfa.state(*next), State::Match));
            }
            _ => panic!("expected atom start state"),
        }
    }

    #[test]
    fn concat_chains_atoms() {
        let nfa = build(&[atom(b'a'), atom(b'b'), Token::Concat]).unwrap();
        match nfa.state(nfa.start()) {
            State::Atom(set, next) => {
                assert!(set.test(b'a'));
                match nfa.state(*next) {
                    State::Atom(set2, _) => assert!(set2.test(b'b')),
                    _ => panic!("expected second atom"),
                }
            }
            _ => panic!("expected atom start state"),
        }
    }

    #[test]
    fn alt_is_a_split() {
        let nfa = build(&[atom(b'a'), atom(b'b'), Token::Alt]).unwrap();
        assert!(matches!(nfa.state(nfa.start()), State::Split(_, _)));
    }

    #[test]
    fn star_splits_back_to_itself() {
        let nfa = build(&[atom(b'a'), Token::Star]).unwrap();
        match nfa.state(nfa.start()) {
            State::Split(o1, _) => {
                assert!(matches!(nfa.state(*o1), State::Atom(_, _)));
            }
            _ => panic!("expected split at star"),
        }
    }

    #[test]
    fn empty_token_stream_is_rejected() {
        assert!(build(&[]).is_err());
    }

    #[test]
    fn leftover_fragments_are_rejected() {
        // Two atoms with no Concat/Alt joining them: malformed postfix stream.
        assert!(build(&[atom(b'a'), atom(b'b')]).is_err());
    }
}
