// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parallel NFA simulation: `state_list_add` / `step` / `match` from
//! `engine.c`, ported from an unbounded, non-deduplicated `state_list`
//! linked list to a pair of double-buffered `FixedBitSet`s (closer in
//! spirit to `defuz-regex`'s `Threads`/`clist`/`nlist` swap in `nfa.rs`,
//! minus the capture slots that engine has no use for here).
//!
//! No state is ever visited twice within the same epsilon-closure: the
//! `FixedBitSet` plays the role a visited-set would if the original's
//! `state_list_add` recursion bothered to allocate one (if a Thompson
//! graph from `*`/`+` cycles back on itself, the original would loop
//! forever on a maliciously self-referential case; the arena's acyclic
//! dangling-pointer discipline from `nfa.rs` rules that out here, but the
//! dedup still avoids the quadratic blowup of adding the same state to the
//! list on every branch of a wide `|` chain).

use fixedbitset::FixedBitSet;

use crate::nfa::{Nfa, State, StateIdx};

fn add_state(nfa: &Nfa, seen: &mut FixedBitSet, list: &mut Vec<StateIdx>, idx: StateIdx) -> bool {
    if seen.contains(idx) {
        return false;
    }
    seen.insert(idx);

    match nfa.state(idx) {
        State::Split(o1, o2) => {
            let a = add_state(nfa, seen, list, *o1);
            let b = add_state(nfa, seen, list, *o2);
            a || b
        }
        State::Match => {
            list.push(idx);
            true
        }
        State::Atom(..) => {
            list.push(idx);
            false
        }
    }
}

fn step(nfa: &Nfa, clist: &[StateIdx], byte: u8, seen: &mut FixedBitSet, nlist: &mut Vec<StateIdx>) -> bool {
    let mut matched = false;
    for &idx in clist {
        if let State::Atom(set, next) = nfa.state(idx) {
            if set.test(byte) && add_state(nfa, seen, nlist, *next) {
                matched = true;
            }
        }
    }
    matched
}

/// The length of the longest prefix of `input` that `nfa` accepts, or -1
/// if no prefix (including the empty one) is accepted.
pub fn match_prefix(nfa: &Nfa, input: &[u8]) -> isize {
    let mut seen = FixedBitSet::with_capacity(nfa.len());
    let mut clist = Vec::new();
    let accepts_empty = add_state(nfa, &mut seen, &mut clist, nfa.start());

    let mut longest: isize = -1;
    let mut len = 0usize;

    for &byte in input {
        len += 1;
        let mut nseen = FixedBitSet::with_capacity(nfa.len());
        let mut nlist = Vec::new();
        if step(nfa, &clist, byte, &mut nseen, &mut nlist) {
            longest = len as isize;
        }
        clist = nlist;
    }

    if longest == input.len() as isize {
        return longest;
    }
    // The loop above only ever records a positive length, so it never
    // discovers that the *empty* prefix accepts. Only fall back to that
    // when no other accepting prefix was found at all; a positive
    // `longest` is always the better answer.
    if longest == -1 && accepts_empty {
        return 0;
    }
    longest
}

/// Whether `nfa` accepts `input` in its entirety.
pub fn is_match(nfa: &Nfa, input: &[u8]) -> bool {
    match_prefix(nfa, input) == input.len() as isize
}
