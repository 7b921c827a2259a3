// Copyright 2014-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fixed 256-bit membership set over byte values.
//!
//! This is the Rust-native stand-in for the C original's
//! `unsigned char atom[BITNSLOTS(256)]` plus its `BITSET`/`BITCLEAR`/
//! `BITTEST` macros: every byte 0..=255 has well-defined membership.

use fixedbitset::FixedBitSet;

/// A set of byte values (0..=255).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteSet(FixedBitSet);

impl ByteSet {
    /// An empty set.
    pub fn new() -> ByteSet {
        ByteSet(FixedBitSet::with_capacity(256))
    }

    /// The set containing every byte value.
    pub fn all() -> ByteSet {
        let mut set = ByteSet::new();
        set.0.insert_range(..);
        set
    }

    /// Add `b` to the set.
    pub fn set(&mut self, b: u8) {
        self.0.insert(b as usize);
    }

    /// Remove `b` from the set.
    pub fn clear(&mut self, b: u8) {
        self.0.set(b as usize, false);
    }

    /// Test whether `b` is a member.
    pub fn test(&self, b: u8) -> bool {
        self.0.contains(b as usize)
    }

    /// Bitwise-complement the set in place, over the full 0..=255 domain.
    pub fn complement(&mut self) {
        self.0.toggle_range(..);
    }

    /// `self |= other`.
    pub fn union(&mut self, other: &ByteSet) {
        self.0.union_with(&other.0);
    }

    /// `self &= other`.
    pub fn intersection(&mut self, other: &ByteSet) {
        self.0.intersect_with(&other.0);
    }

    /// `self &= !other`, i.e. remove every member of `other` from `self`.
    pub fn difference(&mut self, other: &ByteSet) {
        self.0.difference_with(&other.0);
    }

    /// Add both the lowercase and uppercase variant of `b` (ASCII only,
    /// matching the C library's `tolower`/`toupper` on a `char` domain).
    pub fn set_case_insensitive(&mut self, b: u8) {
        self.set(b.to_ascii_lowercase());
        self.set(b.to_ascii_uppercase());
    }
}

impl Default for ByteSet {
    fn default() -> ByteSet {
        ByteSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clear_test() {
        let mut s = ByteSet::new();
        assert!(!s.test(b'a'));
        s.set(b'a');
        assert!(s.test(b'a'));
        s.clear(b'a');
        assert!(!s.test(b'a'));
    }

    #[test]
    fn all_contains_everything() {
        let s = ByteSet::all();
        for b in 0u8..=255 {
            assert!(s.test(b));
        }
    }

    #[test]
    fn complement_flips_membership() {
        let mut s = ByteSet::new();
        s.set(b'a');
        s.complement();
        assert!(!s.test(b'a'));
        assert!(s.test(b'b'));
    }

    #[test]
    fn union_intersection_difference() {
        let mut a = ByteSet::new();
        a.set(b'a');
        a.set(b'b');
        let mut b = ByteSet::new();
        b.set(b'b');
        b.set(b'c');

        let mut u = a.clone();
        u.union(&b);
        assert!(u.test(b'a') && u.test(b'b') && u.test(b'c'));

        let mut i = a.clone();
        i.intersection(&b);
        assert!(!i.test(b'a') && i.test(b'b') && !i.test(b'c'));

        let mut d = a.clone();
        d.difference(&b);
        assert!(d.test(b'a') && !d.test(b'b') && !d.test(b'c'));
    }

    #[test]
    fn case_insensitive_add() {
        let mut s = ByteSet::new();
        s.set_case_insensitive(b'k');
        assert!(s.test(b'k'));
        assert!(s.test(b'K'));
        assert!(!s.test(b'j'));
    }
}
