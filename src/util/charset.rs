// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `CharSet` represents a set of characters, subject to the following
//! restriction:
//!
//! * Every character has Unicode scalar value less than 128.
//!
//! Membership is a single bit test, so the scanning loops in
//! `InputCursor` can work byte-at-a-time: a non-ASCII byte is never a
//! member, and an ASCII byte is always a character boundary.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharSet {
    pub bits: u128,
}

/// `0-9a-fA-F`
pub const HEX_DIGITS: CharSet = CharSet::from_ascii("0123456789abcdefABCDEF");

/// `a-zA-Z`
pub const ASCII_ALPHA: CharSet =
    CharSet::from_ascii("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// `a-zA-Z0-9`
pub const ASCII_ALNUM: CharSet = ASCII_ALPHA.union(ASCII_DIGITS);

/// `0-9`
pub const ASCII_DIGITS: CharSet = CharSet::from_ascii("0123456789");

/// HTML5 whitespace: tab, line feed, form feed, space.
pub const WHITESPACE: CharSet = CharSet::from_ascii("\t\n\x0C ");

impl CharSet {
    pub const EMPTY: CharSet = CharSet { bits: 0 };

    /// Build a set from the characters of an ASCII string.
    ///
    /// Panics (at compile time, in a `const`) on non-ASCII input.
    pub const fn from_ascii(chars: &str) -> CharSet {
        let bytes = chars.as_bytes();
        let mut bits = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i] < 128, "CharSet can only hold ASCII characters");
            bits |= 1 << bytes[i];
            i += 1;
        }
        CharSet { bits }
    }

    pub const fn union(self, other: CharSet) -> CharSet {
        CharSet { bits: self.bits | other.bits }
    }

    #[inline]
    pub fn contains(self, c: char) -> bool {
        (c as u32) < 128 && self.contains_byte(c as u8)
    }

    #[inline]
    pub fn contains_byte(self, b: u8) -> bool {
        b < 128 && 0 != (self.bits & (1 << b))
    }

    /// Count the number of bytes at the beginning of `buf` which are
    /// in the set.
    pub fn member_prefix_len(self, buf: &[u8]) -> usize {
        buf.iter().take_while(|&&b| self.contains_byte(b)).count()
    }

    /// Count the number of bytes at the beginning of `buf` which are
    /// not in the set.
    pub fn nonmember_prefix_len(self, buf: &[u8]) -> usize {
        buf.iter().take_while(|&&b| !self.contains_byte(b)).count()
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let members: String = (0u8..128)
            .filter(|&b| self.contains_byte(b))
            .map(|b| b as char)
            .collect();
        write!(f, "CharSet({:?})", members)
    }
}
