// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolving character references.
//!
//! A tokenizer that has scanned `&name;`, `&#123;` or `&#x7B;` hands the
//! part after the ampersand to one of the lookups here. Numeric references
//! always decode to something; an unknown name decodes to `None`, and the
//! tokenizer should then keep the reference as literal text.

use std::char::from_u32;
use std::fmt;

mod data;

const REPLACEMENT_CHARACTER: char = '\u{fffd}';

//§ tokenizing-character-references
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CharRef {
    /// The resulting character(s)
    pub chars: [char; 2],

    /// How many slots in `chars` are valid?
    pub num_chars: u8,
}

impl CharRef {
    fn one(c: char) -> CharRef {
        CharRef {
            chars: [c, '\0'],
            num_chars: 1,
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.num_chars as usize]
    }
}

impl fmt::Display for CharRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.as_slice() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// A character reference, as scanned, without its `&`, `#`, `x` and `;`
/// decoration (a trailing `;` stays on named references).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EntityReference<'a> {
    Named(&'a str),
    Decimal(u32),
    Hex(&'a str),
}

impl<'a> EntityReference<'a> {
    /// Decode the reference. Only `Named` can fail to resolve.
    pub fn resolve(&self) -> Option<CharRef> {
        match *self {
            EntityReference::Named(name) => lookup_named(name),
            EntityReference::Decimal(n) => Some(lookup_decimal(n)),
            EntityReference::Hex(digits) => Some(lookup_hex(digits)),
        }
    }
}

/// Given a name (e.g. `amp` or `amp;`), look up the character(s) it stands
/// for. Names are case-sensitive and spelled as in the HTML5 named
/// character reference list, which has some names both with and without
/// the semicolon.
pub fn lookup_named(name: &str) -> Option<CharRef> {
    let &(c1, c2) = data::NAMED_ENTITIES.get(name)?;
    if c1 == 0 {
        // Only a prefix of some longer name.
        return None;
    }

    let first = from_u32(c1)?;
    Some(match from_u32(c2) {
        Some(second) if c2 != 0 => CharRef {
            chars: [first, second],
            num_chars: 2,
        },
        _ => CharRef::one(first),
    })
}

/// Could more characters turn `name` into a named reference (or is it
/// one already)?
pub fn is_named_prefix(name: &str) -> bool {
    name.is_empty() || data::NAMED_ENTITIES.contains_key(name)
}

/// Is `&#n;` a parse error? The reference still decodes; see
/// `lookup_decimal`.
pub fn numeric_ref_is_error(n: u32) -> bool {
    match n {
        0x00 | 0xD800..=0xDFFF | 0x80..=0x9F => true,
        n if n > 0x10FFFF => true,
        0x01..=0x08 | 0x0B | 0x0D..=0x1F | 0x7F | 0xFDD0..=0xFDEF => true,
        n => (n & 0xFFFE) == 0xFFFE,
    }
}

/// Decode the numeric reference `&#n;`.
///
/// Null, surrogates and values past U+10FFFF become U+FFFD. Values in the
/// C1 control range become the Windows-1252 character they stand for,
/// where there is one. Everything else, including other parse errors,
/// decodes to the code point itself.
pub fn lookup_decimal(n: u32) -> CharRef {
    if numeric_ref_is_error(n) {
        debug!("Invalid numeric character reference value 0x{:06X}", n);
    }

    let c = match n {
        0x00 | 0xD800..=0xDFFF => REPLACEMENT_CHARACTER,
        n if n > 0x10FFFF => REPLACEMENT_CHARACTER,
        0x80..=0x9F => match data::C1_REPLACEMENTS[(n - 0x80) as usize] {
            Some(c) => c,
            None => conv(n),
        },
        n => conv(n),
    };

    CharRef::one(c)
}

/// Decode the numeric reference `&#xdigits;`. Anything that is not a
/// run of hex digits decodes to U+FFFD, as does a value too large for
/// 32 bits.
pub fn lookup_hex(digits: &str) -> CharRef {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        debug!("Invalid hexadecimal character reference {:?}", digits);
        return CharRef::one(REPLACEMENT_CHARACTER);
    }

    match u32::from_str_radix(digits, 16) {
        Ok(n) => lookup_decimal(n),
        Err(_) => lookup_decimal(u32::MAX),
    }
}

/// The entity name (without `&`, with `;`) that encodes `c`, if any.
pub fn encode_named(c: char) -> Option<&'static str> {
    data::ENCODE_NAMES.get(&(c as u32)).copied()
}

fn conv(n: u32) -> char {
    from_u32(n).unwrap_or(REPLACEMENT_CHARACTER)
}
