// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The edges of an HTML5 processor: reading characters in, and writing
//! trees back out.
//!
//! * [`tokenizer`] scans decoded input for a tokenizer and resolves
//!   character references.
//! * [`serialize`] walks a tree and hands each node to a pluggable
//!   [`RuleSet`].
//! * [`dom`] is a small owned tree to serialize.
//!
//! [`tokenizer`]: tokenizer/index.html
//! [`serialize`]: serialize/index.html
//! [`RuleSet`]: serialize/trait.RuleSet.html
//! [`dom`]: dom/index.html

#[macro_use]
extern crate log;

pub use tendril;

/// Create a [`CharSet`] holding each space-separated character.
///
/// ```ignore
/// let set = char_set!('<' '&' '\0');
/// assert!(set.contains('&'));
/// ```
///
/// [`CharSet`]: util/charset/struct.CharSet.html
#[macro_export]
macro_rules! char_set ( ($($e:tt)+) => (
    $crate::CharSet {
        bits: $( (1u128 << ($e as u8)) )|+
    }
));

pub mod util;
pub mod tokenizer;
pub mod serialize;
pub mod dom;

pub use crate::util::charset::CharSet;
pub use crate::tokenizer::{InputCursor, Position, Scanner};
pub use crate::serialize::{serialize, RuleSet, SerializeOpts, Traverser};
