// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The input side of an HTML5 tokenizer.
//!
//! This module does not contain a tokenizer state machine. It has what one
//! reads input through: an [`InputCursor`] over the decoded text, a
//! [`Scanner`] with the character classes HTML5 tokenizing needs, and
//! [`char_ref`] for decoding character references.
//!
//! [`InputCursor`]: struct.InputCursor.html
//! [`Scanner`]: struct.Scanner.html
//! [`char_ref`]: char_ref/index.html

pub use self::cursor::{InputCursor, Position};
pub use self::scanner::{LogTrace, Scanner, TraceFn, TraceSink};

pub mod char_ref;
mod cursor;
mod scanner;
