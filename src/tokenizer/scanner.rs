// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use tendril::StrTendril;

use super::cursor::{InputCursor, Position};
use crate::util::charset::{self, CharSet};

/// Receives every character the scanner steps onto, when tracing.
pub trait TraceSink {
    fn trace(&mut self, c: char);
}

/// Trace through the `log` crate at debug level.
#[derive(Copy, Clone, Default, Debug)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn trace(&mut self, c: char) {
        debug!("> {}", c);
    }
}

impl TraceSink for Vec<char> {
    fn trace(&mut self, c: char) {
        self.push(c);
    }
}

/// Adapts a closure into a `TraceSink`.
pub struct TraceFn<F>(pub F);

impl<F: FnMut(char)> TraceSink for TraceFn<F> {
    fn trace(&mut self, c: char) {
        (self.0)(c)
    }
}

/// Scans over an `InputCursor` on behalf of a tokenizer.
///
/// The scanner has no buffer of its own. Everything it returns comes
/// from, and every move it makes is made on, the borrowed cursor.
pub struct Scanner<'a> {
    input: &'a mut InputCursor,
    trace: Option<&'a mut dyn TraceSink>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a mut InputCursor) -> Scanner<'a> {
        Scanner { input, trace: None }
    }

    /// A scanner that reports each character `next` steps onto to `trace`.
    pub fn with_trace(input: &'a mut InputCursor, trace: &'a mut dyn TraceSink) -> Scanner<'a> {
        Scanner {
            input,
            trace: Some(trace),
        }
    }

    pub fn position(&self) -> Position {
        self.input.position()
    }

    pub fn current(&self) -> Option<char> {
        self.input.current()
    }

    pub fn peek(&self) -> Option<char> {
        self.input.peek()
    }

    /// Advance one character and return the new current character.
    pub fn next(&mut self) -> Option<char> {
        let c = self.input.next();
        if let (Some(c), Some(trace)) = (c, self.trace.as_mut()) {
            trace.trace(c);
        }
        c
    }

    /// Silently consume `n` characters.
    pub fn consume(&mut self, n: usize) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Move back `n` characters. See `InputCursor::unconsume`.
    pub fn unconsume(&mut self, n: usize) {
        self.input.unconsume(n)
    }

    pub fn get_hex(&mut self) -> StrTendril {
        self.input.chars_while(charset::HEX_DIGITS)
    }

    pub fn get_ascii_alpha(&mut self) -> StrTendril {
        self.input.chars_while(charset::ASCII_ALPHA)
    }

    pub fn get_ascii_alnum(&mut self) -> StrTendril {
        self.input.chars_while(charset::ASCII_ALNUM)
    }

    pub fn get_numeric(&mut self) -> StrTendril {
        self.input.chars_while(charset::ASCII_DIGITS)
    }

    /// Consume a run of HTML5 whitespace: tab, line feed, form feed, space.
    pub fn whitespace(&mut self) -> StrTendril {
        self.input.chars_while(charset::WHITESPACE)
    }

    pub fn chars_until(&mut self, set: CharSet) -> StrTendril {
        self.input.chars_until(set)
    }

    pub fn chars_while(&mut self, set: CharSet) -> StrTendril {
        self.input.chars_while(set)
    }

    pub fn current_line(&self) -> usize {
        self.input.current_line()
    }

    pub fn column_offset(&self) -> usize {
        self.input.column_offset()
    }

    pub fn remaining_chars(&mut self) -> StrTendril {
        self.input.remaining_chars()
    }
}
