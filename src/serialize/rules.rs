// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;
use std::io::{self, Write};

use phf::phf_set;

use super::interface::{Attribute, NodeKind, QualName, TreeNode};
use super::interface::{HTML_NAMESPACE, XLINK_NAMESPACE, XMLNS_NAMESPACE, XML_NAMESPACE};
use super::{RuleSet, SerializeOpts, Traverser};
use crate::tokenizer::char_ref::encode_named;

static VOID_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img",
    "input", "keygen", "link", "menuitem", "meta", "param", "source", "track", "wbr",
};

// Elements whose text children are written without escaping.
static RAW_TEXT_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
};

/// The standard rules for writing HTML5.
pub struct OutputRules<Wr> {
    writer: Wr,
    opts: SerializeOpts,
}

// The local name of an HTML element; elements in no namespace count too.
fn html_name(name: &QualName) -> Option<&str> {
    if name.ns.is_empty() || &*name.ns == HTML_NAMESPACE {
        Some(&*name.local)
    } else {
        None
    }
}

fn tagname<'n, N: TreeNode>(traverser: &Traverser<'_, N>, node: &N, name: &'n QualName) -> Cow<'n, str> {
    if name.ns.is_empty() || traverser.is_local_element(node) {
        return Cow::Borrowed(&*name.local);
    }

    match name.prefix {
        Some(ref prefix) => Cow::Owned(format!("{}:{}", prefix, name.local)),
        None => {
            warn!("node with weird namespace {:?}", &*name.ns);
            Cow::Borrowed(&*name.local)
        }
    }
}

impl<Wr: Write> OutputRules<Wr> {
    pub fn new(writer: Wr, opts: SerializeOpts) -> OutputRules<Wr> {
        OutputRules { writer, opts }
    }

    pub fn opts(&self) -> SerializeOpts {
        self.opts
    }

    /// Give back the writer.
    pub fn into_inner(self) -> Wr {
        self.writer
    }

    fn write_escaped(&mut self, text: &str, attr_mode: bool) -> io::Result<()> {
        let mut written = 0;
        for (i, c) in text.char_indices() {
            let entity = if self.opts.encode_entities {
                encode_named(c)
            } else {
                match c {
                    '&' => Some("amp;"),
                    '<' => Some("lt;"),
                    '>' => Some("gt;"),
                    '"' if attr_mode => Some("quot;"),
                    '\'' if attr_mode => Some("apos;"),
                    _ => None,
                }
            };

            if let Some(entity) = entity {
                self.writer.write_all(text[written..i].as_bytes())?;
                self.writer.write_all(b"&")?;
                self.writer.write_all(entity.as_bytes())?;
                written = i + c.len_utf8();
            }
        }
        self.writer.write_all(text[written..].as_bytes())
    }

    fn write_attr(&mut self, attr: &Attribute) -> io::Result<()> {
        self.writer.write_all(b" ")?;

        let name = &attr.name;
        match &*name.ns {
            "" => (),
            XML_NAMESPACE => self.writer.write_all(b"xml:")?,
            XMLNS_NAMESPACE => {
                if &*name.local != "xmlns" {
                    self.writer.write_all(b"xmlns:")?;
                }
            }
            XLINK_NAMESPACE => self.writer.write_all(b"xlink:")?,
            ns => match name.prefix {
                Some(ref prefix) => {
                    self.writer.write_all(prefix.as_bytes())?;
                    self.writer.write_all(b":")?;
                }
                None => warn!("attr with weird namespace {:?}", ns),
            },
        }

        self.writer.write_all(name.local.as_bytes())?;
        self.writer.write_all(b"=\"")?;
        self.write_escaped(&attr.value, true)?;
        self.writer.write_all(b"\"")
    }

    fn is_raw_text(&self, html_name: &str) -> bool {
        match html_name {
            "noscript" => self.opts.scripting_enabled,
            name => RAW_TEXT_ELEMENTS.contains(name),
        }
    }
}

impl<Wr: Write, N: TreeNode> RuleSet<N> for OutputRules<Wr> {
    fn document(&mut self, traverser: &Traverser<'_, N>, document: &N) -> io::Result<()> {
        self.writer.write_all(b"<!DOCTYPE html>\n")?;
        if document.children().next().is_some() {
            traverser.children(self, document.children())?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn element(&mut self, traverser: &Traverser<'_, N>, element: &N) -> io::Result<()> {
        let (name, attrs) = match element.kind() {
            NodeKind::Element(name, attrs) => (name, attrs),
            _ => return Ok(()),
        };
        let tag = tagname(traverser, element, name);
        let html_name = html_name(name);

        self.writer.write_all(b"<")?;
        self.writer.write_all(tag.as_bytes())?;
        for attr in attrs {
            self.write_attr(attr)?;
        }
        self.writer.write_all(b">")?;

        if html_name.map_or(false, |n| VOID_ELEMENTS.contains(n)) {
            return Ok(());
        }

        if html_name.map_or(false, |n| self.is_raw_text(n)) {
            for child in element.children() {
                match child.kind() {
                    NodeKind::Text(text) => self.writer.write_all(text.as_bytes())?,
                    _ => traverser.node(self, child)?,
                }
            }
        } else {
            let prepend_lf = matches!(html_name, Some("pre") | Some("textarea") | Some("listing"))
                && match element.children().next().map(|c| c.kind()) {
                    Some(NodeKind::Text(text)) => text.starts_with('\n'),
                    _ => false,
                };
            if prepend_lf {
                self.writer.write_all(b"\n")?;
            }
            traverser.children(self, element.children())?;
        }

        self.writer.write_all(b"</")?;
        self.writer.write_all(tag.as_bytes())?;
        self.writer.write_all(b">")
    }

    fn text(&mut self, _: &Traverser<'_, N>, text: &N) -> io::Result<()> {
        match text.kind() {
            NodeKind::Text(text) => self.write_escaped(text, false),
            _ => Ok(()),
        }
    }

    fn cdata(&mut self, _: &Traverser<'_, N>, cdata: &N) -> io::Result<()> {
        match cdata.kind() {
            NodeKind::CData(data) => {
                self.writer.write_all(b"<![CDATA[")?;
                self.writer.write_all(data.as_bytes())?;
                self.writer.write_all(b"]]>")
            }
            _ => Ok(()),
        }
    }

    fn comment(&mut self, _: &Traverser<'_, N>, comment: &N) -> io::Result<()> {
        match comment.kind() {
            NodeKind::Comment(text) => {
                self.writer.write_all(b"<!--")?;
                self.writer.write_all(text.as_bytes())?;
                self.writer.write_all(b"-->")
            }
            _ => Ok(()),
        }
    }

    fn processing_instruction(&mut self, _: &Traverser<'_, N>, pi: &N) -> io::Result<()> {
        match pi.kind() {
            NodeKind::ProcessingInstruction { target, data } => {
                self.writer.write_all(b"<?")?;
                self.writer.write_all(target.as_bytes())?;
                self.writer.write_all(b" ")?;
                self.writer.write_all(data.as_bytes())?;
                self.writer.write_all(b"?>")
            }
            _ => Ok(()),
        }
    }
}
