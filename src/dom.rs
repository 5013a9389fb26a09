// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A simple DOM where every node is owned by its parent.
//!
//! This is enough to build a tree by hand and serialize it. It has no
//! parent links and no tree builder.

use std::slice;

use tendril::StrTendril;

use crate::serialize::{Attribute, NodeKind, QualName, TreeNode};

/// The different kinds of nodes in the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// The `Document` itself.
    Document,

    /// A fragment, whose children are serialized without it.
    DocumentFragment,

    /// A `DOCTYPE` with its name.
    Doctype { name: StrTendril },

    /// A text node.
    Text { contents: StrTendril },

    /// A CDATA section.
    CData { contents: StrTendril },

    /// A comment.
    Comment { contents: StrTendril },

    /// An element with attributes.
    Element { name: QualName, attrs: Vec<Attribute> },

    /// A processing instruction.
    ProcessingInstruction { target: StrTendril, contents: StrTendril },
}

/// A DOM node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub data: NodeData,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(data: NodeData, children: Vec<Node>) -> Node {
        Node { data, children }
    }

    pub fn document(children: Vec<Node>) -> Node {
        Node::new(NodeData::Document, children)
    }

    pub fn fragment(children: Vec<Node>) -> Node {
        Node::new(NodeData::DocumentFragment, children)
    }

    pub fn doctype(name: &str) -> Node {
        Node::new(
            NodeData::Doctype {
                name: StrTendril::from_slice(name),
            },
            vec![],
        )
    }

    pub fn element(name: QualName, attrs: Vec<Attribute>, children: Vec<Node>) -> Node {
        Node::new(NodeData::Element { name, attrs }, children)
    }

    /// An element in the XHTML namespace with plain attributes.
    pub fn html_element(local: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
        let attrs = attrs
            .iter()
            .map(|&(name, value)| Attribute::new(QualName::plain(name), value))
            .collect();
        Node::element(QualName::html(local), attrs, children)
    }

    pub fn text(contents: &str) -> Node {
        Node::new(
            NodeData::Text {
                contents: StrTendril::from_slice(contents),
            },
            vec![],
        )
    }

    pub fn cdata(contents: &str) -> Node {
        Node::new(
            NodeData::CData {
                contents: StrTendril::from_slice(contents),
            },
            vec![],
        )
    }

    pub fn comment(contents: &str) -> Node {
        Node::new(
            NodeData::Comment {
                contents: StrTendril::from_slice(contents),
            },
            vec![],
        )
    }

    pub fn processing_instruction(target: &str, contents: &str) -> Node {
        Node::new(
            NodeData::ProcessingInstruction {
                target: StrTendril::from_slice(target),
                contents: StrTendril::from_slice(contents),
            },
            vec![],
        )
    }
}

impl TreeNode for Node {
    type Children<'a> = slice::Iter<'a, Node>;

    fn kind(&self) -> NodeKind<'_> {
        match self.data {
            NodeData::Document => NodeKind::Document,
            NodeData::DocumentFragment => NodeKind::DocumentFragment,
            NodeData::Doctype { ref name } => NodeKind::Doctype(name),
            NodeData::Text { ref contents } => NodeKind::Text(contents),
            NodeData::CData { ref contents } => NodeKind::CData(contents),
            NodeData::Comment { ref contents } => NodeKind::Comment(contents),
            NodeData::Element { ref name, ref attrs } => NodeKind::Element(name, attrs),
            NodeData::ProcessingInstruction {
                ref target,
                ref contents,
            } => NodeKind::ProcessingInstruction {
                target,
                data: contents,
            },
        }
    }

    fn children(&self) -> Self::Children<'_> {
        self.children.iter()
    }
}
