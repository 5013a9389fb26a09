// Copyright 2014-2017 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use string_cache::DefaultAtom;
use tendril::StrTendril;

pub type LocalName = DefaultAtom;
pub type Namespace = DefaultAtom;
pub type Prefix = DefaultAtom;

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Fully qualified name. Used to depict names of tags and attributes.
///
/// An empty `ns` means the name is in no namespace.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct QualName {
    pub prefix: Option<Prefix>,
    pub ns: Namespace,
    pub local: LocalName,
}

impl QualName {
    pub fn new(prefix: Option<Prefix>, ns: Namespace, local: LocalName) -> QualName {
        QualName { prefix, ns, local }
    }

    /// A name in the XHTML namespace.
    pub fn html(local: &str) -> QualName {
        QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
    }

    /// A name in no namespace, as attributes usually are.
    pub fn plain(local: &str) -> QualName {
        QualName::new(None, Namespace::from(""), LocalName::from(local))
    }
}

/// A tag attribute.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: StrTendril,
}

impl Attribute {
    pub fn new(name: QualName, value: &str) -> Attribute {
        Attribute {
            name,
            value: StrTendril::from_slice(value),
        }
    }
}

/// What a node is, with borrowed views of its data.
#[derive(Copy, Clone, Debug)]
pub enum NodeKind<'a> {
    Document,
    DocumentFragment,
    /// A document type declaration. Traversal skips these.
    Doctype(&'a str),
    Element(&'a QualName, &'a [Attribute]),
    Text(&'a str),
    CData(&'a str),
    Comment(&'a str),
    ProcessingInstruction { target: &'a str, data: &'a str },
    /// Anything else the tree can hold. Traversal skips these.
    Other,
}

/// A read-only view of a node in someone else's tree.
pub trait TreeNode {
    type Children<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    fn kind(&self) -> NodeKind<'_>;

    /// The node's children, in document order.
    fn children(&self) -> Self::Children<'_>;
}
