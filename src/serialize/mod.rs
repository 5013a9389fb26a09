// Copyright 2014 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turning a tree back into HTML text.
//!
//! A [`Traverser`] walks a document, fragment, node list or single node in
//! document order and hands each node to a [`RuleSet`], which writes it.
//! The traverser only dispatches: it never descends into an element by
//! itself. A rule set that wants an element's children written calls
//! [`Traverser::children`] from its `element` hook.
//!
//! [`OutputRules`] is the standard rule set.
//!
//! [`Traverser`]: struct.Traverser.html
//! [`RuleSet`]: trait.RuleSet.html
//! [`Traverser::children`]: struct.Traverser.html#method.children
//! [`OutputRules`]: struct.OutputRules.html

use std::io::{self, Write};

use phf::phf_map;

pub use self::interface::{Attribute, LocalName, Namespace, NodeKind, Prefix, QualName, TreeNode};
pub use self::interface::{HTML_NAMESPACE, MATHML_NAMESPACE, SVG_NAMESPACE};
pub use self::interface::{XLINK_NAMESPACE, XMLNS_NAMESPACE, XML_NAMESPACE};
pub use self::rules::OutputRules;

mod interface;
mod rules;

/// Namespaces that are treated as local to HTML5, with their short names.
pub static LOCAL_NAMESPACES: phf::Map<&'static str, &'static str> = phf_map! {
    "http://www.w3.org/1999/xhtml" => "html",
    "http://www.w3.org/1998/Math/MathML" => "math",
    "http://www.w3.org/2000/svg" => "svg",
};

#[derive(Copy, Clone, Debug)]
pub struct SerializeOpts {
    /// Write every character that has a named character reference as that
    /// reference? Default: false, which escapes only `&`, `<`, `>` (and
    /// quotes in attribute values).
    pub encode_entities: bool,

    /// Is scripting enabled? Decides whether `<noscript>` holds raw text.
    pub scripting_enabled: bool,
}

impl Default for SerializeOpts {
    fn default() -> SerializeOpts {
        SerializeOpts {
            encode_entities: false,
            scripting_enabled: true,
        }
    }
}

/// Writes nodes, one hook per kind of node.
///
/// Each hook writes exactly one node to wherever the rule set writes.
/// The traverser doing the walk is passed in, so that `element` can
/// recurse with `traverser.children(self, element.children())`.
/// Rule sets must not change the tree.
pub trait RuleSet<N: TreeNode> {
    fn document(&mut self, traverser: &Traverser<'_, N>, document: &N) -> io::Result<()>;

    fn element(&mut self, traverser: &Traverser<'_, N>, element: &N) -> io::Result<()>;

    fn text(&mut self, traverser: &Traverser<'_, N>, text: &N) -> io::Result<()>;

    fn cdata(&mut self, traverser: &Traverser<'_, N>, cdata: &N) -> io::Result<()>;

    fn comment(&mut self, traverser: &Traverser<'_, N>, comment: &N) -> io::Result<()>;

    fn processing_instruction(&mut self, traverser: &Traverser<'_, N>, pi: &N)
        -> io::Result<()>;
}

enum Root<'a, N> {
    Node(&'a N),
    List(Vec<&'a N>),
}

/// Walks a tree in document order, dispatching each node to a `RuleSet`.
///
/// A traverser holds nothing but its root, so it can be walked again,
/// but one walk must finish before the next starts.
pub struct Traverser<'a, N> {
    root: Root<'a, N>,
}

impl<'a, N: TreeNode> Traverser<'a, N> {
    /// Traverse a document, a document fragment, or any single node.
    pub fn new(root: &'a N) -> Traverser<'a, N> {
        Traverser {
            root: Root::Node(root),
        }
    }

    /// Traverse each node of a list, in order.
    pub fn from_list<I>(nodes: I) -> Traverser<'a, N>
    where
        I: IntoIterator<Item = &'a N>,
    {
        Traverser {
            root: Root::List(nodes.into_iter().collect()),
        }
    }

    /// Walk the root with `rules`.
    ///
    /// A document goes to the `document` hook. Only the children of a
    /// document fragment are written. Every member of a node list is
    /// written. Anything else is written as by `node`.
    pub fn walk<R>(&self, rules: &mut R) -> io::Result<()>
    where
        R: RuleSet<N> + ?Sized,
    {
        match self.root {
            Root::List(ref nodes) => self.children(rules, nodes.iter().copied()),
            Root::Node(node) => match node.kind() {
                NodeKind::Document => rules.document(self, node),
                NodeKind::DocumentFragment => self.children(rules, node.children()),
                _ => self.node(rules, node),
            },
        }
    }

    /// Write one node with the hook for its kind.
    ///
    /// Kinds without a hook (document type declarations, documents and
    /// fragments below the root, anything else) are skipped.
    pub fn node<R>(&self, rules: &mut R, node: &N) -> io::Result<()>
    where
        R: RuleSet<N> + ?Sized,
    {
        match node.kind() {
            NodeKind::Element(..) => rules.element(self, node),
            NodeKind::Text(_) => rules.text(self, node),
            NodeKind::CData(_) => rules.cdata(self, node),
            NodeKind::ProcessingInstruction { .. } => rules.processing_instruction(self, node),
            NodeKind::Comment(_) => rules.comment(self, node),
            NodeKind::Document
            | NodeKind::DocumentFragment
            | NodeKind::Doctype(_)
            | NodeKind::Other => Ok(()),
        }
    }

    /// Write each node in turn.
    pub fn children<'n, R, I>(&self, rules: &mut R, nodes: I) -> io::Result<()>
    where
        R: RuleSet<N> + ?Sized,
        I: IntoIterator<Item = &'n N>,
        N: 'n,
    {
        for node in nodes {
            self.node(rules, node)?;
        }
        Ok(())
    }

    /// Is `node` an element in one of the `LOCAL_NAMESPACES`?
    ///
    /// An element in no namespace is not local.
    pub fn is_local_element(&self, node: &N) -> bool {
        match node.kind() {
            NodeKind::Element(name, _) => {
                !name.ns.is_empty() && LOCAL_NAMESPACES.contains_key(&*name.ns)
            }
            _ => false,
        }
    }
}

/// Serialize `node` to `writer` with the standard `OutputRules`.
pub fn serialize<Wr, N>(writer: &mut Wr, node: &N, opts: SerializeOpts) -> io::Result<()>
where
    Wr: Write,
    N: TreeNode,
{
    let mut rules = OutputRules::new(writer, opts);
    Traverser::new(node).walk(&mut rules)
}
