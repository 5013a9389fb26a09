// Copyright 2015 The html5io Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io::{self, Write};

use html5io::dom::{Node, NodeData};
use html5io::serialize::{
    serialize, Attribute, LocalName, Namespace, NodeKind, OutputRules, Prefix, QualName,
    RuleSet, SerializeOpts, Traverser, TreeNode,
};
use html5io::serialize::{SVG_NAMESPACE, XLINK_NAMESPACE, XMLNS_NAMESPACE, XML_NAMESPACE};

fn to_string_with(node: &Node, opts: SerializeOpts) -> String {
    let mut result = vec![];
    serialize(&mut result, node, opts).unwrap();
    String::from_utf8(result).unwrap()
}

fn to_string(node: &Node) -> String {
    to_string_with(node, SerializeOpts::default())
}

fn elem(local: &str, children: Vec<Node>) -> Node {
    Node::html_element(local, &[], children)
}

fn text(s: &str) -> Node {
    Node::text(s)
}

macro_rules! test {
    ($name:ident, $node:expr, $output:expr) => {
        #[test]
        fn $name() {
            assert_eq!($output, &*to_string(&$node));
        }
    };
}

test!(empty_fragment, Node::fragment(vec![]), "");
test!(smoke_test,
    elem("p", vec![elem("i", vec![text("Hello")]), text(", World!")]),
    "<p><i>Hello</i>, World!</p>");

test!(text_escape_amp_lt, elem("p", vec![text("a&b<c")]), "<p>a&amp;b&lt;c</p>");
test!(text_escape_gt, elem("p", vec![text(">")]), "<p>&gt;</p>");
test!(text_literal_quotes, elem("p", vec![text(r#""'""#)]), r#"<p>"'"</p>"#);
test!(text_literal_nbsp, elem("p", vec![text("x\u{a0}y")]), "<p>x\u{a0}y</p>");

test!(attr_escape_quot,
    Node::html_element("base", &[("foo", "\"")], vec![]),
    r#"<base foo="&quot;">"#);
test!(attr_escape_apos,
    Node::html_element("base", &[("foo", "it's")], vec![]),
    r#"<base foo="it&apos;s">"#);
test!(attr_escape_several,
    Node::html_element("span", &[("foo", "3"), ("title", r#"test "with" &quot;"#)], vec![]),
    r#"<span foo="3" title="test &quot;with&quot; &amp;quot;"></span>"#);
test!(attr_escape_lt_gt,
    Node::html_element("base", &[("foo", "<'>")], vec![]),
    r#"<base foo="&lt;&apos;&gt;">"#);

test!(void_br, elem("br", vec![]), "<br>");
test!(void_img_with_attrs,
    Node::html_element("img", &[("src", "a.png"), ("alt", "")], vec![]),
    r#"<img src="a.png" alt="">"#);
test!(void_ignores_children, elem("hr", vec![text("lost")]), "<hr>");
test!(empty_div, elem("div", vec![]), "<div></div>");

test!(script_literal,
    elem("script", vec![text(r#"(x & 1) < 2; y > "foo" + 'bar'"#)]),
    r#"<script>(x & 1) < 2; y > "foo" + 'bar'</script>"#);
test!(style_literal,
    elem("style", vec![text("a > b { content: '&' }")]),
    "<style>a > b { content: '&' }</style>");
test!(xmp_literal, elem("xmp", vec![text("<&>")]), "<xmp><&></xmp>");
test!(plaintext_literal, elem("plaintext", vec![text("<&>")]), "<plaintext><&></plaintext>");
test!(raw_text_element_with_comment,
    elem("noframes", vec![text("<"), Node::comment("c")]),
    "<noframes><<!--c--></noframes>");

test!(pre_lf_0, elem("pre", vec![text("foo bar")]), "<pre>foo bar</pre>");
test!(pre_lf_1, elem("pre", vec![text("\nfoo bar")]), "<pre>\n\nfoo bar</pre>");
test!(textarea_lf, elem("textarea", vec![text("\nfoo")]), "<textarea>\n\nfoo</textarea>");
test!(listing_lf, elem("listing", vec![text("\nfoo")]), "<listing>\n\nfoo</listing>");
test!(div_no_lf, elem("div", vec![text("\nfoo")]), "<div>\nfoo</div>");
test!(pre_lf_after_element,
    elem("pre", vec![elem("b", vec![]), text("\nfoo")]),
    "<pre><b></b>\nfoo</pre>");

test!(comment, Node::comment(" hi "), "<!-- hi -->");
test!(cdata, Node::cdata("x < y && z"), "<![CDATA[x < y && z]]>");
test!(processing_instruction,
    Node::processing_instruction("xml-stylesheet", "href=\"a.css\""),
    "<?xml-stylesheet href=\"a.css\"?>");

test!(doctype_alone, Node::doctype("html"), "");
test!(fragment_children_only,
    Node::fragment(vec![text("a"), Node::doctype("html"), elem("b", vec![])]),
    "a<b></b>");

test!(document_empty, Node::document(vec![]), "<!DOCTYPE html>\n");
test!(document,
    Node::document(vec![
        Node::doctype("html"),
        elem("html", vec![elem("head", vec![]), elem("body", vec![text("hi")])]),
    ]),
    "<!DOCTYPE html>\n<html><head></head><body>hi</body></html>\n");

fn svg(local: &str, prefix: Option<&str>, attrs: Vec<Attribute>, children: Vec<Node>) -> Node {
    let name = QualName::new(
        prefix.map(Prefix::from),
        Namespace::from(SVG_NAMESPACE),
        LocalName::from(local),
    );
    Node::element(name, attrs, children)
}

fn attr_in(ns: &str, prefix: Option<&str>, local: &str, value: &str) -> Attribute {
    let name = QualName::new(prefix.map(Prefix::from), Namespace::from(ns), LocalName::from(local));
    Attribute::new(name, value)
}

test!(svg_is_local,
    svg("svg", Some("s"), vec![], vec![svg("circle", None, vec![], vec![])]),
    "<svg><circle></circle></svg>");

test!(foreign_element_with_prefix,
    Node::element(
        QualName::new(
            Some(Prefix::from("ex")),
            Namespace::from("http://example.com/ns"),
            LocalName::from("thing"),
        ),
        vec![],
        vec![text("x")],
    ),
    "<ex:thing>x</ex:thing>");

test!(foreign_element_without_prefix,
    Node::element(
        QualName::new(None, Namespace::from("http://example.com/ns"), LocalName::from("thing")),
        vec![],
        vec![],
    ),
    "<thing></thing>");

test!(no_namespace_element, Node::element(QualName::plain("custom"), vec![], vec![]),
    "<custom></custom>");

test!(attr_xlink,
    svg("use", None, vec![attr_in(XLINK_NAMESPACE, None, "href", "#a")], vec![]),
    r##"<use xlink:href="#a"></use>"##);
test!(attr_xml,
    elem_with_attr(attr_in(XML_NAMESPACE, None, "lang", "en")),
    r#"<p xml:lang="en"></p>"#);
test!(attr_xmlns_prefixed,
    elem_with_attr(attr_in(XMLNS_NAMESPACE, None, "xlink", XLINK_NAMESPACE)),
    r#"<p xmlns:xlink="http://www.w3.org/1999/xlink"></p>"#);
test!(attr_xmlns_bare,
    elem_with_attr(attr_in(XMLNS_NAMESPACE, None, "xmlns", SVG_NAMESPACE)),
    r#"<p xmlns="http://www.w3.org/2000/svg"></p>"#);
test!(attr_other_prefixed,
    elem_with_attr(attr_in("http://example.com/ns", Some("ex"), "flag", "1")),
    r#"<p ex:flag="1"></p>"#);
test!(attr_other_unprefixed,
    elem_with_attr(attr_in("http://example.com/ns", None, "flag", "1")),
    r#"<p flag="1"></p>"#);

fn elem_with_attr(attr: Attribute) -> Node {
    Node::element(QualName::html("p"), vec![attr], vec![])
}

#[test]
fn noscript_follows_scripting_flag() {
    let node = elem("noscript", vec![text("<&>")]);

    let on = SerializeOpts {
        scripting_enabled: true,
        ..Default::default()
    };
    assert_eq!(to_string_with(&node, on), "<noscript><&></noscript>");

    let off = SerializeOpts {
        scripting_enabled: false,
        ..Default::default()
    };
    assert_eq!(to_string_with(&node, off), "<noscript>&lt;&amp;&gt;</noscript>");
}

#[test]
fn encode_entities() {
    let opts = SerializeOpts {
        encode_entities: true,
        ..Default::default()
    };

    let node = elem("p", vec![text("a&b \u{a9} \u{e9}\n")]);
    assert_eq!(to_string_with(&node, opts), "<p>a&amp;b &copy; &eacute;&NewLine;</p>");

    let node = Node::html_element("a", &[("title", "\"x\u{a0}y\"")], vec![]);
    assert_eq!(to_string_with(&node, opts), r#"<a title="&quot;x&nbsp;y&quot;"></a>"#);
}

#[test]
fn encode_entities_leaves_raw_text_alone() {
    let opts = SerializeOpts {
        encode_entities: true,
        ..Default::default()
    };
    let node = elem("script", vec![text("a && b\n")]);
    assert_eq!(to_string_with(&node, opts), "<script>a && b\n</script>");
}

#[test]
fn node_list() {
    let nodes = vec![text("a<"), elem("br", vec![]), Node::comment("c")];
    let mut rules = OutputRules::new(vec![], SerializeOpts::default());
    Traverser::from_list(&nodes).walk(&mut rules).unwrap();
    assert_eq!(String::from_utf8(rules.into_inner()).unwrap(), "a&lt;<br><!--c-->");
}

#[test]
fn walk_twice() {
    let node = elem("p", vec![text("x")]);
    let traverser = Traverser::new(&node);
    let mut rules = OutputRules::new(vec![], SerializeOpts::default());
    traverser.walk(&mut rules).unwrap();
    traverser.walk(&mut rules).unwrap();
    assert_eq!(String::from_utf8(rules.into_inner()).unwrap(), "<p>x</p><p>x</p>");
}

#[test]
fn dyn_rule_set() {
    let node = elem("i", vec![text("x")]);
    let mut rules = OutputRules::new(vec![], SerializeOpts::default());
    {
        let dynamic: &mut dyn RuleSet<Node> = &mut rules;
        Traverser::new(&node).walk(dynamic).unwrap();
    }
    assert_eq!(String::from_utf8(rules.into_inner()).unwrap(), "<i>x</i>");
}

// Records which hook saw which node, and descends into elements.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

fn describe(node: &Node) -> String {
    match node.data {
        NodeData::Element { ref name, .. } => format!("<{}>", name.local),
        NodeData::Text { ref contents } => contents.to_string(),
        NodeData::Comment { ref contents } => format!("#{}", contents),
        ref other => format!("{:?}", other),
    }
}

impl RuleSet<Node> for Recorder {
    fn document(&mut self, traverser: &Traverser<'_, Node>, document: &Node) -> io::Result<()> {
        self.calls.push("document".to_string());
        traverser.children(self, document.children())
    }

    fn element(&mut self, traverser: &Traverser<'_, Node>, element: &Node) -> io::Result<()> {
        self.calls.push(format!("element {}", describe(element)));
        traverser.children(self, element.children())
    }

    fn text(&mut self, _: &Traverser<'_, Node>, text: &Node) -> io::Result<()> {
        self.calls.push(format!("text {}", describe(text)));
        Ok(())
    }

    fn cdata(&mut self, _: &Traverser<'_, Node>, cdata: &Node) -> io::Result<()> {
        self.calls.push(format!("cdata {}", describe(cdata)));
        Ok(())
    }

    fn comment(&mut self, _: &Traverser<'_, Node>, comment: &Node) -> io::Result<()> {
        self.calls.push(format!("comment {}", describe(comment)));
        Ok(())
    }

    fn processing_instruction(&mut self, _: &Traverser<'_, Node>, pi: &Node) -> io::Result<()> {
        self.calls.push(format!("pi {}", describe(pi)));
        Ok(())
    }
}

#[test]
fn list_dispatches_each_node_once() {
    let nodes = vec![elem("p", vec![]), text("t"), Node::comment("c")];
    let mut recorder = Recorder::default();
    Traverser::from_list(&nodes).walk(&mut recorder).unwrap();
    assert_eq!(recorder.calls, vec!["element <p>", "text t", "comment #c"]);
}

#[test]
fn document_order() {
    let doc = Node::document(vec![
        Node::doctype("html"),
        elem("html", vec![
            elem("body", vec![text("a"), elem("b", vec![text("c")]), Node::comment("d")]),
        ]),
    ]);
    let mut recorder = Recorder::default();
    Traverser::new(&doc).walk(&mut recorder).unwrap();
    assert_eq!(recorder.calls, vec![
        "document",
        "element <html>",
        "element <body>",
        "text a",
        "element <b>",
        "text c",
        "comment #d",
    ]);
}

#[test]
fn nested_documents_are_skipped() {
    let frag = Node::fragment(vec![
        Node::document(vec![text("inner")]),
        Node::fragment(vec![text("inner")]),
        text("outer"),
    ]);
    let mut recorder = Recorder::default();
    Traverser::new(&frag).walk(&mut recorder).unwrap();
    assert_eq!(recorder.calls, vec!["text outer"]);
}

// A tree type other than the bundled DOM.
struct Leaf(&'static str);

impl TreeNode for Leaf {
    type Children<'a> = std::iter::Empty<&'a Leaf>;

    fn kind(&self) -> NodeKind<'_> {
        match self.0 {
            "?" => NodeKind::Other,
            s => NodeKind::Text(s),
        }
    }

    fn children(&self) -> Self::Children<'_> {
        std::iter::empty()
    }
}

#[test]
fn other_tree_type() {
    let leaves = [Leaf("a&"), Leaf("?"), Leaf("b")];
    let mut rules = OutputRules::new(vec![], SerializeOpts::default());
    Traverser::from_list(leaves.iter()).walk(&mut rules).unwrap();
    assert_eq!(String::from_utf8(rules.into_inner()).unwrap(), "a&amp;b");
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_errors_propagate() {
    let node = elem("p", vec![text("x")]);
    let err = serialize(&mut FailingWriter, &node, SerializeOpts::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}
