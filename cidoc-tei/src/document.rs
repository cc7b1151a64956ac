//! Arena-backed XML element tree
//!
//! The tree keeps what the TEI mappers read: element names, attributes and
//! character data. Comments, processing instructions and the doctype are
//! dropped while reading. Elements are matched by local name, so
//! `<tei:person>` and `<person xmlns="http://www.tei-c.org/ns/1.0">` look the
//! same to callers. Attributes are matched by their qualified name as written
//! (`xml:id`, `key`, `type`).

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, TeiError};
use crate::text::normalize_space;

#[derive(Debug)]
enum Child {
    Element(usize),
    Text(String),
}

#[derive(Debug)]
struct Node {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
    parent: Option<usize>,
}

/// A parsed TEI document
#[derive(Debug)]
pub struct TeiDocument {
    nodes: Vec<Node>,
    root: usize,
}

impl TeiDocument {
    /// Parse a document from a string
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);
        let mut nodes: Vec<Node> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut root: Option<usize> = None;

        loop {
            let position = reader.buffer_position();
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let id = push_node(&mut nodes, e, stack.last().copied(), position)?;
                    root.get_or_insert(id);
                    stack.push(id);
                }
                Ok(Event::Empty(ref e)) => {
                    let id = push_node(&mut nodes, e, stack.last().copied(), position)?;
                    root.get_or_insert(id);
                }
                Ok(Event::End(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
                    match stack.pop() {
                        Some(open) if nodes[open].name == name => {}
                        _ => return Err(TeiError::UnexpectedEnd { position, name }),
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(&parent) = stack.last() {
                        let text = e.unescape().map_err(|err| TeiError::Xml {
                            position,
                            message: err.to_string(),
                        })?;
                        push_text(&mut nodes[parent], &text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(&parent) = stack.last() {
                        push_text(&mut nodes[parent], &String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(TeiError::Xml {
                        position: reader.error_position(),
                        message: err.to_string(),
                    })
                }
            }
        }

        if let Some(open) = stack.pop() {
            return Err(TeiError::Unclosed(nodes[open].name.clone()));
        }
        let root = root.ok_or(TeiError::NoRoot)?;
        tracing::debug!(elements = nodes.len(), "parsed TEI document");
        Ok(Self { nodes, root })
    }

    /// The document element
    pub fn root(&self) -> ElementRef<'_> {
        ElementRef {
            doc: self,
            id: self.root,
        }
    }

    /// Every element named `tag` that carries `xml:id`, in document order.
    /// The root element itself is a candidate.
    pub fn entities(&self, tag: &str) -> Vec<ElementRef<'_>> {
        self.root()
            .self_and_descendants()
            .filter(|e| e.name() == tag && e.xml_id().is_some())
            .collect()
    }

    /// Every element named `tag`, root included, in document order
    pub fn elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.root()
            .self_and_descendants()
            .filter(move |e| e.name() == tag)
    }
}

fn push_node(
    nodes: &mut Vec<Node>,
    start: &BytesStart<'_>,
    parent: Option<usize>,
    position: u64,
) -> Result<usize> {
    let name = String::from_utf8_lossy(start.name().local_name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|err| TeiError::Xml {
            position,
            message: err.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|err| TeiError::Xml {
            position,
            message: err.to_string(),
        })?;
        attrs.push((key, value.into_owned()));
    }

    let id = nodes.len();
    nodes.push(Node {
        name,
        attrs,
        children: Vec::new(),
        parent,
    });
    if let Some(p) = parent {
        nodes[p].children.push(Child::Element(id));
    }
    Ok(id)
}

fn push_text(node: &mut Node, text: &str) {
    if let Some(Child::Text(prev)) = node.children.last_mut() {
        prev.push_str(text);
    } else {
        node.children.push(Child::Text(text.to_string()));
    }
}

/// Borrowed handle to one element of a [`TeiDocument`]
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a TeiDocument,
    id: usize,
}

impl<'a> ElementRef<'a> {
    fn node(&self) -> &'a Node {
        &self.doc.nodes[self.id]
    }

    /// Local name of the element
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// Attribute value by qualified name
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node()
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn xml_id(&self) -> Option<&'a str> {
        self.attr("xml:id")
    }

    pub fn xml_lang(&self) -> Option<&'a str> {
        self.attr("xml:lang")
    }

    pub fn parent(&self) -> Option<ElementRef<'a>> {
        self.node().parent.map(|id| ElementRef { doc: self.doc, id })
    }

    /// Child elements, in order
    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let doc = self.doc;
        self.node().children.iter().filter_map(move |c| match c {
            Child::Element(id) => Some(ElementRef { doc, id: *id }),
            Child::Text(_) => None,
        })
    }

    /// Child elements named `tag`
    pub fn children_named(&self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.children().filter(move |c| c.name() == tag)
    }

    pub fn first_child(&self, tag: &str) -> Option<ElementRef<'a>> {
        self.children().find(|c| c.name() == tag)
    }

    /// Descendant elements named `tag` (self excluded), in document order
    pub fn descendants(&self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.all_descendants().filter(move |e| e.name() == tag)
    }

    pub fn first_descendant(&self, tag: &str) -> Option<ElementRef<'a>> {
        self.all_descendants().find(|e| e.name() == tag)
    }

    /// Every descendant element, in document order
    pub fn all_descendants(&self) -> Descendants<'a> {
        let stack: Vec<usize> = self
            .node()
            .children
            .iter()
            .rev()
            .filter_map(|c| match c {
                Child::Element(id) => Some(*id),
                Child::Text(_) => None,
            })
            .collect();
        Descendants {
            doc: self.doc,
            stack,
        }
    }

    /// This element followed by [`all_descendants`](Self::all_descendants)
    pub fn self_and_descendants(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        std::iter::once(*self).chain(self.all_descendants())
    }

    /// Concatenated character data of this element and its descendants
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        collect_text(self.doc, self.id, &mut out);
        out
    }

    /// [`raw_text`](Self::raw_text) with whitespace runs collapsed and trimmed
    pub fn text(&self) -> String {
        normalize_space(&self.raw_text())
    }
}

impl std::fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRef")
            .field("name", &self.name())
            .field("xml_id", &self.xml_id())
            .finish()
    }
}

fn collect_text(doc: &TeiDocument, id: usize, out: &mut String) {
    for child in &doc.nodes[id].children {
        match child {
            Child::Text(t) => out.push_str(t),
            Child::Element(c) => collect_text(doc, *c, out),
        }
    }
}

/// Pre-order iterator over descendant elements
pub struct Descendants<'a> {
    doc: &'a TeiDocument,
    stack: Vec<usize>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        for child in self.doc.nodes[id].children.iter().rev() {
            if let Child::Element(c) = child {
                self.stack.push(*c);
            }
        }
        Some(ElementRef { doc: self.doc, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <text><body>
    <listPerson>
      <person xml:id="pers1">
        <persName><forename>Hans</forename> <surname>Maier</surname></persName>
        <!-- a comment -->
        <birth><date when="1850">1850</date></birth>
      </person>
      <person>
        <persName>Nobody</persName>
      </person>
      <person xml:id="pers2"><persName xml:lang="en">A &amp; B</persName></person>
    </listPerson>
  </body></text>
</TEI>"#;

    #[test]
    fn test_entities_require_xml_id() {
        let doc = TeiDocument::parse(LIST).unwrap();
        let ids: Vec<_> = doc
            .entities("person")
            .iter()
            .map(|e| e.xml_id().unwrap())
            .collect();
        assert_eq!(ids, vec!["pers1", "pers2"]);
        assert_eq!(doc.elements("person").count(), 3);
    }

    #[test]
    fn test_text_is_normalized_and_unescaped() {
        let doc = TeiDocument::parse(LIST).unwrap();
        let people = doc.entities("person");
        let name = people[0].first_child("persName").unwrap();
        assert_eq!(name.text(), "Hans Maier");
        assert_eq!(name.first_child("surname").unwrap().text(), "Maier");

        let other = people[1].first_child("persName").unwrap();
        assert_eq!(other.text(), "A & B");
        assert_eq!(other.xml_lang(), Some("en"));
    }

    #[test]
    fn test_navigation() {
        let doc = TeiDocument::parse(LIST).unwrap();
        let person = doc.entities("person")[0];
        let date = person.first_descendant("date").unwrap();
        assert_eq!(date.attr("when"), Some("1850"));
        assert_eq!(date.parent().unwrap().name(), "birth");
        assert_eq!(
            person.children().map(|c| c.name()).collect::<Vec<_>>(),
            vec!["persName", "birth"]
        );
        assert!(person.first_child("death").is_none());
        assert_eq!(doc.root().name(), "TEI");
    }

    #[test]
    fn test_prefixed_element_names_match_by_local_name() {
        let doc = TeiDocument::parse(
            r#"<tei:listPlace xmlns:tei="http://www.tei-c.org/ns/1.0"><tei:place xml:id="p1"/></tei:listPlace>"#,
        )
        .unwrap();
        assert_eq!(doc.entities("place").len(), 1);
    }

    #[test]
    fn test_root_element_can_be_the_entity() {
        let doc =
            TeiDocument::parse(r#"<place xml:id="p1"><placeName>Vienna</placeName></place>"#)
                .unwrap();
        let places = doc.entities("place");
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].xml_id(), Some("p1"));
        assert_eq!(doc.elements("place").count(), 1);
        assert_eq!(doc.elements("placeName").count(), 1);
    }

    #[test]
    fn test_cdata_is_text() {
        let doc = TeiDocument::parse("<a><b><![CDATA[x < y]]></b></a>").unwrap();
        assert_eq!(doc.root().first_child("b").unwrap().text(), "x < y");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            TeiDocument::parse("<a><b></a>"),
            Err(TeiError::UnexpectedEnd { .. }) | Err(TeiError::Xml { .. })
        ));
        assert!(matches!(
            TeiDocument::parse("<a><b>"),
            Err(TeiError::Unclosed(_)) | Err(TeiError::Xml { .. })
        ));
        assert!(matches!(TeiDocument::parse("   "), Err(TeiError::NoRoot)));
    }
}
