//! Recursive descriptor walker writing quick-xml events.
//!
//! The root object becomes the document element. Each descriptor is written
//! pre-order: scalars as text elements, objects by asking the registry for
//! their own descriptors, lists by writing every item in sequence.
//!
//! Floats are written with Rust's shortest round-trip `Display`: `100.0`
//! becomes `100` and `1e-7` becomes `0.0000001`. No exponent notation and no
//! rounding. A schema that needs a fixed number of decimals rounds the value
//! first or passes preformatted text.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, trace};

use crate::describe::Describe;
use crate::error::{Error, Result};
use crate::node::{Attribute, ListNode, Node, ObjectNode, ScalarNode};
use crate::xml::utils;

/// Pretty-printing options for the written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Byte used for indentation.
    pub indent_char: u8,
    /// Indent width per level; `0` writes everything on one line.
    pub indent_size: usize,
    /// Write an `<?xml ...?>` declaration first.
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 2,
            declaration: true,
        }
    }
}

/// Serializes `root` into a pretty-printed XML string with default options.
///
/// # Examples
///
/// ```ignore
/// use phx_serde::xml::to_xml_string;
///
/// let xml = to_xml_string(&project, "WUFIplusProject")?;
/// ```
pub fn to_xml_string<O: Describe>(root: &O, root_name: &str) -> Result<String> {
    to_xml_string_with(root, root_name, &XmlOptions::default())
}

/// Serializes `root` into an XML string.
pub fn to_xml_string_with<O: Describe>(
    root: &O,
    root_name: &str,
    options: &XmlOptions,
) -> Result<String> {
    let buffer = to_xml_vec(root, root_name, options)?;
    String::from_utf8(buffer)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Serializes `root` into an XML byte vector.
pub fn to_xml_vec<O: Describe>(root: &O, root_name: &str, options: &XmlOptions) -> Result<Vec<u8>> {
    let mut serializer = XmlSerializer::new(Vec::new(), options);
    serializer.serialize_document(root, root_name)?;
    Ok(serializer.into_inner())
}

/// Serializes `root` and copies the finished document to `writer`.
///
/// The document is built in memory first, so nothing reaches `writer` unless
/// the whole tree was written successfully.
pub fn to_xml_writer<O, W>(root: &O, root_name: &str, options: &XmlOptions, mut writer: W) -> Result<()>
where
    O: Describe,
    W: Write,
{
    let buffer = to_xml_vec(root, root_name, options)?;
    writer.write_all(&buffer)?;
    writer.flush()?;
    Ok(())
}

/// XML serializer walking node descriptors into a quick-xml writer.
pub struct XmlSerializer<W: Write> {
    writer: Writer<W>,
    declaration: bool,
    elements: usize,
}

impl<W: Write> XmlSerializer<W> {
    /// Creates a new XML serializer.
    pub fn new(writer: W, options: &XmlOptions) -> Self {
        let writer = if options.indent_size == 0 {
            Writer::new(writer)
        } else {
            Writer::new_with_indent(writer, options.indent_char, options.indent_size)
        };
        Self {
            writer,
            declaration: options.declaration,
            elements: 0,
        }
    }

    /// Number of elements written so far, including the document element.
    pub fn elements_written(&self) -> usize {
        self.elements
    }

    /// Consumes the serializer and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Writes a complete document whose element is `root_name` and whose
    /// children are the root object's descriptors.
    pub fn serialize_document<O: Describe>(&mut self, root: &O, root_name: &str) -> Result<()> {
        if !utils::is_valid_name(root_name) {
            return Err(Error::InvalidNodeName {
                name: root_name.to_string(),
            });
        }
        debug!(root = root_name, kind = root.type_name(), "Writing XML document");

        if self.declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let nodes = root.descriptors_for(None)?;
        self.write_element(BytesStart::new(root_name), &nodes)?;

        debug!(root = root_name, elements = self.elements, "Finished XML document");
        Ok(())
    }

    fn write_node<O: Describe>(&mut self, node: &Node<O>) -> Result<()> {
        match node {
            Node::Scalar(scalar) => self.write_scalar(scalar),
            Node::Object(object) => self.write_object(object),
            Node::List(list) => self.write_list(list),
        }
    }

    fn write_scalar(&mut self, node: &ScalarNode) -> Result<()> {
        let mut start = BytesStart::new(node.name.as_str());
        push_attribute(&mut start, node.attribute.as_ref());
        self.elements += 1;

        let text = node.value.to_xml_text();
        if text.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
        } else {
            self.writer.write_event(Event::Start(start))?;
            self.writer.write_event(Event::Text(BytesText::new(&text)))?;
            self.writer
                .write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
        }
        Ok(())
    }

    fn write_object<O: Describe>(&mut self, node: &ObjectNode<O>) -> Result<()> {
        trace!(
            element = %node.name,
            kind = node.source.type_name(),
            schema = ?node.schema_override,
            "Expanding object"
        );
        let children = node
            .source
            .descriptors_for(node.schema_override.as_deref())?;

        let mut start = BytesStart::new(node.name.as_str());
        push_attribute(&mut start, node.attribute.as_ref());
        self.write_element(start, &children)
    }

    fn write_list<O: Describe>(&mut self, node: &ListNode<O>) -> Result<()> {
        let mut start = BytesStart::new(node.name.as_str());
        // Evaluated here so edits to `items` after construction are counted.
        let count = node.count().to_string();
        start.push_attribute((node.count_attribute_name.as_str(), count.as_str()));
        self.write_element(start, &node.items)
    }

    fn write_element<O: Describe>(&mut self, start: BytesStart<'_>, children: &[Node<O>]) -> Result<()> {
        self.elements += 1;
        if children.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        let end = start.to_end().into_owned();
        self.writer.write_event(Event::Start(start))?;
        for child in children {
            self.write_node(child)?;
        }
        self.writer.write_event(Event::End(end))?;
        Ok(())
    }
}

fn push_attribute(start: &mut BytesStart<'_>, attribute: Option<&Attribute>) {
    if let Some(attribute) = attribute {
        let value = attribute.value.to_xml_text();
        start.push_attribute((attribute.name.as_str(), value.as_ref()));
    }
}
