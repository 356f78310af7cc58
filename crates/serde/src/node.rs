//! Node descriptors: the transient view a schema function returns for one object.
//!
//! A descriptor says how a value should appear in the output tree, not how it
//! is stored in the domain model. There are exactly three shapes:
//!
//! | Descriptor | Output |
//! |------------|--------|
//! | [`ScalarNode`] | `<Name attr="..">text</Name>` |
//! | [`ObjectNode`] | `<Name attr="..">` + the source object's own descriptors + `</Name>` |
//! | [`ListNode`] | `<Name count="N">` + each item in order + `</Name>` |
//!
//! Descriptors are built fresh for every document and are never cached.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::xml::utils;

/// Attribute name used for the element count on list wrappers.
pub const DEFAULT_COUNT_ATTRIBUTE: &str = "count";

/// A primitive value that can become element text or an attribute value.
///
/// Deserializes untagged, so JSON `null`, booleans, numbers and strings map
/// straight onto the matching variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Returns true for [`Scalar::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Formats the value for XML output.
    ///
    /// Booleans become `true`/`false` and null becomes the empty string.
    /// Numbers use `Display`, so `100.0` is written `100`. No rounding is
    /// applied here.
    pub fn to_xml_text(&self) -> Cow<'_, str> {
        match self {
            Scalar::Null => Cow::Borrowed(""),
            Scalar::Bool(b) => Cow::Borrowed(utils::bool_to_string(*b)),
            Scalar::Int(i) => Cow::Owned(i.to_string()),
            Scalar::Float(f) => Cow::Owned(f.to_string()),
            Scalar::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Str(value.clone())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Scalar::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Scalar::Null)
    }
}

/// A single `name="value"` pair attached to an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Scalar,
}

impl Attribute {
    /// Creates an attribute, validating its name.
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>) -> Result<Self> {
        let name = checked_name(name.into())?;
        Ok(Self {
            name,
            value: value.into(),
        })
    }
}

/// A leaf element holding text and at most one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarNode {
    pub name: String,
    pub value: Scalar,
    pub attribute: Option<Attribute>,
}

impl ScalarNode {
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>) -> Result<Self> {
        Ok(Self {
            name: checked_name(name.into())?,
            value: value.into(),
            attribute: None,
        })
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Result<Self> {
        self.attribute = Some(Attribute::new(name, value)?);
        Ok(self)
    }
}

/// A wrapper element whose children are the source object's own descriptors.
///
/// `schema_override` selects a registry entry other than the one derived from
/// the source's type, so one object can be written in several shapes.
#[derive(Debug, Clone)]
pub struct ObjectNode<O> {
    pub name: String,
    pub source: O,
    pub attribute: Option<Attribute>,
    pub schema_override: Option<String>,
}

impl<O> ObjectNode<O> {
    pub fn new(name: impl Into<String>, source: O) -> Result<Self> {
        Ok(Self {
            name: checked_name(name.into())?,
            source,
            attribute: None,
            schema_override: None,
        })
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Result<Self> {
        self.attribute = Some(Attribute::new(name, value)?);
        Ok(self)
    }

    pub fn with_schema(mut self, key: impl Into<String>) -> Self {
        self.schema_override = Some(key.into());
        self
    }
}

/// An ordered sequence of child descriptors under one wrapper element.
///
/// Item order is preserved exactly on output; downstream readers use child
/// position as an index.
#[derive(Debug, Clone)]
pub struct ListNode<O> {
    pub name: String,
    pub items: Vec<Node<O>>,
    pub count_attribute_name: String,
    pub count_attribute_value: Option<i64>,
}

impl<O> ListNode<O> {
    pub fn new(name: impl Into<String>, items: Vec<Node<O>>) -> Result<Self> {
        Ok(Self {
            name: checked_name(name.into())?,
            items,
            count_attribute_name: DEFAULT_COUNT_ATTRIBUTE.to_string(),
            count_attribute_value: None,
        })
    }

    /// Pins the count attribute to a fixed value instead of the item count.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count_attribute_value = Some(count);
        self
    }

    pub fn with_count_attribute_name(mut self, name: impl Into<String>) -> Result<Self> {
        self.count_attribute_name = checked_name(name.into())?;
        Ok(self)
    }

    /// The value written to the count attribute.
    ///
    /// Derived from the current items on every call unless pinned with
    /// [`ListNode::with_count`]; never cached.
    pub fn count(&self) -> i64 {
        self.count_attribute_value
            .unwrap_or_else(|| i64::try_from(self.items.len()).unwrap_or(i64::MAX))
    }
}

/// One element to be emitted.
#[derive(Debug, Clone)]
pub enum Node<O> {
    Scalar(ScalarNode),
    Object(ObjectNode<O>),
    List(ListNode<O>),
}

impl<O> Node<O> {
    /// The element name this descriptor writes.
    pub fn name(&self) -> &str {
        match self {
            Node::Scalar(n) => &n.name,
            Node::Object(n) => &n.name,
            Node::List(n) => &n.name,
        }
    }
}

impl<O> From<ScalarNode> for Node<O> {
    fn from(node: ScalarNode) -> Self {
        Node::Scalar(node)
    }
}

impl<O> From<ObjectNode<O>> for Node<O> {
    fn from(node: ObjectNode<O>) -> Self {
        Node::Object(node)
    }
}

impl<O> From<ListNode<O>> for Node<O> {
    fn from(node: ListNode<O>) -> Self {
        Node::List(node)
    }
}

/// Shorthand for a scalar descriptor without an attribute.
pub fn scalar<O>(name: &str, value: impl Into<Scalar>) -> Result<Node<O>> {
    ScalarNode::new(name, value).map(Node::Scalar)
}

/// Shorthand for an object descriptor using the source's default schema.
pub fn object<O>(name: &str, source: O) -> Result<Node<O>> {
    ObjectNode::new(name, source).map(Node::Object)
}

/// Shorthand for a list descriptor with a derived `count` attribute.
pub fn list<O>(name: &str, items: Vec<Node<O>>) -> Result<Node<O>> {
    ListNode::new(name, items).map(Node::List)
}

fn checked_name(name: String) -> Result<String> {
    if utils::is_valid_name(&name) {
        Ok(name)
    } else {
        Err(Error::InvalidNodeName { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let err = ScalarNode::new("", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidNodeName { .. }));

        let err = ObjectNode::new("", ()).unwrap_err();
        assert!(matches!(err, Error::InvalidNodeName { .. }));

        let err = ListNode::<()>::new("", Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidNodeName { .. }));
    }

    #[test]
    fn test_illegal_attribute_name_rejected() {
        let err = ScalarNode::new("Type", 1)
            .and_then(|n| n.with_attribute("1choice", "Kitchen"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidNodeName { name } if name == "1choice"));
    }

    #[test]
    fn test_list_count_is_derived_from_items() {
        let mut list = ListNode::<()>::new("Layers", Vec::new()).unwrap();
        assert_eq!(list.count(), 0);

        list.items.push(scalar("Layer", 1).unwrap());
        list.items.push(scalar("Layer", 2).unwrap());
        assert_eq!(list.count(), 2);

        list.items.pop();
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_list_count_override() {
        let list = ListNode::<()>::new("Layers", vec![scalar("Layer", 1).unwrap()])
            .unwrap()
            .with_count(7);
        assert_eq!(list.count(), 7);
    }

    #[test]
    fn test_scalar_text_formatting() {
        assert_eq!(Scalar::Bool(true).to_xml_text(), "true");
        assert_eq!(Scalar::Bool(false).to_xml_text(), "false");
        assert_eq!(Scalar::Null.to_xml_text(), "");
        assert_eq!(Scalar::Int(-1).to_xml_text(), "-1");
        assert_eq!(Scalar::Float(0.12345678).to_xml_text(), "0.12345678");
        assert_eq!(Scalar::from(None::<f64>), Scalar::Null);
    }

    #[test]
    fn test_float_display_formatting() {
        assert_eq!(Scalar::Float(100.0).to_xml_text(), "100");
        assert_eq!(Scalar::Float(1e-7).to_xml_text(), "0.0000001");
        assert_eq!(Scalar::Float(-0.5).to_xml_text(), "-0.5");
        assert!(Scalar::Null.is_null());
        assert!(!Scalar::Int(0).is_null());
    }

    #[test]
    fn test_scalar_deserializes_untagged() {
        let values: Vec<Scalar> =
            serde_json::from_str(r#"[null, true, 4, 2.5, "6"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Scalar::Null,
                Scalar::Bool(true),
                Scalar::Int(4),
                Scalar::Float(2.5),
                Scalar::Str("6".to_string()),
            ]
        );
    }

    #[test]
    fn test_node_name() {
        let node: Node<()> = list("Zones", Vec::new()).unwrap();
        assert_eq!(node.name(), "Zones");
    }
}
