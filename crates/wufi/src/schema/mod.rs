//! Schema functions, one per object shape, plus shared helpers.
//!
//! Every function is pure: it reads the object and returns descriptors.
//! Values that need a fixed precision are rounded here, before they are
//! wrapped; the XML writer prints numbers as given.

pub(crate) mod building;
pub(crate) mod construction;
pub(crate) mod geometry;
pub(crate) mod hvac;
pub(crate) mod project;

use phx_model::Id;
use phx_serde::{Describe, Error, Node, ObjectNode, Result, Scalar, ScalarNode, list};

use crate::object::WufiObject;
use crate::selections::SELECTIONS;

/// Descriptors for one object.
pub(crate) type Nodes<'a> = Vec<Node<WufiObject<'a>>>;

/// Attribute carrying a child's position inside a list.
pub(crate) const INDEX_ATTRIBUTE: &str = "index";

/// Written in place of a missing reference.
pub(crate) const NO_REFERENCE: i64 = -1;

/// Decimal places kept for coordinates and normal vectors.
pub(crate) const COORDINATE_DIGITS: i32 = 8;

/// Error for a schema function handed the wrong kind of object.
pub(crate) fn mismatch(schema: &str, object: &WufiObject<'_>) -> Error {
    Error::SchemaMismatch {
        schema: schema.to_string(),
        found: object.type_name().to_string(),
    }
}

/// A list of object nodes named `item`, each carrying its position.
pub(crate) fn indexed<'a, I>(name: &str, item: &str, objects: I) -> Result<Node<WufiObject<'a>>>
where
    I: IntoIterator<Item = WufiObject<'a>>,
{
    let items = objects
        .into_iter()
        .enumerate()
        .map(|(i, object)| {
            ObjectNode::new(item, object)?
                .with_attribute(INDEX_ATTRIBUTE, i)
                .map(Node::Object)
        })
        .collect::<Result<Vec<_>>>()?;
    list(name, items)
}

/// A list of scalar nodes named `item`, each carrying its position.
pub(crate) fn indexed_values<'a, I, V>(name: &str, item: &str, values: I) -> Result<Node<WufiObject<'a>>>
where
    I: IntoIterator<Item = V>,
    V: Into<Scalar>,
{
    let items = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            ScalarNode::new(item, value)?
                .with_attribute(INDEX_ATTRIBUTE, i)
                .map(Node::Scalar)
        })
        .collect::<Result<Vec<_>>>()?;
    list(name, items)
}

/// A scalar node with a `unit` attribute.
pub(crate) fn with_unit<'a>(name: &str, value: impl Into<Scalar>, unit: &str) -> Result<Node<WufiObject<'a>>> {
    ScalarNode::new(name, value)?
        .with_attribute("unit", unit)
        .map(Node::Scalar)
}

/// A validated selection node named after the field.
pub(crate) fn selection<'a>(owner: &str, field: &str, input: Option<&Scalar>) -> Result<Node<WufiObject<'a>>> {
    SELECTIONS.node(owner, field, input)
}

/// The referenced id, or [`NO_REFERENCE`].
pub(crate) fn reference(id: Option<Id>) -> Scalar {
    id.map(Scalar::from).unwrap_or(Scalar::Int(NO_REFERENCE))
}

pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
