//! Constrained integer selections.
//!
//! The target schema encodes many fields as small integer codes with a fixed
//! vocabulary, written as `<Field choice="Display text">code</Field>`. A
//! [`SelectionRegistry`] holds the vocabulary for every `(owner, field)` pair
//! and resolves user input to a checked [`Selection`].
//!
//! Options keep their declared order. When no input is given the *first
//! declared* option is selected, which is not necessarily the lowest code.

use crate::error::{Error, Result};
use crate::node::{Node, Scalar, ScalarNode};

/// Vocabulary for one selection field.
#[derive(Debug, Clone, Copy)]
pub struct SelectionField {
    pub owner: &'static str,
    pub field: &'static str,
    pub attribute: &'static str,
    pub options: &'static [(i64, &'static str)],
}

impl SelectionField {
    pub const fn new(
        owner: &'static str,
        field: &'static str,
        attribute: &'static str,
        options: &'static [(i64, &'static str)],
    ) -> Self {
        Self {
            owner,
            field,
            attribute,
            options,
        }
    }

    /// All legal codes in declared order.
    pub fn codes(&self) -> Vec<i64> {
        self.options.iter().map(|(code, _)| *code).collect()
    }

    fn text_for(&self, code: i64) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, text)| *text)
    }
}

/// A validated selection ready to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub code: i64,
    pub attribute_name: &'static str,
    pub attribute_value: &'static str,
}

impl Selection {
    /// Builds `<name attribute_name="attribute_value">code</name>`.
    pub fn into_node<O>(self, name: &str) -> Result<Node<O>> {
        ScalarNode::new(name, self.code)?
            .with_attribute(self.attribute_name, self.attribute_value)
            .map(Node::Scalar)
    }
}

/// Read-only table of selection vocabularies.
///
/// Built once from a static slice and shared freely; validation never
/// mutates it.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRegistry {
    fields: &'static [SelectionField],
}

impl SelectionRegistry {
    pub const fn new(fields: &'static [SelectionField]) -> Self {
        Self { fields }
    }

    /// Looks up the vocabulary for `owner.field`.
    pub fn field(&self, owner: &str, field: &str) -> Result<&SelectionField> {
        self.fields
            .iter()
            .find(|f| f.owner == owner && f.field == field)
            .ok_or_else(|| Error::UnknownSelection {
                owner: owner.to_string(),
                field: field.to_string(),
            })
    }

    /// Resolves `input` against the vocabulary registered for `owner.field`.
    ///
    /// `None` and [`Scalar::Null`] select the first declared option. Integers
    /// are used as is, floats must be integral and strings must parse as an
    /// integer; anything else is a [`Error::TypeMismatch`]. A code outside
    /// the vocabulary is an [`Error::InvalidSelection`].
    pub fn validate(&self, owner: &str, field: &str, input: Option<&Scalar>) -> Result<Selection> {
        let entry = self.field(owner, field)?;

        let code = match input.filter(|value| !value.is_null()) {
            None => match entry.options.first() {
                Some((code, _)) => *code,
                None => {
                    return Err(Error::UnknownSelection {
                        owner: owner.to_string(),
                        field: field.to_string(),
                    });
                }
            },
            Some(value) => coerce_code(value).ok_or_else(|| Error::TypeMismatch {
                owner: owner.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            })?,
        };

        let text = entry
            .text_for(code)
            .ok_or_else(|| Error::InvalidSelection {
                owner: owner.to_string(),
                field: field.to_string(),
                value: code,
                allowed: entry.codes(),
            })?;

        Ok(Selection {
            code,
            attribute_name: entry.attribute,
            attribute_value: text,
        })
    }

    /// Validates and builds the scalar descriptor in one step.
    pub fn node<O>(
        &self,
        owner: &str,
        field: &str,
        input: Option<&Scalar>,
    ) -> Result<Node<O>> {
        self.validate(owner, field, input)?.into_node(field)
    }
}

fn coerce_code(value: &Scalar) -> Option<i64> {
    match value {
        Scalar::Int(i) => Some(*i),
        Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            let code = *f as i64;
            (code as f64 == *f).then_some(code)
        }
        Scalar::Str(s) => s.trim().parse().ok(),
        Scalar::Null | Scalar::Bool(_) | Scalar::Float(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: &[SelectionField] = &[
        SelectionField::new("Zone", "FloorArea_Selection", "choice", &[(2, "A"), (4, "B")]),
        SelectionField::new(
            "Assembly",
            "Order_Layers",
            "choice",
            &[(2, "Outside to inside"), (1, "Inside to outside")],
        ),
        SelectionField::new("Empty", "Nothing", "choice", &[]),
    ];

    const REGISTRY: SelectionRegistry = SelectionRegistry::new(FIELDS);

    #[test]
    fn test_default_is_first_declared() {
        let sel = REGISTRY.validate("Zone", "FloorArea_Selection", None).unwrap();
        assert_eq!(sel.code, 2);
        assert_eq!(sel.attribute_value, "A");

        let sel = REGISTRY
            .validate("Assembly", "Order_Layers", Some(&Scalar::Null))
            .unwrap();
        assert_eq!(sel.code, 2, "declared order wins over lowest code");
    }

    #[test]
    fn test_coercions() {
        let cases = [
            (Scalar::Int(4), 4),
            (Scalar::Float(4.0), 4),
            (Scalar::Str(" 4 ".to_string()), 4),
        ];
        for (input, expected) in cases {
            let sel = REGISTRY
                .validate("Zone", "FloorArea_Selection", Some(&input))
                .unwrap();
            assert_eq!(sel.code, expected, "input {input}");
        }
    }

    #[test]
    fn test_type_mismatch() {
        for input in [
            Scalar::Str("four".to_string()),
            Scalar::Float(2.5),
            Scalar::Float(f64::NAN),
            Scalar::Bool(true),
        ] {
            let err = REGISTRY
                .validate("Zone", "FloorArea_Selection", Some(&input))
                .unwrap_err();
            assert!(
                matches!(&err, Error::TypeMismatch { field, .. } if field == "FloorArea_Selection"),
                "unexpected {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_selection_reports_vocabulary() {
        let err = REGISTRY
            .validate("Zone", "FloorArea_Selection", Some(&Scalar::Int(99)))
            .unwrap_err();
        match &err {
            Error::InvalidSelection { value, allowed, .. } => {
                assert_eq!(*value, 99);
                assert_eq!(allowed, &vec![2, 4]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = REGISTRY.validate("Zone", "Nope", None).unwrap_err();
        assert!(matches!(err, Error::UnknownSelection { .. }));

        let err = REGISTRY.validate("Empty", "Nothing", None).unwrap_err();
        assert!(matches!(err, Error::UnknownSelection { .. }));
    }

    #[test]
    fn test_into_node() {
        let node: Node<()> = REGISTRY
            .node("Zone", "FloorArea_Selection", Some(&Scalar::Int(4)))
            .unwrap();
        match node {
            Node::Scalar(n) => {
                assert_eq!(n.name, "FloorArea_Selection");
                assert_eq!(n.value, Scalar::Int(4));
                let attr = n.attribute.unwrap();
                assert_eq!(attr.name, "choice");
                assert_eq!(attr.value, Scalar::Str("B".to_string()));
            }
            _ => panic!("expected scalar node"),
        }
    }
}
