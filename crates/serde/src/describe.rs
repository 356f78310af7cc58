//! The interface between the tree writer and a schema registry.

use crate::error::Result;
use crate::node::Node;

/// Prefix marking a registry key derived from a type name.
pub const SCHEMA_KEY_MARKER: &str = "_";

/// Builds the default registry key for a type name, e.g. `Zone` -> `_Zone`.
pub fn schema_key(type_name: &str) -> String {
    format!("{}{}", SCHEMA_KEY_MARKER, type_name)
}

/// An object that a schema registry knows how to lay out.
///
/// Implementations look up the schema function for the object (or for
/// `schema_override` when given) and return its descriptors in output order.
/// Lookup failure is a configuration error and must be reported as
/// [`Error::UnknownSchema`](crate::Error::UnknownSchema), never as an empty
/// list. Implementations must not mutate the object.
pub trait Describe: Sized {
    /// Name of the object's kind, used for the default registry key and in
    /// error messages.
    fn type_name(&self) -> &'static str;

    /// Returns the ordered descriptors for this object.
    fn descriptors_for(&self, schema_override: Option<&str>) -> Result<Vec<Node<Self>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_key() {
        assert_eq!(schema_key("Zone"), "_Zone");
        assert_eq!(schema_key("HomeDevice"), "_HomeDevice");
    }
}
