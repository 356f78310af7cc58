//! Error types for descriptor construction, selection validation and XML output.
//!
//! Every variant is fatal for the document being written. The serializer never
//! retries and never hands back a partially written document.

use thiserror::Error;

/// Errors raised while building node descriptors or writing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// An element or attribute name is empty or not a legal XML name.
    #[error("invalid XML node name: {name:?}")]
    InvalidNodeName { name: String },

    /// A selection input could not be coerced to an integer code.
    #[error("type mismatch for {owner}.{field}: cannot read {value} as an integer code")]
    TypeMismatch {
        owner: String,
        field: String,
        value: String,
    },

    /// A selection code is not part of the registered vocabulary.
    #[error("invalid selection {value} for {owner}.{field}: expected one of {allowed:?}")]
    InvalidSelection {
        owner: String,
        field: String,
        value: i64,
        allowed: Vec<i64>,
    },

    /// No selection vocabulary is registered for the owner/field pair.
    #[error("no selection registered for {owner}.{field}")]
    UnknownSelection { owner: String, field: String },

    /// No schema function is registered under the lookup key.
    #[error("no schema registered for {key}")]
    UnknownSchema { key: String },

    /// A schema function received an object of a kind it does not describe.
    #[error("schema {schema} cannot describe a {found} object")]
    SchemaMismatch { schema: String, found: String },

    /// Failure while writing XML events.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Failure writing to the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for descriptor and serialization operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_message_lists_vocabulary() {
        let err = Error::InvalidSelection {
            owner: "Zone".to_string(),
            field: "FloorArea_Selection".to_string(),
            value: 99,
            allowed: vec![2, 4],
        };
        let msg = err.to_string();
        assert!(msg.contains("99"));
        assert!(msg.contains("[2, 4]"));
        assert!(msg.contains("Zone.FloorArea_Selection"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::other("disk full");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
