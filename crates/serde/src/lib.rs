//! # PHX Serialization Core
//!
//! Turns an arbitrary object graph into an attributed XML document by way of a
//! small set of node descriptors.
//!
//! ## Pieces
//!
//! - [`node`]: the three descriptor shapes ([`ScalarNode`], [`ObjectNode`],
//!   [`ListNode`]) a schema function returns for one object.
//! - [`selection`]: validation of integer-coded fields against a fixed
//!   vocabulary, resolving each code to the display text the schema expects.
//! - [`Describe`]: the registry interface. An implementation maps an object
//!   (and an optional schema override) to its ordered descriptors.
//! - [`xml`]: the recursive walker that writes descriptors as quick-xml events.
//!
//! ## Example
//!
//! ```ignore
//! use phx_serde::{Describe, Node, Result, ScalarNode};
//! use phx_serde::xml::to_xml_string;
//!
//! struct Appliance { energy_demand: i64 }
//!
//! impl Describe for &Appliance {
//!     fn type_name(&self) -> &'static str { "Appliance" }
//!
//!     fn descriptors_for(&self, _: Option<&str>) -> Result<Vec<Node<Self>>> {
//!         Ok(vec![ScalarNode::new("EnergyDemandNorm", self.energy_demand)?
//!             .with_attribute("unit", "kWh")?
//!             .into()])
//!     }
//! }
//!
//! let xml = to_xml_string(&&Appliance { energy_demand: 100 }, "Project")?;
//! // <Project>
//! //   <EnergyDemandNorm unit="kWh">100</EnergyDemandNorm>
//! // </Project>
//! ```

pub mod describe;
pub mod error;
pub mod node;
pub mod selection;
pub mod xml;

pub use describe::{Describe, SCHEMA_KEY_MARKER, schema_key};
pub use error::{Error, Result};
pub use node::{Attribute, ListNode, Node, ObjectNode, Scalar, ScalarNode, list, object, scalar};
pub use selection::{Selection, SelectionField, SelectionRegistry};
pub use xml::{XmlOptions, to_xml_string, to_xml_string_with, to_xml_writer};
