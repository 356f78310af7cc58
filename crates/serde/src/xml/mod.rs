//! XML output for descriptor trees.
//!
//! ## Mapping
//!
//! | Descriptor | XML |
//! |------------|-----|
//! | `ScalarNode("Name", "Zone 1")` | `<Name>Zone 1</Name>` |
//! | `ScalarNode("Visual", true)` | `<Visual>true</Visual>` |
//! | `ScalarNode("Remarks", null)` | `<Remarks/>` |
//! | `ScalarNode("EnergyDemandNorm", 100, unit="kWh")` | `<EnergyDemandNorm unit="kWh">100</EnergyDemandNorm>` |
//! | `ObjectNode("Zone", zone, index=0)` | `<Zone index="0">...zone descriptors...</Zone>` |
//! | `ListNode("Layers", [a, b, c])` | `<Layers count="3">a b c</Layers>` |
//!
//! Numbers are written with their default formatting. Any rounding the target
//! schema needs is applied by the schema function before the value is wrapped.

pub mod ser;
pub(crate) mod utils;

pub use ser::{
    XmlOptions, XmlSerializer, to_xml_string, to_xml_string_with, to_xml_vec, to_xml_writer,
};
pub use utils::is_valid_name;
