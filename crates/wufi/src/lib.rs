//! # PHX WUFI Export
//!
//! Writes a [`Project`] as a WUFI-Passive project file.
//!
//! The layout of the file is data, not code: each model object is wrapped in
//! a [`WufiObject`] and a static registry maps its kind to a schema function
//! returning the object's child elements, in order. The generic writer in
//! [`phx_serde`] walks those descriptors. Integer-coded choices are validated
//! against the vocabularies in [`SELECTIONS`] as they are written.
//!
//! ```ignore
//! let project = phx_model::Project::from_json_file("house.json")?;
//! let xml = phx_wufi::to_wufi_xml_string(&project)?;
//! ```

mod object;
pub mod registry;
mod schema;
pub mod selections;

pub use object::WufiObject;
pub use selections::SELECTIONS;

use phx_model::Project;
use phx_serde::{Result, XmlOptions, to_xml_string_with};
use tracing::{debug, info};

/// Name of the document element.
pub const ROOT_ELEMENT: &str = "WUFIplusProject";

/// Serializes `project` with the default layout (two-space indent, UTF-8
/// declaration).
pub fn to_wufi_xml_string(project: &Project) -> Result<String> {
    to_wufi_xml_string_with(project, &XmlOptions::default())
}

/// Serializes `project` with explicit writer options.
///
/// Fails without producing output if any selection value is invalid or any
/// schema lookup fails.
pub fn to_wufi_xml_string_with(project: &Project, options: &XmlOptions) -> Result<String> {
    debug!(
        variants = project.variants.len(),
        indent_size = options.indent_size,
        "Writing WUFI project"
    );
    let xml = to_xml_string_with(&WufiObject::Project(project), ROOT_ELEMENT, options)?;
    info!(bytes = xml.len(), "WUFI project written");
    Ok(xml)
}
