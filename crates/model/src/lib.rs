//! # PHX Project Model
//!
//! In-memory representation of a building-energy project as exported to
//! certification tools: shared catalogues (assemblies, window types,
//! ventilation patterns) and design variants holding geometry, zones, rooms,
//! appliances, climate and HVAC equipment.
//!
//! ## Identifiers
//!
//! Every collection is an [`Arena`], which hands out 1-based [`Id`]s in
//! registration order. There are no global counters: two projects built from
//! the same input get the same ids.
//!
//! ## Loading
//!
//! ```ignore
//! use phx_model::Project;
//!
//! let project = Project::from_json_file("house.json")?;
//! for (id, variant) in project.variants.iter() {
//!     println!("{} {}", id, variant.name);
//! }
//! ```
//!
//! Loading links name references (component to assembly, room to ventilation
//! device, ...) and fails on anything dangling.
//!
//! Fields documented as *Selection* hold raw user input for integer-coded
//! choices. They are validated when the project is written, not here.

pub mod building;
pub mod climate;
pub mod construction;
pub mod error;
pub mod geometry;
pub mod hvac;
pub mod id;
mod link;
pub mod project;

pub use building::{Building, Component, HomeDevice, Measured, Room, Zone};
pub use climate::Climate;
pub use construction::{Assembly, Color, Layer, Material, WindowType};
pub use error::{ModelError, Result};
pub use geometry::{Geometry, Polygon, Vertex};
pub use hvac::{
    BoilerParams, Device, DeviceKind, HeatPumpParams, Hvac, Usage, VentilatorParams, ZoneCoverage,
};
pub use id::{Arena, Id, Named};
pub use project::{Contact, LoadPeriod, Project, ProjectData, Variant, VentilationPattern};
