//! The closed set of objects that appear in a WUFI project file.

use phx_model::{
    Assembly, Building, Climate, Color, Component, Device, Geometry, HomeDevice, Hvac, Id, Layer,
    Material, Polygon, Project, ProjectData, Room, Variant, VentilationPattern, Vertex, WindowType,
    Zone, ZoneCoverage,
};
use phx_serde::{Describe, Node, Result};

use crate::registry;

/// A borrowed model object together with the identifier it was registered
/// under, where the file needs one.
#[derive(Debug, Clone, Copy)]
pub enum WufiObject<'a> {
    Project(&'a Project),
    ProjectData(&'a ProjectData),
    VentilationPattern(Id, &'a VentilationPattern),
    Variant(Id, &'a Variant),
    Geometry(&'a Geometry),
    Vertex(Id, &'a Vertex),
    Polygon(Id, &'a Polygon),
    Building(&'a Building),
    Component(Id, &'a Component),
    Zone(Id, &'a Zone),
    Room(&'a Room),
    HomeDevice(&'a HomeDevice),
    Assembly(Id, &'a Assembly),
    Layer(&'a Layer),
    Material(&'a Material),
    Color(&'a Color),
    WindowType(Id, &'a WindowType),
    Climate(&'a Climate),
    Hvac(&'a Hvac),
    ZoneCoverage(&'a ZoneCoverage),
    Device(Id, &'a Device),
}

impl WufiObject<'_> {
    /// Every kind name, in declaration order.
    pub const KINDS: &'static [&'static str] = &[
        "Project",
        "ProjectData",
        "VentilationPattern",
        "Variant",
        "Geometry",
        "Vertex",
        "Polygon",
        "Building",
        "Component",
        "Zone",
        "Room",
        "HomeDevice",
        "Assembly",
        "Layer",
        "Material",
        "Color",
        "WindowType",
        "Climate",
        "Hvac",
        "ZoneCoverage",
        "Device",
    ];
}

impl<'a> Describe for WufiObject<'a> {
    fn type_name(&self) -> &'static str {
        match self {
            WufiObject::Project(_) => "Project",
            WufiObject::ProjectData(_) => "ProjectData",
            WufiObject::VentilationPattern(..) => "VentilationPattern",
            WufiObject::Variant(..) => "Variant",
            WufiObject::Geometry(_) => "Geometry",
            WufiObject::Vertex(..) => "Vertex",
            WufiObject::Polygon(..) => "Polygon",
            WufiObject::Building(_) => "Building",
            WufiObject::Component(..) => "Component",
            WufiObject::Zone(..) => "Zone",
            WufiObject::Room(_) => "Room",
            WufiObject::HomeDevice(_) => "HomeDevice",
            WufiObject::Assembly(..) => "Assembly",
            WufiObject::Layer(_) => "Layer",
            WufiObject::Material(_) => "Material",
            WufiObject::Color(_) => "Color",
            WufiObject::WindowType(..) => "WindowType",
            WufiObject::Climate(_) => "Climate",
            WufiObject::Hvac(_) => "Hvac",
            WufiObject::ZoneCoverage(_) => "ZoneCoverage",
            WufiObject::Device(..) => "Device",
        }
    }

    fn descriptors_for(&self, schema_override: Option<&str>) -> Result<Vec<Node<Self>>> {
        registry::descriptors_for(self, schema_override)
    }
}
