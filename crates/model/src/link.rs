//! Resolution of cross-collection references.
//!
//! Input documents refer to shared objects by name and to geometry by id.
//! Linking checks every reference once after loading and stores the resolved
//! ids, so writers never see a dangling reference.

use tracing::trace;

use crate::building::Building;
use crate::construction::{Assembly, WindowType};
use crate::error::{ModelError, Result};
use crate::geometry::Geometry;
use crate::hvac::{Device, Hvac};
use crate::id::{Arena, Id, Named};
use crate::project::{Project, Variant, VentilationPattern};

impl Project {
    /// Resolves all name and id references. Safe to call more than once.
    pub fn link(&mut self) -> Result<()> {
        unique("assembly", &self.assemblies)?;
        unique("window type", &self.window_types)?;
        unique("ventilation pattern", &self.ventilation_patterns)?;
        unique("variant", &self.variants)?;

        let catalogues = Catalogues {
            assemblies: &self.assemblies,
            window_types: &self.window_types,
            patterns: &self.ventilation_patterns,
        };
        for (id, variant) in self.variants.iter_mut() {
            trace!(variant = %variant.name, id = %id, "Linking variant");
            variant.link(&catalogues)?;
        }
        Ok(())
    }
}

struct Catalogues<'a> {
    assemblies: &'a Arena<Assembly>,
    window_types: &'a Arena<WindowType>,
    patterns: &'a Arena<VentilationPattern>,
}

impl Variant {
    fn link(&mut self, catalogues: &Catalogues<'_>) -> Result<()> {
        let Variant {
            geometry,
            building,
            hvac,
            ..
        } = self;

        link_geometry(geometry)?;
        link_building(building, geometry, catalogues, &hvac.devices)?;
        link_hvac(hvac, building)
    }
}

fn link_geometry(geometry: &Geometry) -> Result<()> {
    for (polygon_id, polygon) in geometry.polygons.iter() {
        for vertex in &polygon.vertices {
            if !geometry.vertices.contains(*vertex) {
                return Err(ModelError::MissingId {
                    kind: "vertex",
                    id: vertex.get(),
                    owner: format!("polygon #{}", polygon_id),
                });
            }
        }
    }
    Ok(())
}

fn link_building(
    building: &mut Building,
    geometry: &Geometry,
    catalogues: &Catalogues<'_>,
    devices: &Arena<Device>,
) -> Result<()> {
    let Building { components, zones } = building;
    unique("zone", zones)?;

    for (_, component) in components.iter_mut() {
        let owner = format!("component {:?}", component.name);
        if let Some(missing) = component
            .polygons
            .iter()
            .find(|id| !geometry.polygons.contains(**id))
        {
            return Err(ModelError::MissingId {
                kind: "polygon",
                id: missing.get(),
                owner,
            });
        }
        component.assembly_id = resolve(
            catalogues.assemblies,
            "assembly",
            component.assembly.as_deref(),
            &owner,
        )?;
        component.window_type_id = resolve(
            catalogues.window_types,
            "window type",
            component.window_type.as_deref(),
            &owner,
        )?;
        component.inner_zone_id = resolve(zones, "zone", component.inner_zone.as_deref(), &owner)?;
    }

    for (_, zone) in zones.iter_mut() {
        for room in &mut zone.rooms {
            let owner = format!("room {:?}", room.name);
            room.ventilation_pattern_id = resolve(
                catalogues.patterns,
                "ventilation pattern",
                room.ventilation_pattern.as_deref(),
                &owner,
            )?;
            room.ventilator_id = resolve(devices, "device", room.ventilator.as_deref(), &owner)?;
        }
    }
    Ok(())
}

fn link_hvac(hvac: &mut Hvac, building: &Building) -> Result<()> {
    unique("device", &hvac.devices)?;
    for coverage in &mut hvac.coverage {
        coverage.zone_id = resolve(
            &building.zones,
            "zone",
            Some(coverage.zone.as_str()),
            "zone coverage",
        )?;
    }
    Ok(())
}

fn resolve<T: Named>(
    arena: &Arena<T>,
    kind: &'static str,
    name: Option<&str>,
    owner: &str,
) -> Result<Option<Id>> {
    let Some(name) = name else {
        return Ok(None);
    };
    arena
        .find(name)
        .map(Some)
        .ok_or_else(|| ModelError::UnknownReference {
            kind,
            name: name.to_string(),
            owner: owner.to_string(),
        })
}

fn unique<T: Named>(kind: &'static str, arena: &Arena<T>) -> Result<()> {
    match arena.duplicate_name() {
        Some(name) => Err(ModelError::DuplicateName {
            kind,
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}
