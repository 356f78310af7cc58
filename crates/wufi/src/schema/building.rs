//! Components, zones, ventilated rooms and household appliances.

use phx_model::Measured;
use phx_serde::{Result, scalar};

use super::{Nodes, indexed, indexed_values, mismatch, reference, selection, with_unit};
use crate::object::WufiObject;

pub(crate) fn building<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Building(building) = *obj else {
        return Err(mismatch("_Building", obj));
    };

    Ok(vec![
        indexed(
            "Components",
            "Component",
            building
                .components
                .iter()
                .map(|(id, component)| WufiObject::Component(id, component)),
        )?,
        indexed(
            "Zones",
            "Zone",
            building
                .zones
                .iter()
                .map(|(id, zone)| WufiObject::Zone(id, zone)),
        )?,
    ])
}

pub(crate) fn component<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Component(id, component) = *obj else {
        return Err(mismatch("_Component", obj));
    };

    Ok(vec![
        scalar("IdentNr", id)?,
        scalar("Name", &component.name)?,
        scalar("Visual", component.visual)?,
        selection("Component", "Type", component.kind.as_ref())?,
        scalar("IdentNrColorI", component.color_interior)?,
        scalar("IdentNrColorE", component.color_exterior)?,
        scalar("InnerAttachment", reference(component.inner_zone_id))?,
        selection("Component", "OuterAttachment", component.exposure.as_ref())?,
        indexed_values(
            "IdentNrPolygons",
            "IdentNr",
            component.polygons.iter().copied(),
        )?,
        scalar("IdentNrAssembly", reference(component.assembly_id))?,
        scalar("IdentNrWindowType", reference(component.window_type_id))?,
    ])
}

pub(crate) fn zone<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Zone(id, zone) = *obj else {
        return Err(mismatch("_Zone", obj));
    };

    let mut nodes = vec![
        scalar("Name", &zone.name)?,
        selection("Zone", "KindZone", zone.kind.as_ref())?,
        scalar("IdentNr", id)?,
    ];
    for (field, measured) in [
        ("GrossVolume", &zone.gross_volume),
        ("NetVolume", &zone.net_volume),
        ("FloorArea", &zone.floor_area),
        ("ClearanceHeight", &zone.clearance_height),
        ("SpecificHeatCapacity", &zone.specific_heat_capacity),
    ] {
        measured_pair(&mut nodes, field, measured)?;
    }
    nodes.push(indexed(
        "RoomsVentilation",
        "Room",
        zone.rooms.iter().map(WufiObject::Room),
    )?);
    nodes.push(indexed(
        "HomeDevice",
        "Device",
        zone.home_devices.iter().map(WufiObject::HomeDevice),
    )?);
    Ok(nodes)
}

/// Writes `<Field>_Selection` followed by `<Field>`.
fn measured_pair<'a>(nodes: &mut Nodes<'a>, field: &str, measured: &Measured) -> Result<()> {
    let selection_field = format!("{field}_Selection");
    nodes.push(selection(
        "Zone",
        &selection_field,
        measured.determined_by.as_ref(),
    )?);
    nodes.push(scalar(field, measured.value)?);
    Ok(())
}

pub(crate) fn room<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Room(room) = *obj else {
        return Err(mismatch("_Room", obj));
    };

    Ok(vec![
        scalar("Name", &room.name)?,
        selection("Room", "Type", room.kind.as_ref())?,
        scalar(
            "IdentNrUtilizationPatternVent",
            reference(room.ventilation_pattern_id),
        )?,
        scalar("IdentNrVentilationUnit", reference(room.ventilator_id))?,
        scalar("Quantity", room.quantity)?,
        with_unit("AreaRoom", room.floor_area, "m²")?,
        with_unit("ClearRoomHeight", room.clear_height, "m")?,
        with_unit("DesignVolumeFlowRateSupply", room.supply_airflow, "m³/h")?,
        with_unit("DesignVolumeFlowRateExhaust", room.extract_airflow, "m³/h")?,
    ])
}

pub(crate) fn home_device<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::HomeDevice(device) = *obj else {
        return Err(mismatch("_HomeDevice", obj));
    };

    let mut nodes = vec![
        scalar("Comment", device.comment.as_deref())?,
        selection(
            "HomeDevice",
            "ReferenceQuantity",
            device.reference_quantity.as_ref(),
        )?,
        scalar("Quantity", device.quantity)?,
        scalar("InConditionedSpace", device.in_conditioned_space)?,
        selection("HomeDevice", "Type", device.kind.as_ref())?,
        with_unit("EnergyDemandNorm", device.energy_demand, "kWh")?,
    ];
    if let Some(connection) = &device.connection {
        nodes.push(selection("HomeDevice", "Connection", Some(connection))?);
    }
    Ok(nodes)
}
