//! HVAC system, zone coverage and devices.
//!
//! A variant's [`Hvac`](phx_model::Hvac) is written as a one-element
//! `Systems` list whose item re-describes the same object through the
//! `_HvacSystem` shape. Device parameter blocks work the same way: the
//! `PH_Parameters` child points back at the device with a shape chosen by
//! its kind.

use phx_model::DeviceKind;
use phx_serde::{ObjectNode, Result, Scalar, list, scalar};

use super::{INDEX_ATTRIBUTE, Nodes, indexed, mismatch, reference, selection};
use crate::object::WufiObject;

const DEFAULT_SYSTEM_NAME: &str = "Ideal Air System";
const SYSTEM_IDENT: i64 = 1;

/// Device type codes shared by `SystemType` and `TypeDevice`.
fn device_code(kind: &DeviceKind) -> i64 {
    match kind {
        DeviceKind::Ventilation(_) => 1,
        DeviceKind::Electric => 2,
        DeviceKind::Boiler(_) => 3,
        DeviceKind::HeatPump(_) => 5,
    }
}

/// Schema for the device's parameter block, if its kind has one.
fn parameter_schema(kind: &DeviceKind) -> Option<&'static str> {
    match kind {
        DeviceKind::Ventilation(_) => Some("_VentilatorParameters"),
        DeviceKind::HeatPump(_) => Some("_HeatPumpParameters"),
        DeviceKind::Boiler(_) => Some("_BoilerParameters"),
        DeviceKind::Electric => None,
    }
}

pub(crate) fn hvac<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Hvac(_) = *obj else {
        return Err(mismatch("_Hvac", obj));
    };

    let system = ObjectNode::new("System", *obj)?
        .with_attribute(INDEX_ATTRIBUTE, 0)?
        .with_schema("_HvacSystem");
    Ok(vec![list("Systems", vec![system.into()])?])
}

pub(crate) fn system<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Hvac(hvac) = *obj else {
        return Err(mismatch("_HvacSystem", obj));
    };

    Ok(vec![
        scalar("Name", hvac.name.as_deref().unwrap_or(DEFAULT_SYSTEM_NAME))?,
        selection("System", "Type", hvac.system_type.as_ref())?,
        scalar("IdentNr", SYSTEM_IDENT)?,
        indexed(
            "ZonesCoverage",
            "ZoneCoverage",
            hvac.coverage.iter().map(WufiObject::ZoneCoverage),
        )?,
        indexed(
            "Devices",
            "Device",
            hvac.devices
                .iter()
                .map(|(id, device)| WufiObject::Device(id, device)),
        )?,
    ])
}

pub(crate) fn zone_coverage<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::ZoneCoverage(coverage) = *obj else {
        return Err(mismatch("_ZoneCoverage", obj));
    };

    Ok(vec![
        scalar("IdentNrZone", reference(coverage.zone_id))?,
        scalar("CoverageHeating", coverage.heating)?,
        scalar("CoverageCooling", coverage.cooling)?,
        scalar("CoverageVentilation", coverage.ventilation)?,
        scalar("CoverageHumidification", coverage.humidification)?,
        scalar("CoverageDehumidification", coverage.dehumidification)?,
    ])
}

pub(crate) fn device<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Device(id, device) = *obj else {
        return Err(mismatch("_Device", obj));
    };

    let code = Scalar::Int(device_code(&device.kind));
    let usage = device.usage;
    let mut nodes = vec![
        scalar("Name", &device.name)?,
        scalar("IdentNr", id)?,
        selection("Device", "SystemType", Some(&code))?,
        selection("Device", "TypeDevice", Some(&code))?,
        scalar("UsedFor_Heating", usage.heating)?,
        scalar("UsedFor_DHW", usage.dhw)?,
        scalar("UsedFor_Cooling", usage.cooling)?,
        scalar("UsedFor_Ventilation", usage.ventilation)?,
        scalar("UsedFor_Humidification", usage.humidification)?,
        scalar("UsedFor_Dehumidification", usage.dehumidification)?,
    ];
    if let Some(schema) = parameter_schema(&device.kind) {
        nodes.push(
            ObjectNode::new("PH_Parameters", *obj)?
                .with_schema(schema)
                .into(),
        );
    }
    Ok(nodes)
}

pub(crate) fn ventilator_parameters<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Device(_, device) = *obj else {
        return Err(mismatch("_VentilatorParameters", obj));
    };
    let DeviceKind::Ventilation(params) = &device.kind else {
        return Err(mismatch("_VentilatorParameters", obj));
    };

    Ok(vec![
        scalar("HeatRecovery", params.heat_recovery)?,
        scalar("HumidityRecoveryEfficiency", params.moisture_recovery)?,
        scalar("ElectricEfficiency", params.electric_efficiency)?,
        scalar("FrostProtection", params.frost_protection)?,
        scalar(
            "Temperature_Below_Defrost_Used",
            params.frost_protection_temperature,
        )?,
    ])
}

pub(crate) fn heat_pump_parameters<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Device(_, device) = *obj else {
        return Err(mismatch("_HeatPumpParameters", obj));
    };
    let DeviceKind::HeatPump(params) = &device.kind else {
        return Err(mismatch("_HeatPumpParameters", obj));
    };

    Ok(vec![
        scalar("AnnualCOP", params.annual_cop)?,
        scalar(
            "TotalSystemPerformanceRatioHeatGenerator",
            params.total_system_performance_ratio,
        )?,
    ])
}

pub(crate) fn boiler_parameters<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Device(_, device) = *obj else {
        return Err(mismatch("_BoilerParameters", obj));
    };
    let DeviceKind::Boiler(params) = &device.kind else {
        return Err(mismatch("_BoilerParameters", obj));
    };

    Ok(vec![
        selection("Boiler", "Fuel", params.fuel.as_ref())?,
        scalar("CondensingBoiler", params.condensing)?,
        scalar(
            "EfficiencyAt30PercentLoad",
            params.efficiency_at_30_percent_load,
        )?,
        scalar("EfficiencyAtNominalLoad", params.efficiency_at_nominal_load)?,
    ])
}
