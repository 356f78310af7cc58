//! Project header, administrative data, ventilation patterns, variants and
//! climate.

use phx_model::{Contact, LoadPeriod};
use phx_serde::{Result, object, scalar};

use super::{Nodes, indexed, mismatch, selection};
use crate::object::WufiObject;

/// File format version written in the header.
pub(crate) const DATA_VERSION: i64 = 48;
pub(crate) const PROGRAM_NAME: &str = "WUFIplus";
pub(crate) const PROGRAM_VERSION: &str = "3.2.0.1";
/// Passive house certification scope.
pub(crate) const SCOPE: i64 = 3;
/// Geometry is given as visualized 3D polygons.
pub(crate) const DIMENSIONS_VISUALIZED_GEOMETRY: i64 = 2;

const DATE_FORMAT: &str = "%d.%m.%Y";

pub(crate) fn project<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Project(project) = *obj else {
        return Err(mismatch("_Project", obj));
    };

    Ok(vec![
        scalar("DataVersion", DATA_VERSION)?,
        selection("Project", "UnitSystem", project.unit_system.as_ref())?,
        scalar("ProgramName", PROGRAM_NAME)?,
        scalar("ProgramVersion", PROGRAM_VERSION)?,
        scalar("Scope", SCOPE)?,
        scalar("DimensionsVisualizedGeometry", DIMENSIONS_VISUALIZED_GEOMETRY)?,
        object("ProjectData", WufiObject::ProjectData(&project.data))?,
        indexed(
            "UtilisationPatternsVentilation",
            "UtilizationPatternVent",
            project
                .ventilation_patterns
                .iter()
                .map(|(id, pattern)| WufiObject::VentilationPattern(id, pattern)),
        )?,
        indexed(
            "Variants",
            "Variant",
            project
                .variants
                .iter()
                .map(|(id, variant)| WufiObject::Variant(id, variant)),
        )?,
        indexed(
            "Assemblies",
            "Assembly",
            project
                .assemblies
                .iter()
                .map(|(id, assembly)| WufiObject::Assembly(id, assembly)),
        )?,
        indexed(
            "WindowTypes",
            "WindowType",
            project
                .window_types
                .iter()
                .map(|(id, window)| WufiObject::WindowType(id, window)),
        )?,
    ])
}

pub(crate) fn project_data<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::ProjectData(data) = *obj else {
        return Err(mismatch("_ProjectData", obj));
    };

    let mut nodes = vec![scalar("Year_Construction", data.year_construction)?];
    contact(&mut nodes, "Customer", &data.customer)?;
    nodes.push(scalar("Customer_Tel", data.customer.telephone.as_deref())?);
    nodes.push(scalar("Customer_Email", data.customer.email.as_deref())?);
    contact(&mut nodes, "Building", &data.building)?;
    nodes.push(scalar("OwnerIsClient", data.owner_is_client)?);
    contact(&mut nodes, "Owner", &data.owner)?;
    nodes.push(scalar(
        "Date_Project",
        data.date_project
            .map(|date| date.format(DATE_FORMAT).to_string()),
    )?);
    Ok(nodes)
}

fn contact<'a>(nodes: &mut Nodes<'a>, prefix: &str, contact: &Contact) -> Result<()> {
    for (field, value) in [
        ("Name", &contact.name),
        ("Street", &contact.street),
        ("Locality", &contact.locality),
        ("PostalCode", &contact.postal_code),
    ] {
        nodes.push(scalar(&format!("{prefix}_{field}"), value.as_deref())?);
    }
    Ok(())
}

pub(crate) fn ventilation_pattern<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::VentilationPattern(id, pattern) = *obj else {
        return Err(mismatch("_VentilationPattern", obj));
    };

    let mut nodes = vec![
        scalar("Name", &pattern.name)?,
        scalar("IdentNr", id)?,
        scalar("OperatingDays", pattern.operating_days)?,
        scalar("OperatingWeeks", pattern.operating_weeks)?,
    ];
    for (label, period) in [
        ("Maximum", &pattern.maximum),
        ("Standard", &pattern.standard),
        ("Basic", &pattern.basic),
        ("Minimum", &pattern.minimum),
    ] {
        load_period(&mut nodes, label, period)?;
    }
    Ok(nodes)
}

fn load_period<'a>(nodes: &mut Nodes<'a>, label: &str, period: &LoadPeriod) -> Result<()> {
    nodes.push(scalar(&format!("{label}_DOS"), period.hours)?);
    nodes.push(scalar(&format!("{label}_PDF"), period.fraction)?);
    Ok(())
}

pub(crate) fn variant<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Variant(id, variant) = *obj else {
        return Err(mismatch("_Variant", obj));
    };

    Ok(vec![
        scalar("IdentNr", id)?,
        scalar("Name", &variant.name)?,
        scalar("Remarks", variant.remarks.as_deref())?,
        object("Graphics_3D", WufiObject::Geometry(&variant.geometry))?,
        object("Building", WufiObject::Building(&variant.building))?,
        object("ClimateLocation", WufiObject::Climate(&variant.climate))?,
        object("HVAC", WufiObject::Hvac(&variant.hvac))?,
    ])
}

pub(crate) fn climate<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Climate(climate) = *obj else {
        return Err(mismatch("_Climate", obj));
    };

    Ok(vec![
        selection("ClimateLocation", "Selection", climate.source.as_ref())?,
        scalar("Name", &climate.name)?,
        scalar("Latitude", climate.latitude)?,
        scalar("Longitude", climate.longitude)?,
        scalar("HeightNNWeatherStation", climate.station_elevation)?,
        scalar("HeightNNBuilding", climate.building_elevation)?,
        scalar(
            "dailyTemperatureSwingSummer",
            climate.daily_temperature_swing_summer,
        )?,
        scalar("AverageWindSpeed", climate.average_wind_speed)?,
    ])
}
