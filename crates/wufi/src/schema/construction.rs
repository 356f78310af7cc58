//! Assemblies, layers, materials and window types.

use phx_serde::{Result, object, scalar};

use super::{Nodes, indexed, mismatch, selection};
use crate::object::WufiObject;

pub(crate) fn assembly<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Assembly(id, assembly) = *obj else {
        return Err(mismatch("_Assembly", obj));
    };

    Ok(vec![
        scalar("IdentNr", id)?,
        scalar("Name", &assembly.name)?,
        selection("Assembly", "Order_Layers", assembly.layer_order.as_ref())?,
        selection("Assembly", "Grid_Kind", assembly.grid_kind.as_ref())?,
        indexed(
            "Layers",
            "Layer",
            assembly.layers.iter().map(WufiObject::Layer),
        )?,
    ])
}

pub(crate) fn layer<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Layer(layer) = *obj else {
        return Err(mismatch("_Layer", obj));
    };

    Ok(vec![
        scalar("Thickness", layer.thickness)?,
        object("Material", WufiObject::Material(&layer.material))?,
    ])
}

pub(crate) fn material<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Material(material) = *obj else {
        return Err(mismatch("_Material", obj));
    };

    let mut nodes = vec![
        scalar("Name", &material.name)?,
        scalar("ThermalConductivity", material.conductivity)?,
        scalar("BulkDensity", material.density)?,
        scalar("Porosity", material.porosity)?,
        scalar("HeatCapacity", material.heat_capacity)?,
        scalar("WaterVaporResistance", material.water_vapor_resistance)?,
        scalar("ReferenceWaterContent", material.reference_water_content)?,
    ];
    if let Some(color) = &material.color {
        nodes.push(object("Color", WufiObject::Color(color))?);
    }
    Ok(nodes)
}

pub(crate) fn color<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Color(color) = *obj else {
        return Err(mismatch("_Color", obj));
    };

    Ok(vec![
        scalar("Alpha", u32::from(color.alpha))?,
        scalar("Red", u32::from(color.red))?,
        scalar("Green", u32::from(color.green))?,
        scalar("Blue", u32::from(color.blue))?,
    ])
}

pub(crate) fn window_type<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::WindowType(id, window) = *obj else {
        return Err(mismatch("_WindowType", obj));
    };

    Ok(vec![
        scalar("IdentNr", id)?,
        scalar("Name", &window.name)?,
        scalar("U_Value_Glass", window.u_value_glass)?,
        scalar("g_Value", window.g_value)?,
        scalar("Frame_Width", window.frame_width)?,
        scalar("U_Value_Frame", window.u_value_frame)?,
        scalar("PSI_GlazingEdge", window.psi_glazing)?,
        scalar("PSI_Installation", window.psi_installation)?,
    ])
}
