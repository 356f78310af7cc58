use phx_serde::{Result, scalar};

use super::{COORDINATE_DIGITS, Nodes, indexed, indexed_values, mismatch, round_to};
use crate::object::WufiObject;

pub(crate) fn geometry<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Geometry(geometry) = *obj else {
        return Err(mismatch("_Geometry", obj));
    };

    Ok(vec![
        indexed(
            "Vertices",
            "Vertix",
            geometry
                .vertices
                .iter()
                .map(|(id, vertex)| WufiObject::Vertex(id, vertex)),
        )?,
        indexed(
            "Polygons",
            "Polygon",
            geometry
                .polygons
                .iter()
                .map(|(id, polygon)| WufiObject::Polygon(id, polygon)),
        )?,
    ])
}

pub(crate) fn vertex<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Vertex(id, vertex) = *obj else {
        return Err(mismatch("_Vertex", obj));
    };

    Ok(vec![
        scalar("IdentNr", id)?,
        scalar("X", round_to(vertex.x, COORDINATE_DIGITS))?,
        scalar("Y", round_to(vertex.y, COORDINATE_DIGITS))?,
        scalar("Z", round_to(vertex.z, COORDINATE_DIGITS))?,
    ])
}

/// Vertex ids are written in winding order.
pub(crate) fn polygon<'a>(obj: &WufiObject<'a>) -> Result<Nodes<'a>> {
    let WufiObject::Polygon(id, polygon) = *obj else {
        return Err(mismatch("_Polygon", obj));
    };

    let [nx, ny, nz] = polygon.normal;
    Ok(vec![
        scalar("IdentNr", id)?,
        scalar("NormalVectorX", round_to(nx, COORDINATE_DIGITS))?,
        scalar("NormalVectorY", round_to(ny, COORDINATE_DIGITS))?,
        scalar("NormalVectorZ", round_to(nz, COORDINATE_DIGITS))?,
        indexed_values("IdVertices", "IdVertex", polygon.vertices.iter().copied())?,
    ])
}
