//! Schema registry: the one place that says what each object looks like in
//! the file.
//!
//! Keys are the object's kind name prefixed with [`SCHEMA_KEY_MARKER`]
//! (`Zone` -> `_Zone`). Extra keys describe alternative shapes of an object
//! and are only reached through an explicit schema override.
//!
//! | Key | Object | Reached by |
//! |-----|--------|------------|
//! | `_Hvac` | HVAC | default |
//! | `_HvacSystem` | HVAC | override from `_Hvac` |
//! | `_VentilatorParameters` | Device | override from `_Device` |
//! | `_HeatPumpParameters` | Device | override from `_Device` |
//! | `_BoilerParameters` | Device | override from `_Device` |
//!
//! [`SCHEMA_KEY_MARKER`]: phx_serde::SCHEMA_KEY_MARKER

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use phx_serde::{Describe, Error, Result, schema_key};

use crate::object::WufiObject;
use crate::schema::{self, Nodes};

/// A function producing the ordered descriptors for one object shape.
pub(crate) type SchemaFn = for<'a> fn(&WufiObject<'a>) -> Result<Nodes<'a>>;

fn entry(key: &'static str, schema: SchemaFn) -> (&'static str, SchemaFn) {
    (key, schema)
}

static SCHEMAS: Lazy<HashMap<&'static str, SchemaFn>> = Lazy::new(|| {
    HashMap::from([
        entry("_Project", schema::project::project),
        entry("_ProjectData", schema::project::project_data),
        entry("_VentilationPattern", schema::project::ventilation_pattern),
        entry("_Variant", schema::project::variant),
        entry("_Climate", schema::project::climate),
        entry("_Geometry", schema::geometry::geometry),
        entry("_Vertex", schema::geometry::vertex),
        entry("_Polygon", schema::geometry::polygon),
        entry("_Building", schema::building::building),
        entry("_Component", schema::building::component),
        entry("_Zone", schema::building::zone),
        entry("_Room", schema::building::room),
        entry("_HomeDevice", schema::building::home_device),
        entry("_Assembly", schema::construction::assembly),
        entry("_Layer", schema::construction::layer),
        entry("_Material", schema::construction::material),
        entry("_Color", schema::construction::color),
        entry("_WindowType", schema::construction::window_type),
        entry("_Hvac", schema::hvac::hvac),
        entry("_HvacSystem", schema::hvac::system),
        entry("_ZoneCoverage", schema::hvac::zone_coverage),
        entry("_Device", schema::hvac::device),
        entry("_VentilatorParameters", schema::hvac::ventilator_parameters),
        entry("_HeatPumpParameters", schema::hvac::heat_pump_parameters),
        entry("_BoilerParameters", schema::hvac::boiler_parameters),
    ])
});

/// Returns true if `key` names a registered schema.
pub fn is_registered(key: &str) -> bool {
    SCHEMAS.contains_key(key)
}

/// Looks up the schema for `object` (or `schema_override`) and runs it.
pub(crate) fn descriptors_for<'a>(
    object: &WufiObject<'a>,
    schema_override: Option<&str>,
) -> Result<Nodes<'a>> {
    let key = match schema_override {
        Some(key) => Cow::Borrowed(key),
        None => Cow::Owned(schema_key(object.type_name())),
    };
    let schema = SCHEMAS.get(key.as_ref()).ok_or_else(|| Error::UnknownSchema {
        key: key.to_string(),
    })?;
    schema(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_default_schema() {
        for kind in WufiObject::KINDS {
            assert!(is_registered(&schema_key(kind)), "no schema for {kind}");
        }
    }

    #[test]
    fn test_unknown_override() {
        let project = phx_model::Project::default();
        let err = descriptors_for(&WufiObject::Project(&project), Some("_Nope")).unwrap_err();
        assert!(matches!(err, Error::UnknownSchema { key } if key == "_Nope"));
    }

    #[test]
    fn test_override_for_wrong_kind() {
        let project = phx_model::Project::default();
        let err = descriptors_for(&WufiObject::Project(&project), Some("_Zone")).unwrap_err();
        assert!(
            matches!(&err, Error::SchemaMismatch { schema, found } if schema == "_Zone" && found == "Project"),
            "unexpected {err:?}"
        );
    }
}
