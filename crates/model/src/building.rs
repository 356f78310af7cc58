//! Components, thermal zones, ventilated rooms and household appliances.

use phx_serde::Scalar;
use serde::Deserialize;

use crate::id::{Arena, Id, Named};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Building {
    pub components: Arena<Component>,
    pub zones: Arena<Zone>,
}

/// A building element made of one or more polygons sharing an assembly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Component {
    pub name: String,
    pub visual: bool,
    /// Selection: opaque, transparent, ...
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,
    /// Selection: what the outside face is attached to.
    pub exposure: Option<Scalar>,
    pub color_interior: i64,
    pub color_exterior: i64,
    /// Polygon ids within the variant geometry, in order.
    pub polygons: Vec<Id>,
    /// Zone on the inside face, by name.
    pub inner_zone: Option<String>,
    /// Assembly by name.
    pub assembly: Option<String>,
    /// Window type by name.
    pub window_type: Option<String>,

    #[serde(skip)]
    pub inner_zone_id: Option<Id>,
    #[serde(skip)]
    pub assembly_id: Option<Id>,
    #[serde(skip)]
    pub window_type_id: Option<Id>,
}

impl Default for Component {
    fn default() -> Self {
        Self {
            name: String::new(),
            visual: true,
            kind: None,
            exposure: None,
            color_interior: -1,
            color_exterior: -1,
            polygons: Vec::new(),
            inner_zone: None,
            assembly: None,
            window_type: None,
            inner_zone_id: None,
            assembly_id: None,
            window_type_id: None,
        }
    }
}

/// A value together with how it was determined (selection).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Measured {
    pub value: f64,
    pub determined_by: Option<Scalar>,
}

/// A thermal zone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Zone {
    pub name: String,
    /// Selection: simulated, unconditioned, ...
    pub kind: Option<Scalar>,
    /// m³
    pub gross_volume: Measured,
    /// m³
    pub net_volume: Measured,
    /// m²
    pub floor_area: Measured,
    /// m
    pub clearance_height: Measured,
    /// Wh/m²K
    pub specific_heat_capacity: Measured,
    pub rooms: Vec<Room>,
    pub home_devices: Vec<HomeDevice>,
}

impl Named for Zone {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A ventilated room inside a zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Room {
    pub name: String,
    /// Selection: kitchen, bathroom, ...
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,
    pub quantity: i64,
    /// m²
    pub floor_area: f64,
    /// m
    pub clear_height: f64,
    /// m³/h
    pub supply_airflow: f64,
    /// m³/h
    pub extract_airflow: f64,
    /// Ventilation pattern by name.
    pub ventilation_pattern: Option<String>,
    /// Ventilation device by name.
    pub ventilator: Option<String>,

    #[serde(skip)]
    pub ventilation_pattern_id: Option<Id>,
    #[serde(skip)]
    pub ventilator_id: Option<Id>,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: None,
            quantity: 1,
            floor_area: 0.0,
            clear_height: 2.5,
            supply_airflow: 0.0,
            extract_airflow: 0.0,
            ventilation_pattern: None,
            ventilator: None,
            ventilation_pattern_id: None,
            ventilator_id: None,
        }
    }
}

/// A household appliance or electrical load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HomeDevice {
    /// Selection: dishwasher, refrigerator, ...
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,
    pub comment: Option<String>,
    /// Selection: what `quantity` counts.
    pub reference_quantity: Option<Scalar>,
    pub quantity: i64,
    pub in_conditioned_space: bool,
    /// kWh per use or per year, depending on the appliance.
    pub energy_demand: f64,
    /// Selection: water connection, only for water-using appliances.
    pub connection: Option<Scalar>,
}

impl Default for HomeDevice {
    fn default() -> Self {
        Self {
            kind: None,
            comment: None,
            reference_quantity: None,
            quantity: 1,
            in_conditioned_space: true,
            energy_demand: 0.0,
            connection: None,
        }
    }
}
