//! Mechanical equipment serving the zones of a variant.

use phx_serde::Scalar;
use serde::Deserialize;

use crate::id::{Arena, Id, Named};

/// The single HVAC system of a variant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Hvac {
    pub name: Option<String>,
    /// Selection: system type.
    pub system_type: Option<Scalar>,
    pub devices: Arena<Device>,
    pub coverage: Vec<ZoneCoverage>,
}

/// Share of a zone's loads handled by the system.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ZoneCoverage {
    /// Zone by name.
    pub zone: String,
    pub heating: f64,
    pub cooling: f64,
    pub ventilation: f64,
    pub humidification: f64,
    pub dehumidification: f64,

    #[serde(skip)]
    pub zone_id: Option<Id>,
}

impl Default for ZoneCoverage {
    fn default() -> Self {
        Self {
            zone: String::new(),
            heating: 1.0,
            cooling: 1.0,
            ventilation: 1.0,
            humidification: 1.0,
            dehumidification: 1.0,
            zone_id: None,
        }
    }
}

/// What a device is used for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub heating: bool,
    pub dhw: bool,
    pub cooling: bool,
    pub ventilation: bool,
    pub humidification: bool,
    pub dehumidification: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(default)]
    pub usage: Usage,
    #[serde(flatten)]
    pub kind: DeviceKind,
}

impl Named for Device {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Equipment category, with the parameters each category needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceKind {
    Ventilation(VentilatorParams),
    Electric,
    HeatPump(HeatPumpParams),
    Boiler(BoilerParams),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VentilatorParams {
    pub heat_recovery: f64,
    pub moisture_recovery: f64,
    /// Wh/m³
    pub electric_efficiency: f64,
    pub frost_protection: bool,
    /// °C
    pub frost_protection_temperature: f64,
}

impl Default for VentilatorParams {
    fn default() -> Self {
        Self {
            heat_recovery: 0.75,
            moisture_recovery: 0.0,
            electric_efficiency: 0.45,
            frost_protection: true,
            frost_protection_temperature: -5.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeatPumpParams {
    pub annual_cop: f64,
    pub total_system_performance_ratio: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BoilerParams {
    /// Selection: fuel type.
    pub fuel: Option<Scalar>,
    pub condensing: bool,
    pub efficiency_at_30_percent_load: f64,
    pub efficiency_at_nominal_load: f64,
}
