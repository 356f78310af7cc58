use phx_serde::Scalar;
use serde::Deserialize;

/// Site and weather station description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Climate {
    pub name: String,
    /// Selection: where the climate data set comes from.
    pub source: Option<Scalar>,
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above sea level.
    pub station_elevation: f64,
    pub building_elevation: f64,
    /// K
    pub daily_temperature_swing_summer: f64,
    /// m/s
    pub average_wind_speed: f64,
}
