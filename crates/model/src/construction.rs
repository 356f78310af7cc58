//! Opaque assemblies and window types shared by all variants.

use phx_serde::Scalar;
use serde::Deserialize;

use crate::id::Named;

/// A layered opaque construction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Assembly {
    pub name: String,
    /// Selection: direction the layers are listed in.
    pub layer_order: Option<Scalar>,
    /// Selection: calculation grid resolution.
    pub grid_kind: Option<Scalar>,
    /// Layers in the order given by `layer_order`.
    pub layers: Vec<Layer>,
}

impl Named for Assembly {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Layer {
    /// Metres.
    pub thickness: f64,
    pub material: Material,
}

/// Hygrothermal material properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: String,
    /// W/mK
    pub conductivity: f64,
    /// kg/m³
    pub density: f64,
    /// m³/m³
    pub porosity: f64,
    /// J/kgK
    pub heat_capacity: f64,
    /// Dimensionless diffusion resistance factor.
    pub water_vapor_resistance: f64,
    /// kg/m³
    pub reference_water_content: f64,
    pub color: Option<Color>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            conductivity: 0.0,
            density: 0.0,
            porosity: 0.95,
            heat_capacity: 0.0,
            water_vapor_resistance: 1.0,
            reference_water_content: 0.0,
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color {
    #[serde(default = "opaque")]
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

fn opaque() -> u8 {
    255
}

/// Thermal properties of a window product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WindowType {
    pub name: String,
    /// W/m²K
    pub u_value_glass: f64,
    pub g_value: f64,
    /// Metres.
    pub frame_width: f64,
    /// W/m²K
    pub u_value_frame: f64,
    /// W/mK
    pub psi_glazing: f64,
    /// W/mK
    pub psi_installation: f64,
}

impl Named for WindowType {
    fn name(&self) -> &str {
        &self.name
    }
}
