//! The project root and its variants.

use std::path::Path;

use chrono::NaiveDate;
use phx_serde::Scalar;
use serde::Deserialize;
use tracing::debug;

use crate::building::Building;
use crate::climate::Climate;
use crate::construction::{Assembly, WindowType};
use crate::error::Result;
use crate::geometry::Geometry;
use crate::hvac::Hvac;
use crate::id::{Arena, Named};

/// A complete project: shared catalogues plus one or more design variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Selection: unit system of the project file.
    pub unit_system: Option<Scalar>,
    pub data: ProjectData,
    pub ventilation_patterns: Arena<VentilationPattern>,
    pub assemblies: Arena<Assembly>,
    pub window_types: Arena<WindowType>,
    pub variants: Arena<Variant>,
}

impl Project {
    /// Parses a project from JSON and links its name references.
    ///
    /// # Examples
    ///
    /// ```
    /// use phx_model::Project;
    ///
    /// let project = Project::from_json_str(r#"{"variants": [{"name": "Base"}]}"#)?;
    /// assert_eq!(project.variants.len(), 1);
    /// # Ok::<(), phx_model::ModelError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut project: Project = serde_json::from_str(json)?;
        project.link()?;
        debug!(
            variants = project.variants.len(),
            assemblies = project.assemblies.len(),
            window_types = project.window_types.len(),
            "Loaded project"
        );
        Ok(project)
    }

    /// Reads and parses a project file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading project file");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Administrative project information.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectData {
    pub year_construction: Option<i64>,
    pub customer: Contact,
    pub building: Contact,
    pub owner: Contact,
    pub owner_is_client: bool,
    pub date_project: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: Option<String>,
    pub street: Option<String>,
    pub locality: Option<String>,
    pub postal_code: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

/// Daily operating schedule of the ventilation system.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VentilationPattern {
    pub name: String,
    pub operating_days: f64,
    pub operating_weeks: f64,
    pub maximum: LoadPeriod,
    pub standard: LoadPeriod,
    pub basic: LoadPeriod,
    pub minimum: LoadPeriod,
}

impl Named for VentilationPattern {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for VentilationPattern {
    fn default() -> Self {
        Self {
            name: String::new(),
            operating_days: 7.0,
            operating_weeks: 52.0,
            maximum: LoadPeriod::new(0.0, 1.0),
            standard: LoadPeriod::new(24.0, 0.77),
            basic: LoadPeriod::new(0.0, 0.54),
            minimum: LoadPeriod::new(0.0, 0.4),
        }
    }
}

/// Hours per day spent at a fraction of the design airflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LoadPeriod {
    pub hours: f64,
    pub fraction: f64,
}

impl LoadPeriod {
    pub fn new(hours: f64, fraction: f64) -> Self {
        Self { hours, fraction }
    }
}

/// One design alternative of the building.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Variant {
    pub name: String,
    pub remarks: Option<String>,
    pub geometry: Geometry,
    pub building: Building,
    pub climate: Climate,
    pub hvac: Hvac,
}

impl Named for Variant {
    fn name(&self) -> &str {
        &self.name
    }
}
