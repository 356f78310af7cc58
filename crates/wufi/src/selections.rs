//! Selection vocabularies of the WUFI-Passive project file.
//!
//! Options are listed in the order the file format declares them. A missing
//! input selects the first option, which for several fields (volumes, floor
//! area, layer order, grid, room type) is not the lowest code.

use phx_serde::{SelectionField, SelectionRegistry};

const CHOICE: &str = "choice";

const DETERMINED_BY: &[(i64, &str)] = &[
    (6, "User defined"),
    (2, "Visualized geometry"),
    (4, "Estimated"),
];

const DEVICE_TYPES: &[(i64, &str)] = &[
    (1, "Mech. ventilation"),
    (2, "Electric heating"),
    (3, "Boiler"),
    (5, "Heat pump"),
];

static FIELDS: &[SelectionField] = &[
    SelectionField::new(
        "Project",
        "UnitSystem",
        CHOICE,
        &[(1, "SI (kg, m, s, W, °C)"), (2, "IP (lb, ft, s, Btu/h, °F)")],
    ),
    SelectionField::new(
        "Component",
        "Type",
        CHOICE,
        &[(1, "Opaque"), (2, "Transparent"), (3, "Adiabatic")],
    ),
    SelectionField::new(
        "Component",
        "OuterAttachment",
        CHOICE,
        &[(-1, "Outdoor air"), (-2, "Ground"), (-3, "Adiabatic")],
    ),
    SelectionField::new(
        "Zone",
        "KindZone",
        CHOICE,
        &[
            (1, "Simulated zone"),
            (2, "Unheated space"),
            (3, "Attic"),
            (4, "Cellar"),
        ],
    ),
    SelectionField::new("Zone", "GrossVolume_Selection", CHOICE, DETERMINED_BY),
    SelectionField::new("Zone", "NetVolume_Selection", CHOICE, DETERMINED_BY),
    SelectionField::new("Zone", "FloorArea_Selection", CHOICE, DETERMINED_BY),
    SelectionField::new(
        "Zone",
        "ClearanceHeight_Selection",
        CHOICE,
        &[(1, "User defined"), (2, "Visualized geometry")],
    ),
    SelectionField::new(
        "Zone",
        "SpecificHeatCapacity_Selection",
        CHOICE,
        &[
            (1, "Lightweight"),
            (2, "Mixed"),
            (3, "Massive"),
            (6, "User defined"),
        ],
    ),
    SelectionField::new(
        "Room",
        "Type",
        CHOICE,
        &[
            (99, "User defined"),
            (1, "Kitchen"),
            (2, "Bathroom"),
            (3, "Shower"),
            (4, "WC"),
            (5, "Storeroom"),
            (6, "Living room"),
            (7, "Bedroom"),
            (8, "Hallway"),
        ],
    ),
    SelectionField::new(
        "HomeDevice",
        "Type",
        CHOICE,
        &[
            (1, "Dishwasher"),
            (2, "Clothes washer"),
            (3, "Clothes dryer"),
            (4, "Refrigerator"),
            (5, "Freezer"),
            (6, "Fridge/freezer combo"),
            (7, "Cooking"),
            (11, "Consumer electronics"),
            (13, "Lighting"),
            (14, "Other electricity"),
        ],
    ),
    SelectionField::new(
        "HomeDevice",
        "ReferenceQuantity",
        CHOICE,
        &[
            (1, "Occupants"),
            (2, "Units"),
            (4, "Bedrooms"),
            (5, "Not applicable"),
            (6, "Treated floor area"),
        ],
    ),
    SelectionField::new(
        "HomeDevice",
        "Connection",
        CHOICE,
        &[(1, "DHW connection"), (2, "Cold water connection")],
    ),
    SelectionField::new(
        "Assembly",
        "Order_Layers",
        CHOICE,
        &[(2, "Outside to inside"), (1, "Inside to outside")],
    ),
    SelectionField::new(
        "Assembly",
        "Grid_Kind",
        CHOICE,
        &[(2, "Medium"), (1, "Coarse"), (3, "Fine")],
    ),
    SelectionField::new(
        "ClimateLocation",
        "Selection",
        CHOICE,
        &[(6, "User defined"), (1, "From database")],
    ),
    SelectionField::new("System", "Type", CHOICE, &[(1, "User defined")]),
    SelectionField::new("Device", "SystemType", CHOICE, DEVICE_TYPES),
    SelectionField::new("Device", "TypeDevice", CHOICE, DEVICE_TYPES),
    SelectionField::new(
        "Boiler",
        "Fuel",
        CHOICE,
        &[(2, "Gas"), (3, "Oil"), (4, "Wood log"), (5, "Wood pellet")],
    ),
];

/// All registered selection vocabularies.
pub static SELECTIONS: SelectionRegistry = SelectionRegistry::new(FIELDS);
