use phx_serde::xml::XmlSerializer;
use phx_serde::{
    Describe, Error, ListNode, Node, ObjectNode, Result, Scalar, ScalarNode, SelectionField,
    SelectionRegistry, XmlOptions, list, object, scalar, schema_key, to_xml_string,
    to_xml_string_with, to_xml_writer,
};

#[derive(Debug)]
struct Appliance {
    energy_demand: i64,
    in_conditioned_space: bool,
    comment: Option<String>,
}

#[derive(Debug)]
struct Layer {
    thickness: f64,
    material: String,
}

#[derive(Debug)]
struct Assembly {
    name: String,
    layers: Vec<Layer>,
    pinned_count: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
enum TestObject<'a> {
    Appliance(&'a Appliance),
    Assembly(&'a Assembly),
    Layer(&'a Layer),
    Pair(&'a Layer),
    Unregistered,
}

impl Describe for TestObject<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            TestObject::Appliance(_) => "Appliance",
            TestObject::Assembly(_) => "Assembly",
            TestObject::Layer(_) => "Layer",
            TestObject::Pair(_) => "Pair",
            TestObject::Unregistered => "Unregistered",
        }
    }

    fn descriptors_for(&self, schema_override: Option<&str>) -> Result<Vec<Node<Self>>> {
        let key = schema_override
            .map(str::to_string)
            .unwrap_or_else(|| schema_key(self.type_name()));

        match (key.as_str(), *self) {
            ("_Appliance", TestObject::Appliance(a)) => Ok(vec![
                ScalarNode::new("EnergyDemandNorm", a.energy_demand)?
                    .with_attribute("unit", "kWh")?
                    .into(),
                scalar("InConditionedSpace", a.in_conditioned_space)?,
                scalar("Comment", a.comment.as_ref())?,
            ]),
            ("_Assembly", TestObject::Assembly(a)) => {
                let mut layers = ListNode::new("Layers", Vec::new())?;
                if let Some(count) = a.pinned_count {
                    layers = layers.with_count(count);
                }
                // Items are added after the list exists; the count must follow.
                for (i, layer) in a.layers.iter().enumerate() {
                    layers.items.push(
                        ObjectNode::new("Layer", TestObject::Layer(layer))?
                            .with_attribute("index", i)?
                            .into(),
                    );
                }
                Ok(vec![scalar("Name", &a.name)?, layers.into()])
            }
            ("_Layer", TestObject::Layer(l)) => Ok(vec![
                scalar("Thickness", l.thickness)?,
                scalar("Material", &l.material)?,
            ]),
            ("_Pair", TestObject::Pair(l)) => Ok(vec![
                object("Full", TestObject::Layer(l))?,
                ObjectNode::new("Short", TestObject::Layer(l))?
                    .with_schema("_LayerSummary")
                    .into(),
            ]),
            ("_LayerSummary", TestObject::Layer(l)) => {
                Ok(vec![scalar("Summary", format!("{} {}", l.material, l.thickness))?])
            }
            _ => Err(Error::UnknownSchema { key }),
        }
    }
}

fn compact() -> XmlOptions {
    XmlOptions {
        indent_size: 0,
        declaration: false,
        ..XmlOptions::default()
    }
}

fn appliance() -> Appliance {
    Appliance {
        energy_demand: 100,
        in_conditioned_space: true,
        comment: None,
    }
}

fn assembly() -> Assembly {
    Assembly {
        name: "Wall".to_string(),
        layers: vec![
            Layer {
                thickness: 0.0125,
                material: "Gypsum".to_string(),
            },
            Layer {
                thickness: 0.2,
                material: "Mineral wool".to_string(),
            },
            Layer {
                thickness: 0.015,
                material: "Render".to_string(),
            },
        ],
        pinned_count: None,
    }
}

#[test]
fn test_scalar_with_attribute_nested_under_root() -> Result<()> {
    let appliance = appliance();
    let xml = to_xml_string(&TestObject::Appliance(&appliance), "Project")?;
    println!("XML output:\n{}", xml);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<EnergyDemandNorm unit=\"kWh\">100</EnergyDemandNorm>"));

    let line = xml
        .lines()
        .find(|l| l.contains("<EnergyDemandNorm"))
        .expect("element written");
    assert_eq!(line, "  <EnergyDemandNorm unit=\"kWh\">100</EnergyDemandNorm>");
    assert!(xml.trim_end().ends_with("</Project>"));

    Ok(())
}

#[test]
fn test_boolean_and_null_rendering() -> Result<()> {
    let mut appliance = appliance();
    let xml = to_xml_string_with(&TestObject::Appliance(&appliance), "Project", &compact())?;
    assert!(xml.contains("<InConditionedSpace>true</InConditionedSpace>"));
    assert!(xml.contains("<Comment/>"));

    appliance.in_conditioned_space = false;
    let xml = to_xml_string_with(&TestObject::Appliance(&appliance), "Project", &compact())?;
    assert!(xml.contains("<InConditionedSpace>false</InConditionedSpace>"));
    assert!(!xml.contains("True"));
    assert!(!xml.contains("<InConditionedSpace>0"));

    Ok(())
}

#[test]
fn test_list_count_and_order() -> Result<()> {
    let assembly = assembly();
    let xml = to_xml_string_with(&TestObject::Assembly(&assembly), "Project", &compact())?;
    println!("XML output (list):\n{}", xml);

    assert_eq!(
        xml,
        "<Project><Name>Wall</Name><Layers count=\"3\">\
         <Layer index=\"0\"><Thickness>0.0125</Thickness><Material>Gypsum</Material></Layer>\
         <Layer index=\"1\"><Thickness>0.2</Thickness><Material>Mineral wool</Material></Layer>\
         <Layer index=\"2\"><Thickness>0.015</Thickness><Material>Render</Material></Layer>\
         </Layers></Project>"
    );

    Ok(())
}

#[test]
fn test_list_order_follows_input_not_content() -> Result<()> {
    let mut assembly = assembly();
    assembly.layers.reverse();
    let xml = to_xml_string_with(&TestObject::Assembly(&assembly), "Project", &compact())?;

    let render = xml.find("Render").expect("render");
    let wool = xml.find("Mineral wool").expect("wool");
    let gypsum = xml.find("Gypsum").expect("gypsum");
    assert!(render < wool && wool < gypsum);

    Ok(())
}

#[test]
fn test_list_count_override_and_empty_list() -> Result<()> {
    let mut assembly = assembly();
    assembly.pinned_count = Some(5);
    let xml = to_xml_string_with(&TestObject::Assembly(&assembly), "Project", &compact())?;
    assert!(xml.contains("<Layers count=\"5\">"));

    assembly.layers.clear();
    assembly.pinned_count = None;
    let xml = to_xml_string_with(&TestObject::Assembly(&assembly), "Project", &compact())?;
    assert!(xml.contains("<Layers count=\"0\"/>"));

    Ok(())
}

#[test]
fn test_list_of_scalars_and_nested_lists() -> Result<()> {
    struct Polygon;

    #[derive(Clone, Copy)]
    struct PolygonObject<'a>(&'a Polygon);

    impl Describe for PolygonObject<'_> {
        fn type_name(&self) -> &'static str {
            "Polygon"
        }

        fn descriptors_for(&self, _: Option<&str>) -> Result<Vec<Node<Self>>> {
            let ids = [4, 1, 3]
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    ScalarNode::new("IdVertex", *id)?
                        .with_attribute("index", i)
                        .map(Node::Scalar)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(vec![list(
                "Outer",
                vec![list("IdVertices", ids)?, list("Holes", Vec::new())?],
            )?])
        }
    }

    let xml = to_xml_string_with(&PolygonObject(&Polygon), "Polygon", &compact())?;
    assert_eq!(
        xml,
        "<Polygon><Outer count=\"2\"><IdVertices count=\"3\">\
         <IdVertex index=\"0\">4</IdVertex>\
         <IdVertex index=\"1\">1</IdVertex>\
         <IdVertex index=\"2\">3</IdVertex>\
         </IdVertices><Holes count=\"0\"/></Outer></Polygon>"
    );

    Ok(())
}

#[test]
fn test_schema_override() -> Result<()> {
    let layer = Layer {
        thickness: 0.2,
        material: "Wool".to_string(),
    };
    let xml = to_xml_string_with(&TestObject::Pair(&layer), "Project", &compact())?;
    assert_eq!(
        xml,
        "<Project><Full><Thickness>0.2</Thickness><Material>Wool</Material></Full>\
         <Short><Summary>Wool 0.2</Summary></Short></Project>"
    );

    let err = TestObject::Layer(&layer)
        .descriptors_for(Some("_Nope"))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownSchema { key } if key == "_Nope"));

    Ok(())
}

#[test]
fn test_unknown_schema_is_fatal() {
    let err = to_xml_string(&TestObject::Unregistered, "Project").unwrap_err();
    assert!(matches!(err, Error::UnknownSchema { ref key } if key == "_Unregistered"));
}

#[test]
fn test_nested_failure_writes_nothing() {
    struct Broken;

    #[derive(Clone, Copy)]
    enum BrokenObject<'a> {
        Root(&'a Broken),
        Child,
    }

    impl Describe for BrokenObject<'_> {
        fn type_name(&self) -> &'static str {
            match self {
                BrokenObject::Root(_) => "Root",
                BrokenObject::Child => "Child",
            }
        }

        fn descriptors_for(&self, _: Option<&str>) -> Result<Vec<Node<Self>>> {
            match self {
                BrokenObject::Root(_) => Ok(vec![
                    scalar("Before", 1)?,
                    list("Children", vec![object("Child", BrokenObject::Child)?])?,
                ]),
                BrokenObject::Child => Err(Error::UnknownSchema {
                    key: "_Child".to_string(),
                }),
            }
        }
    }

    let mut sink = Vec::new();
    let err = to_xml_writer(
        &BrokenObject::Root(&Broken),
        "Project",
        &XmlOptions::default(),
        &mut sink,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownSchema { .. }));
    assert!(sink.is_empty(), "no partial document may be written");
}

#[test]
fn test_selection_renders_attribute() -> Result<()> {
    static FIELDS: &[SelectionField] = &[SelectionField::new(
        "Room",
        "Type",
        "choice",
        &[(1, "Kitchen"), (2, "Bathroom")],
    )];
    let registry = SelectionRegistry::new(FIELDS);

    let selection = registry.validate("Room", "Type", Some(&Scalar::Int(1)))?;
    assert_eq!(
        (
            selection.code,
            selection.attribute_name,
            selection.attribute_value
        ),
        (1, "choice", "Kitchen")
    );

    struct Room;

    #[derive(Clone, Copy)]
    struct RoomObject<'a>(&'a Room, &'a SelectionRegistry);

    impl Describe for RoomObject<'_> {
        fn type_name(&self) -> &'static str {
            "Room"
        }

        fn descriptors_for(&self, _: Option<&str>) -> Result<Vec<Node<Self>>> {
            Ok(vec![self.1.node("Room", "Type", Some(&Scalar::Int(1)))?])
        }
    }

    let xml = to_xml_string_with(&RoomObject(&Room, &registry), "Room", &compact())?;
    assert_eq!(xml, "<Room><Type choice=\"Kitchen\">1</Type></Room>");

    Ok(())
}

#[test]
fn test_text_and_attributes_are_escaped() -> Result<()> {
    let assembly = Assembly {
        name: "Wall <ext> & \"cold\"".to_string(),
        layers: Vec::new(),
        pinned_count: None,
    };
    let xml = to_xml_string_with(&TestObject::Assembly(&assembly), "Project", &compact())?;
    assert!(xml.contains("&lt;ext&gt; &amp;"));
    assert!(!xml.contains("<ext>"));

    Ok(())
}

#[test]
fn test_invalid_root_name() {
    let appliance = appliance();
    let err = to_xml_string(&TestObject::Appliance(&appliance), "").unwrap_err();
    assert!(matches!(err, Error::InvalidNodeName { .. }));
}

#[test]
fn test_schema_override_lookup_errors_are_returned() {
    let layer = Layer {
        thickness: 0.2,
        material: "Wool".to_string(),
    };
    match TestObject::Layer(&layer).descriptors_for(Some("_Nope")) {
        Err(Error::UnknownSchema { key }) => assert_eq!(key, "_Nope"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_serializer_counts_elements() -> Result<()> {
    let assembly = assembly();
    let mut serializer = XmlSerializer::new(Vec::new(), &compact());
    assert_eq!(serializer.elements_written(), 0);

    serializer.serialize_document(&TestObject::Assembly(&assembly), "Project")?;

    // Project, Name, Layers, then Layer + Thickness + Material per layer.
    assert_eq!(serializer.elements_written(), 3 + 3 * 3);
    let xml = String::from_utf8(serializer.into_inner()).expect("utf-8");
    assert!(xml.starts_with("<Project>"));

    Ok(())
}

#[test]
fn test_float_values_use_display_formatting() -> Result<()> {
    let layer = Layer {
        thickness: 100.0,
        material: "Concrete".to_string(),
    };
    let xml = to_xml_string_with(&TestObject::Layer(&layer), "Project", &compact())?;
    println!("XML output:\n{}", xml);
    assert!(xml.contains("<Thickness>100</Thickness>"));

    let layer = Layer {
        thickness: 1e-7,
        material: "Foil".to_string(),
    };
    let xml = to_xml_string_with(&TestObject::Layer(&layer), "Project", &compact())?;
    assert!(xml.contains("<Thickness>0.0000001</Thickness>"));

    Ok(())
}
