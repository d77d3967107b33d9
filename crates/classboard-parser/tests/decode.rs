use classboard_core::relationship::RelationshipType;
use classboard_parser::{
    DecodeOptions, decode,
    error::{DecodeError, ErrorCode},
    random::{FixedSequence, RngSource},
};
use float_cmp::assert_approx_eq;
use proptest::prelude::*;

const PERSONA_BICICLETA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<XMI xmi.version="1.1" xmlns:UML="omg.org/UML1.3">
    <XMI.content>
        <UML:Model name="EA Model">
            <UML:Class name="EARootClass" xmi.id="EAID_11111111_5487_4080_A7F4_41526CB0AA00"/>
            <UML:Class name="Persona" xmi.id="EAID_A">
                <UML:Attribute name="nombre"/>
                <UML:Attribute name="edad" type="int"/>
                <UML:Method name="caminar"/>
            </UML:Class>
            <UML:Class name="Bicicleta" xmi.id="EAID_B">
                <UML:Attribute name="marca" type="string"/>
                <UML:Method name="rodar" returnType="bool"/>
            </UML:Class>
            <UML:AssociationEnd type="Association">
                <UML:Source><ref>1</ref></UML:Source>
                <UML:Target><ref>2</ref></UML:Target>
                <UML:StartLabel>0..*</UML:StartLabel>
                <UML:EndLabel>1</UML:EndLabel>
            </UML:AssociationEnd>
        </UML:Model>
    </XMI.content>
</XMI>"#;

fn decode_fixed(xml: &str) -> Result<classboard_parser::DecodedBoard, DecodeError> {
    decode(xml, &DecodeOptions::default(), &mut FixedSequence::new(vec![0.5, 0.25]))
}

#[test]
fn test_persona_bicicleta() {
    let board = decode_fixed(PERSONA_BICICLETA).expect("Failed to decode");
    let graph = board.graph();

    assert_eq!(board.title(), "Tablero de Persona");
    assert!(board.warnings().is_empty());

    let nodes = graph.nodes();
    assert_eq!(nodes.len(), 2);
    assert_eq!((nodes[0].id(), nodes[0].class_name()), ("1", "Persona"));
    assert_eq!(nodes[0].attributes(), ["+ nombre: string", "+ edad: int"]);
    assert_eq!(nodes[0].methods(), ["+ caminar(): void"]);
    assert_eq!((nodes[1].id(), nodes[1].class_name()), ("2", "Bicicleta"));
    assert_eq!(nodes[1].methods(), ["+ rodar(): bool"]);

    let edges = graph.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id(), "xy-edge__1right-2left");
    assert_eq!((edges[0].source(), edges[0].target()), ("1", "2"));
    assert_eq!((edges[0].start_label(), edges[0].end_label()), ("0..*", "1"));
    assert_eq!(edges[0].relationship_type(), &RelationshipType::Association);
    assert!(graph.is_referentially_complete());
}

#[test]
fn test_positions_follow_random_source() {
    let board = decode_fixed(PERSONA_BICICLETA).unwrap();

    for node in board.graph().nodes() {
        assert_approx_eq!(f32, node.position().x(), 300.0);
        assert_approx_eq!(f32, node.position().y(), 100.0);
    }
}

#[test]
fn test_seeded_decoding_is_reproducible() {
    let options = DecodeOptions::default();
    let a = decode(PERSONA_BICICLETA, &options, &mut RngSource::seeded(9)).unwrap();
    let b = decode(PERSONA_BICICLETA, &options, &mut RngSource::seeded(9)).unwrap();

    assert_eq!(a.graph(), b.graph());
}

#[test]
fn test_skipped_relationships_do_not_abort() {
    let xml = r#"<XMI>
        <UML:Class name="A"/>
        <UML:Class name="B"/>
        <UML:AssociationEnd>
            <UML:Source><ref>1</ref></UML:Source>
            <UML:Target><ref>2</ref></UML:Target>
        </UML:AssociationEnd>
        <UML:AssociationEnd><UML:Target><ref>2</ref></UML:Target></UML:AssociationEnd>
        <UML:AssociationEnd>
            <UML:Source><ref>2</ref></UML:Source>
            <UML:Target><ref>1</ref></UML:Target>
        </UML:AssociationEnd>
        <UML:AssociationEnd><UML:Source><ref>2</ref></UML:Source></UML:AssociationEnd>
        <UML:AssociationEnd/>
    </XMI>"#;

    let board = decode_fixed(xml).expect("skips must not abort");

    assert_eq!(board.graph().edges().len(), 2);
    assert_eq!(board.skipped_relationships(), 3);
    assert!(board.warnings().iter().all(|w| w.code() == Some(ErrorCode::W100)));
}

#[test]
fn test_relationships_only_document() {
    let xml = r#"<XMI>
        <UML:AssociationEnd>
            <UML:Source><ref>7</ref></UML:Source>
            <UML:Target><ref>8</ref></UML:Target>
        </UML:AssociationEnd>
    </XMI>"#;

    let board = decode_fixed(xml).unwrap();

    assert!(board.graph().nodes().is_empty());
    assert_eq!(board.title(), "Tablero importado");
    assert!(!board.graph().is_referentially_complete());
}

#[test]
fn test_empty_document_has_no_content() {
    let xml = r#"<XMI xmi.version="1.1"><XMI.content/></XMI>"#;
    assert_eq!(decode_fixed(xml).unwrap_err(), DecodeError::NoContentFound);

    let only_root = r#"<XMI><UML:Class name="EARootClass"/><UML:AssociationEnd/></XMI>"#;
    assert_eq!(decode_fixed(only_root).unwrap_err(), DecodeError::NoContentFound);
}

#[test]
fn test_malformed_document() {
    let err = decode_fixed("<XMI><UML:Class name=\"A\"></XMI>").unwrap_err();

    match err {
        DecodeError::MalformedDocument { span, .. } => {
            let span = span.expect("error position");
            assert!(span.start() > 0);
        }
        other => panic!("Expected MalformedDocument, got {other:?}"),
    }
    assert_eq!(
        decode_fixed("not xml at all").unwrap_err().code(),
        ErrorCode::E001
    );
}

#[test]
fn test_exported_document_round_trips_geometry_and_connections() {
    let xml = r#"<XMI xmi.version="1.1" xmlns:UML="omg.org/UML1.3">
        <XMI.content>
            <UML:Model name="EA Model">
                <UML:Namespace.ownedElement>
                    <UML:Class name="EARootClass" xmi.id="EAID_11111111_5487_4080_A7F4_41526CB0AA00"/>
                    <UML:Package name="Class Model">
                        <UML:Namespace.ownedElement>
                            <UML:Class name="Persona" xmi.id="EAID_MYCLASS_001">
                                <UML:Classifier.feature>
                                    <UML:Attribute name="nombre">
                                        <UML:ModelElement.taggedValue>
                                            <UML:TaggedValue tag="type" value="string"/>
                                        </UML:ModelElement.taggedValue>
                                    </UML:Attribute>
                                    <UML:Operation name="caminar">
                                        <UML:ModelElement.taggedValue>
                                            <UML:TaggedValue tag="type" value="void"/>
                                        </UML:ModelElement.taggedValue>
                                    </UML:Operation>
                                </UML:Classifier.feature>
                            </UML:Class>
                            <UML:Class name="Bicicleta" xmi.id="EAID_MYCLASS_002"/>
                            <UML:Association xmi.id="xy-edge__1right-2left">
                                <UML:ModelElement.taggedValue>
                                    <UML:TaggedValue tag="ea_type" value="Composition"/>
                                </UML:ModelElement.taggedValue>
                                <UML:Association.connection>
                                    <UML:AssociationEnd multiplicity="0..*" aggregation="none" type="EAID_MYCLASS_001"/>
                                    <UML:AssociationEnd multiplicity="1" aggregation="composite" type="EAID_MYCLASS_002"/>
                                </UML:Association.connection>
                            </UML:Association>
                        </UML:Namespace.ownedElement>
                    </UML:Package>
                </UML:Namespace.ownedElement>
            </UML:Model>
            <UML:Diagram name="Class Model">
                <UML:Diagram.element>
                    <UML:DiagramElement geometry="Left=130;Top=290;Right=150;Bottom=260;" subject="EAID_MYCLASS_001" seqno="1"/>
                    <UML:DiagramElement geometry="Left=30;Top=90;Right=50;Bottom=60;" subject="EAID_MYCLASS_002" seqno="2"/>
                </UML:Diagram.element>
            </UML:Diagram>
        </XMI.content>
    </XMI>"#;

    let board = decode(xml, &DecodeOptions::default(), &mut FixedSequence::default()).unwrap();
    let graph = board.graph();

    assert_eq!(graph.nodes().len(), 2);
    let persona = graph.node("1").unwrap();
    assert_eq!(persona.attributes(), ["+ nombre: string"]);
    assert_eq!(persona.methods(), ["+ caminar(): void"]);
    assert_approx_eq!(f32, persona.position().x(), 100.0);
    assert_approx_eq!(f32, persona.position().y(), 200.0);

    let edge = &graph.edges()[0];
    assert_eq!(edge.id(), "xy-edge__1right-2left");
    assert_eq!((edge.source(), edge.target()), ("1", "2"));
    assert_eq!(edge.relationship_type(), &RelationshipType::Composition);

    // Geometry can be ignored in favour of random placement.
    let options = DecodeOptions::default().with_diagram_geometry(false);
    let board = decode(xml, &options, &mut FixedSequence::new(vec![0.5])).unwrap();
    let persona = board.graph().node("1").unwrap();
    assert_approx_eq!(f32, persona.position().x(), 300.0);
    assert_approx_eq!(f32, persona.position().y(), 200.0);
}

fn class_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z][A-Za-z0-9]{0,8}",
        1 => Just("EARootClass".to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_root_class_never_decoded(names in prop::collection::vec(class_name(), 1..8)) {
        let classes: String = names
            .iter()
            .map(|name| format!(r#"<UML:Class name="{name}"/>"#))
            .collect();
        let xml = format!("<XMI>{classes}</XMI>");
        let expected = names.iter().filter(|name| *name != "EARootClass").count();

        match decode_fixed(&xml) {
            Ok(board) => {
                prop_assert_eq!(board.graph().nodes().len(), expected);
                prop_assert!(board.graph().nodes().iter().all(|n| n.class_name() != "EARootClass"));
                for (index, node) in board.graph().nodes().iter().enumerate() {
                    prop_assert_eq!(node.id(), (index + 1).to_string());
                }
            }
            Err(err) => {
                prop_assert_eq!(expected, 0);
                prop_assert_eq!(err, DecodeError::NoContentFound);
            }
        }
    }
}
