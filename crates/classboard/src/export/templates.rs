//! Fixed XMI text expected by Enterprise Architect 2.5.
//!
//! Everything here is literal boilerplate. The only inputs are values
//! derived from the board, and callers escape them before they get here.

/// Namespace that owns every exported class.
pub(super) const PACKAGE_ID: &str = "EAPK_8510AB1B_CCEC_4186_AAF7_EB9893025F80";

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<XMI xmi.version="1.1" xmlns:UML="omg.org/UML1.3" timestamp="2024-10-04 05:45:18">
	<XMI.header>
		<XMI.documentation>
			<XMI.exporter>Enterprise Architect</XMI.exporter>
			<XMI.exporterVersion>2.5</XMI.exporterVersion>
		</XMI.documentation>
	</XMI.header>
	<XMI.content>
		<UML:Model name="EA Model" xmi.id="MX_EAID_8510AB1B_CCEC_4186_AAF7_EB9893025F80">
			<UML:Namespace.ownedElement>
				<UML:Class name="EARootClass" xmi.id="EAID_11111111_5487_4080_A7F4_41526CB0AA00" isRoot="true" isLeaf="false" isAbstract="false"/>
				<UML:Package name="Class Model" xmi.id="EAPK_8510AB1B_CCEC_4186_AAF7_EB9893025F80" isRoot="false" isLeaf="false" isAbstract="false" visibility="public">
					<UML:ModelElement.taggedValue>
						<UML:TaggedValue tag="parent" value="EAPK_AAD25E0C_27E3_44c2_B427_87D636B2D17C"/>
						<UML:TaggedValue tag="ea_package_id" value="86"/>
						<UML:TaggedValue tag="created" value="2024-10-04 05:42:06"/>
						<UML:TaggedValue tag="modified" value="2024-10-04 05:45:02"/>
						<UML:TaggedValue tag="iscontrolled" value="FALSE"/>
						<UML:TaggedValue tag="isnamespace" value="1"/>
						<UML:TaggedValue tag="lastloaddate" value="2024-10-04 05:42:06"/>
						<UML:TaggedValue tag="lastsavedate" value="2024-10-04 05:42:06"/>
						<UML:TaggedValue tag="isprotected" value="FALSE"/>
						<UML:TaggedValue tag="usedtd" value="FALSE"/>
						<UML:TaggedValue tag="logxml" value="FALSE"/>
						<UML:TaggedValue tag="tpos" value="6"/>
						<UML:TaggedValue tag="packageFlags" value="isModel=1;VICON=3;CRC=0;"/>
						<UML:TaggedValue tag="batchsave" value="0"/>
						<UML:TaggedValue tag="batchload" value="0"/>
						<UML:TaggedValue tag="phase" value="1.0"/>
						<UML:TaggedValue tag="status" value="Proposed"/>
						<UML:TaggedValue tag="author" value="HttpRen"/>
						<UML:TaggedValue tag="complexity" value="1"/>
						<UML:TaggedValue tag="ea_stype" value="Public"/>
						<UML:TaggedValue tag="tpos" value="6"/>
					</UML:ModelElement.taggedValue>
					<UML:Namespace.ownedElement>
"#;

const MODEL_FOOTER: &str = r#"					</UML:Namespace.ownedElement>
				</UML:Package>
			</UML:Namespace.ownedElement>
		</UML:Model>
"#;

const DIAGRAM_HEADER: &str = r#"		<UML:Diagram name="Class Model" xmi.id="EAID_0302CD9D_98A9_4585_BA1E_76226685392F" diagramType="ClassDiagram" owner="EAPK_8510AB1B_CCEC_4186_AAF7_EB9893025F80" toolName="Enterprise Architect 2.5">
			<UML:ModelElement.taggedValue>
				<UML:TaggedValue tag="version" value="1.0"/>
				<UML:TaggedValue tag="author" value="HttpRen"/>
				<UML:TaggedValue tag="created_date" value="2024-10-04 05:42:06"/>
				<UML:TaggedValue tag="modified_date" value="2024-10-04 05:43:59"/>
				<UML:TaggedValue tag="package" value="EAPK_8510AB1B_CCEC_4186_AAF7_EB9893025F80"/>
				<UML:TaggedValue tag="type" value="Logical"/>
				<UML:TaggedValue tag="swimlanes" value="locked=false;orientation=0;width=0;inbar=false;names=false;color=0;bold=false;fcol=0;tcol=-1;ofCol=-1;ufCol=-1;hl=0;ufh=0;cls=0;SwimlaneFont=lfh:-13,lfw:0,lfi:0,lfu:0,lfs:0,lfface:Calibri,lfe:0,lfo:0,lfchar:1,lfop:0,lfcp:0,lfq:0,lfpf=0,lfWidth=0;"/>
				<UML:TaggedValue tag="matrixitems" value="locked=false;matrixactive=false;swimlanesactive=true;kanbanactive=false;width=1;clrLine=0;"/>
				<UML:TaggedValue tag="ea_localid" value="83"/>
				<UML:TaggedValue tag="EAStyle" value="ShowPrivate=1;ShowProtected=1;ShowPublic=1;HideRelationships=0;Locked=0;Border=0;HighlightForeign=0;PackageContents=1;SequenceNotes=0;ScalePrintImage=0;PPgs.cx=0;PPgs.cy=0;DocSize.cx=827;DocSize.cy=1169;ShowDetails=0;Orientation=P;Zoom=100;ShowTags=0;OpParams=1;VisibleAttributeDetail=0;ShowOpRetType=1;ShowIcons=1;CollabNums=0;HideProps=0;ShowReqs=0;ShowCons=0;PaperSize=9;HideParents=0;UseAlias=0;HideAtts=0;HideOps=0;HideStereo=0;HideElemStereo=0;ShowTests=0;ShowMaint=0;ConnectorNotation=UML 2.0;ExplicitNavigability=0;ShowShape=1;AdvancedElementProps=1;AdvancedFeatureProps=1;AdvancedConnectorProps=1;m_bElementClassifier=1;ShowNotes=0;SuppressBrackets=0;SuppConnectorLabels=0;PrintPageHeadFoot=0;ShowAsList=0;"/>
				<UML:TaggedValue tag="styleex" value="SaveTag=0F638E8A;ExcludeRTF=0;DocAll=0;HideQuals=0;AttPkg=1;ShowTests=0;ShowMaint=0;SuppressFOC=1;MatrixActive=0;SwimlanesActive=1;KanbanActive=0;MatrixLineWidth=1;MatrixLineClr=0;MatrixLocked=0;TConnectorNotation=UML 2.0;TExplicitNavigability=0;AdvancedElementProps=1;AdvancedFeatureProps=1;AdvancedConnectorProps=1;m_bElementClassifier=1;ProfileData=;MDGDgm=;STBLDgm=;ShowNotes=0;VisibleAttributeDetail=0;ShowOpRetType=1;SuppressBrackets=0;SuppConnectorLabels=0;PrintPageHeadFoot=0;ShowAsList=0;SuppressedCompartments=;Theme=:119;"/>
			</UML:ModelElement.taggedValue>
			<UML:Diagram.element>
"#;

const DOCUMENT_FOOTER: &str = r#"			</UML:Diagram.element>
		</UML:Diagram>
	</XMI.content>
	<XMI.difference/>
	<XMI.extensions xmi.extender="Enterprise Architect 2.5"/>
</XMI>
"#;

const ENDPOINT_STYLE: &str = "Union=0;Derived=0;AllowDuplicates=0;Owned=0;Navigable=Unspecified;";

/// Escaped values of one `UML:Class` element.
pub(super) struct ClassFields<'a> {
    pub name: &'a str,
    pub xmi_id: &'a str,
    pub local_id: &'a str,
}

/// Escaped values of one `UML:Attribute` element.
pub(super) struct AttributeFields<'a> {
    pub name: &'a str,
    pub type_name: &'a str,
    pub classifier: &'a str,
    pub guid: &'a str,
}

/// Escaped values of one `UML:Operation` element.
pub(super) struct OperationFields<'a> {
    pub name: &'a str,
    pub return_type: &'a str,
    pub position: usize,
    pub guid: &'a str,
}

/// One end of a `UML:Association.connection`.
pub(super) struct EndFields<'a> {
    pub multiplicity: &'a str,
    pub aggregation: &'a str,
    pub class_id: &'a str,
}

/// Escaped values of one `UML:Association` element.
pub(super) struct AssociationFields<'a> {
    pub xmi_id: &'a str,
    pub ea_type: &'a str,
    pub local_id: &'a str,
    pub source_name: &'a str,
    pub target_name: &'a str,
    pub source_local_id: &'a str,
    pub target_local_id: &'a str,
    pub source: EndFields<'a>,
    pub target: EndFields<'a>,
}

pub(super) fn header(out: &mut String) {
    out.push_str(HEADER);
}

pub(super) fn class_open(out: &mut String, class: &ClassFields<'_>) {
    out.push_str(&format!(
        r#"						<UML:Class name="{name}" xmi.id="{xmi_id}" visibility="public" namespace="{PACKAGE_ID}" isRoot="false" isLeaf="false" isAbstract="false" isActive="false">
							<UML:ModelElement.taggedValue>
								<UML:TaggedValue tag="isSpecification" value="false"/>
								<UML:TaggedValue tag="ea_stype" value="Class"/>
								<UML:TaggedValue tag="ea_ntype" value="0"/>
								<UML:TaggedValue tag="version" value="1.0"/>
								<UML:TaggedValue tag="package" value="{PACKAGE_ID}"/>
								<UML:TaggedValue tag="date_created" value="2024-10-04 05:42:51"/>
								<UML:TaggedValue tag="date_modified" value="2024-10-04 05:42:55"/>
								<UML:TaggedValue tag="gentype" value="Java"/>
								<UML:TaggedValue tag="tagged" value="0"/>
								<UML:TaggedValue tag="package_name" value="Class Model"/>
								<UML:TaggedValue tag="phase" value="1.0"/>
								<UML:TaggedValue tag="author" value="HttpRen"/>
								<UML:TaggedValue tag="complexity" value="1"/>
								<UML:TaggedValue tag="product_name" value="Java"/>
								<UML:TaggedValue tag="status" value="Proposed"/>
								<UML:TaggedValue tag="tpos" value="0"/>
								<UML:TaggedValue tag="ea_localid" value="{local_id}"/>
								<UML:TaggedValue tag="ea_eleType" value="element"/>
								<UML:TaggedValue tag="style" value="BackColor=-1;BorderColor=-1;BorderWidth=-1;FontColor=-1;VSwimLanes=1;HSwimLanes=1;BorderStyle=0;"/>
							</UML:ModelElement.taggedValue>
							<UML:Classifier.feature>
"#,
        name = class.name,
        xmi_id = class.xmi_id,
        local_id = class.local_id,
    ));
}

pub(super) fn attribute(out: &mut String, attribute: &AttributeFields<'_>) {
    out.push_str(&format!(
        r#"								<UML:Attribute name="{name}" changeable="none" visibility="private" ownerScope="instance" targetScope="instance">
									<UML:Attribute.initialValue>
										<UML:Expression/>
									</UML:Attribute.initialValue>
									<UML:StructuralFeature.type>
										<UML:Classifier xmi.idref="{classifier}"/>
									</UML:StructuralFeature.type>
									<UML:ModelElement.taggedValue>
										<UML:TaggedValue tag="type" value="{type_name}"/>
										<UML:TaggedValue tag="containment" value="Not Specified"/>
										<UML:TaggedValue tag="ordered" value="0"/>
										<UML:TaggedValue tag="collection" value="false"/>
										<UML:TaggedValue tag="position" value="0"/>
										<UML:TaggedValue tag="lowerBound" value="1"/>
										<UML:TaggedValue tag="upperBound" value="1"/>
										<UML:TaggedValue tag="duplicates" value="0"/>
										<UML:TaggedValue tag="ea_guid" value="{guid}"/>
										<UML:TaggedValue tag="ea_localid" value="27"/>
										<UML:TaggedValue tag="styleex" value="volatile=0;"/>
									</UML:ModelElement.taggedValue>
								</UML:Attribute>
"#,
        name = attribute.name,
        classifier = attribute.classifier,
        type_name = attribute.type_name,
        guid = attribute.guid,
    ));
}

pub(super) fn operation(out: &mut String, operation: &OperationFields<'_>) {
    out.push_str(&format!(
        r#"								<UML:Operation name="{name}" visibility="public" ownerScope="instance" isQuery="false" concurrency="sequential">
									<UML:ModelElement.taggedValue>
										<UML:TaggedValue tag="type" value="{return_type}"/>
										<UML:TaggedValue tag="const" value="false"/>
										<UML:TaggedValue tag="synchronised" value="0"/>
										<UML:TaggedValue tag="concurrency" value="Sequential"/>
										<UML:TaggedValue tag="position" value="{position}"/>
										<UML:TaggedValue tag="returnarray" value="0"/>
										<UML:TaggedValue tag="pure" value="0"/>
										<UML:TaggedValue tag="ea_guid" value="{guid}"/>
									</UML:ModelElement.taggedValue>
								</UML:Operation>
"#,
        name = operation.name,
        return_type = operation.return_type,
        position = operation.position,
        guid = operation.guid,
    ));
}

pub(super) fn class_close(out: &mut String) {
    out.push_str("							</UML:Classifier.feature>\n						</UML:Class>\n");
}

pub(super) fn association(out: &mut String, association: &AssociationFields<'_>) {
    out.push_str(&format!(
        r#"						<UML:Association xmi.id="{xmi_id}" visibility="public" isRoot="false" isLeaf="false" isAbstract="false">
							<UML:ModelElement.taggedValue>
								<UML:TaggedValue tag="style" value="3"/>
								<UML:TaggedValue tag="ea_type" value="{ea_type}"/>
								<UML:TaggedValue tag="direction" value="Unspecified"/>
								<UML:TaggedValue tag="linemode" value="3"/>
								<UML:TaggedValue tag="linecolor" value="-1"/>
								<UML:TaggedValue tag="linewidth" value="0"/>
								<UML:TaggedValue tag="seqno" value="0"/>
								<UML:TaggedValue tag="headStyle" value="0"/>
								<UML:TaggedValue tag="lineStyle" value="0"/>
								<UML:TaggedValue tag="ea_localid" value="{local_id}"/>
								<UML:TaggedValue tag="ea_sourceName" value="{source_name}"/>
								<UML:TaggedValue tag="ea_targetName" value="{target_name}"/>
								<UML:TaggedValue tag="ea_sourceType" value="Class"/>
								<UML:TaggedValue tag="ea_targetType" value="Class"/>
								<UML:TaggedValue tag="ea_sourceID" value="{source_local_id}"/>
								<UML:TaggedValue tag="ea_targetID" value="{target_local_id}"/>
								<UML:TaggedValue tag="virtualInheritance" value="0"/>
								<UML:TaggedValue tag="lb" value="1"/>
								<UML:TaggedValue tag="rb" value="1"/>
							</UML:ModelElement.taggedValue>
							<UML:Association.connection>
"#,
        xmi_id = association.xmi_id,
        ea_type = association.ea_type,
        local_id = association.local_id,
        source_name = association.source_name,
        target_name = association.target_name,
        source_local_id = association.source_local_id,
        target_local_id = association.target_local_id,
    ));
    association_end(out, &association.source, "sourcestyle", "source");
    association_end(out, &association.target, "deststyle", "target");
    out.push_str("							</UML:Association.connection>\n						</UML:Association>\n");
}

fn association_end(out: &mut String, end: &EndFields<'_>, style_tag: &str, role: &str) {
    out.push_str(&format!(
        r#"								<UML:AssociationEnd visibility="public" multiplicity="{multiplicity}" aggregation="{aggregation}" isOrdered="false" targetScope="instance" changeable="none" isNavigable="true" type="{class_id}">
									<UML:ModelElement.taggedValue>
										<UML:TaggedValue tag="containment" value="Unspecified"/>
										<UML:TaggedValue tag="{style_tag}" value="{ENDPOINT_STYLE}"/>
										<UML:TaggedValue tag="ea_end" value="{role}"/>
									</UML:ModelElement.taggedValue>
								</UML:AssociationEnd>
"#,
        multiplicity = end.multiplicity,
        aggregation = end.aggregation,
        class_id = end.class_id,
    ));
}

/// Closes the package and model, then opens the class diagram.
pub(super) fn model_footer(out: &mut String) {
    out.push_str(MODEL_FOOTER);
    out.push_str(DIAGRAM_HEADER);
}

pub(super) fn diagram_element(out: &mut String, geometry: &str, subject: &str, seqno: usize) {
    out.push_str(&format!(
        "				<UML:DiagramElement geometry=\"{geometry}\" subject=\"{subject}\" seqno=\"{seqno}\" style=\"DUID=12345;\"/>\n"
    ));
}

pub(super) fn footer(out: &mut String) {
    out.push_str(DOCUMENT_FOOTER);
}
