//! Child lookup by identifier.

use crate::{Node, OdfDom};

impl OdfDom {
    /// First direct child in document order whose identifier equals `id`.
    ///
    /// Comparison is exact and case-sensitive; on duplicate identifiers the
    /// first child wins. `None` when nothing matches.
    pub fn get_odf_child(&self, id: &str, node: Node) -> Option<Node> {
        self.xot
            .children(node)
            .find(|child| self.get_odf_id(*child).as_deref() == Some(id))
    }

    /// Whether any direct child resolves to a non-empty identifier.
    ///
    /// Distinguishes nodes with structural descendants from nodes whose only
    /// children are anonymous data leaves; Value and bare text children
    /// never qualify.
    pub fn has_odf_children(&self, node: Node) -> bool {
        self.xot
            .children(node)
            .any(|child| self.get_odf_id(child).is_some_and(|id| !id.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Node, OdfDom};

    fn parse(dom: &mut OdfDom, xml: &str) -> Node {
        let doc = dom.parse_xml(xml).expect("parse fixture");
        dom.document_element(doc).expect("root element")
    }

    #[test]
    fn finds_the_unique_match() {
        let mut dom = OdfDom::new();
        let objects = parse(
            &mut dom,
            r#"<Objects xmlns="odf.xsd">
                 <Object><id>House</id></Object>
                 <Object><id>Garage</id></Object>
               </Objects>"#,
        );
        let garage = dom.get_odf_child("Garage", objects).expect("child");
        assert_eq!(dom.get_odf_id(garage).as_deref(), Some("Garage"));
        assert!(dom.get_odf_child("Shed", objects).is_none());
    }

    #[test]
    fn duplicate_identifiers_resolve_to_the_first_in_document_order() {
        let mut dom = OdfDom::new();
        let objects = parse(
            &mut dom,
            r#"<Objects xmlns="odf.xsd">
                 <Object><id>Twin</id><InfoItem name="marker"/></Object>
                 <Object><id>Twin</id></Object>
               </Objects>"#,
        );
        let first = dom.get_odf_child("Twin", objects).expect("child");
        assert!(dom.get_odf_child("marker", first).is_some());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut dom = OdfDom::new();
        let objects = parse(
            &mut dom,
            r#"<Objects xmlns="odf.xsd"><Object><id>House</id></Object></Objects>"#,
        );
        assert!(dom.get_odf_child("house", objects).is_none());
    }

    #[test]
    fn value_children_are_not_structural() {
        let mut dom = OdfDom::new();
        let item = parse(
            &mut dom,
            r#"<InfoItem xmlns="odf.xsd" name="Temp"><value>21</value></InfoItem>"#,
        );
        assert!(!dom.has_odf_children(item));

        let meta = dom.create_odf_meta_data();
        dom.xot_mut().append(item, meta).expect("append metadata");
        assert!(dom.has_odf_children(item));
    }

    #[test]
    fn nested_info_items_are_structural() {
        let mut dom = OdfDom::new();
        let object = parse(
            &mut dom,
            r#"<Object xmlns="odf.xsd"><id>House</id><value>oops</value></Object>"#,
        );
        // The id child itself has no identifier concept, and the stray value
        // never counts.
        assert!(!dom.has_odf_children(object));

        let item = dom
            .create_odf_info_item("Temp", &[], None)
            .expect("build info item");
        dom.xot_mut().append(object, item).expect("append item");
        assert!(dom.has_odf_children(object));
    }
}
