//! Failure-isolating parser boundary and subtree serialization.

use tracing::{debug, warn};

use crate::{Node, OdfDom, OdfError};

impl OdfDom {
    /// Parse XML text into a document tree.
    ///
    /// Returns the document node, or `None` for malformed input. No error
    /// escapes this boundary; every failure path logs a diagnostic carrying
    /// the offending input. Inputs shorter than two bytes are rejected
    /// outright to guard against empty or placeholder payloads.
    pub fn parse_xml(&mut self, text: &str) -> Option<Node> {
        if text.len() < 2 {
            warn!(input = %text, "rejected xml payload shorter than two characters");
            return None;
        }
        let document = match self.xot.parse(text) {
            Ok(document) => document,
            Err(err) => {
                warn!(input = %text, error = %err, "xml parse failed");
                return None;
            }
        };
        match self.xot.document_element(document) {
            // DOMParser-style error documents arriving as payloads are
            // treated as parse failures, not as data.
            Ok(root) if self.local_name(root) == Some("parsererror") => {
                warn!(input = %text, "payload is a parsererror document");
                None
            }
            Ok(_) => Some(document),
            Err(err) => {
                warn!(input = %text, error = %err, "parsed document has no root element");
                None
            }
        }
    }

    /// Document element of a parsed tree, `None` if there is none.
    pub fn document_element(&self, document: Node) -> Option<Node> {
        self.xot.document_element(document).ok()
    }

    /// Serialize a node and its subtree back to XML text.
    ///
    /// Factory-built fragments carry no namespace declarations of their own;
    /// any namespace used in the subtree is bound at the serialization root
    /// first (a default declaration for the root's own namespace, canonical
    /// table prefixes for the rest), so any node serializes on its own.
    pub fn to_xml(&mut self, node: Node) -> Result<String, OdfError> {
        self.bind_subtree_namespaces(node);
        self.xot
            .to_string(node)
            .map_err(|err| OdfError::Serialize(err.to_string()))
    }

    fn bind_subtree_namespaces(&mut self, node: Node) {
        let Some(element) = self.xot.element(node) else {
            return;
        };
        let own_uri = self.xot.name_ns_str(element.name()).1.to_string();
        let mut uris: Vec<String> = Vec::new();
        for descendant in self.xot.descendants(node) {
            if let Some(element) = self.xot.element(descendant) {
                let uri = self.xot.name_ns_str(element.name()).1;
                if !uri.is_empty() && !uris.iter().any(|known| known == uri) {
                    uris.push(uri.to_string());
                }
            }
        }
        for uri in uris {
            let prefix = if uri == own_uri {
                ""
            } else {
                match odf_ns::prefix_for(&uri) {
                    Some(prefix) => prefix,
                    // Foreign namespaces only occur in parsed trees, which
                    // carry their own declarations.
                    None => continue,
                }
            };
            let prefix_id = self.xot.add_prefix(prefix);
            if self.xot.namespaces(node).get(prefix_id).is_none() {
                let namespace_id = self.xot.add_namespace(&uri);
                self.xot.namespaces_mut(node).insert(prefix_id, namespace_id);
                debug!(uri = %uri, prefix = %prefix, "bound namespace at serialization root");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_character_inputs_are_rejected() {
        let mut dom = OdfDom::new();
        assert!(dom.parse_xml("").is_none());
        assert!(dom.parse_xml("x").is_none());
    }

    #[test]
    fn malformed_input_yields_none() {
        let mut dom = OdfDom::new();
        assert!(dom.parse_xml("<bad").is_none());
        assert!(dom.parse_xml("plain text").is_none());
    }

    #[test]
    fn parsererror_documents_are_rejected() {
        let mut dom = OdfDom::new();
        assert!(dom
            .parse_xml("<parsererror>unexpected end of input</parsererror>")
            .is_none());
    }

    #[test]
    fn well_formed_input_parses() {
        let mut dom = OdfDom::new();
        let doc = dom
            .parse_xml(r#"<Objects xmlns="odf.xsd"/>"#)
            .expect("parse");
        let root = dom.document_element(doc).expect("root element");
        assert_eq!(dom.get_odf_id(root).as_deref(), Some("Objects"));
    }

    #[test]
    fn parsed_trees_serialize_without_extra_declarations() {
        let mut dom = OdfDom::new();
        let doc = dom
            .parse_xml(r#"<Objects xmlns="odf.xsd"><Object><id>A</id></Object></Objects>"#)
            .expect("parse");
        let xml = dom.to_xml(doc).expect("serialize");
        assert_eq!(
            xml,
            r#"<Objects xmlns="odf.xsd"><Object><id>A</id></Object></Objects>"#
        );
    }

    #[test]
    fn subtrees_of_parsed_documents_gain_a_default_declaration() {
        let mut dom = OdfDom::new();
        let doc = dom
            .parse_xml(r#"<Objects xmlns="odf.xsd"><Object><id>A</id></Object></Objects>"#)
            .expect("parse");
        let object = *dom
            .evaluate(doc, "//odf:Object")
            .first()
            .expect("object element");
        let xml = dom.to_xml(object).expect("serialize");
        assert_eq!(xml, r#"<Object xmlns="odf.xsd"><id>A</id></Object>"#);
    }
}
