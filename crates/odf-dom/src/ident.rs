//! Node-kind classification and identifier resolution.

use crate::{Node, OdfDom};

/// The closed set of O-DF node kinds.
///
/// Dispatch over this enum is exhaustive, so adding a kind is a
/// compile-time-checked decision rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdfKind {
    /// Root container, pseudo-identifier `Objects`.
    Objects,
    /// Named container, identified by its `id` child.
    Object,
    /// Leaf measurement point, identified by its `name` attribute.
    InfoItem,
    /// Typed, timestamped reading; carries no identifier.
    Value,
    /// Auxiliary container, pseudo-identifier `MetaData`.
    MetaData,
    /// Free-text annotation, pseudo-identifier `description`.
    Description,
    /// Anything else: foreign elements, text, comments.
    Other,
}

impl OdfDom {
    /// Classify a node into the closed O-DF vocabulary.
    ///
    /// Elements qualify when they sit in the O-DF namespace or in no
    /// namespace at all (unqualified documents); any other namespace is
    /// foreign.
    pub fn kind(&self, node: Node) -> OdfKind {
        let Some(element) = self.xot.element(node) else {
            return OdfKind::Other;
        };
        let (local, uri) = self.xot.name_ns_str(element.name());
        if !uri.is_empty() && uri != odf_ns::ODF {
            return OdfKind::Other;
        }
        match local {
            odf_ns::OBJECTS => OdfKind::Objects,
            odf_ns::OBJECT => OdfKind::Object,
            odf_ns::INFO_ITEM => OdfKind::InfoItem,
            odf_ns::VALUE => OdfKind::Value,
            odf_ns::META_DATA => OdfKind::MetaData,
            odf_ns::DESCRIPTION => OdfKind::Description,
            _ => OdfKind::Other,
        }
    }

    /// Identifier of a structural node, `None` where the kind defines none.
    ///
    /// Absence of the expected structure (an Object without an `id` child,
    /// an InfoItem without a `name` attribute) is a `None` identifier, not
    /// an error.
    pub fn get_odf_id(&self, node: Node) -> Option<String> {
        match self.kind(node) {
            OdfKind::Object => {
                let id = self.evaluate(node, "./odf:id").into_iter().next()?;
                Some(self.text_content(id).trim().to_string())
            }
            OdfKind::InfoItem => self
                .xot
                .attributes(node)
                .get(self.names.attr_name)
                .map(|value| value.to_string()),
            OdfKind::Objects => Some(odf_ns::OBJECTS.to_string()),
            OdfKind::MetaData => Some(odf_ns::META_DATA.to_string()),
            OdfKind::Description => Some(odf_ns::DESCRIPTION.to_string()),
            OdfKind::Value | OdfKind::Other => None,
        }
    }
}
