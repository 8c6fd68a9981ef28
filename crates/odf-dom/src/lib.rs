//! O-DF document model: parse, build, and address O-MI/O-DF trees.
//!
//! All trees live in a single owning [`xot::Xot`] arena wrapped by
//! [`OdfDom`]. [`Node`] handles are cheap copies that are only meaningful
//! against the arena they came from; once a subtree is appended somewhere it
//! is owned by that tree. The model never retains handles across calls, so
//! there is no shared mutable tree state to coordinate.
//!
//! Failure is representable as absence: lookups return `Option`/empty `Vec`,
//! and the parser boundary converts every error into `None` plus a logged
//! diagnostic. Only structural edits and serialization surface an
//! [`OdfError`].

mod factory;
mod ident;
mod navigate;
mod parse;
mod path;

pub use factory::ValueSpec;
pub use ident::OdfKind;
pub use xot::Node;

use thiserror::Error;
use xot::{NameId, NamespaceId, Xot};

/// Error type produced by structural edits and serialization.
#[derive(Debug, Error)]
pub enum OdfError {
    /// The owning tree rejected a structural edit.
    #[error("tree edit: {0}")]
    Tree(String),
    /// Serializing a subtree back to XML text failed.
    #[error("serialize: {0}")]
    Serialize(String),
}

/// Interned ids for the fixed O-DF vocabulary.
#[derive(Debug)]
pub(crate) struct OdfNames {
    pub(crate) omi: NamespaceId,
    pub(crate) objects: NameId,
    pub(crate) object: NameId,
    pub(crate) id: NameId,
    pub(crate) info_item: NameId,
    pub(crate) value: NameId,
    pub(crate) meta_data: NameId,
    pub(crate) description: NameId,
    pub(crate) attr_name: NameId,
    pub(crate) attr_type: NameId,
    pub(crate) attr_unix_time: NameId,
}

impl OdfNames {
    fn intern(xot: &mut Xot) -> Self {
        let odf = xot.add_namespace(odf_ns::ODF);
        let omi = xot.add_namespace(odf_ns::OMI);
        OdfNames {
            omi,
            objects: xot.add_name_ns(odf_ns::OBJECTS, odf),
            object: xot.add_name_ns(odf_ns::OBJECT, odf),
            id: xot.add_name_ns(odf_ns::ID, odf),
            info_item: xot.add_name_ns(odf_ns::INFO_ITEM, odf),
            value: xot.add_name_ns(odf_ns::VALUE, odf),
            meta_data: xot.add_name_ns(odf_ns::META_DATA, odf),
            description: xot.add_name_ns(odf_ns::DESCRIPTION, odf),
            // Unprefixed attributes live in no namespace.
            attr_name: xot.add_name(odf_ns::ATTR_NAME),
            attr_type: xot.add_name(odf_ns::ATTR_TYPE),
            attr_unix_time: xot.add_name(odf_ns::ATTR_UNIX_TIME),
        }
    }
}

/// Owning arena for O-DF document trees plus the interned vocabulary.
///
/// Parsed documents and factory-built fragments share the arena; the caller
/// splices fragments into trees through [`OdfDom::xot_mut`].
pub struct OdfDom {
    pub(crate) xot: Xot,
    pub(crate) names: OdfNames,
}

impl OdfDom {
    pub fn new() -> Self {
        let mut xot = Xot::new();
        let names = OdfNames::intern(&mut xot);
        OdfDom { xot, names }
    }

    /// Borrow the underlying tree arena.
    pub fn xot(&self) -> &Xot {
        &self.xot
    }

    /// Mutably borrow the underlying tree arena, e.g. to splice factory
    /// output into a parsed tree.
    pub fn xot_mut(&mut self) -> &mut Xot {
        &mut self.xot
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, node: Node) -> String {
        self.xot
            .descendants(node)
            .filter_map(|descendant| self.xot.text_str(descendant))
            .collect()
    }

    /// Local element name, `None` for non-element nodes.
    pub(crate) fn local_name(&self, node: Node) -> Option<&str> {
        let element = self.xot.element(node)?;
        Some(self.xot.name_ns_str(element.name()).0)
    }

    /// Top of the tree the node belongs to (the document node for parsed
    /// trees, the fragment root for factory output).
    pub(crate) fn tree_root(&self, node: Node) -> Node {
        let mut current = node;
        while let Some(parent) = self.xot.parent(current) {
            current = parent;
        }
        current
    }
}

impl Default for OdfDom {
    fn default() -> Self {
        Self::new()
    }
}
