//! Constructors for well-formed O-DF subtrees.
//!
//! Every constructor allocates in the owning arena and returns an unattached
//! node; insertion into a tree is the caller's responsibility. Constructors
//! that perform tree edits return `Result`, the rest plain nodes.

use tracing::debug;

use crate::{Node, OdfDom, OdfError};

/// Text, type, and timestamp for one Value element.
///
/// `None` omits the corresponding text child or attribute entirely;
/// `Some("")` writes an empty one. The two are distinct on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSpec {
    /// Text content of the value.
    pub text: Option<String>,
    /// Bare type name, rendered as a qualified `xs:` type reference.
    pub value_type: Option<String>,
    /// Unix-time attribute value, written verbatim.
    pub unix_time: Option<String>,
}

impl ValueSpec {
    /// Value with text content only.
    pub fn text(text: impl Into<String>) -> Self {
        ValueSpec {
            text: Some(text.into()),
            ..ValueSpec::default()
        }
    }

    /// Attach a bare type name.
    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Attach a Unix-time stamp.
    pub fn with_unix_time(mut self, unix_time: impl Into<String>) -> Self {
        self.unix_time = Some(unix_time.into());
        self
    }
}

impl OdfDom {
    /// Empty `Objects` root container.
    pub fn create_odf_objects(&mut self) -> Node {
        self.xot.new_element(self.names.objects)
    }

    /// Empty `MetaData` container.
    pub fn create_odf_meta_data(&mut self) -> Node {
        self.xot.new_element(self.names.meta_data)
    }

    /// `description` annotation with an optional text child.
    pub fn create_odf_description(&mut self, text: Option<&str>) -> Result<Node, OdfError> {
        let description = self.xot.new_element(self.names.description);
        if let Some(text) = text {
            let text_node = self.xot.new_text(text);
            self.append(description, text_node)?;
        }
        Ok(description)
    }

    /// `value` leaf built from a [`ValueSpec`].
    pub fn create_odf_value(&mut self, spec: &ValueSpec) -> Result<Node, OdfError> {
        let value = self.xot.new_element(self.names.value);
        if let Some(text) = &spec.text {
            let text_node = self.xot.new_text(text);
            self.append(value, text_node)?;
        }
        if let Some(value_type) = &spec.value_type {
            self.xot
                .attributes_mut(value)
                .insert(self.names.attr_type, odf_ns::qualified_type(value_type));
        }
        if let Some(unix_time) = &spec.unix_time {
            self.xot
                .attributes_mut(value)
                .insert(self.names.attr_unix_time, unix_time.clone());
        }
        Ok(value)
    }

    /// `Object` container with its mandatory `id` child holding `id` as
    /// text, appended first.
    pub fn create_odf_object(&mut self, id: &str) -> Result<Node, OdfError> {
        let object = self.xot.new_element(self.names.object);
        let id_element = self.xot.new_element(self.names.id);
        let text_node = self.xot.new_text(id);
        self.append(id_element, text_node)?;
        self.append(object, id_element)?;
        Ok(object)
    }

    /// `InfoItem` leaf with its `name` attribute, one `value` child per
    /// entry of `values` in input order, and an optional description.
    ///
    /// The description, when given, ends up as the very first child: it is
    /// prepended after all values have been appended, so it precedes every
    /// value regardless of call order.
    pub fn create_odf_info_item(
        &mut self,
        name: &str,
        values: &[ValueSpec],
        description: Option<&str>,
    ) -> Result<Node, OdfError> {
        let item = self.xot.new_element(self.names.info_item);
        self.xot
            .attributes_mut(item)
            .insert(self.names.attr_name, name.to_string());
        for spec in values {
            let value = self.create_odf_value(spec)?;
            self.append(item, value)?;
        }
        if let Some(text) = description {
            let description = self.create_odf_description(Some(text))?;
            self.prepend(item, description)?;
        }
        debug!(name = %name, values = values.len(), "built InfoItem subtree");
        Ok(item)
    }

    /// Element with the given local name in the O-MI envelope namespace.
    pub fn create_omi_element(&mut self, name: &str) -> Node {
        let name_id = self.xot.add_name_ns(name, self.names.omi);
        self.xot.new_element(name_id)
    }

    fn append(&mut self, parent: Node, child: Node) -> Result<(), OdfError> {
        self.xot
            .append(parent, child)
            .map_err(|err| OdfError::Tree(err.to_string()))
    }

    fn prepend(&mut self, parent: Node, child: Node) -> Result<(), OdfError> {
        self.xot
            .prepend(parent, child)
            .map_err(|err| OdfError::Tree(err.to_string()))
    }
}
