//! O-MI/O-DF namespace table and wire-format name constants.
//!
//! The table is process-wide immutable configuration: prefixes and URIs are
//! compile-time constants, never remapped at runtime.

/// O-MI protocol envelope namespace (`omi` prefix).
pub const OMI: &str = "omi.xsd";
/// O-DF data format namespace (`odf` prefix).
pub const ODF: &str = "odf.xsd";
/// XML Schema instance namespace (`xsi` prefix).
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// XML Schema namespace (`xs` prefix, same URI as `xsi` in the current table).
pub const XS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Root container element name (`Objects`).
pub const OBJECTS: &str = "Objects";
/// Named container element name (`Object`).
pub const OBJECT: &str = "Object";
/// Object identifier child element name (`id`).
pub const ID: &str = "id";
/// Leaf measurement point element name (`InfoItem`).
pub const INFO_ITEM: &str = "InfoItem";
/// Typed, timestamped reading element name (`value`).
pub const VALUE: &str = "value";
/// Auxiliary container element name (`MetaData`).
pub const META_DATA: &str = "MetaData";
/// Free-text annotation element name (`description`).
pub const DESCRIPTION: &str = "description";

/// InfoItem identifier attribute (`name`).
pub const ATTR_NAME: &str = "name";
/// Value type attribute (`type`), carries a qualified type name.
pub const ATTR_TYPE: &str = "type";
/// Value Unix-time attribute (`unixTime`).
pub const ATTR_UNIX_TIME: &str = "unixTime";

/// Resolve a namespace prefix to its URI.
///
/// Unknown prefixes (the empty prefix included) resolve to the O-DF entry
/// instead of failing, matching the behaviour callers rely on when querying
/// payload trees. A typo'd prefix therefore resolves silently; see DESIGN.md.
pub fn resolve(prefix: &str) -> &'static str {
    match prefix {
        "omi" => OMI,
        "odf" => ODF,
        "xsi" => XSI,
        "xs" => XS,
        _ => ODF,
    }
}

/// Reverse lookup: the canonical prefix for a namespace URI from the table.
///
/// `xsi` and `xs` share a URI; the `xsi` prefix wins.
pub fn prefix_for(uri: &str) -> Option<&'static str> {
    match uri {
        OMI => Some("omi"),
        ODF => Some("odf"),
        XSI => Some("xsi"),
        _ => None,
    }
}

/// Render a bare type name as the qualified form used by the Value `type`
/// attribute, e.g. `float` becomes `xs:float`.
pub fn qualified_type(name: &str) -> String {
    format!("xs:{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_prefixes_resolve() {
        assert_eq!(resolve("omi"), "omi.xsd");
        assert_eq!(resolve("odf"), "odf.xsd");
        assert_eq!(resolve("xsi"), XSI);
        assert_eq!(resolve("xs"), XSI);
    }

    #[test]
    fn unknown_prefix_falls_back_to_odf() {
        assert_eq!(resolve("bogus"), ODF);
        assert_eq!(resolve(""), ODF);
    }

    #[test]
    fn reverse_lookup_prefers_xsi() {
        assert_eq!(prefix_for(OMI), Some("omi"));
        assert_eq!(prefix_for(ODF), Some("odf"));
        assert_eq!(prefix_for(XSI), Some("xsi"));
        assert_eq!(prefix_for("urn:elsewhere"), None);
    }

    #[test]
    fn type_names_are_xs_qualified() {
        assert_eq!(qualified_type("float"), "xs:float");
        assert_eq!(qualified_type(""), "xs:");
    }
}
