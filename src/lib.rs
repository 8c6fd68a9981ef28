//! O-MI/O-DF document model facade.
//!
//! Re-exports the workspace crates: `odf-dom` for parsing, constructing,
//! and addressing O-DF trees, and `odf-ns` (as [`ns`]) for the fixed
//! namespace table and wire-format names.
//!
//! ```
//! use omi_odf::OdfDom;
//!
//! let mut dom = OdfDom::new();
//! let object = dom.create_odf_object("House").expect("build object");
//! assert_eq!(dom.get_odf_id(object).as_deref(), Some("House"));
//! ```

pub use odf_dom::{Node, OdfDom, OdfError, OdfKind, ValueSpec};
pub use odf_ns as ns;
