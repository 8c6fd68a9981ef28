//! Namespace-aware path queries over document trees.
//!
//! Only the patterns the document layer actually needs are supported:
//! `/`-separated child steps with optional namespace prefixes, a leading
//! `/` for queries against the owning tree's root, and `//` to search
//! descendants instead of direct children. General XPath semantics are out
//! of scope.

use crate::{Node, OdfDom};

impl OdfDom {
    /// Evaluate a path expression against a node.
    ///
    /// Results are materialized eagerly into a document-ordered `Vec`; a
    /// query that matches nothing produces an empty vector, never an error.
    ///
    /// Each name test is `prefix:local`, `local`, or `*`. Prefixes (the
    /// empty one included) are resolved through the fixed namespace table,
    /// so an unknown prefix falls back to the O-DF namespace. A test matches
    /// an element whose local name matches and whose namespace equals the
    /// resolved URI or is empty (unqualified documents).
    pub fn evaluate(&self, node: Node, expression: &str) -> Vec<Node> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Vec::new();
        }
        // Absolute expressions run against the owning tree's root.
        let (start, steps) = match expression.strip_prefix('/') {
            Some(rest) => (self.tree_root(node), rest),
            None => (node, expression.strip_prefix("./").unwrap_or(expression)),
        };
        let mut current = vec![start];
        let mut descend = false;
        for step in steps.split('/') {
            if step.is_empty() {
                // A `//` separator: the next name test searches descendants.
                descend = true;
                continue;
            }
            if step == "." {
                continue;
            }
            let (prefix, local) = match step.split_once(':') {
                Some((prefix, local)) => (prefix, local),
                None => ("", step),
            };
            let uri = odf_ns::resolve(prefix);
            let mut next: Vec<Node> = Vec::new();
            for context in current {
                if descend {
                    for candidate in self.xot.descendants(context).skip(1) {
                        if self.matches_name(candidate, local, uri) && !next.contains(&candidate) {
                            next.push(candidate);
                        }
                    }
                } else {
                    for candidate in self.xot.children(context) {
                        if self.matches_name(candidate, local, uri) && !next.contains(&candidate) {
                            next.push(candidate);
                        }
                    }
                }
            }
            current = next;
            descend = false;
            if current.is_empty() {
                break;
            }
        }
        current
    }

    fn matches_name(&self, node: Node, local: &str, uri: &str) -> bool {
        let Some(element) = self.xot.element(node) else {
            return false;
        };
        let (name, namespace) = self.xot.name_ns_str(element.name());
        (local == "*" || name == local) && (namespace.is_empty() || namespace == uri)
    }
}
