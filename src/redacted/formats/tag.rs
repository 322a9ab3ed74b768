//! XML-like AST tag serialization
//!
//! Serializes AST nodes to an XML-like format that directly reflects the AST structure.
//!
//! ## Format
//!
//! - Node type → tag name, in kebab case (`FunctionCall` → `function-call`)
//! - Display label → text content
//! - Children → nested in a `<children>` tag
//!
//! ## Example
//!
//! ```text
//! <document>SCP-000 (Safe)<children>
//!   <block>1 statement<children>
//!     <increment>x++</increment>
//!   </children></block>
//! </children></document>
//! ```

use crate::redacted::ast::{AstNode, Document};

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    serialize_node(doc, 0, &mut result);
    result
}

/// Serialize a node (recursive)
fn serialize_node(node: &dyn AstNode, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = tag_name(node.node_type());
    let children = node.children();

    output.push_str(&format!("{}<{}>", indent, tag));
    output.push_str(&escape_xml(&node.display_label()));

    if children.is_empty() {
        output.push_str(&format!("</{}>\n", tag));
    } else {
        output.push_str("<children>\n");
        for child in children {
            serialize_node(child, indent_level + 1, output);
        }
        output.push_str(&format!("{}</children></{}>\n", indent, tag));
    }
}

/// `ExpressionStatement` → `expression-statement`
fn tag_name(node_type: &str) -> String {
    let mut name = String::with_capacity(node_type.len() + 4);
    for (i, c) in node_type.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
