//! Treeviz formatter for AST nodes

use crate::redacted::ast::{AstNode, Document};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    append_children(&mut result, &doc.children(), "");
    result
}

fn append_node(result: &mut String, node: &dyn AstNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 30);

    if display_label.is_empty() {
        result.push_str(&format!("{}{} {}\n", prefix, connector, node.node_type()));
    } else {
        result.push_str(&format!(
            "{}{} {}: {}\n",
            prefix,
            connector,
            node.node_type(),
            display_label
        ));
    }

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[&dyn AstNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, *child, prefix, is_last);
    }
}
