//! AST traits - Common interfaces for uniform node access
//!
//! The serializers walk the tree through this trait only, so adding a node kind means
//! implementing it here rather than teaching every format about the new variant.

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Direct child nodes, in source order
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
}
