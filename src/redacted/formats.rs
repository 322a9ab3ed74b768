//! Output format implementations for AST serialization
//!
//! - tag: XML-like nesting that mirrors the tree
//! - treeviz: a box-drawing outline for terminals
//!
//! Both walk the tree through [`AstNode`](crate::redacted::ast::AstNode) only.

pub mod tag;
pub mod treeviz;

pub use tag::serialize_document as serialize_ast_tag;
pub use treeviz::to_treeviz_str;
