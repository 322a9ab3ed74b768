//! AST definitions for the redacted format
//!
//! Nodes are built bottom-up during a single parse pass and never mutated afterwards.
//! Every node owns its children; there is no sharing between subtrees.
//!
//!     Document
//!     └─ BodyPart*           Block | Label
//!        └─ Statement*       Assignment | Increment | GoTo | Conditional | Expression | Comment | Invalid
//!           └─ Expression    Variable | Add | Constant | FunctionCall | Square

pub mod document;
pub mod expression;
pub mod label;
pub mod statement;
pub mod traits;

pub use document::{BodyPart, Document};
pub use expression::{Equality, Expression};
pub use label::Label;
pub use statement::{Block, Statement};
pub use traits::AstNode;

pub use crate::redacted::lexer::ObjectClass;
