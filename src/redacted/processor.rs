//! File processing API for the redacted format
//!
//! This module provides an extensible API for processing redacted files with different
//! stages (token, ast) and formats (simple, json, tag, treeviz).
//!
//! A processing spec is written `<stage>-<format>`:
//!
//! | spec               | output                                         |
//! |--------------------|------------------------------------------------|
//! | `token-simple`     | one token per line                             |
//! | `token-json`       | the token sequence as JSON                     |
//! | `token-raw-simple` | one token per line with its byte range         |
//! | `ast-json`         | the document tree as JSON                      |
//! | `ast-tag`          | XML-like tag nesting                           |
//! | `ast-treeviz`      | box-drawing outline                            |
//!
//! # Sample Sources
//!
//! The `redacted_sources` module provides access to verified sample reports for testing.
//! Tests should read these instead of inlining report text, so that a vocabulary change
//! only needs the samples updated.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use redacted::redacted::processor::redacted_sources::RedactedSources;
//!
//! let content = RedactedSources::get_string("010-conditional.redacted")?;
//! let doc = RedactedSources::get_document("020-mixed-body.redacted")?;
//! let outline = RedactedSources::get_processed("020-mixed-body.redacted", "ast-treeviz")?;
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::redacted::lexer::{tokenize, tokenize_with_spans, Token};
use crate::redacted::parser::{parse_document, serialize_ast_tag, to_treeviz_str};

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    RawSimple,
    AstTag,
    AstTreeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "raw-simple" => OutputFormat::RawSimple,
            "tag" => OutputFormat::AstTag,
            "treeviz" => OutputFormat::AstTreeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Ast, OutputFormat::Simple | OutputFormat::RawSimple) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for AST stage (only 'json', 'tag' and 'treeviz' are supported)",
                    format
                )))
            }
            (ProcessingStage::Token, OutputFormat::AstTag) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'tag' only works with AST stage".to_string(),
                ))
            }
            (ProcessingStage::Token, OutputFormat::AstTreeviz) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'treeviz' only works with AST stage".to_string(),
                ))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::RawSimple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::AstTag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::AstTreeviz,
            },
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::RawSimple => "raw-simple",
            OutputFormat::AstTag => "tag",
            OutputFormat::AstTreeviz => "treeviz",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    ParseFailed(String),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::ParseFailed(msg) => write!(f, "Failed to parse document: {}", msg),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Process report text according to the given specification
pub fn process_source(content: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    debug!(%spec, bytes = content.len(), "processing source");
    match spec.stage {
        ProcessingStage::Token => match spec.format {
            OutputFormat::RawSimple => Ok(format_spanned_tokens(&tokenize_with_spans(content))),
            _ => format_tokens(&tokenize(content), &spec.format),
        },
        ProcessingStage::Ast => {
            let doc =
                parse_document(content).map_err(|e| ProcessingError::ParseFailed(e.to_string()))?;

            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::AstTag => Ok(serialize_ast_tag(&doc)),
                OutputFormat::AstTreeviz => Ok(to_treeviz_str(&doc)),
                _ => Err(ProcessingError::InvalidFormatType(
                    "Only ast-json, ast-tag and ast-treeviz formats are supported for AST stage"
                        .to_string(),
                )),
            }
        }
    }
}

/// Process a redacted file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}

/// Format tokens according to the specified format
pub fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple | OutputFormat::RawSimple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.describe());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::AstTag => Err(ProcessingError::InvalidFormatType(
            "ast-tag format only works with ast stage".to_string(),
        )),
        OutputFormat::AstTreeviz => Err(ProcessingError::InvalidFormatType(
            "ast-treeviz format only works with ast stage".to_string(),
        )),
    }
}

fn format_spanned_tokens(tokens: &[(Token, std::ops::Range<usize>)]) -> String {
    let mut result = String::new();
    for (token, span) in tokens {
        result.push_str(&format!("{}..{} {}\n", span.start, span.end, token.describe()));
    }
    result
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}

/// Sample sources module for accessing verified redacted test files
pub mod redacted_sources {
    use super::*;
    use crate::redacted::ast::Document;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-header-only.redacted",
        "010-conditional.redacted",
        "020-mixed-body.redacted",
        "030-missing-header.redacted",
        "040-prose-notation.redacted",
    ];

    /// Main interface for accessing redacted sample files
    pub struct RedactedSources;

    impl RedactedSources {
        /// Get the path to the samples directory
        fn samples_dir() -> &'static str {
            concat!(env!("CARGO_MANIFEST_DIR"), "/samples")
        }

        /// Get the full path to a sample file
        pub fn sample_path(filename: &str) -> String {
            format!("{}/{}", Self::samples_dir(), filename)
        }

        /// Validate that a sample file exists and is available
        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let path = Self::sample_path(filename);
            fs::read_to_string(&path)
                .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))
        }

        /// Get sample content as tokens
        pub fn get_tokens(filename: &str) -> Result<Vec<Token>, ProcessingError> {
            Ok(tokenize(&Self::get_string(filename)?))
        }

        /// Get sample content parsed into a document
        pub fn get_document(filename: &str) -> Result<Document, ProcessingError> {
            parse_document(&Self::get_string(filename)?)
                .map_err(|e| ProcessingError::ParseFailed(e.to_string()))
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            let spec = ProcessingSpec::from_string(format)?;
            process_source(&Self::get_string(filename)?, &spec)
        }

        /// List all available sample files
        pub fn list() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

}
