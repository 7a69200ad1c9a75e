//! Apex IDL front end.
//!
//! Apex is a language-neutral interface definition language for declaring
//! namespaces, imports, aliases, enums, unions, types, interfaces,
//! operations, directives, and annotations. This crate implements the
//! front-end pipeline that turns Apex source text into a resolved semantic
//! model for code generators:
//!
//! ```text
//! Source text → Lexer → Parser → Validator → Converter → Namespace
//! ```
//!
//! Dataflow is linear and each stage returns errors as values:
//!
//! ```no_run
//! use apex::parser::{parse, ParseOptions};
//! use apex::validate::{validate, RULES};
//! use apex::model::convert;
//!
//! let document = parse("namespace \"example\"", ParseOptions::default())?;
//! let errors = validate(&document, RULES);
//! assert!(errors.is_empty());
//! let _namespace = convert(&document).expect("conversion");
//! # Ok::<(), apex::Error>(())
//! ```
//!
//! Imports suspend the parser on a host-provided [`parser::Resolver`]; the
//! rest of the pipeline is synchronous and owns no shared state, so
//! independent parses may run concurrently.

pub mod api;
pub mod ast;
pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod resolve;
pub mod source;
pub mod validate;

pub use error::Error;
pub use parser::{parse, parse_value, ParseOptions, Resolver};
pub use source::Source;
pub use validate::{validate, ValidationRule, RULES};
