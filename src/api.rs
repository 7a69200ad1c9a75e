//! Pure processing pipeline.
//!
//! Functions here take structured input and return strings or structured
//! errors; no I/O, process exits, or terminal handling. The CLI is a thin
//! wrapper over [`process`].

use serde_json::json;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;
use crate::lexer::tokenize;
use crate::model::convert;
use crate::parser::{parse, ParseOptions, Resolver};
use crate::source::Source;
use crate::validate::{validate, RULES};

/// Which pipeline stage to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The raw token stream.
    Tokens,
    /// The parsed document.
    Ast,
    /// The validated, converted semantic model (the default).
    Model,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokens" => Ok(OutputFormat::Tokens),
            "ast" => Ok(OutputFormat::Ast),
            "model" => Ok(OutputFormat::Model),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessArgs {
    pub content: String,
    /// Source name passed to the resolver as `from`; empty for the root.
    pub source_name: String,
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug)]
pub enum ProcessError {
    Syntax(Error),
    Validation(Vec<Error>),
    Conversion(Vec<Error>),
    Serialization(String),
}

impl ProcessError {
    /// Flattens into the error list serialized on stderr.
    pub fn errors(&self) -> Vec<Error> {
        match self {
            ProcessError::Syntax(error) => vec![error.clone()],
            ProcessError::Validation(errors) => errors.clone(),
            ProcessError::Conversion(errors) => errors.clone(),
            ProcessError::Serialization(message) => vec![Error::new(message.clone())],
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Syntax(error) => write!(f, "Syntax error: {}", error),
            ProcessError::Validation(errors) => {
                write!(f, "Validation failed with {} error(s)", errors.len())
            }
            ProcessError::Conversion(errors) => {
                write!(f, "Conversion failed with {} error(s)", errors.len())
            }
            ProcessError::Serialization(message) => write!(f, "Serialization error: {}", message),
        }
    }
}

impl StdError for ProcessError {}

/// Runs the pipeline over one document and renders the requested stage as
/// JSON. The pipeline short-circuits at stage boundaries: a parse failure
/// skips validation, validation errors skip conversion.
pub fn process(args: &ProcessArgs, resolver: Option<&dyn Resolver>) -> Result<String, ProcessError> {
    let source = Source::new(args.source_name.clone(), args.content.clone().into_bytes());

    match args.format {
        OutputFormat::Tokens => {
            let tokens = tokenize(&Arc::new(source)).map_err(ProcessError::Syntax)?;
            to_json(
                &json!({ "source": args.source_name, "tokens": tokens }),
                args.pretty,
            )
        }
        OutputFormat::Ast => {
            let document = parse_source(source, resolver)?;
            to_json(
                &json!({ "source": args.source_name, "document": document }),
                args.pretty,
            )
        }
        OutputFormat::Model => {
            let document = parse_source(source, resolver)?;
            let errors = validate(&document, RULES);
            if !errors.is_empty() {
                return Err(ProcessError::Validation(errors));
            }
            let namespace = convert(&document).map_err(ProcessError::Conversion)?;
            to_json(&namespace, args.pretty)
        }
    }
}

fn parse_source(
    source: Source,
    resolver: Option<&dyn Resolver>,
) -> Result<crate::ast::Document, ProcessError> {
    let options = ParseOptions {
        resolver,
        ..Default::default()
    };
    parse(source, options).map_err(ProcessError::Syntax)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, ProcessError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|err| ProcessError::Serialization(err.to_string()))
}
