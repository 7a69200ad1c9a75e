//! Constant value literals.

use serde::Serialize;
use std::fmt;

use crate::ast::nodes::{Location, Name};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntValue {
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatValue {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanValue {
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A bare identifier in value position, referencing an enum member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListValue {
    pub values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A closed sum over every literal form a default value or annotation
/// argument can take.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Bool(BooleanValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            Value::Int(v) => v.loc.as_ref(),
            Value::Float(v) => v.loc.as_ref(),
            Value::String(v) => v.loc.as_ref(),
            Value::Bool(v) => v.loc.as_ref(),
            Value::Enum(v) => v.loc.as_ref(),
            Value::List(v) => v.loc.as_ref(),
            Value::Object(v) => v.loc.as_ref(),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the literal roughly as it appeared in source, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v.value),
            Value::Float(v) => write!(f, "{}", v.value),
            Value::String(v) => write!(f, "{:?}", v.value),
            Value::Bool(v) => write!(f, "{}", v.value),
            Value::Enum(v) => write!(f, "{}", v.value),
            Value::List(v) => {
                write!(f, "[")?;
                for (i, value) in v.values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Value::Object(v) => {
                write!(f, "{{")?;
                for (i, field) in v.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name.value, field.value)?;
                }
                write!(f, "}}")
            }
        }
    }
}
