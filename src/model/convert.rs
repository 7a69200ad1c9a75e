//! Lowering from the AST to the semantic model.
//!
//! One walk over the document: classify top-level definitions, build the
//! name→kind index (including imported names), then reify every reference.
//! Unknown names and a missing namespace are conversion errors, collected
//! and returned as a batch.

use std::collections::HashMap;
use std::str::FromStr;

use crate::ast;
use crate::error::Error;
use crate::model::{
    Alias, Annotation, Argument, Directive, DirectiveLocation, DirectiveRequire, Enum, EnumValue,
    Field, Import, ImportRef, Interface, Kind, List, ListValue, Map, Named, Namespace,
    ObjectField, ObjectValue, Operation, Optional, Parameter, Reference, Scalar, Stream, Type,
    TypeRef, Union, Value,
};

/// Converts a validated document into a [`Namespace`].
pub fn convert(document: &ast::Document) -> Result<Namespace, Vec<Error>> {
    Converter::default().convert(document)
}

fn scalar_of(name: &str) -> Option<Scalar> {
    match name {
        "string" => Some(Scalar::String),
        "bool" => Some(Scalar::Bool),
        "i8" => Some(Scalar::I8),
        "i16" => Some(Scalar::I16),
        "i32" => Some(Scalar::I32),
        "i64" => Some(Scalar::I64),
        "u8" => Some(Scalar::U8),
        "u16" => Some(Scalar::U16),
        "u32" => Some(Scalar::U32),
        "u64" => Some(Scalar::U64),
        "f32" => Some(Scalar::F32),
        "f64" => Some(Scalar::F64),
        "bytes" => Some(Scalar::Bytes),
        "datetime" => Some(Scalar::Datetime),
        "any" => Some(Scalar::Any),
        "raw" => Some(Scalar::Raw),
        _ => None,
    }
}

#[derive(Default)]
struct Converter {
    named: HashMap<String, Named>,
    errors: Vec<Error>,
}

impl Converter {
    fn convert(mut self, document: &ast::Document) -> Result<Namespace, Vec<Error>> {
        let mut namespace_def = None;
        let mut imports = Vec::new();
        let mut directives = Vec::new();
        let mut aliases = Vec::new();
        let mut unions = Vec::new();
        let mut enums = Vec::new();
        let mut functions = Vec::new();
        let mut types = Vec::new();
        let mut interfaces = Vec::new();

        for definition in document.definitions.iter().chain(&document.imported) {
            self.index(definition);
        }
        for definition in &document.definitions {
            match definition {
                ast::Definition::Namespace(d) => namespace_def = Some(d),
                ast::Definition::Import(d) => imports.push(d),
                ast::Definition::Directive(d) => directives.push(d),
                ast::Definition::Alias(d) => aliases.push(d),
                ast::Definition::Union(d) => unions.push(d),
                ast::Definition::Enum(d) => enums.push(d),
                ast::Definition::Function(d) => functions.push(d),
                ast::Definition::Type(d) => types.push(d),
                ast::Definition::Interface(d) => interfaces.push(d),
            }
        }

        let Some(ns) = namespace_def else {
            return Err(vec![Error::new("no namespace found")]);
        };

        let namespace = Namespace {
            name: ns.name.value.clone(),
            description: description_of(&ns.description),
            annotations: self.convert_annotations(&ns.annotations),
            imports: imports.iter().map(|i| self.convert_import(i)).collect(),
            directives: directives
                .iter()
                .map(|d| self.convert_directive(d))
                .collect(),
            aliases: aliases.iter().map(|a| self.convert_alias(a)).collect(),
            enums: enums.iter().map(|e| self.convert_enum(e)).collect(),
            functions: functions
                .iter()
                .map(|f| self.convert_operation(f))
                .collect(),
            interfaces: interfaces
                .iter()
                .map(|i| self.convert_interface(i))
                .collect(),
            types: types.iter().map(|t| self.convert_type(t)).collect(),
            unions: unions.iter().map(|u| self.convert_union(u)).collect(),
        };

        if self.errors.is_empty() {
            Ok(namespace)
        } else {
            Err(self.errors)
        }
    }

    fn index(&mut self, definition: &ast::Definition) {
        let (kind, name) = match definition {
            ast::Definition::Alias(d) => (Kind::Alias, &d.name),
            ast::Definition::Union(d) => (Kind::Union, &d.name),
            ast::Definition::Enum(d) => (Kind::Enum, &d.name),
            ast::Definition::Type(d) => (Kind::Type, &d.name),
            _ => return,
        };
        self.named.insert(
            name.value.clone(),
            Named {
                kind,
                name: name.value.clone(),
            },
        );
    }

    fn convert_interface(&mut self, item: &ast::InterfaceDefinition) -> Interface {
        Interface {
            description: description_of(&item.description),
            operations: item
                .operations
                .iter()
                .map(|o| self.convert_operation(o))
                .collect(),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_operation(&mut self, item: &ast::OperationDefinition) -> Operation {
        let mut parameters: Vec<Parameter> = item
            .parameters
            .iter()
            .map(|p| self.convert_parameter(p))
            .collect();
        let unary = if item.unary && parameters.len() == 1 {
            Some(Box::new(parameters.remove(0)))
        } else {
            None
        };
        Operation {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            parameters,
            unary,
            returns: self.convert_return(&item.ty),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_type(&mut self, item: &ast::TypeDefinition) -> Type {
        Type {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            fields: item.fields.iter().map(|f| self.convert_field(f)).collect(),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_field(&mut self, item: &ast::FieldDefinition) -> Field {
        Field {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            ty: self.convert_type_ref(&item.ty),
            default_value: item.default.as_ref().map(|v| self.convert_value(v)),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_parameter(&mut self, item: &ast::ParameterDefinition) -> Parameter {
        Parameter {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            ty: self.convert_type_ref(&item.ty),
            default_value: item.default.as_ref().map(|v| self.convert_value(v)),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_alias(&mut self, item: &ast::AliasDefinition) -> Alias {
        Alias {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            ty: self.convert_type_ref(&item.ty),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_union(&mut self, item: &ast::UnionDefinition) -> Union {
        Union {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            types: item
                .members
                .iter()
                .map(|m| self.convert_type_ref(m))
                .collect(),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_enum(&mut self, item: &ast::EnumDefinition) -> Enum {
        Enum {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            values: item
                .values
                .iter()
                .map(|v| EnumValue {
                    name: v.name.value.clone(),
                    description: description_of(&v.description),
                    index: v.index.value.max(0) as u64,
                    display: v.display.as_ref().map(|d| d.value.clone()),
                    annotations: self.convert_annotations(&v.annotations),
                })
                .collect(),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_directive(&mut self, item: &ast::DirectiveDefinition) -> Directive {
        Directive {
            name: item.name.value.clone(),
            description: description_of(&item.description),
            parameters: item
                .parameters
                .iter()
                .map(|p| self.convert_parameter(p))
                .collect(),
            locations: self.convert_directive_locations(&item.locations),
            require: item
                .requires
                .iter()
                .map(|r| DirectiveRequire {
                    directive: r.directive.value.clone(),
                    locations: self.convert_directive_locations(&r.locations),
                })
                .collect(),
        }
    }

    fn convert_directive_locations(&mut self, items: &[ast::Name]) -> Vec<DirectiveLocation> {
        let mut locations = Vec::with_capacity(items.len());
        for item in items {
            match DirectiveLocation::from_str(&item.value) {
                Ok(location) => locations.push(location),
                Err(message) => self
                    .errors
                    .push(Error::with_location(message, item.loc.as_ref())),
            }
        }
        locations
    }

    fn convert_import(&mut self, item: &ast::ImportDefinition) -> Import {
        Import {
            description: description_of(&item.description),
            all: item.all,
            names: item
                .names
                .iter()
                .map(|n| ImportRef {
                    name: n.name.value.clone(),
                    alias: n.alias.as_ref().map(|a| a.value.clone()),
                })
                .collect(),
            from: item.from.value.clone(),
            annotations: self.convert_annotations(&item.annotations),
        }
    }

    fn convert_annotations(&mut self, items: &[ast::Annotation]) -> Vec<Annotation> {
        items
            .iter()
            .map(|item| Annotation {
                name: item.name.value.clone(),
                arguments: item
                    .arguments
                    .iter()
                    .map(|a| Argument {
                        name: a.name.value.clone(),
                        value: self.convert_value(&a.value),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Operations declaring `void` produce no return type.
    fn convert_return(&mut self, ty: &ast::Type) -> Option<TypeRef> {
        if ty.is_named("void") {
            return None;
        }
        Some(self.convert_type_ref(ty))
    }

    fn convert_type_ref(&mut self, ty: &ast::Type) -> TypeRef {
        match ty {
            ast::Type::Named(named) => {
                let name = named.name.value.as_str();
                if let Some(scalar) = scalar_of(name) {
                    TypeRef::Scalar(scalar)
                } else if let Some(known) = self.named.get(name) {
                    TypeRef::Named(known.clone())
                } else {
                    self.errors.push(Error::with_location(
                        format!("unknown type {}", name),
                        named.loc.as_ref(),
                    ));
                    TypeRef::Named(Named {
                        kind: Kind::Type,
                        name: name.to_string(),
                    })
                }
            }
            ast::Type::List(list) => TypeRef::List(Box::new(List {
                ty: self.convert_type_ref(&list.ty),
            })),
            ast::Type::Map(map) => TypeRef::Map(Box::new(Map {
                key_type: self.convert_type_ref(&map.key_type),
                value_type: self.convert_type_ref(&map.value_type),
            })),
            ast::Type::Optional(optional) => TypeRef::Optional(Box::new(Optional {
                ty: self.convert_type_ref(&optional.ty),
            })),
            ast::Type::Stream(stream) => TypeRef::Stream(Box::new(Stream {
                ty: self.convert_type_ref(&stream.ty),
            })),
        }
    }

    fn convert_value(&mut self, value: &ast::Value) -> Value {
        match value {
            ast::Value::Bool(v) => Value::Bool(v.value),
            ast::Value::Int(v) => Value::I64(v.value),
            ast::Value::Float(v) => Value::F64(v.value),
            ast::Value::String(v) => Value::String(v.value.clone()),
            ast::Value::Enum(v) => Value::Reference(Reference {
                name: v.value.clone(),
            }),
            ast::Value::List(v) => Value::ListValue(ListValue {
                values: v.values.iter().map(|v| self.convert_value(v)).collect(),
            }),
            ast::Value::Object(v) => Value::ObjectValue(ObjectValue {
                fields: v
                    .fields
                    .iter()
                    .map(|f| ObjectField {
                        name: f.name.value.clone(),
                        value: self.convert_value(&f.value),
                    })
                    .collect(),
            }),
        }
    }
}

fn description_of(value: &Option<ast::StringValue>) -> Option<String> {
    value.as_ref().map(|v| v.value.clone())
}
