//! The individual validation rules, one per file.

mod camel_case_directive_names;
mod known_types;
mod namespace_first;
mod pascal_case_type_names;
mod single_namespace_defined;
mod unique_directive_names;
mod unique_enum_value_indexes;
mod unique_enum_value_names;
mod unique_function_names;
mod unique_object_names;
mod unique_operation_names;
mod unique_parameter_names;
mod unique_type_field_names;
mod valid_annotation_arguments;
mod valid_annotation_locations;
mod valid_directive_locations;
mod valid_directive_parameter_types;
mod valid_directive_requires;
mod valid_enum_value_indexes;

pub use camel_case_directive_names::camel_case_directive_names;
pub use known_types::known_types;
pub use namespace_first::namespace_first;
pub use pascal_case_type_names::pascal_case_type_names;
pub use single_namespace_defined::single_namespace_defined;
pub use unique_directive_names::unique_directive_names;
pub use unique_enum_value_indexes::unique_enum_value_indexes;
pub use unique_enum_value_names::unique_enum_value_names;
pub use unique_function_names::unique_function_names;
pub use unique_object_names::unique_object_names;
pub use unique_operation_names::unique_operation_names;
pub use unique_parameter_names::unique_parameter_names;
pub use unique_type_field_names::unique_type_field_names;
pub use valid_annotation_arguments::valid_annotation_arguments;
pub use valid_annotation_locations::valid_annotation_locations;
pub use valid_directive_locations::valid_directive_locations;
pub use valid_directive_parameter_types::valid_directive_parameter_types;
pub use valid_directive_requires::valid_directive_requires;
pub use valid_enum_value_indexes::valid_enum_value_indexes;
