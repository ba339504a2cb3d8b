//! input shape map
//!
//! the generated module embeds, as plain json, the declared fields of every
//! input object type. the runtime `trimInput` routine uses it to drop fields
//! the schema does not accept before a request is sent.

use crate::error::{Error, Result};
use crate::schema::{Schema, TypeCategory};
use graphql_parser::schema::{InputValue, Type};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// one declared field of an input object type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldInfo {
    pub name: String,
    pub type_name: String,
    pub is_list: bool,
    pub is_non_null: bool,
}

/// an input object type and its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTypeInfo {
    pub name: String,
    pub fields: Vec<InputFieldInfo>,
}

/// input type name to its shape, in schema declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputTypeInfoMap(IndexMap<String, InputTypeInfo>);

impl InputTypeInfoMap {
    /// collect the shape of every input object type in `schema`
    pub fn build(schema: &Schema<'_>) -> Result<Self> {
        let mut map = IndexMap::new();
        for input in schema.input_objects() {
            let fields = input
                .fields
                .iter()
                .map(|field| input_field_info(&input.name, field, schema))
                .collect::<Result<Vec<_>>>()?;
            tracing::debug!(input = %input.name, fields = fields.len(), "collected input shape");
            map.insert(
                input.name.clone(),
                InputTypeInfo {
                    name: input.name.clone(),
                    fields,
                },
            );
        }
        Ok(Self(map))
    }

    pub fn get(&self, name: &str) -> Option<&InputTypeInfo> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputTypeInfo> {
        self.0.values()
    }

    /// json literal with two-space indentation, as embedded in generated code
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn input_field_info(
    input: &str,
    field: &InputValue<'_, String>,
    schema: &Schema<'_>,
) -> Result<InputFieldInfo> {
    unwrap_input_type(input, field, &field.value_type, schema, false, false)
}

fn unwrap_input_type(
    input: &str,
    field: &InputValue<'_, String>,
    ty: &Type<'_, String>,
    schema: &Schema<'_>,
    is_list: bool,
    is_non_null: bool,
) -> Result<InputFieldInfo> {
    match ty {
        Type::NonNullType(inner) => unwrap_input_type(input, field, inner, schema, is_list, true),
        Type::ListType(inner) => unwrap_input_type(input, field, inner, schema, true, is_non_null),
        Type::NamedType(type_name) => match schema.category(type_name) {
            Some(TypeCategory::Scalar | TypeCategory::Enum | TypeCategory::Input) => {
                Ok(InputFieldInfo {
                    name: field.name.clone(),
                    type_name: type_name.clone(),
                    is_list,
                    is_non_null,
                })
            }
            _ => Err(Error::UnresolvableInputFieldType {
                input: input.to_string(),
                field: field.name.clone(),
                type_name: type_name.clone(),
            }),
        },
    }
}
