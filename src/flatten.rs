//! flattened schema types
//!
//! schema field types nest list and non-null wrappers around a named type.
//! [`FlattenedType`] collapses that nesting into a single descriptor.

use crate::error::{Error, Result};
use crate::schema::{Schema, TypeCategory};
use graphql_parser::schema::Type;

/// a schema type reference with its wrappers collapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedType {
    /// innermost named type
    pub base_name: String,
    /// the named type itself is non-null
    pub is_non_null: bool,
    pub is_list: bool,
    /// the list wrapper is non-null
    pub is_list_non_null: bool,
    pub category: TypeCategory,
}

#[derive(Default)]
struct Wrappers {
    is_non_null: bool,
    is_list: bool,
    is_list_non_null: bool,
}

impl FlattenedType {
    /// flatten `ty`, resolving its category against `schema`
    pub fn new(ty: &Type<'_, String>, schema: &Schema<'_>) -> Result<Self> {
        flatten_with(ty, schema, Wrappers::default())
    }

    /// scalars and enums
    pub fn is_simple(&self) -> bool {
        self.category.is_simple()
    }

    /// rebuild a type reference carrying the same wrappers
    pub fn to_type<'a>(&self) -> Type<'a, String> {
        let mut ty = Type::NamedType(self.base_name.clone());
        if self.is_non_null {
            ty = Type::NonNullType(Box::new(ty));
        }
        if self.is_list {
            ty = Type::ListType(Box::new(ty));
            if self.is_list_non_null {
                ty = Type::NonNullType(Box::new(ty));
            }
        }
        ty
    }
}

fn flatten_with(
    ty: &Type<'_, String>,
    schema: &Schema<'_>,
    mut wrappers: Wrappers,
) -> Result<FlattenedType> {
    match ty {
        Type::ListType(inner) => {
            wrappers.is_list = true;
            flatten_with(inner, schema, wrappers)
        }
        Type::NonNullType(inner) => {
            // a non-null around a list marks the list, otherwise the named type
            if matches!(**inner, Type::ListType(_)) {
                wrappers.is_list_non_null = true;
            } else {
                wrappers.is_non_null = true;
            }
            flatten_with(inner, schema, wrappers)
        }
        Type::NamedType(name) => {
            let category = schema
                .category(name)
                .ok_or_else(|| Error::UnknownTypeKind { name: name.clone() })?;
            Ok(FlattenedType {
                base_name: name.clone(),
                is_non_null: wrappers.is_non_null,
                is_list: wrappers.is_list,
                is_list_non_null: wrappers.is_list_non_null,
                category,
            })
        }
    }
}
