//! operation variable descriptors
//!
//! only the base type name and list-ness of a variable matter to the
//! generated trimming code; non-null wrappers are looked through.

use graphql_parser::query::{Type, VariableDefinition};

/// a flattened operation variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDescriptor {
    pub name: String,
    /// innermost named type
    pub type_name: String,
    pub is_list: bool,
}

impl VariableDescriptor {
    /// typescript primitive for builtin scalar variables
    pub fn primitive(&self) -> Option<&'static str> {
        primitive_type(&self.type_name)
    }
}

/// describe a variable definition
pub fn describe(def: &VariableDefinition<'_, String>) -> VariableDescriptor {
    descend(&def.var_type, &def.name, false)
}

fn descend(ty: &Type<'_, String>, name: &str, is_list: bool) -> VariableDescriptor {
    match ty {
        Type::ListType(inner) => descend(inner, name, true),
        Type::NamedType(type_name) => VariableDescriptor {
            name: name.to_string(),
            type_name: type_name.clone(),
            is_list,
        },
        Type::NonNullType(inner) => descend(inner, name, is_list),
    }
}

/// builtin scalar to typescript primitive
pub fn primitive_type(type_name: &str) -> Option<&'static str> {
    match type_name {
        "String" | "ID" => Some("string"),
        "Int" | "Float" => Some("number"),
        "Boolean" => Some("boolean"),
        _ => None,
    }
}
