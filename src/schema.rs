//! schema context
//!
//! an index over one or more parsed schema documents: named types in
//! declaration order, root operation types, and category lookups.

use crate::error::{Error, Result};
use graphql_parser::schema::{
    Definition, Document, Field, InputObjectType, TypeDefinition, TypeExtension,
};
use indexmap::IndexMap;

/// scalars every schema has, declared or not
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// the six categories a named graphql type can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    Input,
}

impl TypeCategory {
    /// category of a schema type definition
    pub fn of(def: &TypeDefinition<'_, String>) -> Self {
        match def {
            TypeDefinition::Scalar(_) => TypeCategory::Scalar,
            TypeDefinition::Object(_) => TypeCategory::Object,
            TypeDefinition::Interface(_) => TypeCategory::Interface,
            TypeDefinition::Union(_) => TypeCategory::Union,
            TypeDefinition::Enum(_) => TypeCategory::Enum,
            TypeDefinition::InputObject(_) => TypeCategory::Input,
        }
    }

    /// scalars and enums are sent and received as plain values
    pub fn is_simple(self) -> bool {
        matches!(self, TypeCategory::Scalar | TypeCategory::Enum)
    }
}

/// graphql operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// keyword as written in documents
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// keyword with a leading capital, used as a name suffix
    pub fn capitalized(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

/// indexed view of the schema documents
#[derive(Debug, Clone)]
pub struct Schema<'a> {
    types: IndexMap<String, TypeDefinition<'a, String>>,
    query_type: String,
    mutation_type: String,
    subscription_type: String,
}

impl<'a> Schema<'a> {
    /// index the definitions of every document, in the order given
    pub fn new(docs: &[Document<'a, String>]) -> Self {
        let mut types = IndexMap::new();
        let mut extensions = Vec::new();
        let mut query_type = OperationKind::Query.capitalized().to_string();
        let mut mutation_type = OperationKind::Mutation.capitalized().to_string();
        let mut subscription_type = OperationKind::Subscription.capitalized().to_string();

        for def in docs.iter().flat_map(|doc| &doc.definitions) {
            match def {
                Definition::TypeDefinition(ty) => {
                    types.insert(type_name(ty).to_string(), ty.clone());
                }
                Definition::TypeExtension(ext) => extensions.push(ext),
                Definition::SchemaDefinition(schema) => {
                    if let Some(query) = &schema.query {
                        query_type = query.clone();
                    }
                    if let Some(mutation) = &schema.mutation {
                        mutation_type = mutation.clone();
                    }
                    if let Some(subscription) = &schema.subscription {
                        subscription_type = subscription.clone();
                    }
                }
                Definition::DirectiveDefinition(_) => {}
            }
        }

        // extensions may precede the type they extend
        for ext in extensions {
            match (ext, types.get_mut(extension_name(ext))) {
                (TypeExtension::Object(ext), Some(TypeDefinition::Object(obj))) => {
                    obj.fields.extend(ext.fields.iter().cloned());
                }
                (TypeExtension::InputObject(ext), Some(TypeDefinition::InputObject(input))) => {
                    input.fields.extend(ext.fields.iter().cloned());
                }
                (ext, _) => {
                    tracing::debug!(name = extension_name(ext), "ignoring type extension");
                }
            }
        }

        Self {
            types,
            query_type,
            mutation_type,
            subscription_type,
        }
    }

    /// index a single schema document
    pub fn from_document(doc: &Document<'a, String>) -> Self {
        Self::new(std::slice::from_ref(doc))
    }

    /// declared types in declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition<'a, String>> {
        self.types.values()
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition<'a, String>> {
        self.types.get(name)
    }

    /// category of a named type; builtin scalars resolve even when undeclared
    pub fn category(&self, name: &str) -> Option<TypeCategory> {
        match self.get(name) {
            Some(def) => Some(TypeCategory::of(def)),
            None if BUILTIN_SCALARS.contains(&name) => Some(TypeCategory::Scalar),
            None => None,
        }
    }

    /// name of the root type serving an operation kind
    pub fn root_type_name(&self, kind: OperationKind) -> &str {
        match kind {
            OperationKind::Query => &self.query_type,
            OperationKind::Mutation => &self.mutation_type,
            OperationKind::Subscription => &self.subscription_type,
        }
    }

    /// look up a field on the root type for `kind`
    pub fn root_field(&self, kind: OperationKind, name: &str) -> Result<&Field<'a, String>> {
        let root = self.root_type_name(kind);
        let Some(TypeDefinition::Object(obj)) = self.types.get(root) else {
            return Err(Error::MissingRootType {
                kind: kind.as_str(),
                root: root.to_string(),
            });
        };
        obj.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| Error::UnknownRootField {
                root: root.to_string(),
                field: name.to_string(),
            })
    }

    /// input object types in declaration order
    pub fn input_objects(&self) -> impl Iterator<Item = &InputObjectType<'a, String>> {
        self.types.values().filter_map(|ty| match ty {
            TypeDefinition::InputObject(input) => Some(input),
            _ => None,
        })
    }
}

/// name of any type definition
pub fn type_name<'d>(def: &'d TypeDefinition<'_, String>) -> &'d str {
    match def {
        TypeDefinition::Scalar(ty) => &ty.name,
        TypeDefinition::Object(ty) => &ty.name,
        TypeDefinition::Interface(ty) => &ty.name,
        TypeDefinition::Union(ty) => &ty.name,
        TypeDefinition::Enum(ty) => &ty.name,
        TypeDefinition::InputObject(ty) => &ty.name,
    }
}

fn extension_name<'d>(ext: &'d TypeExtension<'_, String>) -> &'d str {
    match ext {
        TypeExtension::Scalar(ext) => &ext.name,
        TypeExtension::Object(ext) => &ext.name,
        TypeExtension::Interface(ext) => &ext.name,
        TypeExtension::Union(ext) => &ext.name,
        TypeExtension::Enum(ext) => &ext.name,
        TypeExtension::InputObject(ext) => &ext.name,
    }
}
