//! graphqlex client code generator
//!
//! this crate turns a graphql schema plus a set of operation documents into a
//! typescript module of typed client functions for the `graphqlex` runtime.
//! each query, mutation, and subscription becomes one function that trims its
//! inputs against the schema's input types, sends the operation through the
//! runtime `api` object, and returns a typed response.
//!
//! ## quick start
//!
//! ```
//! use graphqlex_codegen::{generate_from_sources, CodegenConfig};
//!
//! let schema = "type Query { user(id: ID!): User } type User { id: ID! name: String }";
//! let documents = "query GetUser($id: ID!) { user(id: $id) { id name } }";
//! let output = generate_from_sources(&[schema], &[documents], &CodegenConfig::default())?;
//! assert!(output.content.contains("export async function GetUserQuery (id: string)"));
//! # Ok::<(), graphqlex_codegen::Error>(())
//! ```
//!
//! ## building blocks
//!
//! the pieces behind [`generate`] are usable on their own: [`FlattenedType`]
//! collapses schema type wrappers, [`describe_variable`] flattens operation
//! variables, [`InputTypeInfoMap`] captures input object shapes, and
//! [`fragment_closure`] lists the fragments an operation depends on.

mod config;
mod document;
mod error;
mod flatten;
mod fragments;
mod input_shape;
mod naming;
mod operation;
mod output;
mod schema;
mod source;
mod variables;

pub use config::CodegenConfig;
pub use document::DocumentSet;
pub use error::{Error, Result};
pub use flatten::FlattenedType;
pub use fragments::fragment_closure;
pub use input_shape::{InputFieldInfo, InputTypeInfo, InputTypeInfoMap};
pub use operation::{fragment_doc_name, OperationFunctionInfo, Synthesizer};
pub use output::{generate, generate_from_sources, GeneratedOutput};
pub use schema::{OperationKind, Schema, TypeCategory, BUILTIN_SCALARS};
pub use source::{fetch_schema, read_sources, schema_url};
pub use variables::{describe as describe_variable, primitive_type, VariableDescriptor};
