//! operation synthesis
//!
//! turns each operation definition into a typescript function that trims its
//! inputs, sends the operation through the runtime `api` object, and returns
//! a typed response. fragment definitions become document constants the
//! operation documents interpolate.

use crate::config::CodegenConfig;
use crate::document::DocumentSet;
use crate::error::{Error, Result};
use crate::flatten::FlattenedType;
use crate::fragments::fragment_closure;
use crate::naming::pascal_case;
use crate::schema::{OperationKind, Schema, TypeCategory};
use crate::variables::{describe, primitive_type, VariableDescriptor};
use graphql_parser::query::{
    FragmentDefinition, OperationDefinition, Selection, SelectionSet, VariableDefinition,
};

/// everything needed to render one operation's function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFunctionInfo {
    pub kind: OperationKind,
    pub operation_name: String,
    /// `<operation name><Kind>`
    pub function_name: String,
    pub param_name: String,
    pub param_type: String,
    /// default value expression for the parameter, if any
    pub param_default: Option<String>,
    /// `None` when the operation returns the void marker
    pub result_type: Option<String>,
    pub has_inputs: bool,
    /// variables argument passed to the runtime when `has_inputs`
    pub variables_arg: String,
    pub trim_inputs_block: String,
    pub gql_block: String,
    /// reshapes `response.data` to the single selected field
    pub data_transform_block: Option<String>,
}

impl OperationFunctionInfo {
    /// typescript source for the function, ending with a newline
    pub fn render(&self) -> String {
        match self.kind {
            OperationKind::Subscription => self.render_subscription(),
            OperationKind::Query | OperationKind::Mutation => self.render_request(),
        }
    }

    fn render_request(&self) -> String {
        let keyword = self.kind.as_str();
        let mut out = String::new();
        out.push_str(&format!(
            "export async function {} ({}: {}{}) {{\n",
            self.function_name,
            self.param_name,
            self.param_type,
            default_suffix(self.param_default.as_deref())
        ));
        push_trim_block(&mut out, &self.trim_inputs_block);
        push_gql_block(&mut out, keyword, &self.gql_block);
        if self.has_inputs {
            out.push_str(&format!(
                "  const response = await api.run({keyword}, {})\n",
                self.variables_arg
            ));
        } else {
            out.push_str(&format!("  const response = await api.run({keyword})\n"));
        }
        if let Some(transform) = &self.data_transform_block {
            out.push_str(&indent(transform, "  "));
        }
        match &self.result_type {
            Some(result) => {
                out.push_str(&format!("  return <GraphQLResponse<{result}>>response\n"))
            }
            None => out.push_str("  return <GraphQLResponse>response\n"),
        }
        out.push_str("}\n");
        out
    }

    fn render_subscription(&self) -> String {
        let result = self.result_type.as_deref().unwrap_or("any");
        let mut out = String::new();
        out.push_str(&format!("export function {} (\n", self.function_name));
        out.push_str(&format!("  handler?: (data: {result}) => any,\n"));
        out.push_str(&format!(
            "  {}: {}{}\n",
            self.param_name,
            self.param_type,
            default_suffix(self.param_default.as_deref())
        ));
        out.push_str(") {\n");
        push_trim_block(&mut out, &self.trim_inputs_block);
        push_gql_block(&mut out, "subscription", &self.gql_block);
        if self.has_inputs {
            out.push_str(&format!(
                "  api.subscribe(subscription, {}).onData(handler)\n",
                self.variables_arg
            ));
        } else {
            out.push_str("  api.subscribe(subscription).onData(handler)\n");
        }
        out.push_str("}\n");
        out
    }
}

/// per-run synthesizer; collects the type names generated functions reference
pub struct Synthesizer<'r, 'a> {
    schema: &'r Schema<'a>,
    documents: &'r DocumentSet<'a>,
    config: &'r CodegenConfig,
    type_imports: Vec<String>,
}

struct OperationParts<'o, 'a> {
    kind: OperationKind,
    name: &'o str,
    variables: &'o [VariableDefinition<'a, String>],
    selection_set: &'o SelectionSet<'a, String>,
}

enum Params {
    /// the only variable, passed bare
    Single(VariableDescriptor),
    /// all variables in one `vars` object
    Bag,
}

impl<'r, 'a> Synthesizer<'r, 'a> {
    pub fn new(
        schema: &'r Schema<'a>,
        documents: &'r DocumentSet<'a>,
        config: &'r CodegenConfig,
    ) -> Self {
        Self {
            schema,
            documents,
            config,
            type_imports: Vec::new(),
        }
    }

    /// referenced type names, sorted and deduplicated
    pub fn type_imports(&self) -> Vec<String> {
        let mut imports = self.type_imports.clone();
        imports.sort();
        imports.dedup();
        imports
    }

    /// describe and render one operation
    pub fn render_operation(&mut self, op: &OperationDefinition<'a, String>) -> Result<String> {
        let info = self.function_info(op)?;
        Ok(info.render())
    }

    /// `export const <Name>FragmentDoc = gql` constant for a fragment
    pub fn render_fragment(&self, fragment: &FragmentDefinition<'a, String>) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "export const {} = gql`\n",
            fragment_doc_name(&fragment.name)
        ));
        out.push_str(&indent(&escape_template(fragment.to_string().trim_end()), "  "));
        out.push_str("`\n");
        out
    }

    /// work out the calling convention, result typing, and blocks for `op`
    pub fn function_info(
        &mut self,
        op: &OperationDefinition<'a, String>,
    ) -> Result<OperationFunctionInfo> {
        let parts = operation_parts(op)?;
        let kind = parts.kind;
        let function_name = format!("{}{}", parts.name, kind.capitalized());
        let type_base = self.operation_type_name(parts.name, kind);
        let variables_type = format!("{type_base}Variables");
        let result_type_name = format!("{type_base}{}", self.config.operation_result_suffix);

        let descriptors: Vec<VariableDescriptor> = parts.variables.iter().map(describe).collect();
        let params = match descriptors.as_slice() {
            [var] if kind != OperationKind::Subscription && !is_reserved_local(&var.name) => {
                Params::Single(var.clone())
            }
            _ => Params::Bag,
        };

        let (param_name, param_type, param_default, variables_arg) = match &params {
            Params::Single(var) => {
                let param_type = self.variable_type(var);
                let default = if var.is_list {
                    Some("[]".to_string())
                } else if self.schema.category(&var.type_name) == Some(TypeCategory::Input) {
                    Some("{}".to_string())
                } else {
                    None
                };
                (var.name.clone(), param_type, default, format!("{{ {} }}", var.name))
            }
            Params::Bag => {
                self.type_imports.push(variables_type.clone());
                (
                    "vars".to_string(),
                    variables_type,
                    Some("{}".to_string()),
                    "vars".to_string(),
                )
            }
        };

        let (result_type, data_transform_block) = match self.single_field_result(&parts)? {
            Some(single) => single,
            None => {
                self.type_imports.push(result_type_name.clone());
                (Some(result_type_name), None)
            }
        };

        let fragments = fragment_closure(parts.selection_set, self.documents);
        tracing::debug!(
            operation = parts.name,
            kind = kind.as_str(),
            variables = descriptors.len(),
            fragments = fragments.len(),
            "synthesizing operation"
        );

        let trim_inputs_block = trim_inputs_block(&descriptors, &params);
        let gql_block = gql_block(&fragments, op);

        Ok(OperationFunctionInfo {
            kind,
            operation_name: parts.name.to_string(),
            function_name,
            param_name,
            param_type,
            param_default,
            result_type,
            has_inputs: !descriptors.is_empty(),
            variables_arg,
            trim_inputs_block,
            gql_block,
            data_transform_block,
        })
    }

    /// operation type name as generated by graphql codegen
    fn operation_type_name(&self, name: &str, kind: OperationKind) -> String {
        let suffix = kind.capitalized();
        let skip_suffix = self.config.omit_operation_suffix
            || (self.config.dedupe_operation_suffix
                && name.to_lowercase().ends_with(&suffix.to_lowercase()));
        if skip_suffix {
            pascal_case(name)
        } else {
            format!("{}{suffix}", pascal_case(name))
        }
    }

    fn variable_type(&mut self, var: &VariableDescriptor) -> String {
        let base = self.type_reference(&var.type_name, self.schema.category(&var.type_name));
        if var.is_list {
            format!("{base}[]")
        } else {
            base
        }
    }

    /// typescript reference for a named schema type, recording its import
    fn type_reference(&mut self, name: &str, category: Option<TypeCategory>) -> String {
        if let Some(primitive) = primitive_type(name) {
            return primitive.to_string();
        }
        if category == Some(TypeCategory::Scalar) {
            self.type_imports.push("Scalars".to_string());
            return format!("Scalars[\"{name}\"]");
        }
        self.type_imports.push(name.to_string());
        name.to_string()
    }

    /// result type and unwrapping for a query or mutation selecting one field
    ///
    /// the outer `None` means the synthesized operation type is used instead.
    fn single_field_result(
        &mut self,
        parts: &OperationParts<'_, 'a>,
    ) -> Result<Option<(Option<String>, Option<String>)>> {
        if parts.kind == OperationKind::Subscription {
            return Ok(None);
        }
        let [Selection::Field(field)] = parts.selection_set.items.as_slice() else {
            return Ok(None);
        };
        if field.name.starts_with("__") {
            return Ok(None);
        }

        let root_field = self.schema.root_field(parts.kind, &field.name)?;
        let flat = FlattenedType::new(&root_field.field_type, self.schema)?;
        if flat.base_name == self.config.void_type_name {
            tracing::debug!(operation = parts.name, "field returns the void marker");
            return Ok(Some((None, None)));
        }

        let mut result = self.type_reference(&flat.base_name, Some(flat.category));
        if flat.is_list {
            result.push_str("[]");
        }
        let key = field.alias.as_deref().unwrap_or(&field.name);
        let transform = format!("if (response.data) response.data = response.data.{key}\n");
        Ok(Some((Some(result), Some(transform))))
    }
}

fn operation_parts<'o, 'a>(
    op: &'o OperationDefinition<'a, String>,
) -> Result<OperationParts<'o, 'a>> {
    let (kind, name, variables, selection_set) = match op {
        OperationDefinition::SelectionSet(_) => {
            return Err(Error::AnonymousOperation {
                kind: OperationKind::Query.as_str(),
            })
        }
        OperationDefinition::Query(query) => (
            OperationKind::Query,
            &query.name,
            &query.variable_definitions,
            &query.selection_set,
        ),
        OperationDefinition::Mutation(mutation) => (
            OperationKind::Mutation,
            &mutation.name,
            &mutation.variable_definitions,
            &mutation.selection_set,
        ),
        OperationDefinition::Subscription(subscription) => (
            OperationKind::Subscription,
            &subscription.name,
            &subscription.variable_definitions,
            &subscription.selection_set,
        ),
    };
    let name = name.as_deref().ok_or(Error::AnonymousOperation {
        kind: kind.as_str(),
    })?;
    Ok(OperationParts {
        kind,
        name,
        variables,
        selection_set,
    })
}

/// statements replacing each non-primitive variable with its trimmed value
fn trim_inputs_block(descriptors: &[VariableDescriptor], params: &Params) -> String {
    let mut out = String::new();
    for var in descriptors {
        if var.primitive().is_some() {
            continue;
        }
        let target = match params {
            Params::Single(_) => var.name.clone(),
            Params::Bag => format!("vars.{}", var.name),
        };
        if var.is_list {
            out.push_str(&format!("if (Array.isArray({target})) {{\n"));
            out.push_str(&format!(
                "  {target} = {target}.map(item => trimInput(item, \"{}\", inputTypeInfoMap))\n",
                var.type_name
            ));
        } else {
            out.push_str(&format!("if ({target} != null) {{\n"));
            out.push_str(&format!(
                "  {target} = trimInput({target}, \"{}\", inputTypeInfoMap)\n",
                var.type_name
            ));
        }
        out.push_str("}\n");
    }
    out
}

/// fragment placeholders followed by the printed operation
fn gql_block(fragments: &[String], op: &OperationDefinition<'_, String>) -> String {
    let mut out = String::new();
    for name in fragments {
        out.push_str(&format!("${{{}}}\n", fragment_doc_name(name)));
    }
    out.push_str(&escape_template(op.to_string().trim_end()));
    out.push('\n');
    out
}

/// names the generated function body declares or references itself
const RESERVED_LOCALS: &[&str] = &[
    "query",
    "mutation",
    "subscription",
    "response",
    "api",
    "gql",
    "trimInput",
    "inputTypeInfoMap",
    "GraphQLResponse",
];

/// true if a bare parameter called `name` would clash with the function body
fn is_reserved_local(name: &str) -> bool {
    RESERVED_LOCALS.contains(&name)
}

/// escape text for embedding in a javascript template literal
fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// name of the document constant generated for a fragment
pub fn fragment_doc_name(fragment: &str) -> String {
    format!("{}FragmentDoc", pascal_case(fragment))
}

fn default_suffix(default: Option<&str>) -> String {
    default.map(|value| format!(" = {value}")).unwrap_or_default()
}

fn push_trim_block(out: &mut String, block: &str) {
    if !block.is_empty() {
        out.push_str(&indent(block, "  "));
        out.push('\n');
    }
}

fn push_gql_block(out: &mut String, keyword: &str, block: &str) {
    out.push_str(&format!("  const {keyword} = gql`\n"));
    out.push_str(&indent(block, "    "));
    out.push_str("  `\n");
}

/// prefix every non-empty line, keeping a trailing newline
fn indent(block: &str, prefix: &str) -> String {
    let mut out = String::new();
    for line in block.lines() {
        if !line.is_empty() {
            out.push_str(prefix);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_parser::schema::parse_schema;
    use indoc::indoc;

    const SDL: &str = r#"
        scalar DateTime
        scalar Void
        enum Role { ADMIN MEMBER }
        type User { id: ID! name: String role: Role }
        input UserInput { name: String! role: Role }
        type Query {
            user(id: ID!): User
            users(role: Role): [User!]!
            count(limit: Int): Int!
            now: DateTime
        }
        type Mutation {
            createUser(input: UserInput!): User
            createUsers(inputs: [UserInput!]!): [User]
            reset: Void
        }
        type Subscription { userAdded(role: Role): User }
    "#;

    fn describe_all(documents: &str) -> (Vec<OperationFunctionInfo>, Vec<String>) {
        let schema_doc = parse_schema::<String>(SDL).unwrap();
        let schema = Schema::from_document(&schema_doc);
        let sources = vec![documents.to_string()];
        let set = DocumentSet::parse(&sources).unwrap();
        let config = CodegenConfig::default();
        let mut synth = Synthesizer::new(&schema, &set, &config);
        let infos = set
            .operations()
            .map(|op| synth.function_info(op))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        (infos, synth.type_imports())
    }

    fn describe_one(document: &str) -> OperationFunctionInfo {
        describe_all(document).0.remove(0)
    }

    #[test]
    fn test_single_id_variable_is_passed_bare() {
        let info = describe_one("query GetUser($id: ID!) { user(id: $id) { id name } }");
        assert_eq!(info.function_name, "GetUserQuery");
        assert_eq!(info.param_name, "id");
        assert_eq!(info.param_type, "string");
        assert_eq!(info.param_default, None);
        assert_eq!(info.variables_arg, "{ id }");
        assert_eq!(info.result_type.as_deref(), Some("User"));
        assert_eq!(
            info.data_transform_block.as_deref(),
            Some("if (response.data) response.data = response.data.user\n")
        );
        assert!(info.trim_inputs_block.is_empty());
    }

    #[test]
    fn test_single_int_variable_skips_trimming() {
        let info = describe_one("query Count($limit: Int) { count(limit: $limit) }");
        assert_eq!(info.param_name, "limit");
        assert_eq!(info.param_type, "number");
        assert!(info.trim_inputs_block.is_empty());
        assert_eq!(info.result_type.as_deref(), Some("number"));
    }

    #[test]
    fn test_no_variables_uses_empty_bag() {
        let (infos, imports) = describe_all("query Everyone { users { id } }");
        let info = &infos[0];
        assert_eq!(info.param_name, "vars");
        assert_eq!(info.param_type, "EveryoneQueryVariables");
        assert_eq!(info.param_default.as_deref(), Some("{}"));
        assert!(!info.has_inputs);
        assert!(info.trim_inputs_block.is_empty());
        assert_eq!(info.result_type.as_deref(), Some("User[]"));
        assert_eq!(imports, vec!["EveryoneQueryVariables", "User"]);
    }

    #[test]
    fn test_single_input_variable_trims_bare_parameter() {
        let info = describe_one(
            "mutation AddUser($input: UserInput!) { createUser(input: $input) { id } }",
        );
        assert_eq!(info.function_name, "AddUserMutation");
        assert_eq!(info.param_type, "UserInput");
        assert_eq!(info.param_default.as_deref(), Some("{}"));
        assert_eq!(
            info.trim_inputs_block,
            indoc! {r#"
                if (input != null) {
                  input = trimInput(input, "UserInput", inputTypeInfoMap)
                }
            "#}
        );
    }

    #[test]
    fn test_list_variable_is_trimmed_per_item() {
        let info = describe_one(
            "mutation AddUsers($inputs: [UserInput!]!) { createUsers(inputs: $inputs) { id } }",
        );
        assert_eq!(info.param_type, "UserInput[]");
        assert_eq!(info.param_default.as_deref(), Some("[]"));
        assert_eq!(info.result_type.as_deref(), Some("User[]"));
        assert_eq!(
            info.trim_inputs_block,
            indoc! {r#"
                if (Array.isArray(inputs)) {
                  inputs = inputs.map(item => trimInput(item, "UserInput", inputTypeInfoMap))
                }
            "#}
        );
    }

    #[test]
    fn test_multiple_variables_use_vars_bag() {
        let (infos, imports) = describe_all(
            "mutation Both($id: ID!, $input: UserInput) { createUser(input: $input) { id } }",
        );
        let info = &infos[0];
        assert_eq!(info.param_name, "vars");
        assert_eq!(info.param_type, "BothMutationVariables");
        assert_eq!(info.variables_arg, "vars");
        assert_eq!(
            info.trim_inputs_block,
            indoc! {r#"
                if (vars.input != null) {
                  vars.input = trimInput(vars.input, "UserInput", inputTypeInfoMap)
                }
            "#}
        );
        assert_eq!(imports, vec!["BothMutationVariables", "User"]);
    }

    #[test]
    fn test_variable_named_like_a_local_uses_vars_bag() {
        let (infos, imports) = describe_all(indoc! {"
            query Search($query: ID!) { user(id: $query) { id } }
            mutation Save($response: UserInput) { createUser(input: $response) { id } }
        "});
        assert_eq!(infos[0].param_name, "vars");
        assert_eq!(infos[0].param_type, "SearchQueryVariables");
        assert_eq!(infos[0].variables_arg, "vars");
        assert!(infos[0].render().contains("const response = await api.run(query, vars)"));

        assert_eq!(infos[1].param_name, "vars");
        assert_eq!(
            infos[1].trim_inputs_block,
            indoc! {r#"
                if (vars.response != null) {
                  vars.response = trimInput(vars.response, "UserInput", inputTypeInfoMap)
                }
            "#}
        );
        assert!(imports.contains(&"SaveMutationVariables".to_string()));
    }

    #[test]
    fn test_template_literal_characters_are_escaped() {
        let info = describe_one(indoc! {r#"
            query Tick { user(id: "a`b ${x}") { ...F } }
            fragment F on User { id }
        "#});
        assert!(info.gql_block.starts_with("${FFragmentDoc}\nquery Tick"));
        assert!(info.gql_block.contains(r#"user(id: "a\`b \${x}")"#));
        assert!(!info.gql_block.contains("a`b"));
    }

    #[test]
    fn test_backslashes_survive_the_template_literal() {
        let info = describe_one(r#"query Slash { user(id: "a\\b") { id } }"#);
        assert!(info.gql_block.contains(r#"user(id: "a\\\\b")"#));
    }

    #[test]
    fn test_multiple_top_level_fields_use_operation_type() {
        let info = describe_one("query Dash { now count }");
        assert_eq!(info.result_type.as_deref(), Some("DashQuery"));
        assert!(info.data_transform_block.is_none());
    }

    #[test]
    fn test_custom_scalar_result() {
        let (infos, imports) = describe_all("query Clock { now }");
        assert_eq!(infos[0].result_type.as_deref(), Some("Scalars[\"DateTime\"]"));
        assert!(imports.contains(&"Scalars".to_string()));
    }

    #[test]
    fn test_alias_is_unwrapped() {
        let info = describe_one("query Me { me: user(id: \"1\") { id } }");
        assert_eq!(
            info.data_transform_block.as_deref(),
            Some("if (response.data) response.data = response.data.me\n")
        );
    }

    #[test]
    fn test_void_result_suppresses_type_and_unwrapping() {
        let info = describe_one("mutation Reset { reset }");
        assert_eq!(info.result_type, None);
        assert_eq!(info.data_transform_block, None);
        assert!(info.render().contains("  return <GraphQLResponse>response\n"));
    }

    #[test]
    fn test_subscription_always_uses_bag() {
        let (infos, imports) =
            describe_all("subscription OnUser($role: Role) { userAdded(role: $role) { id } }");
        let info = &infos[0];
        assert_eq!(info.function_name, "OnUserSubscription");
        assert_eq!(info.param_name, "vars");
        assert_eq!(info.param_type, "OnUserSubscriptionVariables");
        assert_eq!(info.result_type.as_deref(), Some("OnUserSubscription"));
        assert!(info.data_transform_block.is_none());
        assert_eq!(
            imports,
            vec!["OnUserSubscription", "OnUserSubscriptionVariables"]
        );
    }

    #[test]
    fn test_fragments_become_placeholders() {
        let info = describe_one(indoc! {"
            query GetUser($id: ID!) { user(id: $id) { ...UserFields } }
            fragment UserFields on User { id ...RoleFields }
            fragment RoleFields on User { role }
        "});
        assert!(info
            .gql_block
            .starts_with("${RoleFieldsFragmentDoc}\n${UserFieldsFragmentDoc}\nquery GetUser"));
    }

    #[test]
    fn test_unknown_root_field() {
        let schema_doc = parse_schema::<String>(SDL).unwrap();
        let schema = Schema::from_document(&schema_doc);
        let sources = vec!["query Bad { missing }".to_string()];
        let set = DocumentSet::parse(&sources).unwrap();
        let config = CodegenConfig::default();
        let mut synth = Synthesizer::new(&schema, &set, &config);
        let op = set.operations().next().unwrap();
        let err = synth.function_info(op).unwrap_err();
        assert!(matches!(err, Error::UnknownRootField { .. }));
    }

    #[test]
    fn test_anonymous_operation_is_rejected() {
        let schema_doc = parse_schema::<String>(SDL).unwrap();
        let schema = Schema::from_document(&schema_doc);
        let sources = vec!["{ now }".to_string(), "query { now }".to_string()];
        let set = DocumentSet::parse(&sources).unwrap();
        let config = CodegenConfig::default();
        let mut synth = Synthesizer::new(&schema, &set, &config);
        for op in set.operations() {
            let err = synth.function_info(op).unwrap_err();
            assert!(matches!(err, Error::AnonymousOperation { kind: "query" }));
        }
    }

    #[test]
    fn test_suffix_options() {
        let schema_doc = parse_schema::<String>(SDL).unwrap();
        let schema = Schema::from_document(&schema_doc);
        let sources = vec!["query dashQuery { now count }".to_string()];
        let set = DocumentSet::parse(&sources).unwrap();
        let op = set.operations().next().unwrap();

        let config = CodegenConfig::default();
        let info = Synthesizer::new(&schema, &set, &config).function_info(op).unwrap();
        assert_eq!(info.function_name, "dashQueryQuery");
        assert_eq!(info.result_type.as_deref(), Some("DashQueryQuery"));

        let config = CodegenConfig::default().with_dedupe_operation_suffix(true);
        let info = Synthesizer::new(&schema, &set, &config).function_info(op).unwrap();
        assert_eq!(info.result_type.as_deref(), Some("DashQuery"));
        assert_eq!(info.param_type, "DashQueryVariables");

        let config = CodegenConfig::default()
            .with_omit_operation_suffix(true)
            .with_operation_result_suffix("Result");
        let info = Synthesizer::new(&schema, &set, &config).function_info(op).unwrap();
        assert_eq!(info.result_type.as_deref(), Some("DashQueryResult"));
        assert_eq!(info.param_type, "DashQueryVariables");
    }

    #[test]
    fn test_render_query() {
        let info = OperationFunctionInfo {
            kind: OperationKind::Query,
            operation_name: "GetUser".to_string(),
            function_name: "GetUserQuery".to_string(),
            param_name: "id".to_string(),
            param_type: "string".to_string(),
            param_default: None,
            result_type: Some("User".to_string()),
            has_inputs: true,
            variables_arg: "{ id }".to_string(),
            trim_inputs_block: String::new(),
            gql_block: "query GetUser($id: ID!) {\n  user(id: $id) {\n    id\n  }\n}\n".to_string(),
            data_transform_block: Some(
                "if (response.data) response.data = response.data.user\n".to_string(),
            ),
        };
        let expected = indoc! {"
            export async function GetUserQuery (id: string) {
              const query = gql`
                query GetUser($id: ID!) {
                  user(id: $id) {
                    id
                  }
                }
              `
              const response = await api.run(query, { id })
              if (response.data) response.data = response.data.user
              return <GraphQLResponse<User>>response
            }
        "};
        assert_eq!(info.render(), expected);
    }

    #[test]
    fn test_render_subscription() {
        let info = OperationFunctionInfo {
            kind: OperationKind::Subscription,
            operation_name: "OnUser".to_string(),
            function_name: "OnUserSubscription".to_string(),
            param_name: "vars".to_string(),
            param_type: "OnUserSubscriptionVariables".to_string(),
            param_default: Some("{}".to_string()),
            result_type: Some("OnUserSubscription".to_string()),
            has_inputs: true,
            variables_arg: "vars".to_string(),
            trim_inputs_block: "if (vars.filter != null) {\n  vars.filter = trimInput(vars.filter, \"UserFilter\", inputTypeInfoMap)\n}\n".to_string(),
            gql_block: "subscription OnUser {\n  userAdded {\n    id\n  }\n}\n".to_string(),
            data_transform_block: None,
        };
        let expected = indoc! {r#"
            export function OnUserSubscription (
              handler?: (data: OnUserSubscription) => any,
              vars: OnUserSubscriptionVariables = {}
            ) {
              if (vars.filter != null) {
                vars.filter = trimInput(vars.filter, "UserFilter", inputTypeInfoMap)
              }

              const subscription = gql`
                subscription OnUser {
                  userAdded {
                    id
                  }
                }
              `
              api.subscribe(subscription, vars).onData(handler)
            }
        "#};
        assert_eq!(info.render(), expected);
    }

    #[test]
    fn test_render_fragment() {
        let schema_doc = parse_schema::<String>(SDL).unwrap();
        let schema = Schema::from_document(&schema_doc);
        let sources = vec!["fragment userFields on User { id }".to_string()];
        let set = DocumentSet::parse(&sources).unwrap();
        let config = CodegenConfig::default();
        let synth = Synthesizer::new(&schema, &set, &config);
        let fragment = set.fragments().next().unwrap();
        let rendered = synth.render_fragment(fragment);
        assert!(rendered
            .starts_with("export const UserFieldsFragmentDoc = gql`\n  fragment userFields on User {"));
        assert!(rendered.ends_with("}\n`\n"));
    }
}
