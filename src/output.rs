//! generated module assembly
//!
//! a run produces one typescript module: runtime and type imports, the api
//! holder, the input shape map, then one entry per document definition.

use crate::config::CodegenConfig;
use crate::document::DocumentSet;
use crate::error::Result;
use crate::input_shape::InputTypeInfoMap;
use crate::operation::Synthesizer;
use crate::schema::Schema;
use graphql_parser::query::Definition;

/// result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// full text of the generated module
    pub content: String,
    /// generated type names the module imports, sorted
    pub type_imports: Vec<String>,
    pub operations: usize,
    pub fragments: usize,
}

/// generate the client module for every operation in `documents`
///
/// nothing is returned unless every definition generated successfully.
pub fn generate<'a>(
    schema: &Schema<'a>,
    documents: &DocumentSet<'a>,
    config: &CodegenConfig,
) -> Result<GeneratedOutput> {
    config.validate()?;

    let input_types = InputTypeInfoMap::build(schema)?;
    let mut synthesizer = Synthesizer::new(schema, documents, config);
    let mut entries = Vec::new();
    let mut operations = 0;
    let mut fragments = 0;

    for def in documents.definitions() {
        match def {
            Definition::Fragment(fragment) => {
                entries.push(synthesizer.render_fragment(fragment));
                fragments += 1;
            }
            Definition::Operation(op) => {
                entries.push(synthesizer.render_operation(op)?);
                operations += 1;
            }
        }
    }

    let type_imports = synthesizer.type_imports();
    let mut content = String::new();
    content.push_str(&render_imports_block(config, &type_imports));
    content.push('\n');
    content.push_str(API_BLOCK);
    content.push('\n');
    content.push_str(&render_input_type_block(&input_types)?);
    for entry in &entries {
        content.push('\n');
        content.push_str(entry);
    }

    tracing::info!(
        operations,
        fragments,
        input_types = input_types.len(),
        imports = type_imports.len(),
        "generated client module"
    );

    Ok(GeneratedOutput {
        content,
        type_imports,
        operations,
        fragments,
    })
}

/// parse schema and document sources, then [`generate`]
pub fn generate_from_sources<S: AsRef<str>>(
    schema_sources: &[S],
    document_sources: &[S],
    config: &CodegenConfig,
) -> Result<GeneratedOutput> {
    let schema_docs = schema_sources
        .iter()
        .map(|source| graphql_parser::schema::parse_schema::<String>(source.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let schema = Schema::new(&schema_docs);
    let documents = DocumentSet::parse(document_sources)?;
    generate(&schema, &documents, config)
}

const API_BLOCK: &str = "export let api: Api
export function setApi (toApi: Api) { api = toApi }

export function initApi (url: string, options?: ApiOptions) {
  api = new Api(url, options)
}
";

fn render_imports_block(config: &CodegenConfig, type_imports: &[String]) -> String {
    let mut out = String::new();
    out.push_str("/* eslint-disable */\n");
    out.push_str(&format!(
        "import {{ Api, ApiOptions, GraphQLResponse, gql, trimInput }} from \"{}\"\n",
        config.runtime_module
    ));
    if !type_imports.is_empty() {
        out.push_str("import {\n");
        out.push_str(
            &type_imports
                .iter()
                .map(|name| format!("  {name}"))
                .collect::<Vec<_>>()
                .join(",\n"),
        );
        out.push_str(&format!("\n}} from \"{}\"\n", config.types_path));
    }
    out
}

fn render_input_type_block(input_types: &InputTypeInfoMap) -> Result<String> {
    Ok(format!("const inputTypeInfoMap = {}\n", input_types.render()?))
}
