//! operation documents
//!
//! every operation document handed to the generator is concatenated into one
//! combined document; fragments are looked up across all of them.

use crate::error::Result;
use graphql_parser::query::{
    parse_query, Definition, Document, FragmentDefinition, OperationDefinition,
};

/// the combined operation document
#[derive(Debug, Clone)]
pub struct DocumentSet<'a> {
    document: Document<'a, String>,
}

impl<'a> DocumentSet<'a> {
    /// concatenate the definitions of `documents`, preserving order
    pub fn new(documents: impl IntoIterator<Item = Document<'a, String>>) -> Self {
        let definitions = documents
            .into_iter()
            .flat_map(|doc| doc.definitions)
            .collect();
        Self {
            document: Document { definitions },
        }
    }

    /// parse each source text and concatenate the results
    pub fn parse<S: AsRef<str>>(sources: &'a [S]) -> Result<Self> {
        let documents = sources
            .iter()
            .map(|source| parse_query::<String>(source.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(documents))
    }

    pub fn definitions(&self) -> &[Definition<'a, String>] {
        &self.document.definitions
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'a, String>> {
        self.document.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'a, String>> {
        self.document.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(fragment) => Some(fragment),
            Definition::Operation(_) => None,
        })
    }

    /// first fragment definition called `name`
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition<'a, String>> {
        self.fragments().find(|fragment| fragment.name == name)
    }
}
