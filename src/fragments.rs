//! fragment closure
//!
//! an operation needs every fragment it spreads, directly or through other
//! fragments, nested fields, or inline fragments. fragments form a reference
//! graph, so a fragment reachable along several paths is listed once.
//!
//! names come out dependencies first: a fragment is listed after every
//! fragment it spreads, and siblings keep their discovery order.

use crate::document::DocumentSet;
use graphql_parser::query::{Selection, SelectionSet};
use indexmap::IndexSet;
use std::collections::HashSet;

/// every fragment name reachable from `selection_set`, deduplicated
///
/// a spread naming a fragment that no document defines is skipped along with
/// anything beneath it; document validation is expected to catch those.
pub fn fragment_closure(
    selection_set: &SelectionSet<'_, String>,
    documents: &DocumentSet<'_>,
) -> Vec<String> {
    let mut resolved = IndexSet::new();
    let mut visiting = HashSet::new();
    visit(selection_set, documents, &mut resolved, &mut visiting);
    resolved.into_iter().collect()
}

fn visit(
    selection_set: &SelectionSet<'_, String>,
    documents: &DocumentSet<'_>,
    resolved: &mut IndexSet<String>,
    visiting: &mut HashSet<String>,
) {
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => visit(&field.selection_set, documents, resolved, visiting),
            Selection::InlineFragment(inline) => {
                visit(&inline.selection_set, documents, resolved, visiting)
            }
            Selection::FragmentSpread(spread) => {
                let name = &spread.fragment_name;
                // already listed, or a cycle back into a fragment being expanded
                if resolved.contains(name) || !visiting.insert(name.clone()) {
                    continue;
                }
                match documents.fragment(name) {
                    Some(fragment) => {
                        visit(&fragment.selection_set, documents, resolved, visiting);
                        resolved.insert(name.clone());
                    }
                    None => tracing::debug!(fragment = %name, "no matching fragment definition"),
                }
                visiting.remove(name);
            }
        }
    }
}
