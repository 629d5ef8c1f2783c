//! Sub-organization selection
//!
//! A sub-organization groups repositories through `suborgrepos` patterns and
//! contributes a settings layer between the organization baseline and the
//! repository override.

use std::collections::BTreeMap;

use crate::Result;
use crate::bundle::{SubOrgDocument, is_yaml_file};
use crate::pattern::matches_any;

/// Return every sub-organization whose patterns match `repo_name`.
///
/// Results are in filename order; that order is also the merge order.
pub fn matching_suborgs<'a>(
    suborg_configs: &'a BTreeMap<String, SubOrgDocument>,
    repo_name: &str,
) -> Result<Vec<(&'a str, &'a SubOrgDocument)>> {
    let mut selected = Vec::new();
    for (file, document) in suborg_configs {
        if !is_yaml_file(file) {
            continue;
        }
        if matches_any(document.suborgrepos.as_slice(), repo_name)? {
            tracing::debug!(repo_name, file = %file, "Repository belongs to sub-organization");
            selected.push((file.as_str(), document));
        }
    }
    Ok(selected)
}
