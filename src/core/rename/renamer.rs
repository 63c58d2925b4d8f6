//! Snapshot-then-mutate rename pass over an ordered sequence of targets.
//!
//! 1. Collects every target whose name contains the find text (literal,
//!    case-sensitive) before touching anything
//! 2. Rewrites each collected name with every non-overlapping occurrence
//!    replaced, left to right, in a single pass
//! 3. Assigns and counts only names that actually changed

use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::project::{NameChange, RenameTarget};

/// Literal substring matcher. The find text is escaped, so it never carries
/// pattern meaning; the replacement is inserted verbatim.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    regex: Regex,
}

impl LiteralMatcher {
    pub fn new(find: &str) -> Result<Self> {
        if find.is_empty() {
            return Err(Error::invalid_input("find"));
        }

        let regex = Regex::new(&regex::escape(find))
            .map_err(|e| Error::internal_unexpected(format!("escaped pattern rejected: {}", e)))?;

        Ok(Self { regex })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn replace_all(&self, name: &str, replace: &str) -> String {
        self.regex.replace_all(name, NoExpand(replace)).into_owned()
    }
}

/// Counts and renames from one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameReport {
    pub matched_count: usize,
    pub renamed_count: usize,
    pub renamed: Vec<NameChange>,
}

/// Run one rename pass.
///
/// A failure on one target stops the pass and propagates; targets renamed
/// before it keep their new names.
pub fn execute<'a, T, I>(scope: I, find: &str, replace: &str) -> Result<RenameReport>
where
    T: RenameTarget + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let matcher = LiteralMatcher::new(find)?;

    let mut snapshot: Vec<&'a mut T> = Vec::new();
    for target in scope {
        if matcher.is_match(target.name()) {
            snapshot.push(target);
        }
    }

    let mut report = RenameReport {
        matched_count: snapshot.len(),
        ..RenameReport::default()
    };

    for target in snapshot {
        let original = target.name().to_string();
        let renamed = matcher.replace_all(&original, replace);

        if renamed == original {
            continue;
        }

        target.set_name(renamed.clone())?;
        report.renamed_count += 1;
        report.renamed.push(NameChange {
            id: target.id().to_string(),
            from: original,
            to: renamed,
        });
    }

    Ok(report)
}
