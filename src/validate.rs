//! Document validation: structural checks and bundle resolution.
//!
//! `check` is the structural pass over a document in memory; `check_bundle`
//! additionally resolves relative asset references against a staged
//! deployment directory. Both return the full list of findings rather than
//! stopping at the first.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};
use crate::model::{Block, Document};

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Machine-readable finding kind
    pub kind: IssueKind,

    /// Human-readable description
    pub message: String,
}

impl Issue {
    fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Kind of validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A hyperlink target that does not parse as URL or relative reference
    InvalidUrl,
    /// A heading level outside 1-6
    HeadingLevel,
    /// Not exactly one level-1 heading in the document
    HeadingStructure,
    /// A comment containing "--"
    MalformedComment,
    /// A script block with neither source nor code
    EmptyScript,
    /// A relative asset reference that does not resolve in the bundle
    MissingAsset,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IssueKind::InvalidUrl => "invalid-url",
            IssueKind::HeadingLevel => "heading-level",
            IssueKind::HeadingStructure => "heading-structure",
            IssueKind::MalformedComment => "malformed-comment",
            IssueKind::EmptyScript => "empty-script",
            IssueKind::MissingAsset => "missing-asset",
        };
        write!(f, "{}", name)
    }
}

/// Run the structural checks over a document.
///
/// An empty result means the document passes.
pub fn check(doc: &Document) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (text, url) in doc.links() {
        if !is_valid_link_target(url) {
            issues.push(Issue::new(
                IssueKind::InvalidUrl,
                format!("link {:?} has invalid target {:?}", text, url),
            ));
        }
    }

    let mut h1_count = 0usize;
    for block in &doc.blocks {
        match block {
            Block::Heading { level, .. } => {
                if !(1..=6).contains(level) {
                    issues.push(Issue::new(
                        IssueKind::HeadingLevel,
                        format!("heading level {} is out of range (1-6)", level),
                    ));
                }
                if *level == 1 {
                    h1_count += 1;
                }
            }
            Block::Comment { text } => {
                if text.contains("--") {
                    issues.push(Issue::new(
                        IssueKind::MalformedComment,
                        format!("comment contains \"--\": {:?}", text),
                    ));
                }
            }
            Block::Script(script) => {
                if script.is_empty() {
                    issues.push(Issue::new(
                        IssueKind::EmptyScript,
                        "script block has neither source nor code",
                    ));
                }
            }
            _ => {}
        }
    }

    if h1_count != 1 {
        issues.push(Issue::new(
            IssueKind::HeadingStructure,
            format!("expected exactly one level-1 heading, found {}", h1_count),
        ));
    }

    issues
}

/// Run the structural checks and resolve relative assets against a bundle
/// directory.
pub fn check_bundle(doc: &Document, bundle_dir: &Path) -> Result<Vec<Issue>> {
    if !bundle_dir.is_dir() {
        return Err(Error::BundleNotFound(bundle_dir.to_path_buf()));
    }

    log::debug!("resolving assets against {}", bundle_dir.display());
    let mut issues = check(doc);

    for asset in doc.assets() {
        if !asset.is_relative() {
            continue;
        }
        let resolved = bundle_dir.join(&asset.path);
        if !resolved.is_file() {
            issues.push(Issue::new(
                IssueKind::MissingAsset,
                format!("{} {:?} not found in bundle", asset.kind, asset.path),
            ));
        }
    }

    Ok(issues)
}

/// Check a hyperlink target: either a parseable absolute URL or a plausible
/// relative reference.
fn is_valid_link_target(target: &str) -> bool {
    if target.is_empty() {
        return false;
    }

    match Url::parse(target) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => is_valid_relative_reference(target),
        Err(_) => false,
    }
}

fn is_valid_relative_reference(target: &str) -> bool {
    !target
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"'))
}
