//! Source-specific normalization of raw tracker records.
//!
//! One function per source tag maps the tracker's raw payload into a
//! [`crate::issue::NormalizedIssue`]. Malformed fields degrade to `None`
//! rather than failing the batch.

pub mod bugzilla;
pub mod github;

pub use bugzilla::normalize_bug;
pub use github::normalize_issue;
