//! Replaying adapters serving canned tracker responses.
//!
//! Fixture files hold previously captured (or hand-written) raw API
//! payloads keyed by the request that produced them. They let integration
//! tests and offline rendering run the full search pipeline without
//! touching the network.

pub mod bugzilla;
pub mod fixture;
pub mod github;

pub use bugzilla::ReplayingBugzillaTracker;
pub use github::ReplayingGithubTracker;
