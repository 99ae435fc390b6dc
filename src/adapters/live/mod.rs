//! Live adapters calling the real tracker REST APIs.

pub mod bugzilla;
pub mod github;

pub use bugzilla::LiveBugzillaTracker;
pub use github::LiveGithubTracker;
