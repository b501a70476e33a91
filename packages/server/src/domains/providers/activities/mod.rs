//! Provider domain activities - service functions behind the HTTP routes
//!
//! Activities fetch from the kernel collaborators, then hand the snapshot to
//! the pure discovery and schedule functions.

mod queries;

pub use queries::*;
