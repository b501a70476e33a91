// HTTP routes
pub mod categories;
pub mod health;
pub mod location;
pub mod providers;

pub use categories::*;
pub use health::*;
pub use location::*;
pub use providers::*;
