pub mod geocoding;
pub mod slug;

pub use geocoding::*;
pub use slug::*;
