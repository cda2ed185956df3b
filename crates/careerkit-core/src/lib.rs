pub mod format;
pub mod gap;
pub mod schema;
pub mod sections;
pub mod summary;

pub use gap::*;
pub use schema::*;
pub use sections::*;
pub use summary::*;
