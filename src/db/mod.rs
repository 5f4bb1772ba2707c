//! Database access layer. Each store wraps a shared connection pool and
//! exposes the queries one aggregate needs.

pub mod forum;
pub mod reports;
pub mod resources;
pub mod users;

pub use forum::ForumDb;
pub use reports::ReportsDb;
pub use resources::ResourcesDb;
pub use users::UsersDb;
