pub mod forum;
pub mod report;
pub mod resource;
pub mod safety;
pub mod user;

pub use forum::*;
pub use report::*;
pub use resource::*;
pub use safety::*;
pub use user::*;
