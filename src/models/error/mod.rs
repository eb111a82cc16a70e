mod api;
pub use api::*;

mod submission;
pub use submission::*;
