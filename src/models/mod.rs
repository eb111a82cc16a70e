mod account;
pub use account::*;

mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod callback;
pub use callback::*;

mod error;
pub use error::*;

mod secret_string;
pub use secret_string::*;

mod submission;
pub use submission::*;
