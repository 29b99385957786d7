pub mod auth;
pub mod users;

pub use auth::issue_token;
pub use users::me;
