/// Security module for authentication
/// Provides password hashing, token issuance/verification, and secret hygiene.
pub mod jwt;
pub mod password;
pub mod secret;

pub use jwt::{Claims, TokenError, TokenService};
pub use password::PasswordHasher;
