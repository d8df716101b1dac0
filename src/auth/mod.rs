//! Authentication: password hashing, token issue/verify, auth gate

pub mod middleware;
pub mod password;
pub mod token;

pub use middleware::{CurrentEmployee, auth_middleware};
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenError, TokenService};
