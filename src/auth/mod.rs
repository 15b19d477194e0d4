//! Authentication module
//!
//! Signup and login handlers plus the collaborators they delegate to:
//! password hashing, token signing and the user store.

pub mod handlers;
pub mod password;
pub mod service;
pub mod token;

pub use password::{BcryptHasher, PasswordHasher};
pub use service::{AuthService, LoginRequest, LoginResponse, SignupRequest, SignupResponse};
pub use token::{Claims, JwtSigner, TokenSigner};
