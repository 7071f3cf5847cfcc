pub mod token_provider;

pub use token_provider::{IssuedToken, SessionClaims, TokenError, TokenProvider};
