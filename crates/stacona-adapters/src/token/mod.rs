//! Access token adapters.

mod jwt;

pub use jwt::{Claims, JwtTokenIssuer};
