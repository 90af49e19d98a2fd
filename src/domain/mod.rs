pub mod claims;

pub use claims::{Claims, Principal, TokenHeader, TokenKind, TokenPair};
