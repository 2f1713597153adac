pub mod filter;
pub mod issue;
