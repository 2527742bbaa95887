//! Username-to-identity resolution for attribution-bearing operations.

pub mod resolve;

pub use resolve::{classify, resolve, Classification, Resolution};
