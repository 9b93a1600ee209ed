pub mod common;
pub mod corpus;
pub mod window;
