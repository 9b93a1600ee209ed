pub mod manhattan;
pub mod squared;
