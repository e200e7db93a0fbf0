pub mod clone;
pub mod compile;
