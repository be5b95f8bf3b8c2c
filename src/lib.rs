pub mod algorithms;
pub mod errors;
pub mod geometry;
pub mod serialize;
pub mod validate;
