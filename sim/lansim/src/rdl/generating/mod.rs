//! Mod file for generator: allows use across Lansim
pub mod generator;
pub use generator::{core_generator, GenerateError};
