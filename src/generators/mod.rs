// src/generators/mod.rs
pub mod password;

pub use password::{generate_password, generate_password_with, GeneratorError, DEFAULT_CHARSET};
