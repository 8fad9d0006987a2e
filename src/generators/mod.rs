pub mod password;
pub mod strength;

pub use password::{GeneratorError, PasswordGenerator};
