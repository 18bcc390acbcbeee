mod quaternion;
#[cfg(test)]
mod random;

pub mod bufio;
pub mod config;
pub mod error;

pub use crate::quaternion::{Quaternion, ReadQuaternion};
