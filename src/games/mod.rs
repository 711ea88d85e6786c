//! Game implementations.

pub mod xo;
