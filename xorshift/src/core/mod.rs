//! Core building blocks shared by every generator

pub mod bits;
pub mod traits;
