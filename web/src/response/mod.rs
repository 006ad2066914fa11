//! Response DTOs for endpoints whose body differs from a stored model.

pub(crate) mod analysis;
pub(crate) mod progress;
pub(crate) mod vocabulary;
