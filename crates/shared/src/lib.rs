pub mod domain;
pub mod error;
pub mod partition;
pub mod protocol;
