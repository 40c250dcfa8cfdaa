pub mod finale;
pub mod intro;
pub mod message;
pub mod scratch;
pub mod stats;
