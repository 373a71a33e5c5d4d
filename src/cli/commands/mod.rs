pub mod ride;

pub use ride::*;
