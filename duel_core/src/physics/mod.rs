pub mod contact;
pub mod resolver;

pub use contact::*;
pub use resolver::*;
