mod wrappers;

pub use wrappers::*;
