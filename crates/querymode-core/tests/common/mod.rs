mod utilities;

pub use utilities::*;
