mod map;
mod value;

pub use map::{StateMap, StateMapError};
pub use value::{StateValue, StateValueError};
