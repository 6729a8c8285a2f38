pub mod value;

pub use value::{ErrorKind, Value};
