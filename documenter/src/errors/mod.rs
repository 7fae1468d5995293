mod error;
pub(crate) mod msg;

pub use error::{Error, ErrorKind};
