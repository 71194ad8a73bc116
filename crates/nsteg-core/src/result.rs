use crate::error::NstegError;

pub type Result<T> = std::result::Result<T, NstegError>;
