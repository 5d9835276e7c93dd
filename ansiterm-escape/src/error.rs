use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("malformed parameter byte {byte:#04x} at position {position}")]
    Malformed { byte: u8, position: usize },
}

pub type Result<T> = std::result::Result<T, ParamError>;
