use std::fmt;

#[derive(Debug)]
pub enum ControlError {
    Device(String),
    Io(String),
    Range(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Device(msg) => write!(f, "device error: {msg}"),
            ControlError::Io(msg) => write!(f, "io error: {msg}"),
            ControlError::Range(msg) => write!(f, "out of range: {msg}"),
        }
    }
}

impl std::error::Error for ControlError {}

impl From<std::io::Error> for ControlError {
    fn from(err: std::io::Error) -> Self {
        ControlError::Io(err.to_string())
    }
}
