use crate::Device;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    Runtime(String),
    Shape(String),
    ModelLoad(String),
    Io(String),
    Config(String),
    UnsupportedDevice(Device),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Runtime(msg) => write!(f, "runtime error: {msg}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Config(msg) => write!(f, "config error: {msg}"),
            InferError::UnsupportedDevice(device) => {
                write!(f, "unsupported device: {device}")
            }
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<base::TensorError> for InferError {
    fn from(err: base::TensorError) -> Self {
        InferError::Shape(err.to_string())
    }
}

impl From<ort::Error> for InferError {
    fn from(err: ort::Error) -> Self {
        InferError::Runtime(err.to_string())
    }
}
