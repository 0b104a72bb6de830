pub mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

mod rect;
pub use rect::*;

mod tensor;
pub use tensor::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

// Re-export log crate so downstream crates can use base::log::*
pub use log;
