use control::ControlError;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Window(String),
    Frame(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Window(msg) => write!(f, "window error: {msg}"),
            RenderError::Frame(msg) => write!(f, "frame error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

#[derive(Debug)]
pub enum PipelineError {
    Control(ControlError),
    Render(RenderError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Control(err) => write!(f, "control error: {err}"),
            PipelineError::Render(err) => write!(f, "render error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Control(err) => Some(err),
            PipelineError::Render(err) => Some(err),
        }
    }
}

impl From<ControlError> for PipelineError {
    fn from(err: ControlError) -> Self {
        PipelineError::Control(err)
    }
}

impl From<RenderError> for PipelineError {
    fn from(err: RenderError) -> Self {
        PipelineError::Render(err)
    }
}
