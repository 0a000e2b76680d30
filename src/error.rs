use std::io;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read input: {source}")]
    Read { source: io::Error },
    #[error("failed to write output: {source}")]
    Write { source: io::Error },
}
impl RenderError {
    pub fn read(source: io::Error) -> Self {
        RenderError::Read { source }
    }
    pub fn write(source: io::Error) -> Self {
        RenderError::Write { source }
    }
}
