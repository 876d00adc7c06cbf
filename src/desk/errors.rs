use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Replay error: {0}")]
    Csv(#[from] csv::Error)
}
