use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to load configuration: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] presctl_client::Error),
    #[error("Template content is missing, use --content or --file")]
    ContentMissing,
    #[error("Template content is ambiguous, use either --content or --file")]
    ContentConflict,
    #[error("Unable to read template content from {}: {source}", .path.display())]
    ContentRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to save template to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to write output: {0}")]
    Output(#[from] std::io::Error),
}
