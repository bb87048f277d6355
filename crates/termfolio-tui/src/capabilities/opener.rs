use thiserror::Error;

use super::Opener;

#[derive(Debug, Error)]
#[error("failed to open {target}: {source}")]
pub struct OpenError {
    pub target: String,
    #[source]
    pub source: std::io::Error,
}

/// Opens URLs and files with the platform handler (`xdg-open`, `open`, ...).
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> Result<(), OpenError> {
        open::that(target).map_err(|source| OpenError {
            target: target.to_string(),
            source,
        })
    }
}
