use std::io;
use std::path::PathBuf;

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read sprite frame {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
