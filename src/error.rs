use std::path::PathBuf;

/// Errors raised while discovering, interpreting or launching desktop entries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A descriptor file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A descriptor file is not valid key-value section syntax.
    #[error("{}:{line}: {message}", .path.display())]
    Syntax {
        /// Offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A descriptor file has no `[Desktop Entry]` section.
    #[error("{}: missing [Desktop Entry] section", .path.display())]
    MissingSection {
        /// Offending file.
        path: PathBuf,
    },

    /// Walking a discovery root failed.
    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        /// Root whose traversal failed.
        root: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },

    /// A discovery worker thread panicked before finishing its root.
    #[error("Discovery worker for {} panicked", .root.display())]
    WorkerPanicked {
        /// Root the worker was walking.
        root: PathBuf,
    },

    /// The `Exec` field expanded to nothing.
    #[error("{}: Exec expands to an empty command", .path.display())]
    EmptyCommand {
        /// Entry whose command was empty.
        path: PathBuf,
    },

    /// The operating system refused to start a process.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An executable could not be found on `PATH`.
    #[error("{name}: not found on PATH: {source}")]
    NotFound {
        /// Name that was looked up.
        name: String,
        /// Underlying lookup error.
        source: which::Error,
    },
}

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

