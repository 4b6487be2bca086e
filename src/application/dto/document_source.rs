use std::fmt;
use std::path::PathBuf;

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentSource {
    File(PathBuf),
    Stdin,
}

impl DocumentSource {
    /// Interprets a command-line input argument; `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            DocumentSource::Stdin
        } else {
            DocumentSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Stdin => write!(f, "<stdin>"),
        }
    }
}
