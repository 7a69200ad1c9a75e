//! File-system import resolution.

use std::fs;
use std::path::PathBuf;

use crate::error::Error;
use crate::parser::Resolver;

/// Resolves import locations against a root directory.
///
/// For a location `L` the candidates are tried in order: `L`, `L.apex`,
/// `L/index.apex`. The first readable file wins. The importing document's
/// name is not consulted; all locations are root-relative.
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsResolver { root: root.into() }
    }
}

impl Resolver for FsResolver {
    fn resolve(&self, location: &str, _from: &str) -> Result<String, Error> {
        let base = self.root.join(location);
        let candidates = [
            base.clone(),
            PathBuf::from(format!("{}.apex", base.display())),
            base.join("index.apex"),
        ];
        for candidate in &candidates {
            if candidate.is_file() {
                return fs::read_to_string(candidate).map_err(|err| {
                    Error::new(format!(
                        "failed to read \"{}\": {}",
                        candidate.display(),
                        err
                    ))
                });
            }
        }
        Err(Error::new(format!("\"{}\" not found", location)))
    }
}
