use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

const STDIN_PATH: &str = "-";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a passage path against the workspace root; absolute paths are
    /// kept as they are.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.path.join(file)
    }

    /// Read a passage as text. `-` reads stdin. Bytes that are not valid
    /// UTF-8 become U+FFFD, which the default junk set strips again.
    pub fn read_text(&self, file: &str) -> anyhow::Result<String> {
        let data = if file == STDIN_PATH {
            let mut data = Vec::new();
            std::io::stdin()
                .read_to_end(&mut data)
                .context("failed to read passage from stdin")?;
            data
        } else {
            let path = self.resolve(file);
            std::fs::read(&path)
                .with_context(|| format!("failed to read passage from {}", path.display()))?
        };

        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}
