use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::Result;
use crate::domain::item::hash_title;
use crate::store::Store;

/// Append-only file of title hashes, one per line.
///
/// The whole file is read once at load time. Each mark opens the file in
/// append mode, writes a single line and closes it again; lines are never
/// rewritten, so duplicates are possible and harmless.
#[derive(Debug)]
pub struct ReadCache {
    path: PathBuf,
    hashes: HashSet<String>,
}

impl ReadCache {
    /// Load every line of the cache file. The file must already exist
    /// (see [`bootstrap`](crate::store::bootstrap)).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read(&path)?;

        // A trailing newline yields one empty entry, which never matches a hash.
        // Damaged lines are kept lossily rather than failing the whole load.
        let hashes: HashSet<String> = contents
            .split(|b| *b == b'\n')
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect();

        tracing::debug!("Loaded {} cache entries from {}", hashes.len(), path.display());
        Ok(Self { path, hashes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains_hash(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }
}

impl Store for ReadCache {
    fn is_read(&self, title: &str) -> bool {
        self.contains_hash(&hash_title(title))
    }

    fn mark_read(&mut self, title: &str) -> Result<()> {
        let hash = hash_title(title);

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(format!("{}\n", hash).as_bytes())?;

        tracing::debug!("Appended {} to {}", hash, self.path().display());
        self.hashes.insert(hash);
        Ok(())
    }
}
