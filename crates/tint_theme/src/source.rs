//! Where color documents come from
//!
//! Resources are named without extension (`app-colors`, `app-colors-light`);
//! each source decides how a name maps onto bytes.

use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extension appended to resource names
pub const JSON_EXTENSION: &str = "json";

/// Supplies raw document bytes by resource name
pub trait ResourceSource {
    /// Read a resource; `Ok(None)` when it does not exist
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// Whether a resource exists
    fn contains(&self, name: &str) -> bool;
}

impl<S: ResourceSource + ?Sized> ResourceSource for &S {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        (**self).read(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }
}

/// Reads `<dir>/<name>.json`
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{JSON_EXTENSION}"))
    }
}

impl ResourceSource for DirectorySource {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }
}

/// In-memory resources, keyed by name
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    resources: FxHashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), bytes.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl ResourceSource for MemorySource {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.resources.get(name).cloned())
    }

    fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}
