//! Represents the single storage zone served by this process.

use std::path::PathBuf;

/// Immutable storage-zone settings, fixed at server construction.
#[derive(Debug, Clone)]
pub struct StorageZoneConfig {
    /// Zone name, matched as the `/<name>/` prefix of every object path.
    pub name: String,

    /// Shared secret expected in the `AccessKey` header.
    pub access_key: String,

    /// Root directory for the filesystem backend. `None` selects the in-memory backend.
    pub storage_root: Option<PathBuf>,

    /// When true, GET requests skip the access-key check.
    pub public_read: bool,
}

impl StorageZoneConfig {
    pub fn new(name: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access_key: access_key.into(),
            storage_root: None,
            public_read: false,
        }
    }

    pub fn with_storage_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.storage_root = Some(root.into());
        self
    }

    pub fn with_public_read(mut self, public_read: bool) -> Self {
        self.public_read = public_read;
        self
    }

    /// Derive the object key from a request path.
    ///
    /// Strips a literal `/<zone>/` prefix. Paths that do not carry the prefix
    /// are not rejected: the key is the path minus its leading slash.
    pub fn object_key<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(self.name.as_str()))
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or_else(|| path.strip_prefix('/').unwrap_or(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> StorageZoneConfig {
        StorageZoneConfig::new("zone", "secret")
    }

    #[test]
    fn strips_zone_prefix() {
        assert_eq!(zone().object_key("/zone/test.txt"), "test.txt");
        assert_eq!(zone().object_key("/zone/nested/file1.txt"), "nested/file1.txt");
    }

    #[test]
    fn keeps_path_without_zone_prefix() {
        assert_eq!(zone().object_key("/other/test.txt"), "other/test.txt");
        assert_eq!(zone().object_key("/zonefile.txt"), "zonefile.txt");
        assert_eq!(zone().object_key("/zone"), "zone");
    }

    #[test]
    fn does_not_normalize_key() {
        assert_eq!(zone().object_key("/zone/A/../b.TXT"), "A/../b.TXT");
        assert_eq!(zone().object_key("/zone/"), "");
    }

    #[test]
    fn builder_sets_optional_fields() {
        let cfg = zone().with_storage_root("/tmp/x").with_public_read(true);
        assert_eq!(cfg.storage_root, Some(PathBuf::from("/tmp/x")));
        assert!(cfg.public_read);
    }
}
