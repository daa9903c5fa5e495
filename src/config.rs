use crate::models::zone::StorageZoneConfig;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::{env, path::PathBuf};

pub const DEFAULT_ZONE_NAME: &str = "test-storage";
pub const DEFAULT_ACCESS_KEY: &str = "test-access-key";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub zone: StorageZoneConfig,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Mock CDN storage-zone API")]
pub struct Args {
    /// Host to bind to (overrides STORAGE_ZONE_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides STORAGE_ZONE_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Storage zone name expected as the first path segment (overrides STORAGE_ZONE_NAME)
    #[arg(long)]
    pub storage_zone: Option<String>,

    /// Shared secret for the AccessKey header (overrides STORAGE_ZONE_ACCESS_KEY)
    #[arg(long)]
    pub access_key: Option<String>,

    /// Store objects under this directory instead of in memory (overrides STORAGE_ZONE_DIR)
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    /// Allow GET requests without an access key (overrides STORAGE_ZONE_PUBLIC_READ)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub public_read: Option<bool>,
}

impl AppConfig {
    /// Parse CLI args and the process environment.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();
        Self::resolve(args, |name| env::var(name).ok())
    }

    /// Merge CLI args over values from `lookup`, then over built-in defaults.
    pub fn resolve<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Environment fallback ---
        let env_host = lookup("STORAGE_ZONE_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let env_port = match lookup("STORAGE_ZONE_PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing STORAGE_ZONE_PORT value `{}`", value))?,
            None => 3000,
        };
        let env_zone = lookup("STORAGE_ZONE_NAME").unwrap_or_else(|| DEFAULT_ZONE_NAME.into());
        let env_key =
            lookup("STORAGE_ZONE_ACCESS_KEY").unwrap_or_else(|| DEFAULT_ACCESS_KEY.into());
        let env_dir = lookup("STORAGE_ZONE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let env_public = match lookup("STORAGE_ZONE_PUBLIC_READ") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("parsing STORAGE_ZONE_PUBLIC_READ value `{}`", value))?,
            None => false,
        };

        // --- Merge ---
        let mut zone = StorageZoneConfig::new(
            args.storage_zone.unwrap_or(env_zone),
            args.access_key.unwrap_or(env_key),
        )
        .with_public_read(args.public_read.unwrap_or(env_public));
        if let Some(dir) = args.storage_dir.or(env_dir) {
            zone = zone.with_storage_root(dir);
        }

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            zone,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got `{}`", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_select_memory_backend() {
        let cfg = AppConfig::resolve(Args::default(), env_of(&[])).unwrap();
        assert_eq!(cfg.addr(), "0.0.0.0:3000");
        assert_eq!(cfg.zone.name, "test-storage");
        assert_eq!(cfg.zone.access_key, "test-access-key");
        assert!(cfg.zone.storage_root.is_none());
        assert!(!cfg.zone.public_read);
    }

    #[test]
    fn environment_values_are_used() {
        let cfg = AppConfig::resolve(
            Args::default(),
            env_of(&[
                ("STORAGE_ZONE_PORT", "8080"),
                ("STORAGE_ZONE_NAME", "my-storage"),
                ("STORAGE_ZONE_ACCESS_KEY", "my-access-key"),
                ("STORAGE_ZONE_DIR", "/srv/objects"),
                ("STORAGE_ZONE_PUBLIC_READ", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.zone.name, "my-storage");
        assert_eq!(cfg.zone.access_key, "my-access-key");
        assert_eq!(cfg.zone.storage_root, Some(PathBuf::from("/srv/objects")));
        assert!(cfg.zone.public_read);
    }

    #[test]
    fn args_override_environment() {
        let args = Args {
            port: Some(9000),
            access_key: Some("cli-key".into()),
            public_read: Some(false),
            ..Args::default()
        };
        let cfg = AppConfig::resolve(
            args,
            env_of(&[
                ("STORAGE_ZONE_PORT", "8080"),
                ("STORAGE_ZONE_ACCESS_KEY", "env-key"),
                ("STORAGE_ZONE_PUBLIC_READ", "1"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.zone.access_key, "cli-key");
        assert!(!cfg.zone.public_read);
    }

    #[test]
    fn public_read_flag_parses_bare_and_valued() {
        let bare = Args::try_parse_from(["storage-zone-mock", "--public-read"]).unwrap();
        assert_eq!(bare.public_read, Some(true));

        let valued =
            Args::try_parse_from(["storage-zone-mock", "--public-read", "false"]).unwrap();
        assert_eq!(valued.public_read, Some(false));

        let absent = Args::try_parse_from(["storage-zone-mock"]).unwrap();
        assert_eq!(absent.public_read, None);

        let cfg = AppConfig::resolve(bare, env_of(&[])).unwrap();
        assert!(cfg.zone.public_read);
    }

    #[test]
    fn empty_storage_dir_means_memory() {
        let cfg = AppConfig::resolve(Args::default(), env_of(&[("STORAGE_ZONE_DIR", "")])).unwrap();
        assert!(cfg.zone.storage_root.is_none());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::resolve(Args::default(), env_of(&[("STORAGE_ZONE_PORT", "http")])).is_err());
        assert!(
            AppConfig::resolve(Args::default(), env_of(&[("STORAGE_ZONE_PUBLIC_READ", "maybe")]))
                .is_err()
        );
    }
}
