//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use shopfilter_core::catalog::MemoryCatalog;
use shopfilter_observability::{RequestId, StructuredLogger};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["shopfilter.toml", ".shopfilter.toml", "shopfilter.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Resolve a path written in the config file.
    pub fn resolve_config_path(&self, path: &str) -> PathBuf {
        let dir = self.config_path.as_deref().and_then(Path::parent);
        match dir {
            Some(dir) if !Path::new(path).is_absolute() => {
                self.resolve_path(&dir.join(path).to_string_lossy())
            }
            _ => self.resolve_path(path),
        }
    }

    /// A request logger honouring the `[logging]` settings.
    ///
    /// `--verbose` lowers the level to debug.
    pub fn logger(&self, url: &str) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            shopfilter_observability::LogLevel::Debug
        } else {
            self.config.logging.level
        };
        StructuredLogger::new(RequestId::generate())
            .with_url(url)
            .with_min_level(level)
            .with_format(self.config.logging.format)
    }

    /// Load a catalog snapshot from `path`, or from `[site] catalog`.
    ///
    /// A `[site] catalog` path is relative to the config file it came from.
    pub fn load_catalog(&self, path: Option<&str>) -> Result<MemoryCatalog> {
        let path = match (path, self.config.site.catalog.as_deref()) {
            (Some(path), _) => self.resolve_path(path),
            (None, Some(path)) => self.resolve_config_path(path),
            (None, None) => bail!("No catalog given: pass --catalog or set [site] catalog"),
        };

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = MemoryCatalog::from_json(&json)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;

        self.output.debug(&format!(
            "Loaded {} products from {}",
            catalog.snapshot().products.len(),
            path.display()
        ));
        Ok(catalog)
    }

    /// Turn a command argument into a full URL.
    ///
    /// A bare query string (`?a=b` or `a=b`) is appended to `[site] base_url`.
    pub fn request_url(&self, arg: &str) -> String {
        let looks_like_url = arg.starts_with('/') || arg.contains("://");
        if looks_like_url {
            return arg.to_string();
        }

        let base = self.config.site.base_url.as_deref().unwrap_or("/");
        let query = arg.strip_prefix('?').unwrap_or(arg);
        if query.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, query)
        }
    }
}
