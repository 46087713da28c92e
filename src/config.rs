use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Parser extensions. Each field switches one syntax on or off.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// Alphabetic, roman and `#` ordered list markers (default: enabled).
    /// When off, only bullets and digits start list items and lists render
    /// as plain `<ol>`/`<ul>`.
    pub fancy_lists: bool,
    /// `{#id .class key=value}` lines that apply attributes to the block
    /// above them (default: disabled).
    pub block_attributes: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            fancy_lists: true,
            block_attributes: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub extensions: Extensions,
    pub line_ending: LineEnding,
    /// Self-closing void elements (`<br />`, `<hr />`).
    pub xhtml: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Extensions::default(),
            line_ending: LineEnding::Auto,
            xhtml: false,
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn fancy_lists(mut self, enabled: bool) -> Self {
        self.config.extensions.fancy_lists = enabled;
        self
    }

    pub fn block_attributes(mut self, enabled: bool) -> Self {
        self.config.extensions.block_attributes = enabled;
        self
    }

    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = ending;
        self
    }

    pub fn xhtml(mut self, enabled: bool) -> Self {
        self.config.xhtml = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// Same as the input: CRLF if its first line break is CRLF.
    #[default]
    Auto,
    Lf,
    Crlf,
}

const CANDIDATE_NAMES: &[&str] = &[".fancylists.toml", "fancylists.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("fancylists").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("fancylists")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .fancylists.toml, fancylists.toml
/// 3) XDG: $XDG_CONFIG_HOME/fancylists/config.toml or ~/.config/fancylists/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
