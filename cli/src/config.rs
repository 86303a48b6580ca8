// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use agenda_core::{APP_NAME, Region};

const AGENDA_CONFIG_ENV: &str = "AGENDA_CONFIG";

/// Resolve and parse the configuration.
///
/// Priority: the `--config` flag, then the `AGENDA_CONFIG` environment
/// variable, then the per-user configuration directory. An explicitly
/// requested file must exist; a missing default file just yields the
/// defaults, since the CLI is fully usable without configuration.
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let (path, explicit) = if let Some(path) = path {
        (path, true)
    } else if let Ok(env_path) = std::env::var(AGENDA_CONFIG_ENV) {
        (PathBuf::from(env_path), true)
    } else {
        let path = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !path.exists() {
            return Ok(Config::default());
        }
        (path, false)
    };

    if explicit && !path.exists() {
        return Err(format!("No config found at: {}", path.display()).into());
    }

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration of the agenda CLI. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default region when `--region` is not given.
    pub region: Option<Region>,

    /// Where the favorites file lives; defaults to the per-user data
    /// directory.
    pub favorites_path: Option<PathBuf>,
}

impl Config {
    /// The favorites file to load and save, falling back to
    /// `<data dir>/agenda/favorites.json`.
    pub fn favorites_path(&self) -> Result<PathBuf, Box<dyn Error>> {
        match &self.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_data_dir()?.join(format!("{APP_NAME}/favorites.json"))),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: ConfigRaw = toml::from_str(s)?;
        let region = match raw.region {
            Some(name) => Some(
                name.parse()
                    .map_err(|()| format!("Unknown region in config: {name}"))?,
            ),
            None => None,
        };
        Ok(Config {
            region,
            favorites_path: raw.favorites_path,
        })
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRaw {
    region: Option<String>,
    favorites_path: Option<PathBuf>,
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn parses_region_and_favorites_path() {
        let config: Config = r#"
region = "ijui"
favorites_path = "/tmp/favorites.json"
"#
        .parse()
        .unwrap();
        assert_eq!(config.region, Some(Region::Ijui));
        assert_eq!(
            config.favorites_path,
            Some(PathBuf::from("/tmp/favorites.json"))
        );
        assert_eq!(
            config.favorites_path().unwrap(),
            PathBuf::from("/tmp/favorites.json")
        );
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_region_is_an_error() {
        let result = "region = \"porto-alegre\"".parse::<Config>();
        assert!(result.unwrap_err().to_string().contains("porto-alegre"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!("regoin = \"ijui\"".parse::<Config>().is_err());
    }

    #[test]
    fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let flag_path = temp_dir.path().join("flag.toml");
        fs::write(&flag_path, "region = \"ijui\"").unwrap();
        let env_path = temp_dir.path().join("env.toml");
        fs::write(&env_path, "region = \"uruguaiana\"").unwrap();

        {
            let _guard = env_lock().lock().unwrap();
            unsafe {
                std::env::set_var(AGENDA_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(Some(flag_path)).unwrap();
            assert_eq!(config.region, Some(Region::Ijui));

            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
            }
        }
    }

    #[test]
    fn env_var_points_at_the_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join("env.toml");
        fs::write(&env_path, "region = \"frederico-westphalen\"").unwrap();

        {
            let _guard = env_lock().lock().unwrap();
            unsafe {
                std::env::set_var(AGENDA_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(None).unwrap();
            assert_eq!(config.region, Some(Region::FredericoWestphalen));

            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
            }
        }
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let _guard = env_lock().lock().unwrap();
        let result = parse_config(Some(missing));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn missing_default_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();

        {
            let _guard = env_lock().lock().unwrap();
            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            }

            let config = parse_config(None).unwrap();
            assert_eq!(config, Config::default());

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn default_location_is_discovered() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join("agenda");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "region = \"ijui\"").unwrap();

        {
            let _guard = env_lock().lock().unwrap();
            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            }

            let config = parse_config(None).unwrap();
            assert_eq!(config.region, Some(Region::Ijui));

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
