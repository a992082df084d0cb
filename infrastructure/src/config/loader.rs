//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "ims-assistant";
const PROJECT_FILES: [&str; 2] = ["ims.toml", ".ims.toml"];
const ENV_PREFIX: &str = "IMS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `IMS_SECTION__KEY` (e.g. `IMS_GEMINI__API_URL`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ims.toml` or `./.ims.toml`
    /// 4. Global: `~/.config/ims-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(Self::global_config_path(), Self::project_config_path(), config_path)
            .extract()
            .map_err(Box::new)
    }

    fn figment(
        global_path: Option<PathBuf>,
        project_path: Option<PathBuf>,
        config_path: Option<&PathBuf>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = project_path {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}SECTION__KEY variables", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./ims.toml or ./.ims.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.chat.max_rounds, 5);
        assert_eq!(config.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("ims-assistant"));
    }

    #[test]
    fn test_layering_priority() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                "[chat]\nmax_rounds = 2\n[server]\nbind = \"0.0.0.0:1\"\n",
            )?;
            jail.create_file("ims.toml", "[chat]\nmax_rounds = 3\n")?;
            jail.create_file("explicit.toml", "[gemini]\ntimeout_seconds = 7\n")?;
            jail.set_env("IMS_GEMINI__API_URL", "http://localhost:1/gen");

            let explicit = PathBuf::from("explicit.toml");
            let config: FileConfig = ConfigLoader::figment(
                Some(PathBuf::from("global.toml")),
                ConfigLoader::project_config_path(),
                Some(&explicit),
            )
            .extract()?;

            assert_eq!(config.server.bind, "0.0.0.0:1");
            assert_eq!(config.chat.max_rounds, 3);
            assert_eq!(config.gemini.timeout_seconds, 7);
            assert_eq!(config.gemini.api_url, "http://localhost:1/gen");
            Ok(())
        });
    }

    #[test]
    fn test_hidden_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".ims.toml", "[inventory]\nseed_file = \"seed.json\"\n")?;

            let config: FileConfig =
                ConfigLoader::figment(None, ConfigLoader::project_config_path(), None).extract()?;
            assert_eq!(
                config.inventory.seed_file,
                Some(PathBuf::from("seed.json"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_missing_global_file_is_skipped() {
        Jail::expect_with(|_jail| {
            let config: FileConfig =
                ConfigLoader::figment(Some(PathBuf::from("nope.toml")), None, None).extract()?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }
}
