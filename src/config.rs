use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timings: Timings,

    #[serde(default)]
    pub labels: Labels,

    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timings {
    #[serde(default = "default_progress_duration_ms")]
    pub progress_duration_ms: u64,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default = "default_blink_interval_ms")]
    pub blink_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_done")]
    pub done: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_text_color")]
    pub text: String,

    #[serde(default = "default_bar_color")]
    pub bar: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            labels: Labels::default(),
            theme: Theme::default(),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            progress_duration_ms: default_progress_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            blink_interval_ms: default_blink_interval_ms(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: default_title(),
            done: default_done(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: default_text_color(),
            bar: default_bar_color(),
        }
    }
}

fn default_progress_duration_ms() -> u64 {
    4000
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_blink_interval_ms() -> u64 {
    500
}

fn default_title() -> String {
    "Process hacking..".to_string()
}

fn default_done() -> String {
    "Successful!".to_string()
}

fn default_text_color() -> String {
    "#ffffff".to_string()
}

fn default_bar_color() -> String {
    "#4a9eff".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_path = config_dir.join("blinkbar").join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_dir = config_dir.join("blinkbar");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let config = Config::default();
        assert_eq!(config.timings.progress_duration_ms, 4000);
        assert_eq!(config.timings.tick_interval_ms, 100);
        assert_eq!(config.timings.blink_interval_ms, 500);
        assert_eq!(config.labels.done, "Successful!");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.timings.progress_duration_ms, 4000);
        assert_eq!(config.labels.title, "Process hacking..");
        assert_eq!(config.theme.bar, "#4a9eff");
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config: Config = toml::from_str(
            r#"
            [timings]
            progress_duration_ms = 2000

            [labels]
            title = "Working.."
            "#,
        )
        .unwrap();
        assert_eq!(config.timings.progress_duration_ms, 2000);
        assert_eq!(config.timings.tick_interval_ms, 100);
        assert_eq!(config.labels.title, "Working..");
        assert_eq!(config.labels.done, "Successful!");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(
            parsed.timings.progress_duration_ms,
            config.timings.progress_duration_ms
        );
        assert_eq!(parsed.labels.title, config.labels.title);
    }
}
