//! Per-slot file storage
//!
//! Directory structure:
//! ~/.finquest/
//!   config.yaml          # Active slot, pacing, log level, optional rules override
//!   finquest.log
//!   saves/
//!     default.yaml
//!     hard-mode.yaml

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use finquest_core::GameRules;
use finquest_core::GameState;
use finquest_core::collaborators::GameStore;
use finquest_core::error::{RulesError, StoreError};

pub const DEFAULT_SLOT: &str = "default";

fn default_month_end_delay_ms() -> u64 {
    800
}

/// Configuration stored in config.yaml
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataConfig {
    /// Save slot used when `--slot` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_slot: Option<String>,

    /// Pause between accepting contributions and closing the month
    #[serde(default = "default_month_end_delay_ms")]
    pub month_end_delay_ms: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Replaces the built-in game rules when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<GameRules>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            active_slot: None,
            month_end_delay_ms: default_month_end_delay_ms(),
            log_level: None,
            rules: None,
        }
    }
}

impl DataConfig {
    /// Effective rules, validated
    pub fn rules(&self) -> Result<GameRules, RulesError> {
        let rules = self.rules.clone().unwrap_or_default();
        rules.validate()?;
        Ok(rules)
    }

    pub fn month_end_delay(&self) -> Duration {
        Duration::from_millis(self.month_end_delay_ms)
    }
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    InvalidName(String),
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::InvalidName(name) => write!(
                f,
                "Invalid slot name '{name}': use letters, digits, spaces, '-' or '_'"
            ),
            StorageError::Io(msg) => write!(f, "IO error: {msg}"),
            StorageError::Parse(msg) => write!(f, "Parse error: {msg}"),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory; also the game store for every save slot
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// ~/.finquest/
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".finquest")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn saves_dir(&self) -> PathBuf {
        self.root.join("saves")
    }

    fn save_path(&self, slot: &str) -> PathBuf {
        self.saves_dir()
            .join(format!("{}.yaml", sanitize_filename(slot)))
    }

    pub fn exists(&self) -> bool {
        self.root.exists() && self.saves_dir().exists()
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.saves_dir())
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {e}")))
    }

    /// Missing file yields the defaults
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(DataConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {e}")))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {e}")))
    }

    pub fn save_config(&self, config: &DataConfig) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {e}")))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {e}")))
    }

    pub fn has_save(&self, slot: &str) -> bool {
        self.save_path(slot).exists()
    }

    /// Names of every save slot on disk, sorted
    pub fn list_slots(&self) -> Result<Vec<String>, StorageError> {
        let saves_dir = self.saves_dir();
        if !saves_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&saves_dir)
            .map_err(|e| StorageError::Io(format!("Failed to read saves directory: {e}")))?;

        let mut slots: Vec<String> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml"))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect();
        slots.sort();
        Ok(slots)
    }
}

impl GameStore for DataDirectory {
    fn save(&mut self, slot: &str, state: &GameState) -> Result<(), StoreError> {
        if !self.exists() {
            self.init().map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let yaml = serde_saphyr::to_string(state)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize game: {e}")))?;

        // Write beside the save and rename so a crash never leaves half a file
        let path = self.save_path(slot);
        let staging = path.with_extension("yaml.tmp");
        fs::write(&staging, yaml)
            .and_then(|()| fs::rename(&staging, &path))
            .map_err(|e| StoreError::Io(format!("Failed to write save: {e}")))
    }

    fn load(&self, slot: &str) -> Result<GameState, StoreError> {
        let path = self.save_path(slot);
        if !path.exists() {
            return Err(StoreError::NotFound(slot.to_string()));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StoreError::Io(format!("Failed to read save: {e}")))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StoreError::Serialization(format!("Failed to parse save: {e}")))
    }
}

/// Slot names map one-to-one onto save files, so only names that sanitize to
/// themselves are accepted.
pub fn check_slot_name(name: &str) -> Result<(), StorageError> {
    if name.trim().is_empty() || sanitize_filename(name) != name {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Sanitize a filename to be safe for the filesystem
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finquest_core::model::{
        AchievementId, AssetCategory, Career, CategoryAmounts, ChatMessage, ChatRole, GamePhase,
        MonthRecord, Outcome, UserProfile,
    };
    use tempfile::TempDir;

    fn played_state() -> GameState {
        let mut state = GameState::new(UserProfile::with_preset("Asha", Career::Engineer), 2025);
        state.month = 4;
        state.cash = 61_250.5;
        state.net_worth = 150_000.0;
        state.portfolio = CategoryAmounts::default()
            .with(AssetCategory::Sip, 40_000.0)
            .with(AssetCategory::RealEstate, 48_749.5);
        state.xp = 260;
        state.level = 2;
        state.last_login = Some(jiff::civil::date(2025, 4, 2));
        state.login_streak = 3;
        if let Some(a) = state
            .achievements
            .iter_mut()
            .find(|a| a.id == AchievementId::FirstInvestment)
        {
            a.unlocked = true;
        }
        state.history.push(MonthRecord {
            year: 2025,
            month: 3,
            cash: 61_250.5,
            portfolio_value: 88_749.5,
            net_worth: 150_000.0,
            life_event: Some("Tax Refund".to_string()),
        });
        state.chat_history.push(ChatMessage {
            role: ChatRole::User,
            text: "gold or stocks?".to_string(),
        });
        state
    }

    #[test]
    fn test_data_directory_init() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join(".finquest"));

        assert!(!data_dir.exists());
        data_dir.init().unwrap();
        assert!(data_dir.exists());
    }

    #[test]
    fn test_save_and_load_game() {
        let temp_dir = TempDir::new().unwrap();
        let mut data_dir = DataDirectory::new(temp_dir.path().join(".finquest"));
        let state = played_state();

        data_dir.save("main", &state).unwrap();

        assert!(data_dir.has_save("main"));
        assert_eq!(data_dir.load("main").unwrap(), state);
        assert_eq!(data_dir.list_slots().unwrap(), vec!["main".to_string()]);
    }

    #[test]
    fn test_game_over_phase_survives_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        let mut state = played_state();
        state.phase = GamePhase::GameOver(Outcome::Win);

        data_dir.save("won", &state).unwrap();
        assert_eq!(data_dir.load("won").unwrap().phase, GamePhase::GameOver(Outcome::Win));
    }

    #[test]
    fn test_missing_save_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());

        assert!(matches!(data_dir.load("ghost"), Err(StoreError::NotFound(slot)) if slot == "ghost"));
    }

    #[test]
    fn test_corrupt_save_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        data_dir.init().unwrap();
        fs::write(data_dir.save_path("broken"), "month: [not, a, number\n").unwrap();

        assert!(matches!(data_dir.load("broken"), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_config_defaults_and_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());

        let config = data_dir.load_config().unwrap();
        assert_eq!(config, DataConfig::default());
        assert_eq!(config.month_end_delay(), Duration::from_millis(800));
        assert_eq!(config.rules().unwrap(), GameRules::default());

        let mut rules = GameRules::default();
        rules.win_net_worth = 2_000_000.0;
        let config = DataConfig {
            active_slot: Some("hard-mode".to_string()),
            month_end_delay_ms: 0,
            log_level: Some("debug".to_string()),
            rules: Some(rules.clone()),
        };
        data_dir.save_config(&config).unwrap();

        let loaded = data_dir.load_config().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.rules().unwrap(), rules);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        data_dir.init().unwrap();
        fs::write(data_dir.config_path(), "active_slot: weekend\n").unwrap();

        let config = data_dir.load_config().unwrap();
        assert_eq!(config.active_slot.as_deref(), Some("weekend"));
        assert_eq!(config.month_end_delay_ms, 800);
        assert!(config.rules.is_none());
    }

    #[test]
    fn test_invalid_rules_override_is_rejected() {
        let mut rules = GameRules::default();
        rules.life_events.gate_probability = 1.5;
        let config = DataConfig {
            rules: Some(rules),
            ..DataConfig::default()
        };
        assert!(config.rules().is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("simple"), "simple");
        assert_eq!(sanitize_filename("with spaces"), "with spaces");
        assert_eq!(sanitize_filename("../escape"), "___escape");
        assert_eq!(sanitize_filename("slot:1"), "slot_1");
    }

    #[test]
    fn test_slot_names_must_survive_sanitizing() {
        assert!(check_slot_name("weekend").is_ok());
        assert!(check_slot_name("hard mode_2").is_ok());
        assert!(matches!(check_slot_name("a/b"), Err(StorageError::InvalidName(_))));
        assert!(check_slot_name("a:b").is_err());
        assert!(check_slot_name("  ").is_err());
        assert!(check_slot_name("").is_err());
    }
}
