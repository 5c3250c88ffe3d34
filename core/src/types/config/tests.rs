use super::*;
use tempfile::TempDir;

mod paths {
    use super::*;

    #[test]
    fn test_default_base_path_is_loadouts_dir() {
        let config = Config::default();
        assert_eq!(config.base_path, std::path::PathBuf::from("loadouts"));
    }

    #[test]
    fn test_loadouts_path_joins_base() {
        let config = Config::default();
        assert_eq!(
            config.loadouts_path(),
            std::path::Path::new("loadouts").join("loadouts.json")
        );
    }

    #[test]
    fn test_config_path_joins_base() {
        let config = Config::default();
        assert_eq!(
            config.config_path(),
            std::path::Path::new("loadouts").join("config.toml")
        );
    }
}

mod app_config {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.general.theme, Theme::Dark);
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.general.theme = Theme::Light;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.general.theme, Theme::Light);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[general]\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.general.theme, Theme::Dark);
    }

    #[test]
    fn test_load_theme_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[general]\ntheme = \"light\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.general.theme, Theme::Light);
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "general = not toml at all {{{").unwrap();

        let result = AppConfig::load(&path);
        assert!(matches!(result, Err(AppConfigError::Parse(_))));
    }
}
