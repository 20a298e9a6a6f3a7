use super::*;

#[test]
fn empty_input_yields_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.server.host, "127.0.0.1:26423");
	assert_eq!(config.assets.dir_name, "emojis");
}

#[test]
fn partial_sections_keep_other_defaults() {
	let config = Config::parse("[server]\nhost = \"10.0.0.2:9000\"\n").unwrap();
	assert_eq!(config.server.host, "10.0.0.2:9000");
	assert_eq!(config.assets.dir_name, "emojis");
}

#[test]
fn unknown_keys_are_rejected() {
	let err = Config::parse("[server]\nhots = \"x\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn unsafe_dir_name_is_rejected() {
	let err = Config::parse("[assets]\ndir_name = \"../up\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Invalid { field: "assets.dir_name", .. }), "{err}");
}

#[test]
fn load_reads_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("config.toml");
	std::fs::write(&path, "[assets]\ndir_name = \"stamps\"\n").unwrap();

	let config = Config::load_or_default(Some(&path)).unwrap();
	assert_eq!(config.assets.dir_name, "stamps");
}

#[test]
fn missing_explicit_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }), "{err}");
}
