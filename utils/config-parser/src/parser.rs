use {
    crate::error::Error,
    config::{Config, Environment, File, FileFormat},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Loads `D` from the TOML file at `path`, then overrides it with
/// environment variables named `{prefix}_{SECTION}__{KEY}`.
///
/// The file is optional: when it doesn't exist, only the environment and the
/// defaults of `D` apply.
pub fn parse_config_with_prefix<D, P>(path: P, prefix: &str) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::from(path.as_ref())
        .format(FileFormat::Toml)
        .required(false);

    let env_override = Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    let config = Config::builder()
        .add_source(file)
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

/// [`parse_config_with_prefix`] with the `CCIP` prefix.
pub fn parse_config<D, P>(path: P) -> Result<D, Error>
where
    D: DeserializeOwned,
    P: AsRef<Path>,
{
    parse_config_with_prefix(path, "CCIP")
}

// ----------------------------------- tests -----------------------------------
