use {anyhow::anyhow, std::path::PathBuf};

/// Where the CLI keeps its files, `~/.ccip` unless `--home` says otherwise.
pub struct HomeDirectory {
    home: PathBuf,
}

impl HomeDirectory {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    pub fn new_or_default(home: Option<PathBuf>) -> anyhow::Result<Self> {
        match home {
            Some(home) => Ok(Self::new(home)),
            None => {
                let home = home::home_dir().ok_or_else(|| anyhow!("failed to find home directory"))?;

                Ok(Self::new(home.join(".ccip")))
            },
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.toml")
    }
}
