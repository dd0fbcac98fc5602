use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct FotovaultConfig {
    pub workdir: PathBuf,
    pub db_path: PathBuf,
}

impl FotovaultConfig {
    pub fn new(workdir: Option<&str>) -> anyhow::Result<Self> {
        let workdir = Self::get_or_create_workdir(workdir)?;
        let db_path = Self::get_db_path(&workdir);
        Ok(Self { workdir, db_path })
    }

    fn get_or_create_workdir(workdir: Option<&str>) -> anyhow::Result<PathBuf> {
        let workdir = match workdir {
            Some(x) => PathBuf::from(x),
            None => home::home_dir()
                .ok_or_else(|| anyhow::anyhow!("failed to determine home directory"))?
                .join(".fotovault"),
        };
        if !workdir.exists() {
            std::fs::create_dir_all(&workdir)?;
        }
        if !workdir.is_dir() {
            anyhow::bail!("workdir is not a directory");
        }
        info!("workdir: {}", workdir.display());
        Ok(workdir)
    }

    fn get_db_path(workdir: &Path) -> PathBuf {
        workdir.join("fotovault.albums.json")
    }
}
