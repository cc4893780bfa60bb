use std::path::{Path, PathBuf};

use crate::{app::config::DEFAULT_FILE_NAME, logger::GUI_LOG_FILE_NAME};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupDirectory(PathBuf);

impl SignupDirectory {
    pub fn new(p: PathBuf) -> Self {
        SignupDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SignupDirectory::new)
    }
}

impl SignupDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_file(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
    pub fn log_file(&self) -> PathBuf {
        self.0.join(GUI_LOG_FILE_NAME)
    }
}

/// `~/.signup` on Linux, a "Signup" directory in the standard configuration
/// directory elsewhere.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".signup");

        #[cfg(not(target_os = "linux"))]
        path.push("Signup");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SignupDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Idempotent.
        dir.init().unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }

    #[test]
    fn test_files() {
        let dir = SignupDirectory::new(PathBuf::from("/tmp/signup"));
        assert_eq!(dir.config_file(), PathBuf::from("/tmp/signup/signup.toml"));
        assert_eq!(dir.log_file(), PathBuf::from("/tmp/signup/signup-gui.log"));
    }
}
