//! Well-known locations of the podman systemd generator output.
use std::ffi::OsStr;
use std::path::PathBuf;

/// Directory the system generator writes to.
pub const SYSTEM_GENERATOR_DIR: &str = "/run/systemd/generator";

/// Generator directory relative to `$XDG_RUNTIME_DIR`.
const USER_GENERATOR_SUBDIR: &str = "systemd/generator";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("environment variable `XDG_RUNTIME_DIR` is not set")]
    MissingRuntimeDir,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which service manager instance the units were generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorScope {
    /// The system manager (root quadlets).
    System,
    /// The calling user's manager (rootless quadlets).
    User,
}

/// Returns the generator directory for `scope`, reading `XDG_RUNTIME_DIR` for
/// [`GeneratorScope::User`].
///
/// # Errors
///
/// Returns [`Error::MissingRuntimeDir`] for the user scope when `XDG_RUNTIME_DIR`
/// is unset or empty.
pub fn generator_dir(scope: GeneratorScope) -> Result<PathBuf> {
    let runtime_dir = std::env::var_os("XDG_RUNTIME_DIR");
    generator_dir_for(scope, runtime_dir.as_deref())
}

/// Like [`generator_dir`], with the runtime directory passed in.
pub fn generator_dir_for(scope: GeneratorScope, runtime_dir: Option<&OsStr>) -> Result<PathBuf> {
    match scope {
        GeneratorScope::System => Ok(PathBuf::from(SYSTEM_GENERATOR_DIR)),
        GeneratorScope::User => match runtime_dir {
            Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir).join(USER_GENERATOR_SUBDIR)),
            _ => Err(Error::MissingRuntimeDir),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_dir() {
        let dir = generator_dir_for(GeneratorScope::System, Some(OsStr::new("/run/user/1000")));
        assert_eq!(dir.unwrap(), PathBuf::from("/run/systemd/generator"));
    }

    #[test]
    fn test_user_dir() {
        let dir = generator_dir_for(GeneratorScope::User, Some(OsStr::new("/run/user/1000")));
        assert_eq!(
            dir.unwrap(),
            PathBuf::from("/run/user/1000/systemd/generator")
        );
    }

    #[test]
    fn test_user_dir_without_runtime_dir() {
        assert!(matches!(
            generator_dir_for(GeneratorScope::User, None),
            Err(Error::MissingRuntimeDir)
        ));
        assert!(matches!(
            generator_dir_for(GeneratorScope::User, Some(OsStr::new(""))),
            Err(Error::MissingRuntimeDir)
        ));
    }

    #[test]
    fn test_system_dir_ignores_environment() {
        assert_eq!(
            generator_dir(GeneratorScope::System).unwrap(),
            PathBuf::from(SYSTEM_GENERATOR_DIR)
        );
    }
}
