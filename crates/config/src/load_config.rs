// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Walks up from `path` looking for `filename`.
pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

/// Picks the configuration file to load.
///
/// An explicit file wins (relative paths are joined to `cwd`), then the first
/// `default_filename` found from `cwd` upwards, then the file in
/// `default_config_dir`.
pub fn resolve_config_path<P: Into<PathBuf>>(
    find_in_parent: FindInParent,
    cwd: P,
    default_config_dir: P,
    default_filename: &str,
    cli_file: Option<P>,
) -> PathBuf {
    let cwd = cwd.into();

    if let Some(cli_file) = cli_file.map(Into::into) {
        if cli_file.is_absolute() {
            return cli_file;
        }
        return clean(cwd.join(cli_file));
    }

    find_in_parent(&cwd, default_filename)
        .unwrap_or_else(|| clean(default_config_dir.into().join(default_filename)))
}

#[cfg(test)]
mod tests {
    use super::resolve_config_path;
    use std::path::{Path, PathBuf};

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/work/labd.config.yaml"))
    }

    #[test]
    fn test_resolve_default_dir() {
        let path = resolve_config_path(
            not_found,
            PathBuf::from("/work/sub"),
            PathBuf::from("/home/me/.config/labd"),
            "labd.config.yaml",
            None,
        );
        assert_eq!(path, PathBuf::from("/home/me/.config/labd/labd.config.yaml"));
    }

    #[test]
    fn test_resolve_found_in_parent() {
        let path = resolve_config_path(
            found,
            PathBuf::from("/work/sub"),
            PathBuf::from("/home/me/.config/labd"),
            "labd.config.yaml",
            None,
        );
        assert_eq!(path, PathBuf::from("/work/labd.config.yaml"));
    }

    #[test]
    fn test_resolve_cli_file() {
        let absolute = resolve_config_path(
            found,
            PathBuf::from("/work/sub"),
            PathBuf::from("/home/me/.config/labd"),
            "labd.config.yaml",
            Some(PathBuf::from("/etc/labd.yaml")),
        );
        assert_eq!(absolute, PathBuf::from("/etc/labd.yaml"));

        let relative = resolve_config_path(
            found,
            PathBuf::from("/work/sub"),
            PathBuf::from("/home/me/.config/labd"),
            "labd.config.yaml",
            Some(PathBuf::from("../conf/labd.yaml")),
        );
        assert_eq!(relative, PathBuf::from("/work/conf/labd.yaml"));
    }

    #[test]
    fn test_find_in_parent_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("labd.test.yaml"), "").unwrap();

        let hit = super::find_in_parent(&nested, "labd.test.yaml");
        assert_eq!(hit, Some(dir.path().join("labd.test.yaml")));
        assert_eq!(super::find_in_parent(&nested, "labd.missing.yaml"), None);
    }
}
