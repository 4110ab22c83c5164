use std::path::{Component, Path, PathBuf};

/// The directory sandbox all local operations are confined to.
#[derive(Clone, Debug)]
pub struct WorkDir {
    root: PathBuf,
}

impl WorkDir {

    /// Confine to the given root.
    pub fn new(root: &Path) -> Self {
        WorkDir { root: root.to_path_buf() }
    }

    /// The sandbox root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a model-supplied relative path against the root, refusing
    /// absolute paths and any traversal that would escape it. Purely
    /// lexical, so targets that do not exist yet resolve too.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, String> {
        let mut depth = 0usize;

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(_) => depth += 1,
                Component::CurDir => {}
                Component::ParentDir => {
                    if depth == 0 {
                        return Err(outside(relative));
                    }
                    depth -= 1;
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(outside(relative));
                }
            }
        }

        Ok(self.root.join(relative))
    }
}

fn outside(relative: &str) -> String {
    format!("Error: Cannot access \"{relative}\" as it is outside the permitted working directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_paths() {
        let workdir = WorkDir::new(Path::new("/sandbox"));

        assert_eq!(workdir.resolve("a.txt").unwrap(), PathBuf::from("/sandbox/a.txt"));
        assert_eq!(workdir.resolve("sub/a.txt").unwrap(), PathBuf::from("/sandbox/sub/a.txt"));
        assert_eq!(workdir.resolve("./a.txt").unwrap(), PathBuf::from("/sandbox/./a.txt"));
        assert_eq!(workdir.resolve("sub/../a.txt").unwrap(), PathBuf::from("/sandbox/sub/../a.txt"));
    }

    #[test]
    fn test_refuse_escapes() {
        let workdir = WorkDir::new(Path::new("/sandbox"));

        assert!(workdir.resolve("..").is_err());
        assert!(workdir.resolve("../etc/passwd").is_err());
        assert!(workdir.resolve("sub/../../etc").is_err());
        assert!(workdir.resolve("/etc/passwd").is_err());
    }

    #[test]
    fn test_error_message_names_path() {
        let workdir = WorkDir::new(Path::new("/sandbox"));
        let message = workdir.resolve("../secrets").unwrap_err();

        assert!(message.contains("\"../secrets\""));
        assert!(message.contains("outside the permitted working directory"));
    }
}
