use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Preserved)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Created)
                }
            }
        }
    }
}

impl<T: GeneratedFile + ?Sized> GeneratedFile for Box<T> {
    fn path(&self, base: &Path) -> PathBuf {
        self.as_ref().path(base)
    }

    fn rules(&self) -> FileRules {
        self.as_ref().rules()
    }

    fn render(&self) -> String {
        self.as_ref().render()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// A regenerated file was (re)written
    Written,
    /// A create-once file did not exist and was created
    Created,
    /// A create-once file already existed and was left untouched
    Preserved,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Generated code: rewritten on every run.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// User-owned files and runtime templates: written on the first run only.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (customization points)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        name: &'static str,
        content: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Fixture {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.js");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Base.js"), "original").unwrap();

        let file = Fixture {
            name: "Base.js",
            content: "updated",
            rules: FileRules::always(),
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Base.js")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_create_once_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let file = Fixture {
            name: "Model.js",
            content: "new content",
            rules: FileRules::create_once(),
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Created);
        assert_eq!(
            fs::read_to_string(temp.path().join("Model.js")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_create_once_preserves_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Model.js"), "customized").unwrap();

        let file = Fixture {
            name: "Model.js",
            content: "should not write",
            rules: FileRules::create_once(),
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Preserved);
        assert_eq!(
            fs::read_to_string(temp.path().join("Model.js")).unwrap(),
            "customized"
        );
    }
}
