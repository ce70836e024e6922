//! Project fixture utilities

use std::path::Path;

use tempfile::TempDir;

/// A throwaway project with Cargo.toml, pyproject.toml and docs/conf.py
pub struct ProjectFixture {
    pub dir: TempDir,
}

impl ProjectFixture {
    /// Every source declares `version`
    pub fn consistent(version: &str) -> Self {
        Self::with_versions(version, version, version, version)
    }

    pub fn with_versions(cargo: &str, project: &str, poetry: &str, docs: &str) -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write(
            "Cargo.toml",
            &format!(
                r#"[package]
name = "pyarc2"
version = "{cargo}"
edition = "2021"

[lib]
name = "pyarc2"
crate-type = ["cdylib"]

[dependencies]
pyo3 = {{ version = "0.20", features = ["extension-module"] }}
"#
            ),
        );
        fixture.write(
            "pyproject.toml",
            &format!(
                r#"[build-system]
requires = ["maturin>=1.0,<2.0"]
build-backend = "maturin"

[project]
name = "pyarc2"
version = "{project}"
requires-python = ">=3.8"

[tool.poetry]
name = "pyarc2"
version = "{poetry}"
description = "Python bindings for ArC2"
"#
            ),
        );
        fixture.write(
            "docs/conf.py",
            &format!(
                r#"# Configuration file for the Sphinx documentation builder.
project = 'pyarc2'
copyright = '2021, The ArC2 developers'

# The full version, including alpha/beta/rc tags
release = '{docs}'

extensions = ['sphinx.ext.autodoc']
"#
            ),
        );
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
