//! Dependency entry entity - one typed declaration from `.libname`
//!
//! Each entry is persisted as a single line: a fixed tag, a colon, and the
//! raw value (`PKG:fmt`, `LIBPATH:/opt/lib`, `PKGCOMP:Qt6:Gui`, ...).
//! Lines without a recognized tag are legacy bare package names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of dependency declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// Package discovered with `find_package` (e.g. `fmt`)
    Package,
    /// Library search directory (`-L`)
    LibraryPath,
    /// Library linked by name (`-l`)
    LibraryName,
    /// Extra include directory (`-I`)
    IncludePath,
    /// `CMAKE_TOOLCHAIN_FILE` path (`-T`)
    ToolchainFile,
    /// `<package>:<component>` requirement
    PackageComponent,
    /// `<pkg>[:<component>]=<target>` link name override
    LinkOverride,
}

impl DependencyKind {
    /// Every kind, in display order
    pub const ALL: [DependencyKind; 7] = [
        DependencyKind::Package,
        DependencyKind::LibraryPath,
        DependencyKind::LibraryName,
        DependencyKind::IncludePath,
        DependencyKind::ToolchainFile,
        DependencyKind::PackageComponent,
        DependencyKind::LinkOverride,
    ];

    /// Line prefix used in `.libname`, including the trailing colon
    pub fn tag(&self) -> &'static str {
        match self {
            DependencyKind::Package => "PKG:",
            DependencyKind::LibraryPath => "LIBPATH:",
            DependencyKind::LibraryName => "LIB:",
            DependencyKind::IncludePath => "INCPATH:",
            DependencyKind::ToolchainFile => "TOOLCHAIN:",
            DependencyKind::PackageComponent => "PKGCOMP:",
            DependencyKind::LinkOverride => "LINKOVR:",
        }
    }

    /// Human-readable name, used in command output
    pub fn display_name(&self) -> &'static str {
        match self {
            DependencyKind::Package => "package",
            DependencyKind::LibraryPath => "library path",
            DependencyKind::LibraryName => "library",
            DependencyKind::IncludePath => "include path",
            DependencyKind::ToolchainFile => "toolchain file",
            DependencyKind::PackageComponent => "package component",
            DependencyKind::LinkOverride => "link override",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single dependency declaration
///
/// Immutable value type: two entries are the same declaration exactly when
/// both kind and value match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEntry {
    kind: DependencyKind,
    value: String,
}

impl DependencyEntry {
    pub fn new(kind: DependencyKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        Self::new(DependencyKind::Package, name)
    }

    pub fn library_path(path: impl Into<String>) -> Self {
        Self::new(DependencyKind::LibraryPath, path)
    }

    pub fn library_name(name: impl Into<String>) -> Self {
        Self::new(DependencyKind::LibraryName, name)
    }

    pub fn include_path(path: impl Into<String>) -> Self {
        Self::new(DependencyKind::IncludePath, path)
    }

    pub fn toolchain_file(path: impl Into<String>) -> Self {
        Self::new(DependencyKind::ToolchainFile, path)
    }

    /// `PackageComponent` entry with value `<package>:<component>`
    pub fn package_component(package: &str, component: &str) -> Self {
        Self::new(
            DependencyKind::PackageComponent,
            format!("{}:{}", package, component),
        )
    }

    /// `LinkOverride` entry from a raw `<key>=<target>` mapping
    pub fn link_override(mapping: impl Into<String>) -> Self {
        Self::new(DependencyKind::LinkOverride, mapping)
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this entry declares the same `(kind, value)` pair
    pub fn same_as(&self, other: &DependencyEntry) -> bool {
        self.kind == other.kind && self.value == other.value
    }

    /// Encode as a `.libname` line (without newline)
    pub fn to_line(&self) -> String {
        format!("{}{}", self.kind.tag(), self.value)
    }

    /// Decode a `.libname` line
    ///
    /// Never fails: anything without a known tag is treated as a bare
    /// package name so that old untagged files keep working.
    pub fn from_line(line: &str) -> Self {
        for kind in DependencyKind::ALL {
            if let Some(value) = line.strip_prefix(kind.tag()) {
                return Self::new(kind, value);
            }
        }
        Self::package(line)
    }

    /// Split a `PackageComponent` value into `(package, component)`
    ///
    /// Returns `None` for other kinds or when the `:` separator is missing.
    pub fn as_component(&self) -> Option<(&str, &str)> {
        match self.kind {
            DependencyKind::PackageComponent => self.value.split_once(':'),
            _ => None,
        }
    }

    /// Split a `LinkOverride` value into `(key, target)`
    ///
    /// Returns `None` for other kinds or when the `=` separator is missing.
    pub fn as_link_override(&self) -> Option<(&str, &str)> {
        match self.kind {
            DependencyKind::LinkOverride => self.value.split_once('='),
            _ => None,
        }
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
