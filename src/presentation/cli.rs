//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `install` and `uninstall` share one argument grammar (`DependencyArgs`)

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::application::DependencyRequest;
use crate::domain::value_objects::BuildMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ctc - CMake Template Creator
#[derive(Parser, Debug)]
#[command(name = "ctc")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(
    after_help = "Use 'ctc apply' to update CMakeLists.txt, or 'ctc run -U' to update and build."
)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project structure
    Init {
        /// Also create README.md
        #[arg(short, long)]
        readme: bool,

        /// Project name used in CMakeLists.txt
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing .libname / CMakeLists.txt
        #[arg(short, long)]
        force: bool,
    },

    /// Add a dependency to .libname
    Install {
        #[command(flatten)]
        dependency: DependencyArgs,
    },

    /// Remove a dependency from .libname
    Uninstall {
        #[command(flatten)]
        dependency: DependencyArgs,
    },

    /// Regenerate CMakeLists.txt from .libname (no build)
    Apply {
        /// Project name used in CMakeLists.txt
        #[arg(short, long)]
        name: Option<String>,

        /// Show what would change without writing
        #[arg(long)]
        diff: bool,
    },

    /// Build the project with CMake and copy executables to bin/
    Run {
        /// Project name used in CMakeLists.txt (with -U)
        #[arg(short, long)]
        name: Option<String>,

        /// Build mode
        #[arg(short, long, value_enum)]
        mode: Option<BuildMode>,

        /// Keep the build directory afterwards
        #[arg(short, long = "keep-build")]
        keep_build: bool,

        /// Regenerate CMakeLists.txt from .libname before building
        #[arg(short = 'U', long = "update-cmake")]
        update_cmake: bool,
    },

    /// Show all dependencies in .libname
    List,
}

/// Dependency selector shared by `install` and `uninstall`
///
/// Exactly one of the package positional or the flags must be given.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[command(group(
    ArgGroup::new("dependency")
        .required(true)
        .args(["package", "lib_path", "lib_name", "include_path", "toolchain", "link_override"])
))]
pub struct DependencyArgs {
    /// Package name, or `package:component`
    pub package: Option<String>,

    /// Package component (repeatable)
    #[arg(
        short = 'c',
        long = "component",
        value_name = "COMPONENT",
        requires = "package",
        conflicts_with_all = ["lib_path", "lib_name", "include_path", "toolchain", "link_override"]
    )]
    pub components: Vec<String>,

    /// Library search path
    #[arg(short = 'L', long = "lib-path", value_name = "PATH")]
    pub lib_path: Option<String>,

    /// Library to link by name
    #[arg(short = 'l', long = "lib", value_name = "NAME")]
    pub lib_name: Option<String>,

    /// Include directory
    #[arg(short = 'I', long = "include", value_name = "PATH")]
    pub include_path: Option<String>,

    /// CMAKE_TOOLCHAIN_FILE path
    #[arg(short = 'T', long = "toolchain", value_name = "FILE")]
    pub toolchain: Option<String>,

    /// Link name override, e.g. `glfw3=glfw` or `Qt6:Gui=Qt6::Gui`
    #[arg(short = 'A', long = "link-as", value_name = "KEY=TARGET")]
    pub link_override: Option<String>,
}

impl DependencyArgs {
    /// The selected dependency, `None` if no selector was given or
    /// components were given without a package
    pub fn to_request(&self) -> Option<DependencyRequest> {
        if let Some(spec) = &self.package {
            return Some(DependencyRequest::package(spec, &self.components));
        }
        if !self.components.is_empty() {
            return None;
        }
        let request = if let Some(v) = &self.lib_path {
            DependencyRequest::LibraryPath(v.clone())
        } else if let Some(v) = &self.lib_name {
            DependencyRequest::LibraryName(v.clone())
        } else if let Some(v) = &self.include_path {
            DependencyRequest::IncludePath(v.clone())
        } else if let Some(v) = &self.toolchain {
            DependencyRequest::ToolchainFile(v.clone())
        } else {
            DependencyRequest::LinkOverride(self.link_override.clone()?)
        };
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency(args: &[&str]) -> DependencyArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Install { dependency } | Commands::Uninstall { dependency } => dependency,
            other => panic!("Expected Install/Uninstall, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["ctc"]).is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::try_parse_from(["ctc", "init", "-r", "-n", "demo"]).unwrap();
        if let Commands::Init { readme, name, force } = cli.command {
            assert!(readme);
            assert_eq!(name.as_deref(), Some("demo"));
            assert!(!force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_install_package() {
        let dep = dependency(&["ctc", "install", "fmt"]);
        assert_eq!(dep.to_request(), Some(DependencyRequest::package("fmt", &[])));
    }

    #[test]
    fn test_cli_parse_install_components() {
        let dep = dependency(&["ctc", "install", "Qt6", "-c", "Core", "-c", "Gui"]);
        assert_eq!(
            dep.to_request(),
            Some(DependencyRequest::Package {
                name: "Qt6".to_string(),
                components: vec!["Core".to_string(), "Gui".to_string()],
            })
        );
    }

    #[test]
    fn test_cli_parse_flag_selectors() {
        let cases = [
            ("-L", DependencyRequest::LibraryPath("x".into())),
            ("-l", DependencyRequest::LibraryName("x".into())),
            ("-I", DependencyRequest::IncludePath("x".into())),
            ("-T", DependencyRequest::ToolchainFile("x".into())),
            ("-A", DependencyRequest::LinkOverride("x".into())),
        ];
        for (flag, expected) in cases {
            let dep = dependency(&["ctc", "uninstall", flag, "x"]);
            assert_eq!(dep.to_request(), Some(expected), "{}", flag);
        }
    }

    #[test]
    fn test_cli_install_requires_selector() {
        assert!(Cli::try_parse_from(["ctc", "install"]).is_err());
    }

    #[test]
    fn test_cli_install_rejects_two_selectors() {
        assert!(Cli::try_parse_from(["ctc", "install", "fmt", "-l", "m"]).is_err());
    }

    #[test]
    fn test_cli_component_requires_package() {
        assert!(Cli::try_parse_from(["ctc", "install", "-l", "m", "-c", "Gui"]).is_err());
        assert!(Cli::try_parse_from(["ctc", "uninstall", "-c", "Gui", "-T", "tc.cmake"]).is_err());
        assert!(Cli::try_parse_from(["ctc", "install", "-c", "Gui"]).is_err());
    }

    #[test]
    fn test_components_without_package_select_nothing() {
        let dep = DependencyArgs {
            package: None,
            components: vec!["Gui".to_string()],
            lib_path: None,
            lib_name: Some("m".to_string()),
            include_path: None,
            toolchain: None,
            link_override: None,
        };
        assert_eq!(dep.to_request(), None);
    }

    #[test]
    fn test_cli_parse_run() {
        let cli =
            Cli::try_parse_from(["ctc", "run", "-m", "Debug", "-k", "-U", "-n", "demo"]).unwrap();
        if let Commands::Run {
            name,
            mode,
            keep_build,
            update_cmake,
        } = cli.command
        {
            assert_eq!(name.as_deref(), Some("demo"));
            assert_eq!(mode, Some(BuildMode::Debug));
            assert!(keep_build);
            assert!(update_cmake);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["ctc", "run", "-m", "Fast"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ctc", "list", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_cli_parse_apply_diff() {
        let cli = Cli::try_parse_from(["ctc", "apply", "--diff"]).unwrap();
        assert!(matches!(cli.command, Commands::Apply { diff: true, name: None }));
    }
}
