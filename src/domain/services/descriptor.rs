//! CMakeLists.txt synthesis
//!
//! Turns a project name and an ordered list of dependency entries into the
//! managed section of `CMakeLists.txt`. Pure: no I/O, and identical inputs
//! always produce byte-identical output.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::entities::{DependencyEntry, DependencyKind};

/// Project name used when none is given
pub const DEFAULT_PROJECT_NAME: &str = "my_project";

/// First line of the generated section
pub const MANAGED_SECTION_HEADER: &str = "# === CTC MANAGED SECTION (auto-generated) ===";

/// Fixed project-local include directory, always listed first
const PROJECT_INCLUDE_DIR: &str = "include";

/// Entries grouped by kind, borrowing from the input slice
#[derive(Debug, Default)]
struct Partitioned<'a> {
    packages: Vec<&'a str>,
    lib_paths: Vec<&'a str>,
    lib_names: Vec<&'a str>,
    include_paths: Vec<&'a str>,
    toolchain_file: Option<&'a str>,
    /// package -> components, components in insertion order
    components: BTreeMap<&'a str, Vec<&'a str>>,
    /// `pkg` or `pkg:component` -> literal link target
    overrides: HashMap<&'a str, &'a str>,
}

impl<'a> Partitioned<'a> {
    fn from_entries(entries: &'a [DependencyEntry]) -> Self {
        let mut parts = Self::default();

        for entry in entries {
            match entry.kind() {
                DependencyKind::Package => parts.packages.push(entry.value()),
                DependencyKind::LibraryPath => parts.lib_paths.push(entry.value()),
                DependencyKind::LibraryName => parts.lib_names.push(entry.value()),
                DependencyKind::IncludePath => parts.include_paths.push(entry.value()),
                DependencyKind::ToolchainFile => {
                    // first non-empty toolchain wins
                    if parts.toolchain_file.is_none() && !entry.value().is_empty() {
                        parts.toolchain_file = Some(entry.value());
                    }
                }
                DependencyKind::PackageComponent => {
                    // values without ':' contribute nothing
                    if let Some((package, component)) = entry.as_component() {
                        parts.components.entry(package).or_default().push(component);
                    }
                }
                DependencyKind::LinkOverride => {
                    // values without '=' contribute nothing; later keys replace earlier ones
                    if let Some((key, target)) = entry.as_link_override() {
                        parts.overrides.insert(key, target);
                    }
                }
            }
        }

        parts
    }

    /// Distinct package names, bare or with components, sorted
    fn all_packages(&self) -> BTreeSet<&'a str> {
        self.packages
            .iter()
            .copied()
            .chain(self.components.keys().copied())
            .collect()
    }

    fn components_of(&self, package: &str) -> Option<&[&'a str]> {
        self.components
            .get(package)
            .map(Vec::as_slice)
            .filter(|c| !c.is_empty())
    }

    fn has_link_targets(&self) -> bool {
        !self.packages.is_empty() || !self.components.is_empty() || !self.lib_names.is_empty()
    }

    /// Link targets in emission order
    ///
    /// Packages with components first (sorted), then bare packages not
    /// already covered (insertion order), then plain library names.
    fn link_targets(&self) -> Vec<String> {
        let mut targets = Vec::new();

        for (&package, components) in &self.components {
            for &component in components {
                targets.push(resolve_with(&self.overrides, package, Some(component)));
            }
        }

        let mut seen: BTreeSet<&str> = self.components.keys().copied().collect();
        for &package in &self.packages {
            if seen.insert(package) {
                targets.push(resolve_with(&self.overrides, package, None));
            }
        }

        targets.extend(self.lib_names.iter().map(|lib| lib.to_string()));
        targets
    }
}

/// Resolve the name used in `target_link_libraries` for a package or component
///
/// Precedence: `pkg:component` override, then `pkg` override, then the
/// `<pkg>::<component>` (or `<pkg>::<pkg>`) convention.
pub fn resolve_link_target(
    entries: &[DependencyEntry],
    package: &str,
    component: Option<&str>,
) -> String {
    let parts = Partitioned::from_entries(entries);
    resolve_with(&parts.overrides, package, component)
}

fn resolve_with(overrides: &HashMap<&str, &str>, package: &str, component: Option<&str>) -> String {
    if let Some(component) = component {
        let key = format!("{}:{}", package, component);
        if let Some(target) = overrides.get(key.as_str()) {
            return target.to_string();
        }
    }

    if let Some(target) = overrides.get(package) {
        return target.to_string();
    }

    format!("{}::{}", package, component.unwrap_or(package))
}

/// Generate the managed section of `CMakeLists.txt`
pub fn generate(project_name: &str, entries: &[DependencyEntry]) -> String {
    let parts = Partitioned::from_entries(entries);
    let mut out = String::new();

    out.push_str(MANAGED_SECTION_HEADER);
    out.push('\n');
    out.push_str("# Edits in this section may be overwritten by 'ctc apply' or 'ctc run'.\n\n");

    out.push_str("cmake_minimum_required(VERSION 3.17)\n");

    // CMake only honors the toolchain file when it is set before project()
    if let Some(toolchain) = parts.toolchain_file {
        out.push_str("\n# Toolchain\n");
        out.push_str(&format!(
            "set(CMAKE_TOOLCHAIN_FILE \"{}\" CACHE FILEPATH \"Toolchain file\")\n\n",
            toolchain
        ));
    }

    out.push_str(&format!("project({} VERSION 1.0.0)\n\n", project_name));

    out.push_str("# Set C++17 standard\n");
    out.push_str("set(CMAKE_CXX_STANDARD 17)\n");
    out.push_str("set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\n");

    write_discovery_blocks(&mut out, &parts);

    if !parts.lib_paths.is_empty() {
        out.push_str("# Library search paths\n");
        for path in &parts.lib_paths {
            out.push_str(&format!("link_directories({})\n", path));
        }
        out.push('\n');
    }

    out.push_str("# Include directories\n");
    out.push_str(&format!("include_directories({})\n", PROJECT_INCLUDE_DIR));
    for path in &parts.include_paths {
        out.push_str(&format!("include_directories({})\n", path));
    }
    out.push('\n');

    out.push_str("# Collect source files from lib directory\n");
    out.push_str("file(GLOB_RECURSE LIB_SOURCES \"lib/*.cpp\" \"lib/*.cc\" \"lib/*.c\")\n\n");
    out.push_str("# Collect source files from app directory\n");
    out.push_str("file(GLOB_RECURSE APP_SOURCES \"app/*.cpp\" \"app/*.cc\" \"app/*.c\")\n\n");

    out.push_str("# Create executable\n");
    out.push_str("add_executable(${PROJECT_NAME} ${APP_SOURCES} ${LIB_SOURCES})\n\n");

    out.push_str("# Set output directory\n");
    out.push_str("set_target_properties(${PROJECT_NAME} PROPERTIES\n");
    out.push_str("    RUNTIME_OUTPUT_DIRECTORY ${CMAKE_SOURCE_DIR}/bin\n");
    out.push_str(")\n\n");

    if parts.has_link_targets() {
        out.push_str("# Link libraries\n");
        out.push_str("target_link_libraries(${PROJECT_NAME}");
        for target in parts.link_targets() {
            out.push(' ');
            out.push_str(&target);
        }
        out.push_str(")\n");
    }

    out
}

fn write_discovery_blocks(out: &mut String, parts: &Partitioned<'_>) {
    let packages = parts.all_packages();
    if packages.is_empty() {
        return;
    }

    out.push_str("# Find packages (try CONFIG first, fallback to MODULE)\n");
    for package in packages {
        let components = components_clause(parts.components_of(package));
        out.push_str(&format!(
            "find_package({} QUIET CONFIG{})\n",
            package, components
        ));
        out.push_str(&format!("if(NOT {}_FOUND)\n", package));
        out.push_str(&format!(
            "    find_package({} REQUIRED MODULE{})\n",
            package, components
        ));
        out.push_str("endif()\n");
    }
    out.push('\n');
}

fn components_clause(components: Option<&[&str]>) -> String {
    match components {
        Some(components) => format!(" COMPONENTS {}", components.join(" ")),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(pkg: &str, comp: &str) -> DependencyEntry {
        DependencyEntry::package_component(pkg, comp)
    }

    fn link_line(text: &str) -> &str {
        text.lines()
            .find(|l| l.starts_with("target_link_libraries("))
            .expect("link directive")
    }

    #[test]
    fn empty_list_has_only_fixed_sections() {
        let text = generate("demo", &[]);

        assert!(text.starts_with(MANAGED_SECTION_HEADER));
        assert!(text.contains("project(demo VERSION 1.0.0)"));
        assert!(text.contains("set(CMAKE_CXX_STANDARD 17)"));
        assert!(text.contains("include_directories(include)"));
        assert!(text.contains("file(GLOB_RECURSE LIB_SOURCES"));
        assert!(text.contains("file(GLOB_RECURSE APP_SOURCES"));
        assert!(text.contains("add_executable(${PROJECT_NAME}"));
        assert!(text.contains("RUNTIME_OUTPUT_DIRECTORY ${CMAKE_SOURCE_DIR}/bin"));

        assert!(!text.contains("find_package"));
        assert!(!text.contains("link_directories"));
        assert!(!text.contains("target_link_libraries"));
        assert!(!text.contains("CMAKE_TOOLCHAIN_FILE"));
    }

    #[test]
    fn generate_is_deterministic() {
        let entries = vec![
            DependencyEntry::package("Zlib"),
            component("Qt6", "Widgets"),
            DependencyEntry::link_override("Zlib=ZLIB::ZLIB"),
            DependencyEntry::library_name("m"),
        ];
        assert_eq!(generate("demo", &entries), generate("demo", &entries));
    }

    #[test]
    fn discovery_blocks_are_sorted() {
        let entries = vec![DependencyEntry::package("Zlib"), DependencyEntry::package("Abc")];
        let text = generate("demo", &entries);

        let abc = text.find("find_package(Abc QUIET CONFIG)").unwrap();
        let zlib = text.find("find_package(Zlib QUIET CONFIG)").unwrap();
        assert!(abc < zlib);
    }

    #[test]
    fn discovery_block_falls_back_to_module_mode() {
        let text = generate("demo", &[DependencyEntry::package("fmt")]);
        assert!(text.contains(concat!(
            "find_package(fmt QUIET CONFIG)\n",
            "if(NOT fmt_FOUND)\n",
            "    find_package(fmt REQUIRED MODULE)\n",
            "endif()\n",
        )));
    }

    #[test]
    fn discovery_block_lists_components_in_both_modes() {
        let entries = vec![component("Qt6", "Gui"), component("Qt6", "Widgets")];
        let text = generate("demo", &entries);

        assert!(text.contains("find_package(Qt6 QUIET CONFIG COMPONENTS Gui Widgets)"));
        assert!(text.contains("    find_package(Qt6 REQUIRED MODULE COMPONENTS Gui Widgets)"));
    }

    #[test]
    fn package_with_and_without_components_gets_one_block() {
        let entries = vec![DependencyEntry::package("Qt6"), component("Qt6", "Core")];
        let text = generate("demo", &entries);

        assert_eq!(text.matches("QUIET CONFIG").count(), 1);
        assert_eq!(link_line(&text), "target_link_libraries(${PROJECT_NAME} Qt6::Core)");
    }

    #[test]
    fn component_override_beats_package_override() {
        let entries = vec![
            component("Qt6", "Gui"),
            DependencyEntry::link_override("Qt6:Gui=Qt6::Gui"),
            DependencyEntry::link_override("Qt6=Qt6::Core"),
        ];
        let text = generate("demo", &entries);
        assert_eq!(link_line(&text), "target_link_libraries(${PROJECT_NAME} Qt6::Gui)");
    }

    #[test]
    fn package_override_applies_to_components_without_their_own() {
        let entries = vec![
            component("Qt6", "Gui"),
            component("Qt6", "Widgets"),
            DependencyEntry::link_override("Qt6:Gui=Qt6Gui"),
            DependencyEntry::link_override("Qt6=Qt6All"),
        ];
        let text = generate("demo", &entries);
        assert_eq!(
            link_line(&text),
            "target_link_libraries(${PROJECT_NAME} Qt6Gui Qt6All)"
        );
    }

    #[test]
    fn default_component_convention() {
        let text = generate("demo", &[component("glfw3", "glfw")]);
        assert_eq!(link_line(&text), "target_link_libraries(${PROJECT_NAME} glfw3::glfw)");
    }

    #[test]
    fn bare_package_default_and_override() {
        let entries = vec![
            DependencyEntry::package("fmt"),
            DependencyEntry::package("glfw3"),
            DependencyEntry::link_override("glfw3=glfw"),
        ];
        let text = generate("demo", &entries);
        assert_eq!(
            link_line(&text),
            "target_link_libraries(${PROJECT_NAME} fmt::fmt glfw)"
        );
    }

    #[test]
    fn link_order_components_then_packages_then_libraries() {
        let entries = vec![
            DependencyEntry::library_name("pthread"),
            DependencyEntry::package("fmt"),
            component("Zed", "a"),
            component("Boost", "system"),
            component("Zed", "b"),
            DependencyEntry::library_name("m"),
        ];
        let text = generate("demo", &entries);
        assert_eq!(
            link_line(&text),
            "target_link_libraries(${PROJECT_NAME} Boost::system Zed::a Zed::b fmt::fmt pthread m)"
        );
    }

    #[test]
    fn library_names_alone_produce_link_directive() {
        let text = generate("demo", &[DependencyEntry::library_name("m")]);
        assert_eq!(link_line(&text), "target_link_libraries(${PROJECT_NAME} m)");
        assert!(!text.contains("find_package"));
    }

    #[test]
    fn paths_keep_insertion_order() {
        let entries = vec![
            DependencyEntry::library_path("/z/lib"),
            DependencyEntry::include_path("vendor"),
            DependencyEntry::library_path("/a/lib"),
            DependencyEntry::include_path("gen"),
        ];
        let text = generate("demo", &entries);

        assert!(text.contains(
            "# Library search paths\nlink_directories(/z/lib)\nlink_directories(/a/lib)\n\n"
        ));
        assert!(text.contains(concat!(
            "include_directories(include)\n",
            "include_directories(vendor)\n",
            "include_directories(gen)\n\n",
        )));
    }

    #[test]
    fn toolchain_precedes_project_and_first_wins() {
        let entries = vec![
            DependencyEntry::toolchain_file("first.cmake"),
            DependencyEntry::toolchain_file("second.cmake"),
        ];
        let text = generate("demo", &entries);

        let toolchain = text
            .find("set(CMAKE_TOOLCHAIN_FILE \"first.cmake\" CACHE FILEPATH \"Toolchain file\")")
            .unwrap();
        let project = text.find("project(demo").unwrap();
        assert!(toolchain < project);
        assert!(!text.contains("second.cmake"));
    }

    #[test]
    fn malformed_component_and_override_are_dropped() {
        let entries = vec![
            DependencyEntry::new(DependencyKind::PackageComponent, "NoSeparator"),
            DependencyEntry::link_override("NoEquals"),
        ];
        let text = generate("demo", &entries);

        assert!(!text.contains("NoSeparator"));
        assert!(!text.contains("NoEquals"));
        assert!(!text.contains("target_link_libraries"));
    }

    #[test]
    fn later_override_for_same_key_wins() {
        let entries = vec![
            DependencyEntry::package("glfw3"),
            DependencyEntry::link_override("glfw3=old"),
            DependencyEntry::link_override("glfw3=new"),
        ];
        assert_eq!(resolve_link_target(&entries, "glfw3", None), "new");
    }

    #[test]
    fn override_target_may_contain_equals() {
        let entries = vec![DependencyEntry::link_override("pkg=a=b")];
        assert_eq!(resolve_link_target(&entries, "pkg", None), "a=b");
    }

    #[test]
    fn resolve_link_target_defaults() {
        assert_eq!(resolve_link_target(&[], "fmt", None), "fmt::fmt");
        assert_eq!(resolve_link_target(&[], "Qt6", Some("Gui")), "Qt6::Gui");
    }
}
