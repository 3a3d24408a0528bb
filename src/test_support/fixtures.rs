//! Test fixtures for on-disk projects.
//!
//! [`PbxprojFixture`] renders a small but well-formed `project.pbxproj`
//! and writes it inside an `.xcodeproj` bundle.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Fixture for an `.xcodeproj` bundle.
#[derive(Debug, Clone)]
pub struct PbxprojFixture {
    /// Bundle name without the `.xcodeproj` extension.
    pub name: String,
    /// Targets and the products they depend on.
    pub targets: Vec<(String, Vec<String>)>,
    /// Products that come from a remote package (product -> repository URL).
    pub remote_packages: Vec<(String, String)>,
    /// Folder references (name -> path).
    pub folders: Vec<(String, String)>,
}

impl PbxprojFixture {
    /// Create a new fixture with no targets.
    pub fn new(name: impl Into<String>) -> Self {
        PbxprojFixture {
            name: name.into(),
            targets: Vec::new(),
            remote_packages: Vec::new(),
            folders: Vec::new(),
        }
    }

    /// Add a native target depending on the given package products.
    pub fn target(mut self, name: &str, products: &[&str]) -> Self {
        self.targets.push((
            name.to_string(),
            products.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    /// Make `product` come from a remote package at `url`.
    pub fn remote_package(mut self, product: &str, url: &str) -> Self {
        self.remote_packages
            .push((product.to_string(), url.to_string()));
        self
    }

    /// Add a folder reference.
    pub fn folder_reference(mut self, name: &str, path: &str) -> Self {
        self.folders.push((name.to_string(), path.to_string()));
        self
    }

    /// Render the `project.pbxproj` contents.
    pub fn render(&self) -> String {
        let mut ids = IdAllocator::default();
        let mut objects = String::new();

        for (target, products) in &self.targets {
            let target_id = ids.next();
            let mut product_ids = Vec::new();
            let mut dependency_ids = Vec::new();

            for product in products {
                let product_id = ids.next();
                let package_id = self.remote_url(product).map(|url| {
                    let package_id = ids.next();
                    object(
                        &mut objects,
                        &package_id,
                        "XCRemoteSwiftPackageReference",
                        &[("repositoryURL", url)],
                    );
                    package_id
                });

                let mut fields = vec![("productName", product.as_str())];
                if let Some(package_id) = &package_id {
                    fields.push(("package", package_id.as_str()));
                }
                object(
                    &mut objects,
                    &product_id,
                    "XCSwiftPackageProductDependency",
                    &fields,
                );

                if package_id.is_some() {
                    let dependency_id = ids.next();
                    object(
                        &mut objects,
                        &dependency_id,
                        "PBXTargetDependency",
                        &[("productRef", product_id.as_str())],
                    );
                    dependency_ids.push(dependency_id);
                }
                product_ids.push(product_id);
            }

            let _ = writeln!(objects, "\t\t{target_id} /* {target} */ = {{");
            let _ = writeln!(objects, "\t\t\tisa = PBXNativeTarget;");
            let _ = writeln!(objects, "\t\t\tname = {};", quote(target));
            let _ = writeln!(objects, "\t\t\tdependencies = ({});", list(&dependency_ids));
            let _ = writeln!(
                objects,
                "\t\t\tpackageProductDependencies = ({});",
                list(&product_ids)
            );
            let _ = writeln!(objects, "\t\t}};");
        }

        for (name, path) in &self.folders {
            let id = ids.next();
            object(
                &mut objects,
                &id,
                "PBXFileReference",
                &[
                    ("lastKnownFileType", "folder"),
                    ("name", name.as_str()),
                    ("path", path.as_str()),
                    ("sourceTree", "<group>"),
                ],
            );
        }

        format!(
            "// !$*UTF8*$!\n{{\n\tarchiveVersion = 1;\n\tclasses = {{\n\t}};\n\tobjectVersion = 56;\n\tobjects = {{\n{objects}\t}};\n\trootObject = {};\n}}\n",
            ids.next()
        )
    }

    /// Write the bundle into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let bundle = dir.join(format!("{}.xcodeproj", self.name));
        std::fs::create_dir_all(&bundle).expect("failed to create fixture bundle");
        std::fs::write(bundle.join("project.pbxproj"), self.render())
            .expect("failed to write fixture descriptor");
        bundle
    }

    fn remote_url(&self, product: &str) -> Option<&str> {
        self.remote_packages
            .iter()
            .find(|(name, _)| name == product)
            .map(|(_, url)| url.as_str())
    }
}

/// Hands out 24-digit hex ids in the style Xcode uses.
#[derive(Debug, Default)]
struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    fn next(&mut self) -> String {
        self.next += 1;
        format!("{:024X}", self.next)
    }
}

fn object(out: &mut String, id: &str, isa: &str, fields: &[(&str, &str)]) {
    let _ = write!(out, "\t\t{id} = {{isa = {isa}; ");
    for (key, value) in fields {
        let _ = write!(out, "{key} = {}; ", quote(value));
    }
    let _ = writeln!(out, "}};");
}

fn list(ids: &[String]) -> String {
    ids.iter().map(|id| format!("\n\t\t\t\t{id},")).collect::<String>()
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pbxproj::parse_str;

    #[test]
    fn test_fixture_resolves() {
        let fixture = PbxprojFixture::new("App")
            .target("App", &["Foo", "Local"])
            .target("Tests", &[])
            .remote_package("Foo", "https://example.com/org/foo.git")
            .folder_reference("Bar", "Vendor/Bar");

        let graph = parse_str("App.xcodeproj", "project.pbxproj", &fixture.render()).unwrap();

        assert_eq!(graph.native_targets.len(), 2);
        let app = &graph.native_targets[0];
        assert_eq!(app.name, "App");
        assert_eq!(app.package_product_dependencies.len(), 2);
        assert_eq!(app.dependencies.len(), 1);

        let package = app.dependencies[0]
            .product
            .as_ref()
            .and_then(|p| p.package.as_ref())
            .unwrap();
        assert_eq!(package.name.as_deref(), Some("foo"));
        assert_eq!(
            package.repository_url.as_deref(),
            Some("https://example.com/org/foo.git")
        );

        assert_eq!(graph.file_references[0].path.as_deref(), Some("Vendor/Bar"));
    }
}
