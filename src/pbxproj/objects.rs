//! Object table resolution.
//!
//! A `project.pbxproj` stores every object in one flat `objects` dictionary
//! keyed by id, each tagged with an `isa`. Objects refer to each other by
//! id. This module follows those references for the records the extractor
//! needs and builds a [`ProjectGraph`].

use crate::core::{
    FileReference, NativeTarget, PackageProduct, ProjectGraph, RemotePackageReference,
    TargetDependency,
};
use crate::pbxproj::error::PbxprojError;
use crate::pbxproj::value::{Dictionary, Value};

pub const NATIVE_TARGET: &str = "PBXNativeTarget";
pub const TARGET_DEPENDENCY: &str = "PBXTargetDependency";
pub const PACKAGE_PRODUCT_DEPENDENCY: &str = "XCSwiftPackageProductDependency";
pub const REMOTE_PACKAGE_REFERENCE: &str = "XCRemoteSwiftPackageReference";
pub const FILE_REFERENCE: &str = "PBXFileReference";

/// Build the project graph from a parsed descriptor.
pub fn resolve(name: impl Into<String>, root: &Value) -> Result<ProjectGraph, PbxprojError> {
    let table = ObjectTable::new(root)?;

    let mut graph = ProjectGraph::new(name);
    for (id, object) in table.objects_of(NATIVE_TARGET) {
        graph.native_targets.push(table.native_target(id, object)?);
    }
    for (_, object) in table.objects_of(FILE_REFERENCE) {
        graph.file_references.push(file_reference(object));
    }

    Ok(graph)
}

/// The `objects` dictionary, with every entry checked for an `isa`.
struct ObjectTable<'a> {
    objects: Vec<(&'a str, &'a str, &'a Dictionary)>,
    by_id: &'a Dictionary,
}

impl<'a> ObjectTable<'a> {
    fn new(root: &'a Value) -> Result<Self, PbxprojError> {
        let by_id = root
            .get("objects")
            .and_then(Value::as_dictionary)
            .ok_or(PbxprojError::MissingObjects)?;

        let mut objects = Vec::with_capacity(by_id.len());
        for (id, value) in by_id {
            let object = value.as_dictionary().ok_or_else(|| PbxprojError::InvalidObject {
                id: id.clone(),
                reason: format!("expected a dictionary, found {}", value.type_name()),
            })?;
            let isa = object
                .get("isa")
                .and_then(Value::as_str)
                .ok_or_else(|| PbxprojError::InvalidObject {
                    id: id.clone(),
                    reason: "missing `isa`".to_string(),
                })?;
            objects.push((id.as_str(), isa, object));
        }

        Ok(ObjectTable { objects, by_id })
    }

    /// All objects with the given `isa`, in table order.
    fn objects_of(&self, isa: &'a str) -> impl Iterator<Item = (&'a str, &'a Dictionary)> + '_ {
        self.objects
            .iter()
            .filter(move |(_, object_isa, _)| *object_isa == isa)
            .map(|(id, _, object)| (*id, *object))
    }

    /// Look up an object by id, only if it has the expected `isa`.
    fn get(&self, id: &str, isa: &str) -> Option<&'a Dictionary> {
        let object = self.by_id.get(id)?.as_dictionary()?;
        (object.get("isa").and_then(Value::as_str) == Some(isa)).then_some(object)
    }

    fn native_target(&self, id: &str, object: &Dictionary) -> Result<NativeTarget, PbxprojError> {
        let name = required_str(id, NATIVE_TARGET, object, "name")?;

        let mut package_product_dependencies = Vec::new();
        for product_id in id_list(object, "packageProductDependencies") {
            if let Some(product) = self.package_product(product_id)? {
                package_product_dependencies.push(product);
            }
        }

        let mut dependencies = Vec::new();
        for dependency_id in id_list(object, "dependencies") {
            let Some(dependency) = self.get(dependency_id, TARGET_DEPENDENCY) else {
                continue;
            };
            let product = match dependency.get("productRef").and_then(Value::as_str) {
                Some(product_id) => self.package_product(product_id)?,
                None => None,
            };
            dependencies.push(TargetDependency { product });
        }

        Ok(NativeTarget {
            name: name.to_string(),
            package_product_dependencies,
            dependencies,
        })
    }

    fn package_product(&self, id: &str) -> Result<Option<PackageProduct>, PbxprojError> {
        let Some(object) = self.get(id, PACKAGE_PRODUCT_DEPENDENCY) else {
            return Ok(None);
        };

        let product_name = required_str(id, PACKAGE_PRODUCT_DEPENDENCY, object, "productName")?;
        let package = object
            .get("package")
            .and_then(Value::as_str)
            .and_then(|package_id| self.get(package_id, REMOTE_PACKAGE_REFERENCE))
            .map(remote_package_reference);

        Ok(Some(PackageProduct {
            product_name: product_name.to_string(),
            package,
        }))
    }
}

fn remote_package_reference(object: &Dictionary) -> RemotePackageReference {
    let repository_url = optional_str(object, "repositoryURL");
    RemotePackageReference {
        name: repository_url.as_deref().and_then(package_name_from_url),
        repository_url,
    }
}

fn file_reference(object: &Dictionary) -> FileReference {
    FileReference {
        last_known_file_type: optional_str(object, "lastKnownFileType"),
        name: optional_str(object, "name"),
        path: optional_str(object, "path"),
    }
}

/// Derive a package name from its repository URL.
///
/// `https://github.com/apple/swift-collections.git` names `swift-collections`.
/// Only a trailing `.git` is removed; one elsewhere in the name is kept.
pub fn package_name_from_url(url: &str) -> Option<String> {
    let last = url.rsplit('/').find(|segment| !segment.is_empty())?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    (!name.is_empty()).then(|| name.to_string())
}

fn optional_str(object: &Dictionary, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

fn required_str<'v>(
    id: &str,
    isa: &str,
    object: &'v Dictionary,
    field: &'static str,
) -> Result<&'v str, PbxprojError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| PbxprojError::MissingField {
            id: id.to_string(),
            isa: isa.to_string(),
            field,
        })
}

/// Ids listed under `key`; anything that is not a string is ignored.
fn id_list<'v>(object: &'v Dictionary, key: &str) -> impl Iterator<Item = &'v str> {
    object
        .get(key)
        .and_then(Value::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pbxproj::parser::parse;

    fn resolve_str(input: &str) -> Result<ProjectGraph, PbxprojError> {
        let value = parse("project.pbxproj", input).unwrap();
        resolve("App.xcodeproj", &value)
    }

    const PROJECT: &str = r#"{
	objects = {
		T1 /* App */ = {
			isa = PBXNativeTarget;
			name = App;
			dependencies = ( D1, D2, D9 );
			packageProductDependencies = ( P1, P1, P9 );
		};
		T2 /* Widget */ = {
			isa = PBXNativeTarget;
			name = Widget;
		};
		D1 = { isa = PBXTargetDependency; productRef = P1; };
		D2 = { isa = PBXTargetDependency; target = T2; };
		P1 = { isa = XCSwiftPackageProductDependency; package = R1; productName = Collections; };
		R1 = {
			isa = XCRemoteSwiftPackageReference;
			repositoryURL = "https://github.com/apple/swift-collections.git";
		};
		F1 = { isa = PBXFileReference; lastKnownFileType = folder; name = Core; path = Packages/Core; };
		F2 = { isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = main.swift; };
		G1 = { isa = PBXGroup; children = ( F1, F2 ); };
	};
	rootObject = X1;
}"#;

    #[test]
    fn test_resolve_targets() {
        let graph = resolve_str(PROJECT).unwrap();
        assert_eq!(graph.name, "App.xcodeproj");

        let names: Vec<_> = graph.native_targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["App", "Widget"]);

        let app = &graph.native_targets[0];
        // P9 is dangling and dropped; the duplicate P1 is kept
        assert_eq!(app.package_product_dependencies.len(), 2);
        assert_eq!(app.package_product_dependencies[0].product_name, "Collections");

        // D9 is dangling and dropped
        assert_eq!(app.dependencies.len(), 2);
        let package = app.dependencies[0]
            .product
            .as_ref()
            .and_then(|p| p.package.as_ref())
            .unwrap();
        assert_eq!(package.name.as_deref(), Some("swift-collections"));
        assert_eq!(
            package.repository_url.as_deref(),
            Some("https://github.com/apple/swift-collections.git")
        );
        assert!(app.dependencies[1].product.is_none());

        assert!(graph.native_targets[1].dependencies.is_empty());
    }

    #[test]
    fn test_resolve_file_references() {
        let graph = resolve_str(PROJECT).unwrap();
        assert_eq!(graph.file_references.len(), 2);
        assert_eq!(graph.file_references[0].last_known_file_type.as_deref(), Some("folder"));
        assert_eq!(graph.file_references[0].name.as_deref(), Some("Core"));
        assert_eq!(graph.file_references[0].path.as_deref(), Some("Packages/Core"));
        assert_eq!(graph.file_references[1].name, None);
    }

    #[test]
    fn test_package_of_wrong_isa_is_not_remote() {
        let graph = resolve_str(
            r#"{ objects = {
				T1 = { isa = PBXNativeTarget; name = App; dependencies = ( D1 ); };
				D1 = { isa = PBXTargetDependency; productRef = P1; };
				P1 = { isa = XCSwiftPackageProductDependency; package = L1; productName = Core; };
				L1 = { isa = XCLocalSwiftPackageReference; relativePath = Packages/Core; };
			}; }"#,
        )
        .unwrap();

        let product = graph.native_targets[0].dependencies[0].product.as_ref().unwrap();
        assert_eq!(product.product_name, "Core");
        assert!(product.package.is_none());
    }

    #[test]
    fn test_missing_objects() {
        let err = resolve_str("{ archiveVersion = 1; }").unwrap_err();
        assert!(matches!(err, PbxprojError::MissingObjects));
    }

    #[test]
    fn test_object_without_isa() {
        let err = resolve_str("{ objects = { A1 = { name = App; }; }; }").unwrap_err();
        assert!(matches!(err, PbxprojError::InvalidObject { ref id, .. } if id == "A1"));
    }

    #[test]
    fn test_object_that_is_not_a_dictionary() {
        let err = resolve_str("{ objects = { A1 = App; }; }").unwrap_err();
        assert!(err.to_string().contains("expected a dictionary, found string"));
    }

    #[test]
    fn test_target_without_name() {
        let err = resolve_str("{ objects = { T1 = { isa = PBXNativeTarget; }; }; }").unwrap_err();
        assert_eq!(
            err.to_string(),
            "PBXNativeTarget `T1` is missing required field `name`"
        );
    }

    #[test]
    fn test_product_without_name() {
        let err = resolve_str(
            r#"{ objects = {
				T1 = { isa = PBXNativeTarget; name = App; packageProductDependencies = ( P1 ); };
				P1 = { isa = XCSwiftPackageProductDependency; };
			}; }"#,
        )
        .unwrap_err();
        assert!(matches!(err, PbxprojError::MissingField { field: "productName", .. }));
    }

    #[test]
    fn test_package_name_from_url() {
        assert_eq!(
            package_name_from_url("https://github.com/apple/swift-nio.git").as_deref(),
            Some("swift-nio")
        );
        assert_eq!(
            package_name_from_url("https://github.com/apple/swift-nio/").as_deref(),
            Some("swift-nio")
        );
        assert_eq!(
            package_name_from_url("git@github.com:apple/swift-nio.git").as_deref(),
            Some("swift-nio")
        );
        assert_eq!(package_name_from_url(""), None);
        assert_eq!(package_name_from_url(".git"), None);
        assert_eq!(
            package_name_from_url("https://example.com/org/my.git-tools.git").as_deref(),
            Some("my.git-tools")
        );
    }
}
