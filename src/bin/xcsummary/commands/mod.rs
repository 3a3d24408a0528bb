//! Command implementations

pub mod completions;
pub mod packages;
pub mod show;
pub mod targets;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use xcsummary::core::Project;
use xcsummary::ops::parse_project;
use xcsummary::pbxproj::bundle_paths;
use xcsummary::util::shell::{format_duration, Status};
use xcsummary::util::{GlobalContext, Shell};

/// Resolve the project path and parse it, reporting progress on stderr.
pub fn load_project(ctx: &GlobalContext, shell: &Shell, path: Option<&Path>) -> Result<Project> {
    let path = ctx.resolve_project(path)?;
    if let Some(root) = bundle_paths(&path).0.parent() {
        shell.verbose(format!("source root {}", root.display()));
    }

    let start = Instant::now();
    shell.status(Status::Parsing, path.display());

    let project = parse_project(&path)?;

    shell.status(
        Status::Finished,
        format!(
            "{} ({} targets, {} packages) in {}",
            project.name(),
            project.targets().len(),
            project.packages().len(),
            format_duration(start.elapsed())
        ),
    );

    Ok(project)
}

/// Render a target as `name: product, product`.
pub fn format_target(target: &xcsummary::Target) -> String {
    if target.package_product_dependencies.is_empty() {
        target.name.clone()
    } else {
        format!(
            "{}: {}",
            target.name,
            target.package_product_dependencies.join(", ")
        )
    }
}
