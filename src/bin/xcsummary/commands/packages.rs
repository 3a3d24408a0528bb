//! `xcsummary packages` command

use anyhow::Result;

use super::load_project;
use crate::cli::PackagesArgs;
use xcsummary::util::{GlobalContext, Shell};
use xcsummary::SwiftPackage;

pub fn execute(args: PackagesArgs, ctx: &GlobalContext, shell: &Shell) -> Result<()> {
    let project = load_project(ctx, shell, args.path.as_deref())?;

    let packages: Vec<&SwiftPackage> = if args.remote {
        project.remote_packages().collect()
    } else if args.local {
        project.local_packages().collect()
    } else {
        project.packages().iter().collect()
    };

    if shell.is_json() {
        return shell.print_json(&packages);
    }

    if packages.is_empty() {
        shell.note("no Swift packages found");
    }
    for package in packages {
        shell.println(package);
    }

    Ok(())
}
