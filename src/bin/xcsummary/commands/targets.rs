//! `xcsummary targets` command

use anyhow::Result;

use super::{format_target, load_project};
use crate::cli::TargetsArgs;
use xcsummary::util::{GlobalContext, Shell};

pub fn execute(args: TargetsArgs, ctx: &GlobalContext, shell: &Shell) -> Result<()> {
    let project = load_project(ctx, shell, args.path.as_deref())?;

    if shell.is_json() {
        return shell.print_json(&project.targets());
    }

    if project.targets().is_empty() {
        shell.note(format!("{} has no native targets", project.name()));
    }
    for target in project.targets() {
        shell.println(format_target(target));
    }

    Ok(())
}
