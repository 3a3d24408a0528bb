//! `xcsummary show` command

use anyhow::Result;

use super::{format_target, load_project};
use crate::cli::ShowArgs;
use xcsummary::util::{GlobalContext, Shell};

pub fn execute(args: ShowArgs, ctx: &GlobalContext, shell: &Shell) -> Result<()> {
    let project = load_project(ctx, shell, args.path.as_deref())?;

    if shell.is_json() {
        return shell.print_json(&project);
    }

    shell.println(project.name());

    shell.println("");
    shell.println(format!("Targets ({}):", project.targets().len()));
    for target in project.targets() {
        shell.println(format!("    {}", format_target(target)));
    }

    shell.println("");
    shell.println(format!("Packages ({}):", project.packages().len()));
    for package in project.packages() {
        shell.println(format!("    {}", package));
    }

    Ok(())
}
