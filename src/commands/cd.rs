// src/commands/cd.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        // no operand means back to the root
        let path = ctx.args.first().map(String::as_str).unwrap_or("/");
        match ctx.fs.cd(path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(format!("cd: {}: {}\n", path, describe(&err))),
        }
    }
}
