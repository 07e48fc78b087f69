// src/commands/mkdir.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.args.first() else {
            return CommandResult::error("mkdir: missing operand\n".to_string());
        };
        match ctx.fs.mkdir(path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(format!(
                "mkdir: cannot create directory '{}': {}\n",
                path,
                describe(&err)
            )),
        }
    }
}
