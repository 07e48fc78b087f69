// src/commands/mv.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let [src, dst] = ctx.args.as_slice() else {
            return CommandResult::error("Usage: mv <source> <destination>\n".to_string());
        };
        match ctx.fs.mv(src, dst) {
            Ok(()) => CommandResult::success(String::new()),
            Err(FsError::CyclicMove { .. }) => CommandResult::error(format!(
                "mv: cannot move '{}' to a subdirectory of itself ('{}')\n",
                src, dst
            )),
            Err(err) => CommandResult::error(format!(
                "mv: cannot move '{}' to '{}': {}\n",
                src,
                dst,
                describe(&err)
            )),
        }
    }
}
