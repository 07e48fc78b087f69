// src/commands/cp.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let [src, dst] = ctx.args.as_slice() else {
            return CommandResult::error("Usage: cp <source> <destination>\n".to_string());
        };
        match ctx.fs.cp(src, dst) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(format!(
                "cp: cannot copy '{}' to '{}': {}\n",
                src,
                dst,
                describe(&err)
            )),
        }
    }
}
