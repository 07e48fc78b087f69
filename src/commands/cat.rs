// src/commands/cat.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.args.first() else {
            return CommandResult::error("cat: missing operand\n".to_string());
        };
        match ctx.fs.read_file(path) {
            Ok(content) if content.is_empty() => CommandResult::success(String::new()),
            Ok(content) => CommandResult::success(format!("{}\n", content)),
            Err(err) => CommandResult::error(format!("cat: {}: {}\n", path, describe(&err))),
        }
    }
}
