// src/commands/rm.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.args.first() else {
            return CommandResult::error("rm: missing operand\n".to_string());
        };
        match ctx.fs.rm(path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(format!(
                "rm: cannot remove '{}': {}\n",
                path,
                describe(&err)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Vfs;

    fn run(fs: &mut Vfs, args: Vec<&str>) -> CommandResult {
        let args = args.into_iter().map(String::from).collect();
        RmCommand.execute(CommandContext { args, fs })
    }

    #[test]
    fn test_rm_file() {
        let mut fs = Vfs::new();
        fs.touch("/f").unwrap();
        let result = run(&mut fs, vec!["/f"]);
        assert_eq!(result.exit_code, 0);
        assert!(fs.read_file("/f").is_err());
    }

    #[test]
    fn test_rm_nonempty_directory() {
        let mut fs = Vfs::new();
        fs.mkdir("/a").unwrap();
        fs.touch("/a/f").unwrap();
        let result = run(&mut fs, vec!["/a"]);
        assert!(result.stderr.contains("Directory not empty"));
    }

    #[test]
    fn test_rm_root_is_refused() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec!["/"]);
        assert!(result.stderr.contains("Operation not permitted"));
    }

    #[test]
    fn test_rm_missing_operand() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec![]);
        assert!(result.stderr.contains("missing operand"));
    }
}
