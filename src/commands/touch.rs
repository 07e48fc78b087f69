// src/commands/touch.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.args.first() else {
            return CommandResult::error("touch: missing operand\n".to_string());
        };
        match ctx.fs.touch(path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(format!(
                "touch: cannot touch '{}': {}\n",
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
        TouchCommand.execute(CommandContext { args, fs })
    }

    #[test]
    fn test_touch_creates_empty_file() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec!["/f"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read_file("/f").unwrap(), "");
    }

    #[test]
    fn test_touch_existing_succeeds_silently() {
        let mut fs = Vfs::new();
        fs.write_file("/f", "data").unwrap();
        let result = run(&mut fs, vec!["/f"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read_file("/f").unwrap(), "data");
    }

    #[test]
    fn test_touch_missing_operand() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec![]);
        assert!(result.stderr.contains("missing operand"));
    }

    #[test]
    fn test_touch_under_missing_parent() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec!["/no/f"]);
        assert!(result.stderr.contains("No such file or directory"));
    }
}
