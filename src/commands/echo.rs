// src/commands/echo.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};

/// Only the redirecting form is supported: `echo <words...> > <path>`.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let args = &ctx.args;
        if args.len() < 3 || args[args.len() - 2] != ">" {
            return CommandResult::error("Usage: echo <content> > <filepath>\n".to_string());
        }
        let path = &args[args.len() - 1];
        let content = args[..args.len() - 2].join(" ");
        match ctx.fs.write_file(path, &content) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(format!(
                "echo: cannot write '{}': {}\n",
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
        EchoCommand.execute(CommandContext { args, fs })
    }

    #[test]
    fn test_echo_writes_joined_words() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec!["hello", "world", ">", "/f"]);
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read_file("/f").unwrap(), "hello world");
    }

    #[test]
    fn test_echo_replaces_previous_content() {
        let mut fs = Vfs::new();
        fs.write_file("/f", "old and long").unwrap();
        run(&mut fs, vec!["new", ">", "/f"]);
        assert_eq!(fs.read_file("/f").unwrap(), "new");
    }

    #[test]
    fn test_echo_without_redirect_is_a_usage_error() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec!["hello"]);
        assert!(result.stderr.contains("Usage"));
        let result = run(&mut fs, vec!["hello", "/f", ">"]);
        assert!(result.stderr.contains("Usage"));
    }

    #[test]
    fn test_echo_into_directory_fails() {
        let mut fs = Vfs::new();
        fs.mkdir("/d").unwrap();
        let result = run(&mut fs, vec!["x", ">", "/d"]);
        assert!(result.stderr.contains("Is a directory"));
    }
}
