// src/commands/ls.rs
use crate::commands::utils::describe;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = ctx.args.first().map(String::as_str).unwrap_or("");
        let shown = if path.is_empty() { "." } else { path };
        match ctx.fs.ls(path) {
            Ok(entries) => {
                let mut stdout = String::new();
                for entry in entries {
                    match entry.kind {
                        NodeKind::Directory => {
                            stdout.push_str(&format!("d {}/\n", entry.name));
                        }
                        NodeKind::File => {
                            stdout.push_str(&format!("- {} ({} chars)\n", entry.name, entry.size));
                        }
                    }
                }
                CommandResult::success(stdout)
            }
            Err(err) => CommandResult::error(format!(
                "ls: cannot access '{}': {}\n",
                shown,
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
        LsCommand.execute(CommandContext { args, fs })
    }

    #[test]
    fn test_ls_formats_directories_and_files() {
        let mut fs = Vfs::new();
        fs.mkdir("/docs").unwrap();
        fs.write_file("/notes", "abc").unwrap();
        let result = run(&mut fs, vec!["/"]);
        assert_eq!(result.stdout, "d docs/\n- notes (3 chars)\n");
    }

    #[test]
    fn test_ls_defaults_to_cwd() {
        let mut fs = Vfs::new();
        fs.mkdir("/a").unwrap();
        fs.touch("/a/f").unwrap();
        fs.cd("/a").unwrap();
        let result = run(&mut fs, vec![]);
        assert_eq!(result.stdout, "- f (0 chars)\n");
    }

    #[test]
    fn test_ls_file_target_lists_the_file() {
        let mut fs = Vfs::new();
        fs.write_file("/f", "hello").unwrap();
        let result = run(&mut fs, vec!["/f"]);
        assert_eq!(result.stdout, "- f (5 chars)\n");
    }

    #[test]
    fn test_ls_missing_path() {
        let mut fs = Vfs::new();
        let result = run(&mut fs, vec!["/nope"]);
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("cannot access '/nope'"));
    }
}
