//! Shell session
//!
//! Ties the command registry and the virtual filesystem together and runs
//! the line loop: prompt, read, tokenize on whitespace, dispatch. The
//! session owns the tree for its whole lifetime; the driver loads the
//! snapshot before constructing it and saves after the loop ends.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::commands::{default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::fs::{Tree, Vfs};

/// Options for creating a shell session.
pub struct ShellOptions {
    /// Output file for the `tree` command's JSON export.
    pub tree_file: PathBuf,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            tree_file: PathBuf::from("fs_tree.json"),
        }
    }
}

/// An interactive session over one virtual filesystem.
pub struct Shell {
    fs: Vfs,
    registry: CommandRegistry,
    done: bool,
}

impl Shell {
    pub fn new(tree: Tree, options: ShellOptions) -> Self {
        Self {
            fs: Vfs::from_tree(tree),
            registry: default_registry(&options.tree_file),
            done: false,
        }
    }

    pub fn fs(&self) -> &Vfs {
        &self.fs
    }

    /// True once `exit` has been evaluated.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Prompt string for the current directory.
    pub fn prompt(&self) -> String {
        format!("minifs:{}$ ", self.fs.pwd())
    }

    /// Tokenize and dispatch a single input line. Blank lines do nothing.
    pub fn eval_line(&mut self, line: &str) -> CommandResult {
        let mut tokens = line.split_whitespace().map(String::from);
        let Some(cmd) = tokens.next() else {
            return CommandResult::success(String::new());
        };
        let args: Vec<String> = tokens.collect();

        if cmd == "exit" {
            self.done = true;
            return CommandResult::success(String::new());
        }
        match self.registry.get(&cmd) {
            Some(command) => command.execute(CommandContext { args, fs: &mut self.fs }),
            None => CommandResult::error(format!("{}: command not found\n", cmd)),
        }
    }

    /// Run the interactive loop until `exit` or end of input.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        mut out: W,
        mut err: E,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        while !self.done {
            write!(out, "{}", self.prompt())?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let result = self.eval_line(&line?);
            out.write_all(result.stdout.as_bytes())?;
            err.write_all(result.stderr.as_bytes())?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell() -> Shell {
        Shell::new(Tree::new(), ShellOptions::default())
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut sh = shell();
        let result = sh.eval_line("   ");
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let mut sh = shell();
        let result = sh.eval_line("chmod 755 /f");
        assert_eq!(result.stderr, "chmod: command not found\n");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_exit_finishes_the_session() {
        let mut sh = shell();
        assert!(!sh.is_done());
        sh.eval_line("exit");
        assert!(sh.is_done());
    }

    #[test]
    fn test_prompt_follows_the_cursor() {
        let mut sh = shell();
        assert_eq!(sh.prompt(), "minifs:/$ ");
        sh.eval_line("mkdir /a");
        sh.eval_line("cd /a");
        assert_eq!(sh.prompt(), "minifs:/a$ ");
    }

    #[test]
    fn test_write_then_cat_through_the_shell() {
        let mut sh = shell();
        sh.eval_line("mkdir /a");
        sh.eval_line("touch /a/f");
        sh.eval_line("echo hello > /a/f");
        let result = sh.eval_line("cat /a/f");
        assert_eq!(result.stdout, "hello\n");
    }

    #[test]
    fn test_run_loop_prompts_and_stops_at_exit() {
        let input = Cursor::new("mkdir /a\ncd /a\npwd\nexit\nignored\n");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut sh = shell();
        sh.run(input, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("minifs:/$ "));
        assert!(out.contains("minifs:/a$ "));
        assert!(out.contains("/a\n"));
        assert!(err.is_empty());
        assert!(sh.is_done());
    }

    #[test]
    fn test_run_loop_handles_eof() {
        let input = Cursor::new("pwd\n");
        let mut out = Vec::new();
        let mut sh = shell();
        sh.run(input, &mut out, &mut Vec::new()).unwrap();
        assert!(!sh.is_done());
        assert!(String::from_utf8(out).unwrap().ends_with("\n"));
    }

    #[test]
    fn test_errors_go_to_stderr_and_the_session_continues() {
        let input = Cursor::new("mkdir /a\nmkdir /a\nls /\nexit\n");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut sh = shell();
        sh.run(input, &mut out, &mut err).unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("File exists"));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("d a/\n"));
    }
}
