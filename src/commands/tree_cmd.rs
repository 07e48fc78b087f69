// src/commands/tree_cmd.rs
use std::path::PathBuf;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::json::export_json;

/// Exports the whole namespace as a JSON tree to a configured file.
pub struct TreeCommand {
    output: PathBuf,
}

impl TreeCommand {
    pub fn new(output: PathBuf) -> Self {
        Self { output }
    }
}

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let json = export_json(ctx.fs.tree());
        match std::fs::write(&self.output, json) {
            Ok(()) => CommandResult::success(format!(
                "file system tree exported to {}\n",
                self.output.display()
            )),
            Err(err) => CommandResult::error(format!(
                "tree: cannot write '{}': {}\n",
                self.output.display(),
                err
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Vfs;

    #[test]
    fn test_tree_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tree.json");
        let mut fs = Vfs::new();
        fs.mkdir("/a").unwrap();

        let cmd = TreeCommand::new(out.clone());
        let result = cmd.execute(CommandContext { args: vec![], fs: &mut fs });
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("exported"));

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            r#"{"name":"/","type":"directory","children":[{"name":"a","type":"directory"}]}"#
        );
    }

    #[test]
    fn test_tree_unwritable_target_reports_error() {
        let mut fs = Vfs::new();
        let cmd = TreeCommand::new(PathBuf::from("/no/such/dir/tree.json"));
        let result = cmd.execute(CommandContext { args: vec![], fs: &mut fs });
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("cannot write"));
    }
}
