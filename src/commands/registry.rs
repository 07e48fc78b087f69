// src/commands/registry.rs
use std::collections::HashMap;
use std::path::Path;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::cp::CpCommand;
use super::echo::EchoCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;

/// Registry with the full command surface of the shell. `tree_file` is
/// where the `tree` command writes its JSON export.
pub fn default_registry(tree_file: &Path) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(TreeCommand::new(tree_file.to_path_buf())));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_registry_covers_the_command_surface() {
        let registry = default_registry(&PathBuf::from("tree.json"));
        for name in ["mkdir", "touch", "ls", "cd", "pwd", "rm", "cat", "echo", "mv", "cp", "tree"] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert!(!registry.contains("chmod"));
        assert_eq!(registry.names().len(), 11);
    }
}
