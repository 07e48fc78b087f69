use std::io;
use std::path::PathBuf;

use clap::Parser;

use minifs::fs::snapshot;
use minifs::shell::{Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "minifs")]
#[command(about = "An in-memory mini filesystem with a line shell")]
#[command(version)]
struct Cli {
    /// Snapshot file loaded at startup and written at exit
    #[arg(long, default_value = "minifs.dat")]
    snapshot: PathBuf,

    /// Output file for the `tree` command's JSON export
    #[arg(long, default_value = "fs_tree.json")]
    tree_file: PathBuf,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let tree = snapshot::load_or_init(&cli.snapshot);

    let mut shell = Shell::new(tree, ShellOptions { tree_file: cli.tree_file });
    let stdin = io::stdin();
    shell.run(stdin.lock(), io::stdout(), io::stderr())?;

    snapshot::save(shell.fs().tree(), &cli.snapshot)
}
