use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for flycam")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, and tests in sequence, stopping at the first failure
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all targets with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Run the matrix stack timing benchmark
    Bench,
    /// Build rustdoc for the workspace
    Doc,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for task in [fmt, clippy, test] {
                task()?;
            }
        }
        Commands::Fmt => fmt()?,
        Commands::Clippy => clippy()?,
        Commands::Test => test()?,
        Commands::Bench => bench()?,
        Commands::Doc => doc()?,
    }

    Ok(())
}

/// Run `cargo <args>` and fail with `label` if it exits non-zero.
fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> {label}: cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("{label} failed ({status})");
    }
    Ok(())
}

fn fmt() -> Result<()> {
    cargo("fmt", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Result<()> {
    cargo(
        "clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn test() -> Result<()> {
    cargo("test", &["test", "--workspace"])
}

fn bench() -> Result<()> {
    cargo(
        "bench",
        &["bench", "-p", "flycam-math", "--bench", "bench_matrix_stack"],
    )
}

fn doc() -> Result<()> {
    cargo("doc", &["doc", "--workspace", "--no-deps"])
}
