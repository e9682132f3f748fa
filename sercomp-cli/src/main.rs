//! Binary entry point for the sercomp CLI.

fn main() -> anyhow::Result<()> {
    sercomp_cli::run()
}
