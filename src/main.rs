use clap::Parser;
use incscan::cli::Cli;
use incscan::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    incscan::cli::scan::run(cli, &printer)?;

    Ok(())
}
