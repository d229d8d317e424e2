use clap::Parser;
use miette::{IntoDiagnostic, Result};
use minibank::bank::BankSystem;
use minibank::reader::OpReader;
use minibank::writer::AccountWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file
    input: PathBuf,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays machine-readable CSV
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut bank = BankSystem::new();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OpReader::new(file);
    for cmd_result in reader.commands() {
        match cmd_result {
            Ok(cmd) => {
                if let Err(e) = bank.execute(cmd) {
                    eprintln!("Error executing operation: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading operation: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(bank.account_infos()).into_diagnostic()?;

    Ok(())
}
