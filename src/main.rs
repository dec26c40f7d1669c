use std::io;

use anyhow::Result;
use clap::Parser;

use userdb::actions;
use userdb::cli::{Args, Operation};

fn main() -> Result<()> {
    let args = Args::parse();
    let operation = Operation::resolve(&args)?;
    actions::perform(&operation, &mut io::stdout())?;
    Ok(())
}
