use clap::Parser;
use orgindex::{build_index, Args};

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    build_index(&args.base, &args.output, &args.format)?;

    Ok(())
}
