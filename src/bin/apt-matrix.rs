use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
/// Expand the distribution matrix into CI job rows.
struct Args {
    #[clap(long, default_value = apt_pages::config::DEFAULT_CONFIG_PATH)]
    /// Path to the distribution matrix.
    config: PathBuf,

    #[clap(long)]
    /// Indent the JSON output.
    pretty: bool,

    #[clap(flatten)]
    logging: apt_pages::logging::LoggingArgs,
}

fn main() {
    let args = Args::parse();

    args.logging.init();

    let config = apt_pages::config::read_file(&args.config).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    let matrix = apt_pages::matrix::expand(&config);
    log::debug!("Expanded {} matrix rows", matrix.include.len());

    match matrix.to_json(args.pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize matrix: {}", e);
            std::process::exit(1);
        }
    }
}
