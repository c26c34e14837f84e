use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
/// Write an index.html listing into every directory of an APT repository.
struct Args {
    /// Root of the APT repository.
    apt_repo_dir: PathBuf,

    #[clap(long)]
    /// Directory containing directory-index.html.j2; the builtin template is used otherwise.
    templates: Option<PathBuf>,

    #[clap(flatten)]
    logging: apt_pages::logging::LoggingArgs,
}

fn main() {
    let args = Args::parse();

    args.logging.init();

    log::info!("Generating directory indexes");

    let result = apt_pages::Templates::load(args.templates.as_deref())
        .and_then(|templates| apt_pages::write_indexes(&args.apt_repo_dir, &templates));

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
