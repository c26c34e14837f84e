use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
/// Render the repository front page.
struct Args {
    /// Root of the APT repository.
    apt_repo_dir: PathBuf,

    /// File to write the front page to.
    output_file: PathBuf,

    #[clap(long, default_value = apt_pages::config::DEFAULT_CONFIG_PATH)]
    /// Path to the distribution matrix.
    config: PathBuf,

    #[clap(long)]
    /// Directory containing frontpage.html.j2; the builtin template is used otherwise.
    templates: Option<PathBuf>,

    #[clap(flatten)]
    logging: apt_pages::logging::LoggingArgs,
}

fn run(args: &Args) -> apt_pages::Result<()> {
    let site = apt_pages::SiteSettings::from_env();
    let config = apt_pages::config::read_file(&args.config)?;
    let templates = apt_pages::Templates::load(args.templates.as_deref())?;

    apt_pages::write_frontpage(
        &args.apt_repo_dir,
        &args.output_file,
        &config,
        &site,
        &templates,
        chrono::Utc::now(),
    )?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    args.logging.init();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
