mod scrape;
mod table;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use scrape::{build_source, scrape, DEFAULT_LANGUAGES};

/// Average salaries of programming languages on Russian job boards
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// List of job boards to collect statistics from, defaults to all of them
    #[clap(long, value_enum)]
    site: Vec<Target>,

    /// Languages to search for, replaces the built-in list
    #[clap(long)]
    language: Vec<String>,

    /// Number of languages searched at the same time
    #[clap(long, default_value_t = 1)]
    concurrency: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Target {
    #[value(name = "hh", alias = "headhunter")]
    HeadHunter,
    #[value(name = "superjob", alias = "sj")]
    SuperJob,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();

    let targets = if args.site.is_empty() {
        vec![Target::HeadHunter, Target::SuperJob]
    } else {
        args.site
    };
    let languages = if args.language.is_empty() {
        Vec::from(DEFAULT_LANGUAGES.map(String::from))
    } else {
        args.language
    };

    let sources = match targets
        .into_iter()
        .map(build_source)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(sources) => sources,
        Err(e) => {
            log::error!("Failed to set up job boards: {}", e);
            std::process::exit(1);
        }
    };

    for source in sources {
        match scrape(source.as_ref(), &languages, args.concurrency).await {
            Ok(table) => println!("{}", table),
            Err(e) => {
                log::error!("Failed to collect statistics from {}: {}", source.title(), e);
                std::process::exit(1);
            }
        }
    }
}
