use salary_scraper::config::{HeadHunterConfig, SuperJobConfig};
use salary_scraper::headhunter::HeadHunter;
use salary_scraper::superjob::SuperJob;
use salary_scraper::{collect_statistics, Result, VacancySource};

use crate::table::render_table;
use crate::Target;

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Javascript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "CSS",
    "C#",
    "C",
    "Go",
];

/// Set up the board client, credentials are checked here before anything is requested.
pub fn build_source(target: Target) -> Result<Box<dyn VacancySource>> {
    let source: Box<dyn VacancySource> = match target {
        Target::HeadHunter => Box::new(HeadHunter::new(HeadHunterConfig::default())?),
        Target::SuperJob => Box::new(SuperJob::new(SuperJobConfig::from_env()?)?),
    };
    Ok(source)
}

/// Collect statistics for every language on one board and render them as a table.
pub async fn scrape(
    source: &dyn VacancySource,
    languages: &[String],
    concurrency: usize,
) -> Result<String> {
    log::info!(
        "collecting salaries from {} for {} languages",
        source.title(),
        languages.len()
    );
    let statistics = collect_statistics(source, languages, concurrency).await?;
    Ok(render_table(source.title(), &statistics))
}
