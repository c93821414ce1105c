use futures::{stream, StreamExt, TryStreamExt};

use crate::api::{SearchResult, VacancySource};
use crate::types::Result;

/// Salary statistics of a single search term on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageStatistic {
    pub vacancies_found: u32,
    pub vacancies_processed: u32,
    pub average_salary: u64,
}

/// Running count and sum of normalized salaries.
#[derive(Debug, Default)]
pub struct SalaryAccumulator {
    pub processed: u32,
    pub sum: f64,
}

impl SalaryAccumulator {
    pub fn add(&mut self, salary: f64) {
        self.processed += 1;
        self.sum += salary;
    }

    /// Truncated mean, 0 when nothing was processed.
    pub fn average(&self) -> u64 {
        if self.processed == 0 {
            return 0;
        }
        (self.sum / f64::from(self.processed)) as u64
    }

    pub fn finish(self, vacancies_found: u32) -> LanguageStatistic {
        LanguageStatistic {
            vacancies_found,
            vacancies_processed: self.processed,
            average_salary: self.average(),
        }
    }
}

/// Search terms mapped to their statistics, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsMapping {
    entries: Vec<(String, LanguageStatistic)>,
}

impl ResultsMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term, replacing the statistic in place if the term is already present.
    pub fn insert(&mut self, term: String, statistic: LanguageStatistic) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == term) {
            Some((_, current)) => *current = statistic,
            None => self.entries.push((term, statistic)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStatistic)> {
        self.entries
            .iter()
            .map(|(term, statistic)| (term.as_str(), statistic))
    }
}

impl FromIterator<(String, LanguageStatistic)> for ResultsMapping {
    fn from_iter<I: IntoIterator<Item = (String, LanguageStatistic)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (term, statistic) in iter {
            mapping.insert(term, statistic);
        }
        mapping
    }
}

/// Fold the listings of one search into a [`LanguageStatistic`].
pub fn aggregate(result: &SearchResult, target_currency: &str) -> LanguageStatistic {
    let mut accumulator = SalaryAccumulator::default();
    result
        .listings
        .iter()
        .filter_map(|listing| listing.predict(target_currency))
        .for_each(|salary| accumulator.add(salary));
    accumulator.finish(result.found)
}

/// Search every term on `source` and aggregate the results.
///
/// At most `concurrency` searches run at once, a value of 1 (or 0) searches
/// strictly one term after another. Term order is preserved either way.
/// The first failing search aborts the run.
pub async fn collect_statistics<S>(
    source: &S,
    terms: &[String],
    concurrency: usize,
) -> Result<ResultsMapping>
where
    S: VacancySource + ?Sized,
{
    let statistics: Vec<(String, LanguageStatistic)> = stream::iter(terms)
        .map(|term| async move {
            let result = source.search(term).await?;
            let statistic = aggregate(&result, source.currency());
            log::info!(
                "{}, {}: {} found, {} processed, average salary: {}",
                source.title(),
                term,
                statistic.vacancies_found,
                statistic.vacancies_processed,
                statistic.average_salary
            );
            Ok::<_, crate::Error>((term.clone(), statistic))
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;
    Ok(statistics.into_iter().collect())
}
