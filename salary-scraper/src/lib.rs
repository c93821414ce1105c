pub mod api;
pub mod config;
pub mod headhunter;
pub mod salary;
pub mod statistics;
pub mod superjob;
pub mod types;

pub use api::{SearchResult, VacancySource};
pub use salary::{predict_salary, SalaryBounds};
pub use statistics::{aggregate, collect_statistics, LanguageStatistic, ResultsMapping};
pub use types::{Error, Result};
