use async_trait::async_trait;

use crate::salary::SalaryBounds;
use crate::types::Result;

/// Everything a board returned for one search term.
#[derive(Debug, Default)]
pub struct SearchResult {
    /// Total match count reported by the board, taken from the last page fetched.
    pub found: u32,
    pub listings: Vec<SalaryBounds>,
}

/// A job board that can be searched for vacancies
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Title used when reporting results of this board
    fn title(&self) -> &str;
    /// Currency code listings must carry to be counted
    fn currency(&self) -> &str;
    async fn search(&self, term: &str) -> Result<SearchResult>;
}
