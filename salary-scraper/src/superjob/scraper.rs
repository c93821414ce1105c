use async_stream::stream;
use async_trait::async_trait;
use futures::{pin_mut, Stream, StreamExt};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};

use crate::api::{SearchResult, VacancySource};
use crate::config::{search_text, SuperJobConfig};
use crate::superjob::types::{SearchParams, VacancyPage};
use crate::types::{Error, Result};

/// Client for the SuperJob vacancy search API.
///
/// SuperJob does not report a page count, a scan reads at most `page_cap` pages
/// and may under-count listings for popular terms.
pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert("x-api-app-id", api_key);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies/", self.config.base_url.trim_end_matches('/'))
    }

    async fn search_page(&self, search: &str, page: u32) -> Result<VacancyPage> {
        let url = self.search_url();
        let params = SearchParams {
            keyword: search,
            town: &self.config.town,
            catalogues: self.config.catalogues,
            no_agreement: 1,
            period: self.config.period_days,
            page,
            count: self.config.count,
        };
        log::debug!(
            "requesting vacancies from superjob, page: {}, search: {}",
            page,
            search
        );
        let resp = self.client.get(&url).query(&params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve vacancies for page: {}, search: {}, status: {}, error resp body: {:?}",
                page,
                search,
                status,
                error_body,
            );
            return Err(Error::RequestNotOk { url, status });
        }

        let vacancies: VacancyPage = resp.json().await?;
        Ok(vacancies)
    }

    fn pages<'a>(&'a self, term: &str) -> impl Stream<Item = Result<VacancyPage>> + 'a {
        let search = search_text(&self.config.keyword_prefix, term);
        stream! {
            for page in 0..self.config.page_cap {
                let result = self.search_page(&search, page).await;
                let last_page = match &result {
                    Ok(vacancies) => vacancies.more == Some(false),
                    Err(_) => true,
                };
                yield result;
                if last_page {
                    break;
                }
            }
        }
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn title(&self) -> &str {
        &self.config.title
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn search(&self, term: &str) -> Result<SearchResult> {
        let pages = self.pages(term);
        pin_mut!(pages);
        let mut result = SearchResult::default();
        while let Some(page) = pages.next().await {
            let page = page?;
            result.found = page.total;
            result.listings.extend(page.salary_bounds());
        }
        Ok(result)
    }
}
