use async_stream::stream;
use async_trait::async_trait;
use futures::{pin_mut, Stream, StreamExt};
use reqwest::{header::ACCEPT, Client};

use crate::api::{SearchResult, VacancySource};
use crate::config::{search_text, HeadHunterConfig};
use crate::headhunter::types::{SearchParams, VacancyPage};
use crate::types::{Error, Result};

/// Client for the HeadHunter vacancy search API.
///
/// The board reports how many pages a search has, so a scan stops on the last page.
pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!("{}/vacancies", self.config.base_url.trim_end_matches('/'))
    }

    async fn search_page(&self, search: &str, page: u32) -> Result<VacancyPage> {
        let url = self.search_url();
        let params = SearchParams {
            text: search,
            area: self.config.area,
            page,
            per_page: self.config.per_page,
            period: self.config.period_days,
            only_with_salary: self.config.only_with_salary,
        };
        log::debug!(
            "requesting vacancies from headhunter, page: {}, search: {}",
            page,
            search
        );
        let resp = self
            .client
            .get(&url)
            .query(&params)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
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
        log::debug!(
            "retrieved page {} of {} for search: {}, {} vacancies found",
            vacancies.page + 1,
            vacancies.pages,
            search,
            vacancies.found
        );
        Ok(vacancies)
    }

    fn pages<'a>(&'a self, term: &str) -> impl Stream<Item = Result<VacancyPage>> + 'a {
        let search = search_text(&self.config.keyword_prefix, term);
        stream! {
            let mut page = 0;
            loop {
                let result = self.search_page(&search, page).await;
                let last_page = match &result {
                    Ok(vacancies) => page + 1 >= vacancies.pages,
                    Err(_) => true,
                };
                yield result;
                if last_page {
                    break;
                }
                page += 1;
            }
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
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
            result.found = page.found;
            result.listings.extend(page.salary_bounds());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::statistics::aggregate;

    fn vacancy(from: Value, to: Value, currency: &str) -> Value {
        json!({
            "id": "1",
            "name": "Программист",
            "salary": {"from": from, "to": to, "currency": currency, "gross": false}
        })
    }

    fn page_body(items: Vec<Value>, found: u32, pages: u32, page: u32) -> Value {
        json!({"items": items, "found": found, "pages": pages, "page": page, "per_page": 100})
    }

    fn source(server: &MockServer) -> HeadHunter {
        let config = HeadHunterConfig {
            base_url: server.uri(),
            ..Default::default()
        };
        HeadHunter::new(config).expect("client should build")
    }

    #[tokio::test]
    async fn test_scrape_until_last_page() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;
        let first: Vec<Value> = (0..100)
            .map(|_| vacancy(json!(100_000), json!(200_000), "RUR"))
            .collect();
        let mut second: Vec<Value> = (0..8)
            .map(|_| vacancy(json!(null), json!(100_000), "RUR"))
            .collect();
        second.push(vacancy(json!(100_000), json!(null), "USD"));
        second.push(json!({"id": "2", "name": "no salary", "salary": null}));

        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("text", "Программист Python"))
            .and(query_param("page", "0"))
            .and(query_param("per_page", "100"))
            .and(query_param("area", "1"))
            .and(query_param("period", "30"))
            .and(query_param("only_with_salary", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(first, 110, 2, 0)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(second, 111, 2, 1)))
            .expect(1)
            .mount(&server)
            .await;

        let source = source(&server);
        let result = source.search("Python").await.expect("search should succeed");
        assert_eq!(result.listings.len(), 110);
        assert_eq!(result.found, 111);

        let statistic = aggregate(&result, source.currency());
        assert_eq!(statistic.vacancies_found, 111);
        assert_eq!(statistic.vacancies_processed, 108);
        // (100 * 150_000 + 8 * 80_000) / 108
        assert_eq!(statistic.average_salary, 144_814);
    }

    #[tokio::test]
    async fn test_no_results_fetches_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![], 0, 0, 0)))
            .expect(1)
            .mount(&server)
            .await;

        let source = source(&server);
        let result = source.search("Brainfuck").await.expect("search should succeed");
        assert_eq!(result.found, 0);
        assert!(result.listings.is_empty());
        let statistic = aggregate(&result, source.currency());
        assert_eq!(statistic.average_salary, 0);
    }

    #[tokio::test]
    async fn test_error_status_aborts_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("page", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                vec![vacancy(json!(100), json!(200), "RUR")],
                200,
                2,
                0,
            )))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/vacancies"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .expect(1)
            .mount(&server)
            .await;

        let result = source(&server).search("Java").await;
        match result {
            Err(Error::RequestNotOk { status, .. }) => assert_eq!(status, StatusCode::FORBIDDEN),
            other => panic!("expected RequestNotOk, got {:?}", other),
        }
    }
}
