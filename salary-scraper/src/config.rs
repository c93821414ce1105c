pub const SUPERJOB_API_KEY_ENV: &str = "SUPERJOB_API_KEY";

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    pub title: String,
    /// Prepended to every search term, e.g. "Программист Python"
    pub keyword_prefix: String,
    /// Region code, 1 is Moscow
    pub area: u32,
    pub period_days: u32,
    pub per_page: u32,
    pub only_with_salary: bool,
    pub currency: String,
    pub user_agent: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_owned(),
            title: "HeadHunter Moscow".to_owned(),
            keyword_prefix: "Программист".to_owned(),
            area: 1,
            period_days: 30,
            per_page: 100,
            only_with_salary: true,
            currency: "RUR".to_owned(),
            user_agent: format!("salary-stats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    pub title: String,
    pub api_key: String,
    pub keyword_prefix: String,
    pub town: String,
    /// Catalogue section, 48 is "development, programming"
    pub catalogues: u32,
    pub period_days: u32,
    pub count: u32,
    /// The board reports no page count, so scanning stops after this many pages
    pub page_cap: u32,
    pub currency: String,
}

impl SuperJobConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0".to_owned(),
            title: "SuperJob Moscow".to_owned(),
            api_key,
            keyword_prefix: "программист".to_owned(),
            town: "Москва".to_owned(),
            catalogues: 48,
            period_days: 30,
            count: 100,
            page_cap: 5,
            currency: "rub".to_owned(),
        }
    }

    /// Build the default configuration with the secret taken from `SUPERJOB_API_KEY`.
    pub fn from_env() -> crate::Result<Self> {
        read_credential(SUPERJOB_API_KEY_ENV).map(Self::new)
    }
}

pub(crate) fn read_credential(name: &'static str) -> crate::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(crate::Error::MissingCredential(name)),
    }
}

/// Search text sent to a board, the term alone when no prefix is configured.
pub(crate) fn search_text(prefix: &str, term: &str) -> String {
    if prefix.is_empty() {
        term.to_owned()
    } else {
        format!("{} {}", prefix, term)
    }
}
