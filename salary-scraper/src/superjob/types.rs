use serde::{Deserialize, Serialize};

use crate::salary::{lenient, lenient_list, SalaryBounds};

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Vacancy {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) payment_to: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) currency: Option<String>,
}

impl Vacancy {
    pub(crate) fn salary_bounds(&self) -> SalaryBounds {
        SalaryBounds::new(self.payment_from, self.payment_to, self.currency.clone())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacancyPage {
    #[serde(deserialize_with = "lenient_list")]
    pub(crate) objects: Vec<Option<Vacancy>>,
    #[serde(default)]
    pub(crate) total: u32,
    /// Only trusted when explicitly false, scanning is capped regardless.
    #[serde(default)]
    pub(crate) more: Option<bool>,
}

impl VacancyPage {
    pub(crate) fn salary_bounds(&self) -> impl Iterator<Item = SalaryBounds> + '_ {
        self.objects
            .iter()
            .map(|item| item.as_ref().map(Vacancy::salary_bounds).unwrap_or_default())
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) keyword: &'a str,
    pub(crate) town: &'a str,
    pub(crate) catalogues: u32,
    pub(crate) no_agreement: u8,
    pub(crate) period: u32,
    pub(crate) page: u32,
    pub(crate) count: u32,
}
