use serde::{Deserialize, Serialize};

use crate::salary::{lenient, lenient_list, SalaryBounds};

#[derive(Serialize, Deserialize, Debug, Default)]
pub(crate) struct Salary {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) to: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Vacancy {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) salary: Option<Salary>,
}

impl Vacancy {
    pub(crate) fn salary_bounds(&self) -> SalaryBounds {
        match &self.salary {
            Some(salary) => SalaryBounds::new(salary.from, salary.to, salary.currency.clone()),
            None => SalaryBounds::default(),
        }
    }
}

impl VacancyPage {
    pub(crate) fn salary_bounds(&self) -> impl Iterator<Item = SalaryBounds> + '_ {
        self.items
            .iter()
            .map(|item| item.as_ref().map(Vacancy::salary_bounds).unwrap_or_default())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct VacancyPage {
    /// `None` marks a listing that is not an object, it is counted but never processed
    #[serde(deserialize_with = "lenient_list")]
    pub(crate) items: Vec<Option<Vacancy>>,
    #[serde(default)]
    pub(crate) found: u32,
    #[serde(default)]
    pub(crate) pages: u32,
    #[serde(default)]
    pub(crate) page: u32,
}

#[derive(Serialize, Debug)]
pub(crate) struct SearchParams<'a> {
    pub(crate) text: &'a str,
    pub(crate) area: u32,
    pub(crate) page: u32,
    pub(crate) per_page: u32,
    pub(crate) period: u32,
    pub(crate) only_with_salary: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_malformed_salary_fields_do_not_fail_page() {
        let page: VacancyPage = serde_json::from_str(
            r#"{
                "items": [
                    {"id": "1", "name": "ok", "salary": {"from": 100, "to": 200, "currency": "RUR", "gross": true}},
                    {"id": "2", "name": "bad bound", "salary": {"from": "a lot", "to": null, "currency": "RUR"}},
                    {"id": "3", "name": "bad currency", "salary": {"from": 100, "currency": 643}},
                    {"id": "4", "name": "no salary", "salary": null},
                    {"id": "5"}
                ],
                "found": 5,
                "pages": 1,
                "page": 0
            }"#,
        )
        .expect("page should deserialize");
        let bounds: Vec<SalaryBounds> = page.salary_bounds().collect();
        assert_eq!(
            bounds[0],
            SalaryBounds::new(Some(100.0), Some(200.0), Some("RUR".to_owned()))
        );
        assert_eq!(bounds[1], SalaryBounds::new(None, None, Some("RUR".to_owned())));
        assert_eq!(bounds[2], SalaryBounds::new(Some(100.0), None, None));
        assert_eq!(bounds[3], SalaryBounds::default());
        assert_eq!(bounds[4], SalaryBounds::default());
    }

    #[test]
    fn test_malformed_listing_keeps_rest_of_page() {
        let page: VacancyPage = serde_json::from_str(
            r#"{
                "items": [
                    {"id": "1", "salary": {"from": 100, "to": 200, "currency": "RUR"}},
                    {"id": "2", "salary": "negotiable"},
                    null,
                    "not a vacancy"
                ],
                "found": 4,
                "pages": 1
            }"#,
        )
        .expect("page should deserialize");
        let bounds: Vec<SalaryBounds> = page.salary_bounds().collect();
        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds[0].predict("RUR"), Some(150.0));
        assert!(bounds[1..].iter().all(|bounds| *bounds == SalaryBounds::default()));
    }
}
