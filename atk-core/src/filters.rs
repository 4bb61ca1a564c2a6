//! URL query rewriting for the dashboard filter dropdowns.
//!
//! The dashboard keeps its filter state in the page URL (`?site_id=3&year=2024`)
//! so the server re-renders the filtered view on navigation. The rewrite is a
//! pure function here; `atk-chart-ui::dom` performs the actual navigation.

use url::Url;

/// The two dashboard filters mirrored into the page URL.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FilterParam {
    Site,
    Year,
}

impl FilterParam {
    /// Query parameter name as it appears in the URL.
    pub fn name(&self) -> &'static str {
        match self {
            FilterParam::Site => "site_id",
            FilterParam::Year => "year",
        }
    }
}

/// Returns a copy of `current` with `param` set to `value`, or with `param`
/// removed entirely when `value` is empty (the "All" option deletes the
/// parameter rather than writing an empty one).
///
/// Other query parameters keep their original order; the edited parameter is
/// appended last. A URL left with no parameters loses its `?` as well.
pub fn with_query_param(current: &Url, param: &str, value: &str) -> Url {
    let retained: Vec<(String, String)> = current
        .query_pairs()
        .filter(|(name, _)| name.as_ref() != param)
        .map(|(name, val)| (name.into_owned(), val.into_owned()))
        .collect();

    let mut url = current.clone();
    url.set_query(None);
    if retained.is_empty() && value.is_empty() {
        return url;
    }
    {
        let mut pairs = url.query_pairs_mut();
        for (name, val) in &retained {
            pairs.append_pair(name, val);
        }
        if !value.is_empty() {
            pairs.append_pair(param, value);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::{with_query_param, FilterParam};
    use url::Url;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_param_names() {
        assert_eq!(FilterParam::Site.name(), "site_id");
        assert_eq!(FilterParam::Year.name(), "year");
    }

    #[test]
    fn test_sets_param_on_bare_url() {
        let next = with_query_param(&url("https://helpdesk.test/dashboard"), "site_id", "3");
        assert_eq!(next.as_str(), "https://helpdesk.test/dashboard?site_id=3");
    }

    #[test]
    fn test_empty_value_removes_param() {
        let next = with_query_param(
            &url("https://helpdesk.test/dashboard?site_id=3&year=2024"),
            "year",
            "",
        );
        assert_eq!(next.as_str(), "https://helpdesk.test/dashboard?site_id=3");
    }

    #[test]
    fn test_other_param_is_preserved() {
        let next = with_query_param(
            &url("https://helpdesk.test/dashboard?site_id=3"),
            "year",
            "2024",
        );
        assert_eq!(
            next.as_str(),
            "https://helpdesk.test/dashboard?site_id=3&year=2024"
        );
    }

    #[test]
    fn test_existing_value_is_replaced() {
        let next = with_query_param(
            &url("https://helpdesk.test/dashboard?year=2023&site_id=3"),
            "year",
            "2024",
        );
        // The replaced parameter moves to the end.
        assert_eq!(
            next.as_str(),
            "https://helpdesk.test/dashboard?site_id=3&year=2024"
        );
    }

    #[test]
    fn test_removing_last_param_drops_query_entirely() {
        let next = with_query_param(
            &url("https://helpdesk.test/dashboard?site_id=3"),
            "site_id",
            "",
        );
        assert_eq!(next.as_str(), "https://helpdesk.test/dashboard");
        assert_eq!(next.query(), None);
    }

    #[test]
    fn test_removing_missing_param_is_a_noop() {
        let next = with_query_param(
            &url("https://helpdesk.test/dashboard?site_id=3"),
            "year",
            "",
        );
        assert_eq!(next.as_str(), "https://helpdesk.test/dashboard?site_id=3");
    }

    #[test]
    fn test_value_is_form_encoded() {
        let next = with_query_param(&url("https://helpdesk.test/dashboard"), "site_id", "a b");
        assert_eq!(next.as_str(), "https://helpdesk.test/dashboard?site_id=a+b");
    }
}
