/// Raised at the fetch boundary: the marketplace page could not be retrieved,
/// either because the transport failed or the server answered with a
/// non-success status.
#[derive(Debug)]
pub struct FetchError {
    pub url: String,
    pub source: reqwest::Error,
}

impl FetchError {
    /// What gets printed to the console when the page could not be fetched.
    pub fn report(&self) -> String {
        format!("Error fetching the page: {self}\nFailed to retrieve data.\n")
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not fetch {}: {}", self.url, self.source)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_the_page_and_the_failure() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let error = FetchError {
            url: "not a url".to_string(),
            source,
        };
        let report = error.report();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Error fetching the page: could not fetch not a url: "));
        assert_eq!(lines[1], "Failed to retrieve data.");
    }
}
