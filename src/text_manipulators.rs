use scraper::ElementRef;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Breaks a chart label into lines of at most `width` characters.
pub fn wrap_label(label: &str, width: usize) -> Vec<String> {
    textwrap::wrap(label, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn extract_text_joins_and_trims() {
        let html = Html::parse_fragment("<h3>\n  Avada <b>Website</b> Builder \n</h3>");
        let selector = Selector::parse("h3").unwrap();
        let node = html.select(&selector).next().unwrap();
        assert_eq!(extract_text(node), "Avada Website Builder");
    }

    #[test]
    fn wrap_label_splits_on_words() {
        assert_eq!(
            wrap_label("Avada Website Builder For WordPress", 10),
            vec!["Avada", "Website", "Builder", "For", "WordPress"]
        );
    }

    #[test]
    fn wrap_label_breaks_long_words() {
        assert_eq!(wrap_label("Multipurpose", 10), vec!["Multipurpo", "se"]);
    }
}
