use scraper::{ElementRef, Selector};

use super::FetchError;

pub fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|err| FetchError::Selector(format!("{css}: {err:?}")))
}

/// Text content of `element` and its descendants, trimmed.
pub fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use scraper::Html;

    use super::*;

    #[rstest]
    fn test_trimmed_text_joins_nested_nodes() {
        let doc = Html::parse_fragment("<div class=\"suburb\">\n  <b>Bassendean</b> North  </div>");
        let div = doc.select(&selector(".suburb").unwrap()).next().unwrap();
        assert_eq!(trimmed_text(div), "Bassendean North");
    }

    #[rstest]
    fn test_invalid_selector() {
        assert!(matches!(selector("td[["), Err(FetchError::Selector(_))));
    }
}
