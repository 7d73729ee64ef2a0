use super::fixtures::results_page;
use crate::error::ParseError;
use crate::parsers::ResultPage;
use crate::parsers::pagination::{resolve_page_count, total_pages};

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count_text: &str) -> ResultPage {
        ResultPage::parse(&results_page(count_text, &[]))
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(&page("Page 1 of 37")).unwrap(), 37);
        assert_eq!(total_pages(&page("  Page 1 of\n 1,234 ")).unwrap(), 1234);
    }

    #[test]
    fn test_requested_max_caps_total() {
        assert_eq!(resolve_page_count(&page("Page 1 of 37"), 100).unwrap(), 37);
        assert_eq!(resolve_page_count(&page("Page 1 of 500"), 10).unwrap(), 10);
        assert_eq!(resolve_page_count(&page("Page 1 of 1"), 1).unwrap(), 1);
    }

    #[test]
    fn test_missing_indicator_is_an_error() {
        let page = ResultPage::parse("<html><body><p>We could not find that page</p></body></html>");
        assert_eq!(
            resolve_page_count(&page, 100).unwrap_err(),
            ParseError::MissingElement("li.paginationMini__count")
        );
    }

    #[test]
    fn test_non_numeric_count_is_an_error() {
        assert_eq!(
            total_pages(&page("Page 1 of many")).unwrap_err(),
            ParseError::InvalidCount("Page 1 of many".to_string())
        );
        assert!(matches!(
            total_pages(&page("Page 1")).unwrap_err(),
            ParseError::InvalidCount(_)
        ));
    }
}
