use scraper::{ElementRef, Html, Selector};

/// A fetched results page, parsed into a document tree
pub struct ResultPage {
    doc: Html,
}

impl ResultPage {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    pub fn document(&self) -> &Html {
        &self.doc
    }

    /// Trimmed text of the first element matching `selector`
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.doc.select(selector).next().map(element_text)
    }
}

/// Text content of an element with runs of whitespace collapsed
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first descendant of `element` matching `selector`
pub fn child_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}
