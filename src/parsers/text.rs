use crate::results::DISTANCE_UNAVAILABLE;

/// Strips the currency symbol and digit-group separators from a price
pub fn normalize_price(text: &str) -> String {
    text.trim().replace(['£', ','], "")
}

/// What a seller info line says about distance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SellerLine {
    /// A distance in miles, numeric part only
    Miles(String),
    /// A review count, published instead of a distance
    Reviews,
    /// Anything else
    Other,
}

/// Classifies one seller info line such as "(5.2 miles)", "(1 mile)" or
/// "(1,234 reviews)". The last whitespace token, with parentheses, the unit
/// and commas removed, is taken as the distance.
pub fn classify_seller_line(text: &str) -> SellerLine {
    if text.contains("reviews") {
        return SellerLine::Reviews;
    }
    if !text.contains("mile") {
        return SellerLine::Other;
    }

    let cleaned = text
        .replace(['(', ')', ','], "")
        .replace("miles", "")
        .replace("mile", "");
    match cleaned.split_whitespace().last() {
        Some(token) if token.parse::<f64>().is_ok() => SellerLine::Miles(token.to_string()),
        _ => SellerLine::Other,
    }
}

/// Scans every seller line; the last line carrying a distance or a review
/// count decides the result.
pub fn resolve_distance<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut distance = DISTANCE_UNAVAILABLE.to_string();
    for line in lines {
        match classify_seller_line(line.as_ref()) {
            SellerLine::Miles(miles) => distance = miles,
            SellerLine::Reviews => distance = DISTANCE_UNAVAILABLE.to_string(),
            SellerLine::Other => {}
        }
    }
    distance
}
