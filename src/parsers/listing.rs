use crate::error::ParseError;
use crate::parsers::html::{child_text, element_text};
use crate::parsers::specs::{SpecOutcome, normalize_specs};
use crate::parsers::text::{normalize_price, resolve_distance};
use crate::parsers::ResultPage;
use crate::results::VehicleRecord;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

const LISTING_CSS: &str = "li.search-page__result";
const LINK_CSS: &str = "a.js-click-handler.listing-fpa-link.tracking-standard-link";
const CAR_INFO_CSS: &str = "div.product-card-content__car-info";
const DETAILS_CSS: &str = "section.product-card-details";
const TITLE_CSS: &str = "h3.product-card-details__title";
const PRICE_CSS: &str = "div.product-card-pricing__price";
const SPEC_CSS: &str = "li.atc-type-picanto--medium";
const SELLER_CSS: &str = "div.product-card-seller-info";
const SELLER_NAME_CSS: &str = "h3.product-card-seller-info__name";
const SELLER_LINE_CSS: &str = "li.product-card-seller-info__spec-item";

macro_rules! selector {
    ($name:ident, $css:expr) => {
        static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect("listing selector is valid"));
    };
}

selector!(LISTING, LISTING_CSS);
selector!(LINK, LINK_CSS);
selector!(CAR_INFO, CAR_INFO_CSS);
selector!(DETAILS, DETAILS_CSS);
selector!(TITLE, TITLE_CSS);
selector!(PRICE, PRICE_CSS);
selector!(SPEC, SPEC_CSS);
selector!(SELLER, SELLER_CSS);
selector!(SELLER_NAME, SELLER_NAME_CSS);
selector!(SELLER_LINE, SELLER_LINE_CSS);

/// Extracts every complete listing on a results page, in page order.
///
/// Listings with too few spec items are skipped. Any other missing element
/// fails the whole page.
pub fn extract_listings(page: &ResultPage, origin: &Url) -> Result<Vec<VehicleRecord>, ParseError> {
    let mut records = Vec::new();
    for listing in page.document().select(&LISTING) {
        if let Some(record) = extract_listing(listing, origin)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Extracts one listing; `None` when it has too few spec items
pub fn extract_listing(
    listing: ElementRef<'_>,
    origin: &Url,
) -> Result<Option<VehicleRecord>, ParseError> {
    let url = detail_url(listing, origin)?;

    let car_info = first(listing, &CAR_INFO, CAR_INFO_CSS)?;
    let details = first(car_info, &DETAILS, DETAILS_CSS)?;
    let title = child_text(details, &TITLE).ok_or(ParseError::MissingElement(TITLE_CSS))?;
    let price = child_text(car_info, &PRICE)
        .map(|text| normalize_price(&text))
        .ok_or(ParseError::MissingElement(PRICE_CSS))?;

    let items = details.select(&SPEC).map(element_text).collect();
    let specs = match normalize_specs(items) {
        SpecOutcome::Complete(specs) => specs,
        SpecOutcome::Insufficient { count } => {
            ::log::debug!("Skipping {} with only {} spec items", url, count);
            return Ok(None);
        }
    };

    let seller = first(listing, &SELLER, SELLER_CSS)?;
    let seller_name =
        child_text(seller, &SELLER_NAME).ok_or(ParseError::MissingElement(SELLER_NAME_CSS))?;
    let distance = resolve_distance(seller.select(&SELLER_LINE).map(element_text));

    Ok(Some(VehicleRecord {
        title,
        price,
        reg: specs.reg,
        body_type: specs.body_type,
        mileage: specs.mileage,
        engine_size: specs.engine_size,
        engine_power: specs.engine_power,
        gearbox: specs.gearbox,
        fuel_type: specs.fuel_type,
        seller_name,
        distance,
        url,
    }))
}

fn detail_url(listing: ElementRef<'_>, origin: &Url) -> Result<String, ParseError> {
    let link = first(listing, &LINK, LINK_CSS)?;
    let href = link.value().attr("href").ok_or(ParseError::MissingAttribute {
        element: LINK_CSS,
        attribute: "href",
    })?;

    origin
        .join(href)
        .map(String::from)
        .map_err(|e| ParseError::InvalidLink {
            href: href.to_string(),
            reason: e.to_string(),
        })
}

fn first<'a>(
    element: ElementRef<'a>,
    selector: &Selector,
    css: &'static str,
) -> Result<ElementRef<'a>, ParseError> {
    element
        .select(selector)
        .next()
        .ok_or(ParseError::MissingElement(css))
}
