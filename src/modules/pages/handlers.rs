use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;

use crate::app_state::AppState;
use crate::db::models::{AvailabilityPeriod, PeriodStatus, Property, PropertyKind};
use crate::db::repositories::{AvailabilityRepository, PropertyRepository};
use crate::error::AppResult;
use crate::i18n::I18n;
use crate::modules::HtmlTemplate;

/// Localized page chrome shared by every public template.
pub struct Chrome {
    pub lang: &'static str,
    pub site_name: String,
    pub tagline: String,
    pub nav_destinations: String,
    pub nav_services: String,
    pub inquire_cta: String,
}

impl Chrome {
    fn new(i18n: &I18n) -> Self {
        Self {
            lang: i18n.language().code(),
            site_name: i18n.get("site-name"),
            tagline: i18n.get("site-tagline"),
            nav_destinations: i18n.get("nav-destinations"),
            nav_services: i18n.get("nav-services"),
            inquire_cta: i18n.get("inquire-cta"),
        }
    }
}

pub struct PropertyCard {
    pub slug: String,
    pub name: String,
    pub destination: String,
    pub kind_label: String,
    pub guests: i32,
    pub bedrooms: i32,
    pub headline: String,
    pub hero_image: String,
    pub price_from: String,
}

pub struct DestinationCard {
    pub name: String,
    pub count: usize,
}

fn kind_label(kind: PropertyKind, i18n: &I18n) -> String {
    match kind {
        PropertyKind::Villa => i18n.get("kind-villa"),
        PropertyKind::Yacht => i18n.get("kind-yacht"),
    }
}

/// "From €N/week" line for listing cards, off the cheapest available
/// period; empty when nothing is priced.
fn price_from_line(periods: &[AvailabilityPeriod], i18n: &I18n) -> String {
    periods
        .iter()
        .filter(|p| p.status == PeriodStatus::Available)
        .map(|p| p.price_per_week)
        .min()
        .map(|price: Decimal| {
            let args = crate::i18n_args!("price" => price.to_string());
            i18n.get_with_args("price-from-per-week", &args)
        })
        .unwrap_or_default()
}

async fn property_card(
    state: &AppState,
    property: &Property,
    i18n: &I18n,
) -> AppResult<PropertyCard> {
    let periods = AvailabilityRepository::list_for_property(&state.db, property.id).await?;
    Ok(PropertyCard {
        slug: property.slug.clone(),
        name: property.name.clone(),
        destination: property.destination.clone(),
        kind_label: kind_label(property.kind, i18n),
        guests: property.guests,
        bedrooms: property.bedrooms,
        headline: property.headline.clone().unwrap_or_default(),
        hero_image: property.hero_image.clone().unwrap_or_default(),
        price_from: price_from_line(&periods, i18n),
    })
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    pub destinations: Vec<DestinationCard>,
    pub featured: Vec<PropertyCard>,
}

pub async fn home(State(state): State<AppState>, i18n: I18n) -> AppResult<Response> {
    let properties = PropertyRepository::list_published(&state.db).await?;

    let mut destinations: Vec<DestinationCard> = Vec::new();
    for property in &properties {
        match destinations
            .iter_mut()
            .find(|d| d.name == property.destination)
        {
            Some(card) => card.count += 1,
            None => destinations.push(DestinationCard {
                name: property.destination.clone(),
                count: 1,
            }),
        }
    }

    let mut featured = Vec::new();
    for property in properties.iter().take(6) {
        featured.push(property_card(&state, property, &i18n).await?);
    }

    Ok(HtmlTemplate(HomeTemplate {
        chrome: Chrome::new(&i18n),
        destinations,
        featured,
    })
    .into_response())
}

#[derive(Template)]
#[template(path = "pages/destination.html")]
pub struct DestinationTemplate {
    pub chrome: Chrome,
    pub destination: String,
    pub properties: Vec<PropertyCard>,
}

pub async fn destination(
    State(state): State<AppState>,
    i18n: I18n,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let all = PropertyRepository::list_published(&state.db).await?;
    let matching: Vec<&Property> = all
        .iter()
        .filter(|p| p.destination.eq_ignore_ascii_case(&name))
        .collect();

    if matching.is_empty() {
        return Ok(not_found_response(&i18n));
    }

    let mut cards = Vec::new();
    for property in matching.iter().copied() {
        cards.push(property_card(&state, property, &i18n).await?);
    }

    Ok(HtmlTemplate(DestinationTemplate {
        chrome: Chrome::new(&i18n),
        destination: matching[0].destination.clone(),
        properties: cards,
    })
    .into_response())
}

pub struct ImageView {
    pub url: String,
    pub caption: String,
}

pub struct InquiryFormText {
    pub title: String,
    pub name_label: String,
    pub email_label: String,
    pub phone_label: String,
    pub guests_label: String,
    pub message_label: String,
    pub submit_label: String,
}

#[derive(Template)]
#[template(path = "pages/property.html")]
pub struct PropertyTemplate {
    pub chrome: Chrome,
    pub slug: String,
    pub name: String,
    pub destination: String,
    pub kind_label: String,
    pub guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub headline: String,
    pub description: String,
    pub hero_image: String,
    pub price_from: String,
    pub images: Vec<ImageView>,
    pub calendar_title: String,
    pub form: InquiryFormText,
}

pub async fn property(
    State(state): State<AppState>,
    i18n: I18n,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let property = match PropertyRepository::find_by_slug(&state.db, &slug).await? {
        Some(p) if p.published => p,
        _ => return Ok(not_found_response(&i18n)),
    };

    let periods = AvailabilityRepository::list_for_property(&state.db, property.id).await?;
    let images = PropertyRepository::list_images(&state.db, property.id)
        .await?
        .into_iter()
        .map(|img| ImageView {
            url: img.url,
            caption: img.caption.unwrap_or_default(),
        })
        .collect();

    Ok(HtmlTemplate(PropertyTemplate {
        chrome: Chrome::new(&i18n),
        slug: property.slug.clone(),
        name: property.name.clone(),
        destination: property.destination.clone(),
        kind_label: kind_label(property.kind, &i18n),
        guests: property.guests,
        bedrooms: property.bedrooms,
        bathrooms: property.bathrooms,
        headline: property.headline.clone().unwrap_or_default(),
        description: property.description.clone().unwrap_or_default(),
        hero_image: property.hero_image.clone().unwrap_or_default(),
        price_from: price_from_line(&periods, &i18n),
        images,
        calendar_title: i18n.get("calendar-title"),
        form: InquiryFormText {
            title: i18n.get("inquiry-form-title"),
            name_label: i18n.get("inquiry-form-name"),
            email_label: i18n.get("inquiry-form-email"),
            phone_label: i18n.get("inquiry-form-phone"),
            guests_label: i18n.get("inquiry-form-guests"),
            message_label: i18n.get("inquiry-form-message"),
            submit_label: i18n.get("inquiry-form-submit"),
        },
    })
    .into_response())
}

#[derive(Template)]
#[template(path = "pages/services.html")]
pub struct ServiceTemplate {
    pub chrome: Chrome,
    pub title: String,
    pub body: String,
}

/// The service catalogue is fixed; each slug maps to a pair of Fluent
/// keys. Anything else is a 404.
const SERVICE_SLUGS: &[&str] = &["concierge", "private-chef", "yacht-crew"];

pub async fn service(i18n: I18n, Path(slug): Path<String>) -> Response {
    if !SERVICE_SLUGS.contains(&slug.as_str()) {
        return not_found_response(&i18n);
    }

    HtmlTemplate(ServiceTemplate {
        chrome: Chrome::new(&i18n),
        title: i18n.get(&format!("service-{}-title", slug)),
        body: i18n.get(&format!("service-{}-body", slug)),
    })
    .into_response()
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: Chrome,
    pub message: String,
}

fn not_found_response(i18n: &I18n) -> Response {
    (
        StatusCode::NOT_FOUND,
        HtmlTemplate(NotFoundTemplate {
            chrome: Chrome::new(i18n),
            message: i18n.get("not-found-message"),
        }),
    )
        .into_response()
}

/// Router fallback for unknown paths.
pub async fn not_found(i18n: I18n) -> Response {
    not_found_response(&i18n)
}
