//! Renders the two transactional emails sent for each stored inquiry.
//!
//! The customer confirmation follows the inquiry's locale; the admin
//! notification is always English. Rendering failures fall back to a
//! plain-text body so a template bug never blocks the notification.

use askama::Template;

use crate::db::models::{Inquiry, Property};
use crate::i18n::{Localizer, SupportedLanguage};
use crate::i18n_args;
use crate::mailer::EmailMessage;

#[derive(Template)]
#[template(path = "emails/inquiry_admin.html")]
struct AdminEmailTemplate {
    full_name: String,
    email: String,
    phone: String,
    property_name: String,
    property_specs: String,
    dates: String,
    guests: String,
    message: String,
    source_url: String,
}

#[derive(Template)]
#[template(path = "emails/inquiry_customer.html")]
struct CustomerEmailTemplate {
    greeting: String,
    intro: String,
    property_name: String,
    property_image: String,
    property_specs: String,
    dates_line: String,
    outro: String,
    signature: String,
}

fn dates_line(inquiry: &Inquiry) -> String {
    match (inquiry.check_in, inquiry.check_out) {
        (Some(check_in), Some(check_out)) => format!("{} – {}", check_in, check_out),
        (Some(check_in), None) => check_in.to_string(),
        _ => String::new(),
    }
}

fn property_specs(property: &Property) -> String {
    format!(
        "{} guests · {} bedrooms · {} bathrooms",
        property.guests, property.bedrooms, property.bathrooms
    )
}

pub fn admin_notification(
    inquiry: &Inquiry,
    property: Option<&Property>,
    localizer: &Localizer,
    admin_address: &str,
) -> EmailMessage {
    let language = SupportedLanguage::English;
    let args = i18n_args!("name" => inquiry.full_name.clone());
    let subject = localizer
        .get_message_with_language(&language, "email-admin-subject", Some(&args))
        .unwrap_or_else(|_| format!("New inquiry from {}", inquiry.full_name));

    let template = AdminEmailTemplate {
        full_name: inquiry.full_name.clone(),
        email: inquiry.email.clone(),
        phone: inquiry.phone.clone().unwrap_or_default(),
        property_name: property.map(|p| p.name.clone()).unwrap_or_default(),
        property_specs: property.map(property_specs).unwrap_or_default(),
        dates: dates_line(inquiry),
        guests: inquiry.guests.map(|g| g.to_string()).unwrap_or_default(),
        message: inquiry.message.clone().unwrap_or_default(),
        source_url: inquiry.source_url.clone().unwrap_or_default(),
    };

    let html = template.render().unwrap_or_else(|err| {
        tracing::error!("Failed to render admin email: {}", err);
        format!("New inquiry from {} <{}>", inquiry.full_name, inquiry.email)
    });

    EmailMessage {
        to: admin_address.to_string(),
        subject,
        html,
    }
}

pub fn customer_confirmation(
    inquiry: &Inquiry,
    property: Option<&Property>,
    localizer: &Localizer,
) -> EmailMessage {
    let language = inquiry
        .locale
        .parse::<SupportedLanguage>()
        .unwrap_or_default();

    let subject = localizer.get_string_for_language(&language, "email-customer-subject");

    let greeting_args = i18n_args!("name" => inquiry.full_name.clone());
    let template = CustomerEmailTemplate {
        greeting: localizer
            .get_message_with_language(&language, "email-customer-greeting", Some(&greeting_args))
            .unwrap_or_else(|_| format!("Dear {},", inquiry.full_name)),
        intro: localizer.get_string_for_language(&language, "email-customer-intro"),
        property_name: property.map(|p| p.name.clone()).unwrap_or_default(),
        property_image: property
            .and_then(|p| p.hero_image.clone())
            .unwrap_or_default(),
        property_specs: property.map(property_specs).unwrap_or_default(),
        dates_line: dates_line(inquiry),
        outro: localizer.get_string_for_language(&language, "email-customer-outro"),
        signature: localizer.get_string_for_language(&language, "email-customer-signature"),
    };

    let html = template.render().unwrap_or_else(|err| {
        tracing::error!("Failed to render customer email: {}", err);
        localizer.get_string_for_language(&language, "email-customer-intro")
    });

    EmailMessage {
        to: inquiry.email.clone(),
        subject,
        html,
    }
}
