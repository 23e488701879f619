use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::i18n::SupportedLanguage;

/// Detects the visitor's language and stores it in request extensions.
pub async fn language_middleware(mut request: Request, next: Next) -> Response {
    let language = query_language(request.uri().query())
        .unwrap_or_else(|| detect_language_from_headers(request.headers()));
    request.extensions_mut().insert(language);
    next.run(request).await
}

/// The `?lang=` parameter backs the site's language switcher links and
/// outranks everything else.
fn query_language(query: Option<&str>) -> Option<SupportedLanguage> {
    for pair in query?.split('&') {
        if let Some(value) = pair.strip_prefix("lang=") {
            if let Ok(language) = value.parse::<SupportedLanguage>() {
                return Some(language);
            }
        }
    }
    None
}

/// Priority order: explicit X-Language header, then the `lang` cookie,
/// then the browser's Accept-Language.
fn detect_language_from_headers(headers: &HeaderMap) -> SupportedLanguage {
    if let Some(lang_header) = headers.get("X-Language") {
        if let Ok(lang_str) = lang_header.to_str() {
            if let Ok(language) = lang_str.parse::<SupportedLanguage>() {
                return language;
            }
        }
    }

    if let Some(cookie_header) = headers.get("Cookie") {
        if let Ok(cookies) = cookie_header.to_str() {
            for pair in cookies.split(';') {
                if let Some(value) = pair.trim().strip_prefix("lang=") {
                    if let Ok(language) = value.parse::<SupportedLanguage>() {
                        return language;
                    }
                }
            }
        }
    }

    if let Some(accept_language) = headers.get("Accept-Language") {
        if let Ok(accept_language_str) = accept_language.to_str() {
            return SupportedLanguage::from_accept_language(accept_language_str);
        }
    }

    SupportedLanguage::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn query_parameter_wins_when_present() {
        assert_eq!(
            query_language(Some("view=grid&lang=de")),
            Some(SupportedLanguage::German)
        );
        assert_eq!(query_language(Some("lang=fr")), None);
        assert_eq!(query_language(None), None);
    }

    #[test]
    fn explicit_header_beats_cookie_and_accept_language() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Language", HeaderValue::from_static("de"));
        headers.insert("Cookie", HeaderValue::from_static("lang=en"));
        headers.insert("Accept-Language", HeaderValue::from_static("en-US"));
        assert_eq!(detect_language_from_headers(&headers), SupportedLanguage::German);
    }

    #[test]
    fn lang_cookie_beats_accept_language() {
        let mut headers = HeaderMap::new();
        headers.insert("Cookie", HeaderValue::from_static("theme=dark; lang=de"));
        headers.insert("Accept-Language", HeaderValue::from_static("en-US"));
        assert_eq!(detect_language_from_headers(&headers), SupportedLanguage::German);
    }

    #[test]
    fn no_headers_defaults_to_english() {
        assert_eq!(
            detect_language_from_headers(&HeaderMap::new()),
            SupportedLanguage::English
        );
    }
}
