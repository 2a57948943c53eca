use url::Url;

use crate::errors::UrlParseError;
use crate::key::ResolvedKey;

/// Template used when no style has been selected yet.
pub const DEFAULT_STYLE_TEMPLATE: &str = "https://api.maptiler.com/maps/streets/style.json?key=";

/// Composes the fetchable style URL: `template + key`.
///
/// An empty `template` is replaced with [`DEFAULT_STYLE_TEMPLATE`].
///
/// # Errors
/// - `UrlParseError` if the concatenation is not a valid absolute URL. Catalog
///   templates are well formed, so this only fires for hand-written templates.
pub fn build_style_url(template: &str, key: &ResolvedKey) -> Result<Url, UrlParseError> {
    let template = if template.is_empty() {
        DEFAULT_STYLE_TEMPLATE
    } else {
        template
    };

    let composed = format!("{}{}", template, key.as_str());
    Url::parse(&composed).map_err(|e| UrlParseError {
        input: composed.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::validate_key;

    fn key(raw: &str) -> ResolvedKey {
        validate_key(Some(raw.to_string())).unwrap()
    }

    #[test]
    fn test_empty_template_uses_default() {
        let url = build_style_url("", &key("abc")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.maptiler.com/maps/streets/style.json?key=abc"
        );
    }

    #[test]
    fn test_template_and_key_are_concatenated() {
        let template = "https://api.maptiler.com/maps/topo-v2/style.json?key=";
        let url = build_style_url(template, &key("xyz")).unwrap();
        assert_eq!(url.as_str(), format!("{}xyz", template));
    }

    #[test]
    fn test_relative_template_fails() {
        let result = build_style_url("maps/style.json?key=", &key("abc"));
        let error = result.unwrap_err();
        assert_eq!(error.input, "maps/style.json?key=abc");
    }
}
