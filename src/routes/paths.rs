//! Route paths shared by links, guards and redirects.

use url::{Url, form_urlencoded};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DOCUMENTS: &str = "/documents";
pub const CONTACT: &str = "/contact";
pub const HELP: &str = "/help";

/// Detail page for a document kind. A missing template id is kept as the
/// literal `null` segment the detail service expects.
pub fn document_detail(template_id: Option<&str>, name: &str) -> String {
    let segment = match template_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => path_segment(id),
        None => "null".to_string(),
    };
    let name: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
    format!("/documentos/{segment}?valor={name}")
}

/// The header's "Entrar" link is redundant where the page itself offers
/// sign-in: the dashboard's guest call to action and the login form.
pub fn header_sign_in_visible(pathname: &str) -> bool {
    !matches!(pathname, HOME | LOGIN)
}

/// Percent-encodes `raw` as a single path segment, so `/`, `?` and `%` stay
/// inside it. Spaces become `%20`, not `+`.
fn path_segment(raw: &str) -> String {
    Url::parse("http://localhost/")
        .ok()
        .and_then(|mut url| {
            url.path_segments_mut().ok()?.clear().push(raw);
            url.path_segments()?.next().map(str::to_string)
        })
        .unwrap_or_else(|| form_urlencoded::byte_serialize(raw.as_bytes()).collect())
}

#[cfg(test)]
mod tests {
    use super::{HOME, LOGIN, REGISTER, document_detail, header_sign_in_visible};

    #[test]
    fn detail_path_encodes_the_document_name() {
        assert_eq!(
            document_detail(Some("TPL-1"), "Holerites"),
            "/documentos/TPL-1?valor=Holerites"
        );
        assert_eq!(
            document_detail(Some("TPL-1"), "Férias & 13º"),
            "/documentos/TPL-1?valor=F%C3%A9rias+%26+13%C2%BA"
        );
    }

    #[test]
    fn missing_template_uses_null_segment() {
        assert_eq!(
            document_detail(None, "Ponto"),
            "/documentos/null?valor=Ponto"
        );
        assert_eq!(
            document_detail(Some("  "), "Ponto"),
            "/documentos/null?valor=Ponto"
        );
    }

    #[test]
    fn template_id_is_encoded_as_one_path_segment() {
        assert_eq!(
            document_detail(Some("TPL 1/a?b"), "Ponto"),
            "/documentos/TPL%201%2Fa%3Fb?valor=Ponto"
        );
        assert_eq!(
            document_detail(Some("100%"), "Ponto"),
            "/documentos/100%25?valor=Ponto"
        );
    }

    #[test]
    fn header_sign_in_hidden_where_the_page_offers_it() {
        assert!(!header_sign_in_visible(HOME));
        assert!(!header_sign_in_visible(LOGIN));
        assert!(header_sign_in_visible(REGISTER));
        assert!(header_sign_in_visible("/documentos/TPL-1"));
    }
}
