use crate::models::WindowClient;
use url::Url;

/// Resolves a relative or absolute navigation target against the worker scope.
pub fn resolve_target(scope: &Url, target: &str) -> Result<Url, url::ParseError> {
    scope.join(target)
}

/// Two URLs are the same page when they only differ in their fragment.
pub fn is_equal_ignore_hash(left: &Url, right: &Url) -> bool {
    let mut left = left.clone();
    left.set_fragment(None);
    let mut right = right.clone();
    right.set_fragment(None);
    left.as_str() == right.as_str()
}

/// String variant for client URLs. Unparseable URLs never match.
pub fn client_matches(client_url: &str, target: &Url) -> bool {
    match Url::parse(client_url) {
        Ok(url) => is_equal_ignore_hash(&url, target),
        Err(_) => false,
    }
}

pub fn find_matching_client<'a>(clients: &'a [WindowClient], target: &Url) -> Option<&'a WindowClient> {
    clients.iter().find(|client| client_matches(&client.url, target))
}
