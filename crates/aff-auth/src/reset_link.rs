/// Extract the one-time reset token from a password-reset link.
///
/// Looks for a `token` query parameter, URL-decoded. The fragment is ignored.
/// Returns `None` when the link carries no non-empty token.
#[must_use]
pub fn token_from_link(link: &str) -> Option<String> {
    let without_fragment = link.split('#').next().unwrap_or(link);
    let query = without_fragment.split_once('?')?.1;

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "token")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::token_from_link;

    #[test]
    fn reads_token_parameter() {
        let link = "https://painel.example/trocar_senha.html?token=abc123&lang=pt";
        assert_eq!(token_from_link(link).as_deref(), Some("abc123"));
    }

    #[test]
    fn decodes_percent_escapes() {
        let link = "https://painel.example/reset?x=1&token=a%2Bb%3D";
        assert_eq!(token_from_link(link).as_deref(), Some("a+b="));
    }

    #[test]
    fn ignores_fragment_and_similar_keys() {
        let link = "https://painel.example/reset?reset_token=no#token=nope";
        assert_eq!(token_from_link(link), None);
    }

    #[test]
    fn no_query_or_empty_token_is_none() {
        assert_eq!(token_from_link("https://painel.example/reset"), None);
        assert_eq!(token_from_link("https://painel.example/reset?token="), None);
    }
}
