// HTML escaping for text lifted out of documents. Uploaded files are
// untrusted, so everything interpolated into a fragment goes through here.

pub fn escape_html(unsafe_text: &str) -> String {
    let mut text = unsafe_text.to_string();

    text = text.replace('&', "&amp;");
    text = text.replace('<', "&lt;");
    text = text.replace('>', "&gt;");
    text = text.replace('"', "&quot;");
    text = text.replace('\'', "&#39;");

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html("\"quote\""), "&quot;quote&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // The ampersand pass must run before the entity-producing passes,
        // otherwise "&lt;" would double-escape into "&amp;lt;".
        assert_eq!(escape_html("&<"), "&amp;&lt;");
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("Quarterly Report 2024"), "Quarterly Report 2024");
    }
}
