//! Contact Links
//!
//! `mailto:` and `tel:` hrefs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in mailto query values (RFC 6068)
const MAILTO_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `mailto:` link, optionally with a pre-filled subject
pub fn mailto(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!(
            "mailto:{}?subject={}",
            email,
            utf8_percent_encode(subject, MAILTO_ENCODE_SET)
        ),
        None => format!("mailto:{}", email),
    }
}

/// `tel:` link with display spacing removed
pub fn tel(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_strips_spaces() {
        assert_eq!(tel("+31 20 123 4567"), "tel:+31201234567");
    }

    #[test]
    fn test_mailto_plain() {
        assert_eq!(mailto("hello@bliksemcafe.com", None), "mailto:hello@bliksemcafe.com");
    }

    #[test]
    fn test_mailto_subject_is_encoded() {
        assert_eq!(
            mailto("hello@bliksemcafe.com", Some("Large group & private hire")),
            "mailto:hello@bliksemcafe.com?subject=Large%20group%20%26%20private%20hire"
        );
    }
}
