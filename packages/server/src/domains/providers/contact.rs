//! WhatsApp contact link for a provider profile.

/// Country calling code prepended to local numbers.
const COUNTRY_CODE: &str = "55";

/// Build a `wa.me` link with a prefilled message.
///
/// Non-digits are stripped from `phone`; a number already carrying the
/// country code is used as is. Returns `None` when no digits remain.
pub fn whatsapp_url(phone: &str, provider_name: Option<&str>, message: Option<&str>) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // 10-11 digits is a local number (area code + subscriber).
    let number = if digits.starts_with(COUNTRY_CODE) && digits.len() > 11 {
        digits
    } else {
        format!("{COUNTRY_CODE}{digits}")
    };

    let text = match (message, provider_name) {
        (Some(message), _) => message.to_string(),
        (None, Some(name)) => format!("Hi {name}! I found your profile on the marketplace and would like a quote."),
        (None, None) => "Hi! I found your profile on the marketplace and would like a quote.".to_string(),
    };

    Some(format!("https://wa.me/{number}?text={}", urlencoding::encode(&text)))
}
