//! Character escaping for XHTML output.
//!
//! The emitted page declares ISO-8859-1, while the in-memory model is UTF-8.
//! Every non-ASCII character is therefore written as a character reference:
//! named entities for the Latin-1 range (`&ouml;`, `&uuml;`, ...) and decimal
//! numeric references above U+00FF. The resulting byte stream is pure ASCII,
//! valid under both the declared and the actual encoding.

/// HTML 4 named entities for U+00A0..=U+00FF, indexed by `codepoint - 0xA0`.
const LATIN1_NAMES: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave", "Eacute",
    "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute",
    "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute",
    "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth", "ntilde",
    "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave", "uacute", "ucirc",
    "uuml", "yacute", "thorn", "yuml",
];

/// Escape text content: `&`, `<`, `>`, and everything non-ASCII.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if c.is_ascii() => out.push(c),
            c => push_char_ref(&mut out, c),
        }
    }
    out
}

/// Escape an attribute value: text escaping plus `"`.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if c.is_ascii() => out.push(c),
            c => push_char_ref(&mut out, c),
        }
    }
    out
}

fn push_char_ref(out: &mut String, c: char) {
    let cp = c as u32;
    if (0xA0..=0xFF).contains(&cp) {
        out.push('&');
        out.push_str(LATIN1_NAMES[(cp - 0xA0) as usize]);
        out.push(';');
    } else {
        // C1 controls and everything above Latin-1
        out.push_str("&#");
        out.push_str(&cp.to_string());
        out.push(';');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_chars() {
        assert_eq!(
            escape_text("$multimeter->read_voltage() & more"),
            "$multimeter-&gt;read_voltage() &amp; more"
        );
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        // Text escaping leaves quotes alone
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_latin1_named_entities() {
        assert_eq!(escape_text("Schröer"), "Schr&ouml;er");
        assert_eq!(escape_text("Hüttel"), "H&uuml;ttel");
        assert_eq!(escape_text("München"), "M&uuml;nchen");
        assert_eq!(escape_text("ß"), "&szlig;");
        assert_eq!(escape_text("\u{00A0}"), "&nbsp;");
        assert_eq!(escape_text("ÿ"), "&yuml;");
    }

    #[test]
    fn test_numeric_fallback_above_latin1() {
        assert_eq!(escape_text("Œ"), "&#338;");
        assert_eq!(escape_text("€"), "&#8364;");
        assert_eq!(escape_text("日"), "&#26085;");
    }

    #[test]
    fn test_output_is_ascii() {
        let escaped = escape_text("Daniel Schröer, Andreas K. Hüttel, € 100, 日本");
        assert!(escaped.is_ascii());
    }

    #[test]
    fn test_ascii_passthrough() {
        let plain = "Lab::VISA allows to perform test and measurement tasks.";
        assert_eq!(escape_text(plain), plain);
    }
}
