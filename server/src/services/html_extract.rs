//! Image and paragraph extraction from campaign HTML.
//!
//! Campaign summaries only carry settings; the blog cards and the campaign
//! page also need the newsletter's pictures and text. Both are pulled from the
//! rendered HTML with a handful of patterns rather than a DOM parser, which is
//! enough for the template-generated markup Mailchimp emits.

use regex::{Captures, Regex};
use serde::Serialize;

/// Tracking pixels and spacers are smaller than this on either side.
const MIN_IMAGE_SIDE_PX: u32 = 40;
/// Paragraphs shorter than this (after cleanup) are dropped as layout noise.
const MIN_PARAGRAPH_CHARS: usize = 20;
const MAX_DESCRIPTIONS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extracted {
    pub images: Vec<ExtractedImage>,
    pub descriptions: Vec<String>,
}

/// Compiled patterns, built once at startup.
pub struct HtmlExtractor {
    img_tag: Regex,
    attr: Regex,
    paragraph: Regex,
    tag: Regex,
    hidden: Regex,
    entity: Regex,
}

impl HtmlExtractor {
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            img_tag: Regex::new(r"(?is)<img\b[^>]*>")?,
            attr: Regex::new(r#"(?is)\b([a-z-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?,
            paragraph: Regex::new(r"(?is)<(?:p|h[1-4])\b[^>]*>(.*?)</(?:p|h[1-4])>")?,
            tag: Regex::new(r"(?s)<[^>]*>")?,
            hidden: Regex::new(r"(?is)<(style|script|head)\b.*?</(?:style|script|head)>")?,
            entity: Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,7});")?,
        })
    }

    /// Decode named and numeric entities in one pass. Unknown ones stay as written.
    fn decode_entities(&self, text: &str) -> String {
        self.entity
            .replace_all(text, |caps: &Captures| decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_owned()))
            .into_owned()
    }

    #[must_use]
    pub fn extract(&self, html: &str) -> Extracted {
        let visible = self.hidden.replace_all(html, "");
        Extracted { images: self.images(&visible), descriptions: self.descriptions(&visible) }
    }

    fn images(&self, html: &str) -> Vec<ExtractedImage> {
        let mut out: Vec<ExtractedImage> = Vec::new();
        for tag in self.img_tag.find_iter(html) {
            let mut src = None;
            let mut alt = String::new();
            let mut too_small = false;
            for cap in self.attr.captures_iter(tag.as_str()) {
                let value = cap.get(2).or_else(|| cap.get(3)).map_or("", |m| m.as_str());
                match cap[1].to_ascii_lowercase().as_str() {
                    "src" => src = Some(self.decode_entities(value)),
                    "alt" => alt = self.decode_entities(value).trim().to_owned(),
                    "width" | "height" => {
                        if value.trim().parse::<u32>().is_ok_and(|px| px < MIN_IMAGE_SIDE_PX) {
                            too_small = true;
                        }
                    }
                    _ => {}
                }
            }
            let Some(url) = src.filter(|u| u.starts_with("http")) else {
                continue;
            };
            if too_small || out.iter().any(|img| img.url == url) {
                continue;
            }
            out.push(ExtractedImage { url, alt });
        }
        out
    }

    fn descriptions(&self, html: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for cap in self.paragraph.captures_iter(html) {
            let text = self.tag.replace_all(&cap[1], " ");
            let text = self.decode_entities(&text).split_whitespace().collect::<Vec<_>>().join(" ");
            if text.chars().count() < MIN_PARAGRAPH_CHARS || out.contains(&text) {
                continue;
            }
            out.push(text);
            if out.len() == MAX_DESCRIPTIONS {
                break;
            }
        }
        out
    }
}

/// Character for one entity body (the text between `&` and `;`).
fn decode_entity(body: &str) -> Option<String> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).filter(|c| *c != '\0').map(String::from);
    }
    let ch = match body {
        "nbsp" => " ",
        "amp" => "&",
        "quot" => "\"",
        "apos" => "'",
        "lt" => "<",
        "gt" => ">",
        "aacute" => "á",
        "eacute" => "é",
        "iacute" => "í",
        "oacute" => "ó",
        "uacute" => "ú",
        "uuml" => "ü",
        "ntilde" => "ñ",
        "Aacute" => "Á",
        "Eacute" => "É",
        "Iacute" => "Í",
        "Oacute" => "Ó",
        "Uacute" => "Ú",
        "Uuml" => "Ü",
        "Ntilde" => "Ñ",
        "iquest" => "¿",
        "iexcl" => "¡",
        "ordm" => "º",
        "ordf" => "ª",
        "deg" => "°",
        "laquo" => "«",
        "raquo" => "»",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        "bull" => "\u{2022}",
        "middot" => "·",
        "copy" => "©",
        "reg" => "®",
        "trade" => "\u{2122}",
        "euro" => "€",
        _ => return None,
    };
    Some(ch.to_owned())
}

#[cfg(test)]
#[path = "html_extract_test.rs"]
mod tests;
