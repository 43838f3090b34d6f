//! YouTube link parsing for story cards.

#[cfg(test)]
#[path = "youtube_test.rs"]
mod youtube_test;

const EMBED_PARAMS: &str = "enablejsapi=1&rel=0&modestbranding=1";
const HOST_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];
const ID_PREFIXES: [&str; 3] = ["watch?v=", "youtu.be/", "/embed/"];

/// Whether the link points at YouTube.
#[must_use]
pub fn is_youtube(link: &str) -> bool {
    HOST_MARKERS.iter().any(|host| link.contains(host))
}

/// Video id from `watch?v=`, `youtu.be/` or `/embed/` links.
#[must_use]
pub fn video_id(link: &str) -> Option<&str> {
    if !is_youtube(link) {
        return None;
    }
    ID_PREFIXES.iter().find_map(|prefix| {
        let start = link.find(prefix)? + prefix.len();
        let rest = &link[start..];
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    })
}

/// Embeddable player URL for a YouTube link.
#[must_use]
pub fn embed_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("https://www.youtube.com/embed/{id}?{EMBED_PARAMS}"))
}

/// Poster frame for a YouTube link.
#[must_use]
pub fn thumbnail_url(link: &str) -> Option<String> {
    video_id(link).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}
