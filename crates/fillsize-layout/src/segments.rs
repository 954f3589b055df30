#![forbid(unsafe_code)]

//! URL templates whose placeholders are filled with computed item extents.
//!
//! Image endpoints often encode the requested dimensions in the path
//! (`/img/{w}x{h}/cat.png`). A [`SegmentTemplate`] maps a segment key such as
//! [`WIDTH_SEGMENT`] to the placeholder text used in one particular URL, so
//! callers can substitute values without knowing each endpoint's syntax.

use std::collections::BTreeMap;

use fillsize_core::{Size, debug};

/// Segment key for the item width.
pub const WIDTH_SEGMENT: &str = "width";
/// Segment key for the item height.
pub const HEIGHT_SEGMENT: &str = "height";

/// A URL plus the placeholders it contains, keyed by segment name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentTemplate {
    url: Option<String>,
    segments: BTreeMap<String, String>,
}

impl SegmentTemplate {
    pub fn new(url: Option<String>, segments: BTreeMap<String, String>) -> Self {
        Self { url, segments }
    }

    /// Template with `width`/`height` placeholders.
    pub fn sized(url: impl Into<String>, width: impl Into<String>, height: impl Into<String>) -> Self {
        let segments = BTreeMap::from([
            (WIDTH_SEGMENT.to_owned(), width.into()),
            (HEIGHT_SEGMENT.to_owned(), height.into()),
        ]);
        Self::new(Some(url.into()), segments)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Placeholder text registered for `key`.
    pub fn placeholder(&self, key: &str) -> Option<&str> {
        self.segments.get(key).map(String::as_str)
    }

    /// Substitute every replacement whose key has a placeholder.
    ///
    /// Replacements are applied in ascending key order (so `height` before
    /// `width`) and each replaces all occurrences of its placeholder. The
    /// order only matters when one placeholder contains another. Keys with no
    /// registered placeholder are skipped. Returns `None` when the template
    /// has no URL.
    pub fn render(&self, replacements: &BTreeMap<String, String>) -> Option<String> {
        let mut rendered = self.url.clone()?;
        for (key, value) in replacements {
            match self.segments.get(key) {
                Some(placeholder) if !placeholder.is_empty() => {
                    rendered = rendered.replace(placeholder.as_str(), value);
                    debug!(
                        key = key.as_str(),
                        placeholder = placeholder.as_str(),
                        value = value.as_str(),
                        "replaced segment"
                    );
                }
                _ => {
                    debug!(key = key.as_str(), "no placeholder for segment; value ignored");
                }
            }
        }
        debug!(from = self.url.as_deref(), to = rendered.as_str(), "segment modifications complete");
        Some(rendered)
    }

    /// Fill the `width` and `height` segments from `size`.
    pub fn render_size(&self, size: Size) -> Option<String> {
        let replacements = BTreeMap::from([
            (WIDTH_SEGMENT.to_owned(), size.width.to_string()),
            (HEIGHT_SEGMENT.to_owned(), size.height.to_string()),
        ]);
        self.render(&replacements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_size_fills_both_segments() {
        let template = SegmentTemplate::sized("https://img.test/{w}x{h}/a.png", "{w}", "{h}");
        assert_eq!(
            template.render_size(Size::new(320, 180)).as_deref(),
            Some("https://img.test/320x180/a.png")
        );
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let template = SegmentTemplate::sized("https://img.test/{w}/a.png", "{w}", "{h}");
        let replacements = BTreeMap::from([
            ("depth".to_owned(), "8".to_owned()),
            (WIDTH_SEGMENT.to_owned(), "64".to_owned()),
        ]);
        assert_eq!(
            template.render(&replacements).as_deref(),
            Some("https://img.test/64/a.png")
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let template = SegmentTemplate::sized("/{s}/{s}.png", "{s}", "{h}");
        let replacements = BTreeMap::from([(WIDTH_SEGMENT.to_owned(), "9".to_owned())]);
        assert_eq!(template.render(&replacements).as_deref(), Some("/9/9.png"));
    }

    #[test]
    fn overlapping_placeholders_apply_in_key_order() {
        // "{s}" is a prefix of "{s}h"; height is substituted first.
        let template = SegmentTemplate::sized("/{s}h/{s}.png", "{s}", "{s}h");
        assert_eq!(
            template.render_size(Size::new(10, 20)).as_deref(),
            Some("/20/10.png")
        );
    }

    #[test]
    fn missing_url_renders_none() {
        let template = SegmentTemplate::new(None, BTreeMap::new());
        assert_eq!(template.render_size(Size::new(1, 1)), None);
        assert_eq!(template.url(), None);
    }

    #[test]
    fn empty_placeholder_is_ignored() {
        let template = SegmentTemplate::sized("/a.png", "", "{h}");
        assert_eq!(template.render_size(Size::new(5, 6)).as_deref(), Some("/a.png"));
        assert_eq!(template.placeholder(HEIGHT_SEGMENT), Some("{h}"));
    }
}
