//! Embeddable iframe HTML for hosted plots

use std::fmt;

/// Base URL of the hosted plotting service
pub const PLOT_HOST: &str = "https://plot.ly";

/// Space reserved around the plot inside a pixel-sized iframe
const PADDING: u32 = 25;

/// Width or height of an embedded plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Length {
    /// Absolute size in pixels
    Pixels(u32),
    /// Any other CSS length, e.g. `"100%"`
    Relative(String),
}

impl Length {
    /// Parse a CLI-style length: bare integers are pixels, anything else is
    /// passed through as a CSS length
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<u32>() {
            Ok(px) => Length::Pixels(px),
            Err(_) => Length::Relative(s.trim().to_string()),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Pixels(px) => write!(f, "{}", px),
            Length::Relative(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Length::Pixels(px)
    }
}

impl From<&str> for Length {
    fn from(s: &str) -> Self {
        Length::Relative(s.to_string())
    }
}

/// Default embed width: the full container
pub fn default_width() -> Length {
    Length::Relative("100%".to_string())
}

/// Default embed height in pixels
pub fn default_height() -> Length {
    Length::Pixels(525)
}

/// Build the iframe HTML that embeds `~username/plot_id`
///
/// When both dimensions are in pixels the plot URL also carries the inner plot
/// size (each dimension minus the padding); otherwise the service sizes the
/// plot itself.
pub fn get_embed(username: &str, plot_id: &str, width: &Length, height: &Length) -> String {
    let src = match (width, height) {
        (Length::Pixels(w), Length::Pixels(h)) => format!(
            "{}/~{}/{}/{}/{}",
            PLOT_HOST,
            username,
            plot_id,
            w.saturating_sub(PADDING),
            h.saturating_sub(PADDING)
        ),
        _ => format!("{}/~{}/{}", PLOT_HOST, username, plot_id),
    };

    format!(
        "<iframe id=\"igraph\" scrolling=\"no\" seamless=\"seamless\" src=\"{}\" height=\"{}\" width=\"{}\"></iframe>",
        src, height, width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_with_defaults() {
        let html = get_embed("alice", "12", &default_width(), &default_height());
        assert_eq!(
            html,
            "<iframe id=\"igraph\" scrolling=\"no\" seamless=\"seamless\" \
             src=\"https://plot.ly/~alice/12\" height=\"525\" width=\"100%\"></iframe>"
        );
    }

    #[test]
    fn test_embed_with_pixel_sizes() {
        let html = get_embed("alice", "12", &Length::Pixels(800), &Length::Pixels(600));
        assert!(html.contains("src=\"https://plot.ly/~alice/12/775/575\""));
        assert!(html.contains("height=\"600\""));
        assert!(html.contains("width=\"800\""));
    }

    #[test]
    fn test_embed_small_pixels_do_not_underflow() {
        let html = get_embed("bob", "3", &Length::Pixels(10), &Length::Pixels(20));
        assert!(html.contains("/~bob/3/0/0\""));
    }

    #[test]
    fn test_length_parse() {
        assert_eq!(Length::parse("640"), Length::Pixels(640));
        assert_eq!(Length::parse("100%"), Length::Relative("100%".to_string()));
        assert_eq!(Length::parse(" 50em "), Length::Relative("50em".to_string()));
        assert_eq!(Length::from(3).to_string(), "3");
        assert_eq!(Length::from("80%").to_string(), "80%");
    }
}
