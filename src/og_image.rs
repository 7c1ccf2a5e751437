//! The social preview card, drawn as SVG.

use crate::config::{OG_IMAGE_HEIGHT, OG_IMAGE_WIDTH, SITE_DOMAIN};

const BACKGROUND: &str = "#FAF7F2";
const INK: &str = "#1C1917";
const MUTED: &str = "#8C8577";
const FAINT: &str = "#A8A196";
const PADDING: u32 = 80;

const WORDMARK: &str = "SATHI GROUP";
const HEADLINE: [&str; 2] = ["We build AI tools", "for your business."];
const TAGLINE: [&str; 2] = [
    "Custom AI agents that replace expensive software, automate operations,",
    "and give your team leverage that compounds every day.",
];

pub fn svg() -> String {
    let (width, height) = (OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT);
    let right = width - PADDING;
    let bottom = height - PADDING;
    let font = "font-family=\"Inter, Helvetica, Arial, sans-serif\"";

    let headline: String = HEADLINE
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                "  <text x=\"{}\" y=\"{}\" {} font-size=\"64\" font-weight=\"700\" letter-spacing=\"-1.3\" fill=\"{}\">{}</text>\n",
                PADDING,
                272 + i * 80,
                font,
                INK,
                line
            )
        })
        .collect();

    let tagline: String = TAGLINE
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                "  <text x=\"{}\" y=\"{}\" {} font-size=\"18\" fill=\"{}\">{}</text>\n",
                PADDING,
                bottom - 27 + i as u32 * 27,
                font,
                MUTED,
                line
            )
        })
        .collect();

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
  <rect width=\"{w}\" height=\"{h}\" fill=\"{bg}\"/>\n\
  <text x=\"{p}\" y=\"{top}\" {font} font-size=\"14\" font-weight=\"500\" letter-spacing=\"2.1\" fill=\"{muted}\">{mark}</text>\n\
{headline}{tagline}\
  <text x=\"{right}\" y=\"{bottom}\" {font} font-size=\"14\" letter-spacing=\"0.7\" text-anchor=\"end\" fill=\"{faint}\">{domain}</text>\n\
</svg>\n",
        w = width,
        h = height,
        bg = BACKGROUND,
        p = PADDING,
        top = PADDING + 14,
        font = font,
        muted = MUTED,
        mark = WORDMARK,
        headline = headline,
        tagline = tagline,
        right = right,
        bottom = bottom,
        faint = FAINT,
        domain = SITE_DOMAIN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_preview_dimensions() {
        let svg = svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1200\" height=\"630\""));
        assert!(svg.contains("viewBox=\"0 0 1200 630\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn card_carries_the_brand_copy() {
        let svg = svg();
        for text in [WORDMARK, HEADLINE[0], HEADLINE[1], SITE_DOMAIN] {
            assert!(svg.contains(&format!(">{}</text>", text)), "{}", text);
        }
        assert_eq!(svg.matches("<text").count(), 1 + HEADLINE.len() + TAGLINE.len() + 1);
    }
}
