//! Plain-text card rendering for terminals

use crate::card::{CardContent, CardView};
use crate::output::traits::{CardOutput, OutputResult};
use std::io::Write;

/// Writes cards as a few lines of plain text
#[derive(Debug, Default, Clone, Copy)]
pub struct TextOutput;

impl CardOutput for TextOutput {
    fn write_card(&self, card: &CardView, writer: &mut dyn Write) -> OutputResult<()> {
        writer.write_all(format_text_card(card).as_bytes())?;
        Ok(())
    }
}

/// Formats a card as plain text
pub fn format_text_card(card: &CardView) -> String {
    let mut out = String::new();

    match &card.content {
        CardContent::Profile {
            kind,
            title,
            subtitle,
            description,
            avatar_url,
            extra,
        } => {
            out.push_str(&format!("{} [{}]\n", title, kind));
            out.push_str(&format!("{}\n", subtitle));
            if let Some(extra) = extra {
                out.push_str(&format!("{}\n", extra));
            }
            if let Some(description) = description {
                out.push('\n');
                out.push_str(&format!("{}\n", description));
            }
            out.push('\n');
            out.push_str(&format!("Avatar: {}\n", avatar_url));
            out.push_str(&format!("Theme: {}\n", card.theme));
        }
        CardContent::Unavailable { headline, hint } => {
            out.push_str(&format!("{}\n", headline));
            out.push_str(&format!("{}\n", hint));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{build_card, Theme};
    use crate::profile::{ProfileKind, ProfileRecord};

    #[test]
    fn test_format_profile() {
        let record = ProfileRecord {
            kind: ProfileKind::Bot,
            title: Some("Helper".to_string()),
            handle: "helperbot".to_string(),
            description: Some("I help".to_string()),
            avatar_url: "https://x/bot.jpg".to_string(),
            extra: Some("500 monthly users".to_string()),
        };
        let text = format_text_card(&build_card(Ok(record), Theme::Dark));

        assert!(text.starts_with("Helper [bot]\n@helperbot\n500 monthly users\n"));
        assert!(text.contains("\nI help\n"));
        assert!(text.contains("Avatar: https://x/bot.jpg\n"));
        assert!(text.ends_with("Theme: dark\n"));
    }

    #[test]
    fn test_format_fallback() {
        let text = format_text_card(&CardView::fallback());
        assert_eq!(
            text,
            "Unable to load Telegram profile\nPlease check the username and try again\n"
        );
    }

    #[test]
    fn test_write_card() {
        let mut buf = Vec::new();
        TextOutput.write_card(&CardView::fallback(), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("Unable"));
    }
}
