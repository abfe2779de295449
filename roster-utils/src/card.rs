use std::fmt;

use serde::Serialize;

/// Plain-text panel used for every dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub footer: Option<String>,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{subtitle}")?;
        }
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        if let Some(footer) = &self.footer {
            write!(f, "-- {footer}")?;
        }
        Ok(())
    }
}

/// Build a standard paginated card with consistent layout.
pub fn build_paginated_card(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
) -> Card {
    build_paginated_card_with_footer_note(title, description, page, total_pages, None)
}

/// Build a standard paginated card with an optional footer suffix.
pub fn build_paginated_card_with_footer_note(
    title: &str,
    description: impl Into<String>,
    page: usize,
    total_pages: usize,
    footer_note: Option<&str>,
) -> Card {
    let page = page.max(1);
    let total_pages = total_pages.max(1);

    let footer_text = if total_pages > 1 {
        match footer_note {
            Some(note) if !note.is_empty() => format!("Page {}/{} • {}", page, total_pages, note),
            _ => format!("Page {}/{}", page, total_pages),
        }
    } else {
        match footer_note {
            Some(note) if !note.is_empty() => note.to_owned(),
            _ => String::new(),
        }
    };

    Card {
        title: title.to_owned(),
        subtitle: None,
        description: description.into(),
        footer: (!footer_text.is_empty()).then_some(footer_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_shows_page_only_for_multi_page_lists() {
        let card = build_paginated_card("Users", "body", 2, 5);
        assert_eq!(card.footer.as_deref(), Some("Page 2/5"));

        let single = build_paginated_card("Users", "body", 1, 1);
        assert_eq!(single.footer, None);
        assert_eq!(single.to_string(), "== Users ==\nbody\n");
    }

    #[test]
    fn footer_note_is_appended() {
        let card =
            build_paginated_card_with_footer_note("Users", "", 3, 4, Some("Showing 21 to 30"));
        assert_eq!(card.footer.as_deref(), Some("Page 3/4 • Showing 21 to 30"));
        assert_eq!(card.to_string(), "== Users ==\n-- Page 3/4 • Showing 21 to 30");
    }
}
