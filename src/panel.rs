use serde::Serialize;

use crate::catalog::Landmark;
use crate::constants::{BREAK_TOKEN, LINE_BREAK};

// Placeholder strings shown before any landmark is selected
const EMPTY_TITLE: &str = "Выберите объект на карте";
const EMPTY_PRIMARY: &str = "Информация о достопримечательности появится здесь.";
const EMPTY_DETAILS: &str = "Подробная информация будет загружена после выбора объекта.";
const DETAILS_TITLE: &str = "Подробности";
const NO_PHOTO_ALT: &str = "Фотография недоступна";

/// Current selection of the info panel. Recomputed on every interaction,
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub enum PanelState<'a> {
    Empty,
    Selected(&'a Landmark),
}

/// Rendered panel content, ready for the frontend to assign into the two
/// info blocks and the photo element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelContent {
    pub title: String,
    pub primary_html: String,
    pub details_title: String,
    pub details_html: String,
    pub image_url: Option<String>,
    pub image_alt: String,
}

/// Pure function from panel state to panel content.
///
/// Absent optional fields are omitted, never rendered as a literal
/// "null". The primary block joins address/founded/status with single
/// line breaks and carries no trailing break; the details block joins
/// exposition and interesting text, expanding the `@@BREAK@@` sentinel
/// and collapsing runs of breaks down to one.
pub fn render(state: PanelState<'_>) -> PanelContent {
    match state {
        PanelState::Empty => PanelContent {
            title: EMPTY_TITLE.to_string(),
            primary_html: EMPTY_PRIMARY.to_string(),
            details_title: DETAILS_TITLE.to_string(),
            details_html: EMPTY_DETAILS.to_string(),
            image_url: None,
            image_alt: NO_PHOTO_ALT.to_string(),
        },
        PanelState::Selected(landmark) => {
            let primary_html = [&landmark.address, &landmark.founded, &landmark.status]
                .into_iter()
                .flatten()
                .map(|field| expand_breaks(&escape_html(field)))
                .collect::<Vec<_>>()
                .join(LINE_BREAK);

            let mut details = String::new();
            if let Some(exposition) = &landmark.exposition {
                details.push_str(&escape_html(exposition));
            }
            if landmark.exposition.is_some() && landmark.interesting.is_some() {
                details.push_str(BREAK_TOKEN);
                details.push_str(BREAK_TOKEN);
            }
            if let Some(interesting) = &landmark.interesting {
                details.push_str(&escape_html(interesting));
            }
            let details_html = normalize_breaks(&details);

            let (image_url, image_alt) = match &landmark.image_url {
                Some(url) => (Some(url.clone()), landmark.name.clone()),
                None => (None, NO_PHOTO_ALT.to_string()),
            };

            PanelContent {
                title: landmark.name.clone(),
                primary_html,
                details_title: DETAILS_TITLE.to_string(),
                details_html,
                image_url,
                image_alt,
            }
        }
    }
}

/// Replace every sentinel token with a line break.
fn expand_breaks(text: &str) -> String {
    text.replace(BREAK_TOKEN, LINE_BREAK)
}

/// Expand sentinel tokens, collapse runs of consecutive breaks to a single
/// break, and trim a trailing break. Idempotent.
pub fn normalize_breaks(text: &str) -> String {
    let expanded = expand_breaks(text);
    let mut out = String::with_capacity(expanded.len());
    let mut rest = expanded.as_str();
    while let Some(pos) = rest.find(LINE_BREAK) {
        out.push_str(&rest[..pos]);
        out.push_str(LINE_BREAK);
        rest = &rest[pos..];
        while let Some(stripped) = rest.strip_prefix(LINE_BREAK) {
            rest = stripped;
        }
    }
    out.push_str(rest);
    if let Some(stripped) = out.strip_suffix(LINE_BREAK) {
        out.truncate(stripped.len());
    }
    out
}

/// Minimal HTML escaping for catalog text interpolated into panel markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record(name: &str) -> Landmark {
        Landmark {
            name: name.to_string(),
            lat: 59.94,
            lng: 30.3,
            address: None,
            founded: None,
            status: None,
            exposition: None,
            interesting: None,
            image_url: None,
        }
    }

    #[test]
    fn empty_state_uses_placeholders() {
        let content = render(PanelState::Empty);
        assert_eq!(content.title, "Выберите объект на карте");
        assert_eq!(content.details_title, "Подробности");
        assert!(content.image_url.is_none());
        assert_eq!(content.image_alt, "Фотография недоступна");
    }

    #[test]
    fn record_without_optional_fields_renders_name_only() {
        let content = render(PanelState::Selected(&bare_record("Музей гигиены")));
        assert_eq!(content.title, "Музей гигиены");
        assert_eq!(content.primary_html, "");
        assert_eq!(content.details_html, "");
        assert!(!content.primary_html.contains("<br>"));
    }

    #[test]
    fn primary_block_has_no_trailing_break() {
        let mut landmark = bare_record("Аптека Пеля");
        landmark.address = Some("Адрес".into());
        landmark.founded = Some("1720".into());
        let content = render(PanelState::Selected(&landmark));
        assert_eq!(content.primary_html, "Адрес<br>1720");

        // status absent must not leave a break after the last field
        landmark.founded = None;
        let content = render(PanelState::Selected(&landmark));
        assert_eq!(content.primary_html, "Адрес");
    }

    #[test]
    fn details_double_separator_collapses_to_single_break() {
        let mut landmark = bare_record("R");
        landmark.exposition = Some("A@@BREAK@@B".into());
        landmark.interesting = Some("C".into());
        let content = render(PanelState::Selected(&landmark));
        assert_eq!(content.details_html, "A<br>B<br>C");
    }

    #[test]
    fn details_with_one_field_has_no_separator() {
        let mut landmark = bare_record("R");
        landmark.interesting = Some("C@@BREAK@@D".into());
        let content = render(PanelState::Selected(&landmark));
        assert_eq!(content.details_html, "C<br>D");
    }

    #[test]
    fn normalize_breaks_is_idempotent() {
        let inputs = [
            "A@@BREAK@@B@@BREAK@@@@BREAK@@C@@BREAK@@",
            "plain text",
            "@@BREAK@@leading",
            "trailing@@BREAK@@@@BREAK@@",
        ];
        for input in inputs {
            let once = normalize_breaks(input);
            assert_eq!(normalize_breaks(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn normalize_breaks_trims_trailing_break() {
        assert_eq!(normalize_breaks("X@@BREAK@@"), "X");
        assert_eq!(normalize_breaks("X<br><br>"), "X");
    }

    #[test]
    fn image_visibility_follows_image_url() {
        let mut landmark = bare_record("Аптека Пеля");
        landmark.image_url = Some("images/aptpel.jpg".into());
        let content = render(PanelState::Selected(&landmark));
        assert_eq!(content.image_url.as_deref(), Some("images/aptpel.jpg"));
        assert_eq!(content.image_alt, "Аптека Пеля");

        landmark.image_url = None;
        let content = render(PanelState::Selected(&landmark));
        assert!(content.image_url.is_none());
        assert_eq!(content.image_alt, "Фотография недоступна");
    }

    #[test]
    fn field_text_is_html_escaped() {
        let mut landmark = bare_record("R");
        landmark.address = Some("A & B <tag>".into());
        let content = render(PanelState::Selected(&landmark));
        assert_eq!(content.primary_html, "A &amp; B &lt;tag&gt;");
    }
}
