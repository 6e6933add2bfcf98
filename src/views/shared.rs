use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const TOAST_DISMISS_DELAY: Duration = Duration::from_secs(4);

pub const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

const ARTIFACT_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

pub fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Renders an RFC 3339 artifact timestamp as "Jan 15, 2024", falling back to
/// the raw string for the authored date-only values in the mock data.
pub fn format_artifact_date(raw: &str) -> String {
    OffsetDateTime::parse(raw, &time::format_description::well_known::Rfc3339)
        .ok()
        .and_then(|dt| dt.format(ARTIFACT_DATE_FORMAT).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// Glyph shown next to an uploaded file name.
pub fn file_glyph(name: &str) -> &'static str {
    if name.to_lowercase().ends_with(".pdf") {
        "\u{1F4D5}"
    } else {
        "\u{1F4C4}"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub destructive: bool,
}

impl Toast {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            destructive: false,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            destructive: true,
        }
    }
}

/// Shows a toast and schedules its dismissal. The only recovery offered for
/// a failed generation is triggering it again.
pub fn show_toast(mut slot: Signal<Option<Toast>>, toast: Toast) {
    slot.set(Some(toast));
    spawn(async move {
        tokio::time::sleep(TOAST_DISMISS_DELAY).await;
        slot.set(None);
    });
}

#[component]
pub fn ToastHost(toast: Signal<Option<Toast>>) -> Element {
    rsx! {
        if let Some(current) = toast() {
            div {
                class: format_args!(
                    "toast {}",
                    if current.destructive { "toast-error" } else { "toast-info" }
                ),
                role: "status",
                div { class: "toast-title", "{current.title}" }
                div { class: "toast-body", "{current.body}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_dates_render_or_pass_through() {
        assert_eq!(format_artifact_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
        assert_eq!(format_artifact_date("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn pdf_names_get_the_book_glyph() {
        assert_eq!(file_glyph("Notes.PDF"), "\u{1F4D5}");
        assert_eq!(file_glyph("notes.txt"), "\u{1F4C4}");
    }
}
