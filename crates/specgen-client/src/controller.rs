use specgen_core::{DetailLevel, GenerationRequest, Language};
use tracing::warn;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::download::Download;
use crate::markdown::render_markdown;
use crate::toast::Toast;
use crate::SpecSource;

/// Above this many characters the counter is highlighted. Submission is
/// never blocked.
pub const SOFT_CHAR_LIMIT: usize = 2000;

pub const MSG_GENERATION_FAILED: &str = "Ошибка генерации. Попробуйте снова.";
pub const MSG_COPIED: &str = "Скопировано!";
pub const MSG_COPY_FAILED: &str = "Не удалось скопировать";
pub const MSG_DOWNLOADED: &str = "Файл скачан!";

/// What the form currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub submit_enabled: bool,
    pub loading: bool,
    pub result_visible: bool,
    pub result_html: String,
    /// Set when a fresh result should be scrolled into view.
    pub scroll_to_result: bool,
}

impl Default for FormView {
    fn default() -> Self {
        Self {
            submit_enabled: true,
            loading: false,
            result_visible: false,
            result_html: String::new(),
            scroll_to_result: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The idea was blank; nothing was sent.
    Skipped,
    Generated,
    Failed,
}

/// Drives the generator form: counter, submit lifecycle, result rendering,
/// copy, download and notifications.
pub struct FormController<S> {
    source: S,
    idea: String,
    char_count: usize,
    generated: String,
    view: FormView,
    toast: Option<Toast>,
}

impl<S: SpecSource> FormController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            idea: String::new(),
            char_count: 0,
            generated: String::new(),
            view: FormView::default(),
            toast: None,
        }
    }

    /// Replace the idea text and update the counter.
    pub fn set_idea(&mut self, text: impl Into<String>) {
        self.idea = text.into();
        // Counted in UTF-16 units, like a browser text field.
        self.char_count = self.idea.encode_utf16().count();
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn over_soft_limit(&self) -> bool {
        self.char_count > SOFT_CHAR_LIMIT
    }

    pub async fn submit(&mut self, detail_level: DetailLevel, language: Language) -> Submission {
        let product_idea = self.idea.trim();
        if product_idea.is_empty() {
            return Submission::Skipped;
        }
        let req = GenerationRequest {
            product_idea: product_idea.to_string(),
            detail_level,
            language,
        };

        self.view.loading = true;
        self.view.submit_enabled = false;
        self.view.result_visible = false;
        self.view.scroll_to_result = false;

        let result = self.source.generate(&req).await;
        let outcome = match result {
            Ok(text) => {
                self.view.result_html = render_markdown(&text);
                self.generated = text;
                self.view.result_visible = true;
                self.view.scroll_to_result = true;
                Submission::Generated
            }
            Err(e) => {
                warn!("generation failed: {e}");
                self.notify(MSG_GENERATION_FAILED);
                Submission::Failed
            }
        };

        self.view.loading = false;
        self.view.submit_enabled = true;
        outcome
    }

    /// Raw text of the last successful generation.
    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// Consume a pending scroll-into-view request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.view.scroll_to_result)
    }

    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        match clipboard.write_text(&self.generated) {
            Ok(()) => {
                self.notify(MSG_COPIED);
                Ok(())
            }
            Err(e) => {
                self.notify(MSG_COPY_FAILED);
                Err(e)
            }
        }
    }

    pub fn download(&mut self) -> Download {
        let download = Download::new(self.generated.clone());
        self.notify(MSG_DOWNLOADED);
        download
    }

    /// Show a notification, replacing any current one.
    pub fn notify(&mut self, message: &str) {
        self.toast = Some(Toast::show(message));
    }

    /// Message of the notification on screen, if any.
    pub fn toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| t.is_visible())
            .map(|t| t.message())
    }
}
