use std::fmt;

use crate::outcome::ApiOutcome;

/// Caption above the pretty-printed result data.
pub const DATA_CAPTION: &str = "Данные результата:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    Success,
    Error,
}

impl ResultKind {
    /// Font Awesome icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "result-success",
            Self::Error => "result-error",
        }
    }

    /// Status glyph for plain-text output.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2714}",
            Self::Error => "\u{2716}",
        }
    }
}

/// What the results panel shows. Built the same way for every form.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedResult {
    pub kind: ResultKind,
    pub headline: String,
    pub message: String,
    /// Pretty-printed `data`, only when the outcome carried some.
    pub data: Option<String>,
}

impl RenderedResult {
    pub fn render(kind: ResultKind, headline: &str, outcome: &ApiOutcome) -> Self {
        let data = outcome
            .data
            .as_ref()
            .map(|d| serde_json::to_string_pretty(d).unwrap_or_else(|_| d.to_string()));
        Self {
            kind,
            headline: headline.to_string(),
            message: outcome.message.clone(),
            data,
        }
    }

    pub fn success(headline: &str, outcome: &ApiOutcome) -> Self {
        Self::render(ResultKind::Success, headline, outcome)
    }

    pub fn error(headline: &str, outcome: &ApiOutcome) -> Self {
        Self::render(ResultKind::Error, headline, outcome)
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.kind.glyph(), self.headline)?;
        if !self.message.is_empty() {
            writeln!(f, "{}", self.message)?;
        }
        if let Some(data) = &self.data {
            writeln!(f, "{DATA_CAPTION}")?;
            writeln!(f, "{data}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_block_only_when_present() {
        let with_data = ApiOutcome {
            success: true,
            message: "Найдено окон: 1".into(),
            data: Some(json!({"windows": [{"duration_hours": 1.5}]})),
        };
        let rendered = RenderedResult::success("Поиск общего окна завершен!", &with_data);
        assert_eq!(rendered.kind.icon(), "check-circle");
        assert_eq!(rendered.message, "Найдено окон: 1");
        assert!(rendered.data.as_deref().unwrap().contains("\n  \"windows\""));

        let bare = RenderedResult::error("Ошибка сети", &ApiOutcome::local_error("refused"));
        assert_eq!(bare.kind.css_class(), "result-error");
        assert_eq!(bare.data, None);
    }

    #[test]
    fn test_text_form() {
        let rendered = RenderedResult::error("Ошибка валидации", &ApiOutcome::local_error("нет участников"));
        assert_eq!(rendered.to_string(), "\u{2716} Ошибка валидации\nнет участников\n");

        let with_data = RenderedResult::success(
            "ok",
            &ApiOutcome { success: true, message: String::new(), data: Some(json!(1)) },
        );
        assert_eq!(with_data.to_string(), format!("\u{2714} ok\n{DATA_CAPTION}\n1\n"));
    }
}
