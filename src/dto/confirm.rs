use std::fmt::Display;

use serde::Serialize;

/// Severity of a confirmation dialog, rendered as the accent color of the
/// confirm button.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmSeverity {
    Danger,
    Warning,
}

impl Display for ConfirmSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmSeverity::Danger => write!(f, "danger"),
            ConfirmSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// Server-rendered confirmation dialog body. The confirm button posts `id` to
/// `action`; cancelling closes the dialog without issuing any request.
#[derive(Debug, Serialize)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub severity: ConfirmSeverity,
    pub action: String,
    pub id: i32,
}

impl ConfirmPrompt {
    /// Standard prompt for irreversible deletions.
    pub fn delete(title: impl Into<String>, message: impl Into<String>, action: impl Into<String>, id: i32) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Удалить".to_string(),
            cancel_label: "Отмена".to_string(),
            severity: ConfirmSeverity::Danger,
            action: action.into(),
            id,
        }
    }

    /// Prompt for decisions that can be undone by support but should still be
    /// confirmed.
    pub fn warning(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        action: impl Into<String>,
        id: i32,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            cancel_label: "Отмена".to_string(),
            severity: ConfirmSeverity::Warning,
            action: action.into(),
            id,
        }
    }
}
