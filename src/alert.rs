//! Alert system for displaying success and error messages to users.
//!
//! Alerts render into the fixed `#alert-container` element in the base
//! layout, either directly via `hx-target-error` or as an out-of-band swap
//! attached to another response. They dismiss themselves after a few
//! seconds, matching the transient toast behaviour users expect.

use maud::{Markup, PreEscaped, html};

/// How long an alert stays visible, in milliseconds.
const DISMISS_AFTER_MS: u32 = 5000;

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Success,
    Error,
}

/// Renders alert messages with appropriate styling
#[derive(Debug, Clone)]
pub struct AlertTemplate<'a> {
    pub alert_type: AlertType,
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> AlertTemplate<'a> {
    /// Create a new success alert
    pub fn success(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message,
            details,
        }
    }

    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message,
            details,
        }
    }

    /// Render the alert as a standalone fragment.
    ///
    /// Use this for responses that target `#alert-container` directly, e.g.
    /// through `hx-target-error`.
    pub fn into_markup(self) -> Markup {
        let accent = match self.alert_type {
            AlertType::Success => {
                "border-green-300 bg-green-50 text-green-800 \
                dark:border-green-800 dark:bg-gray-800 dark:text-green-400"
            }
            AlertType::Error => {
                "border-red-300 bg-red-50 text-red-800 \
                dark:border-red-800 dark:bg-gray-800 dark:text-red-400"
            }
        };

        html!(
            div
                role="alert"
                class=(format!("p-4 rounded-lg border shadow-md text-sm {accent}"))
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }
            }

            script
            {
                (PreEscaped(format!(
                    "(function() {{
                        const container = document.getElementById('alert-container');
                        if (!container) return;
                        container.classList.remove('hidden');
                        setTimeout(() => container.classList.add('hidden'), {DISMISS_AFTER_MS});
                    }})();"
                )))
            }
        )
    }

    /// Render the alert as an out-of-band swap into `#alert-container`.
    ///
    /// Append this to a response whose main content swaps elsewhere, so a
    /// notification shows up alongside the content update.
    pub fn into_oob_markup(self) -> Markup {
        html!(
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                (self.into_markup())
            }
        )
    }
}
