//! HTML rendering for the monthly budget card.
//!
//! The card has two faces, a display face and an edit face, swapped in place
//! through the `#budget-card` element.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, format_currency,
    },
};

use super::core::{BudgetBand, BudgetStatus};

fn progress_color(band: BudgetBand) -> &'static str {
    match band {
        BudgetBand::Ok => "bg-green-500",
        BudgetBand::Warning => "bg-yellow-500",
        BudgetBand::Critical => "bg-red-600",
    }
}

/// Renders the display face of the budget card.
///
/// Shows spending against the budget with a colored progress bar, and a
/// warning banner once spending reaches 70% of the budget.
pub(crate) fn budget_card(status: &BudgetStatus) -> Markup {
    html! {
        section id="budget-card" class=(CARD_STYLE)
        {
            header class="flex items-center justify-between mb-4"
            {
                h2 class="text-xl font-semibold" { "Monthly Budget" }

                button
                    hx-get=(endpoints::BUDGET_EDIT)
                    hx-target="#budget-card"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class="text-sm text-blue-600 hover:text-blue-500 \
                        dark:text-blue-500 dark:hover:text-blue-400"
                {
                    "Edit"
                }
            }

            div class="space-y-2"
            {
                div class="flex justify-between text-sm"
                {
                    span class="text-gray-600 dark:text-gray-400" { "Spent" }
                    span class="font-medium"
                    {
                        (format_currency(status.spent)) " / " (format_currency(status.budget))
                    }
                }

                div class="h-3 w-full rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden"
                {
                    div
                        class=(format!("h-full rounded-full {}", progress_color(status.band)))
                        style=(format!("width: {}%;", status.percentage))
                    {}
                }

                div class="flex justify-between text-xs text-gray-600 dark:text-gray-400"
                {
                    span { (format!("{:.1}% used", status.percentage)) }
                    span { (format_currency(status.remaining)) " remaining" }
                }
            }

            @if status.band == BudgetBand::Critical {
                div class="mt-4 p-3 rounded-lg bg-red-50 border border-red-200 \
                    dark:bg-red-900/20 dark:border-red-800"
                {
                    p class="text-sm text-red-700 dark:text-red-400 font-medium"
                    {
                        (format!("⚠️ You've used {:.0}% of your budget!", status.percentage))
                    }
                }
            } @else if status.band == BudgetBand::Warning {
                div class="mt-4 p-3 rounded-lg bg-yellow-50 border border-yellow-200 \
                    dark:bg-yellow-900/20 dark:border-yellow-800"
                {
                    p class="text-sm text-yellow-700 dark:text-yellow-500 font-medium"
                    {
                        (format!("⚡ You've used {:.0}% of your budget", status.percentage))
                    }
                }
            }
        }
    }
}

/// Renders the edit face of the budget card.
///
/// `buffer` is the raw text shown in the input. It starts out as the current
/// budget and is echoed back unchanged when a save is rejected.
pub(super) fn budget_edit_card(buffer: &str) -> Markup {
    html! {
        section id="budget-card" class=(CARD_STYLE)
        {
            h2 class="text-xl font-semibold mb-4" { "Monthly Budget" }

            form
                hx-post=(endpoints::BUDGET_API)
                hx-target="#budget-card"
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="space-y-3"
            {
                div
                {
                    label for="budget" class=(FORM_LABEL_STYLE) { "Set Monthly Budget" }
                    input
                        type="number"
                        id="budget"
                        name="budget"
                        step="0.01"
                        value=(buffer)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="flex gap-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }

                    button
                        type="button"
                        hx-get=(endpoints::BUDGET_VIEW)
                        hx-target="#budget-card"
                        hx-swap="outerHTML"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Cancel"
                    }
                }
            }
        }
    }
}
