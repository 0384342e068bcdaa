//! The add-transaction form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::Category,
};

/// Renders the add-transaction form.
///
/// Every field carries the `required` attribute, so a submission with a
/// missing description, amount or category never leaves the browser. The
/// amount input steps in cents and the expense type is preselected.
pub(super) fn transaction_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target="#transactions-content"
            hx-swap="innerHTML"
            hx-target-error="#alert-container"
            class="space-y-4"
        {
            div class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="e.g., Grocery shopping"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Type" }

                    div class=(FORM_RADIO_GROUP_STYLE)
                    {
                        div class="flex items-center gap-3"
                        {
                            input
                                name="type_"
                                id="transaction-type-expense"
                                type="radio"
                                value="expense"
                                checked
                                required
                                class=(FORM_RADIO_INPUT_STYLE);

                            label
                                for="transaction-type-expense"
                                class=(FORM_RADIO_LABEL_STYLE)
                            {
                                "Expense"
                            }
                        }

                        div class="flex items-center gap-3"
                        {
                            input
                                name="type_"
                                id="transaction-type-income"
                                type="radio"
                                value="income"
                                required
                                class=(FORM_RADIO_INPUT_STYLE);

                            label
                                for="transaction-type-income"
                                class=(FORM_RADIO_LABEL_STYLE)
                            {
                                "Income"
                            }
                        }
                    }
                }

                div
                {
                    label
                        for="category"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category"
                    }

                    select
                        name="category"
                        id="category"
                        required
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value="" selected disabled { "Select a category" }

                        @for category in Category::ALL {
                            option value=(category) { (category) }
                        }
                    }
                }
            }

            button
                type="submit"
                class=(BUTTON_PRIMARY_STYLE)
            {
                "Add Transaction"
            }
        }
    }
}
