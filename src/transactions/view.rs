//! HTML rendering for the transactions page.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

/// A transaction joined with its customer's name, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TransactionRow {
    pub customer_name: String,
    pub date: Date,
    pub amount: f64,
}

/// Renders the full transactions page: filter inputs and the table.
///
/// The filter inputs re-request only the table rows through htmx on every
/// input event, so typing never reloads the whole page.
pub(super) fn transactions_view(name_query: &str, amount_query: &str, rows: &[TransactionRow]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 lg:max-w-3xl lg:w-full lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }
                }

                form
                    hx-get=(endpoints::TRANSACTIONS_TABLE)
                    hx-target="#transaction-rows"
                    hx-swap="innerHTML"
                    hx-trigger="input"
                    class="grid grid-cols-1 md:grid-cols-2 gap-4"
                {
                    div
                    {
                        label for="name" class=(FORM_LABEL_STYLE) { "Customer name" }

                        input
                            type="text"
                            name="name"
                            id="name"
                            placeholder="Filter by customer name"
                            value=(name_query)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                        input
                            type="text"
                            name="amount"
                            id="amount"
                            placeholder="Filter by amount"
                            value=(amount_query)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    table class="w-full my-2 text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Customer"
                                }
                                th scope="col" class=(TABLE_CELL_STYLE)
                                {
                                    "Date"
                                }
                                th scope="col" class="px-6 py-3 text-right"
                                {
                                    "Amount"
                                }
                            }
                        }

                        tbody id="transaction-rows"
                        {
                            (transaction_rows_view(rows))
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}

/// Renders the table rows for `rows`, or an explicit empty state.
///
/// This is the partial swapped into the table body when a filter input
/// changes: the previous rows are replaced wholesale, never patched.
pub(super) fn transaction_rows_view(rows: &[TransactionRow]) -> Markup {
    html! {
        @for row in rows {
            tr data-transaction-row="true" class=(TABLE_ROW_STYLE)
            {
                th
                    scope="row"
                    class="px-6 py-4 font-medium text-gray-900 dark:text-white whitespace-nowrap"
                {
                    (row.customer_name)
                }
                td class=(TABLE_CELL_STYLE)
                {
                    (row.date)
                }
                td class="px-6 py-4 text-right whitespace-nowrap"
                {
                    (format_currency(row.amount))
                }
            }
        }

        @if rows.is_empty() {
            tr
            {
                td
                    colspan="3"
                    data-empty-state="true"
                    class="px-6 py-4 text-center"
                {
                    "No transactions match the current filters."
                }
            }
        }
    }
}
