//! Prev / page buttons / Next control for paged tables.

use leptos::prelude::*;

use crate::util::paging::{PageItem, page_items};

/// Pagination bar. Renders nothing when there is at most one page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    let go = move |target: usize| {
        if target != page.get_untracked() {
            on_change.run(target);
        }
    };

    view! {
        <Show when=move || (total.get() > 1)>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get_untracked().saturating_sub(1).max(1))
                >
                    "Prev"
                </button>
                {move || {
                    let current = page.get();
                    page_items(current, total.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => {
                                view! {
                                    <button
                                        class="pagination__page"
                                        class:pagination__page--active=n == current
                                        aria-current=if n == current { Some("page") } else { None }
                                        on:click=move |_| go(n)
                                    >
                                        {n}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageItem::Gap => view! { <span class="pagination__gap">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__step"
                    disabled=move || page.get() >= total.get()
                    on:click=move |_| go((page.get_untracked() + 1).min(total.get_untracked()))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
