use crate::shared::theme::{use_theme, ModeSelect};
use leptos::prelude::*;

/// Top-level screen.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_theme();
    let storage_key = ctx.storage_key();

    view! {
        <main id="home--page" class="page">
            <div class="page__header">
                <h1>"Flux Watch"</h1>
            </div>
            <div class="page__content">
                <dl class="theme-summary">
                    <dt>"Selected theme"</dt>
                    <dd>{move || ctx.get_mode().display_name()}</dd>
                    <dt>"Rendered as"</dt>
                    <dd>{move || ctx.get_effective().code()}</dd>
                    <dt>"Stored under"</dt>
                    <dd><code>{storage_key}</code></dd>
                </dl>
                <ModeSelect />
            </div>
        </main>
    }
}
