use super::use_theme;
use crate::shared::icons::icon;
use contracts::enums::ThemeMode;
use leptos::prelude::*;

fn mode_icon(mode: ThemeMode) -> AnyView {
    match mode {
        ThemeMode::Light => icon("sun"),
        ThemeMode::Dark => icon("moon"),
        ThemeMode::System => icon("monitor"),
    }
}

/// Cycles light → dark → system on each click. Holds no state of its own.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="mode-toggle button button--ghost"
            data-mode=move || ctx.get_mode().code()
            title=move || format!("Theme: {}. Click to switch to {}.",
                ctx.get_mode().display_name(),
                ctx.get_mode().next().display_name())
            on:click=move |_| ctx.cycle_mode()
        >
            {move || mode_icon(ctx.get_mode())}
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}

/// Theme selector dropdown with one entry per mode.
#[component]
pub fn ModeSelect() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select_mode = move |mode: ThemeMode| {
        ctx.set_mode(mode);
        set_dropdown_open.set(false);
    };

    view! {
        <div class="theme-selector" style="position: relative;">
            <button
                class="button button--ghost"
                on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
            >
                {move || mode_icon(ctx.get_mode())}
                {move || ctx.get_mode().display_name()}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-dropdown">
                    {ThemeMode::all().into_iter().map(|mode| {
                        let is_active = move || ctx.get_mode() == mode;
                        view! {
                            <button
                                class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                                on:click=move |_| select_mode(mode)
                            >
                                {mode_icon(mode)}
                                {mode.display_name()}
                                <Show when=is_active>
                                    {icon("check")}
                                </Show>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
