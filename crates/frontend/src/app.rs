use crate::layout::AuthLayout;
use crate::pages::home::HomePage;
use crate::shared::config::UiConfig;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let theme = config.theme;

    view! {
        <ThemeProvider default_theme=theme.default_mode storage_key=theme.storage_key>
            <AuthLayout>
                <HomePage />
            </AuthLayout>
        </ThemeProvider>
    }
}
