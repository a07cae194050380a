pub mod auth;

pub use auth::AuthLayout;

use crate::shared::theme::ModeToggle;
use leptos::prelude::*;

/// Full-height container with the mode toggle placed before the page content.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <div class="root-layout" style="position: relative; min-height: 100vh;">
            <div class="root-layout__toolbar" style="position: absolute; top: 1rem; right: 1rem;">
                <ModeToggle />
            </div>
            {children()}
        </div>
    }
}
