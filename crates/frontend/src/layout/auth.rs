use super::RootLayout;
use leptos::prelude::*;

/// Layout for views that will require a signed-in user.
///
/// Access control is not configured yet; children render inside [`RootLayout`] unconditionally.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <RootLayout>
            {children()}
        </RootLayout>
    }
}
