use leptos::*;
use leptos_router::A;

#[cfg(target_arch = "wasm32")]
use leptos_router::use_navigate;

/// Where the expiry notice sends the user.
pub const LANDING_ROUTE: &str = "/";

/// Delay before the automatic redirect fires.
pub const REDIRECT_DELAY_MS: u32 = 5_000;

/// Static notice plus one scheduled redirect. Dropping the timeout handle
/// in `on_cleanup` cancels the redirect if the page is torn down first, so
/// it never navigates twice or after unmount.
#[component]
pub fn SessionExpiredPage() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    {
        let navigate = use_navigate();
        let timeout = gloo_timers::callback::Timeout::new(REDIRECT_DELAY_MS, move || {
            navigate(LANDING_ROUTE, Default::default());
        });
        on_cleanup(move || drop(timeout));
    }

    view! {
        <div class="page">
            <div class="panel notice">
                <h1>"Session expired"</h1>
                <p>"Your session has ended. You will be taken back to the start page in a few seconds."</p>
                <A href=LANDING_ROUTE class="btn btn-accent">"Go now"</A>
            </div>
        </div>
    }
}
