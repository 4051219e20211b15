use leptos::*;
use leptos_router::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="panel notice">
                <h1>"FormDesk"</h1>
                <p>"Administrative console for course enrollment forms."</p>
                <A href="/forms" class="btn btn-accent">"Open form management"</A>
            </div>
        </div>
    }
}
