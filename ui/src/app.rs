use crate::{
    pages::{FormsPage, LandingPage, SessionExpiredPage},
    state::{provide_app_ctx, provide_toasts, use_toasts},
    theme::GLOBAL_CSS,
};
use api_client::ApiConfig;
use leptos::*;
use leptos_meta::*;
use leptos_router::{Route, Router, Routes};

#[cfg(target_arch = "wasm32")]
use js_sys::Reflect;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn api_config_default() -> ApiConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match read_global("FORMDESK_API_BASE") {
            Some(base) => ApiConfig::default().with_base_url(base),
            None => ApiConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ApiConfig::default()
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_ctx(api_config_default());
    provide_toasts();

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/forms" view=FormsPage/>
                    <Route path="/session-expired" view=SessionExpiredPage/>
                </Routes>
                <ToastStack/>
            </main>
        </Router>
    }
}

#[component]
fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .items()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.tone_class()
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
