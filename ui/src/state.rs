use api_client::ApiConfig;
use leptos::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen before auto-dismissing.
#[cfg(target_arch = "wasm32")]
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppCtx {
    pub api: RwSignal<ApiConfig>,
}

pub fn provide_app_ctx(api: ApiConfig) -> AppCtx {
    let ctx = AppCtx {
        api: create_rw_signal(api),
    };
    provide_context(ctx);
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    pub fn tone_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notification bus. Every failure path in the app surfaces
/// through here; errors are mirrored to the browser console.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        #[cfg(target_arch = "wasm32")]
        if kind == ToastKind::Error {
            web_sys::console::error_1(&message.clone().into());
        }
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|list| {
            list.push(Toast { id, kind, message });
        });
        #[cfg(target_arch = "wasm32")]
        {
            let items = self.items;
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DISMISS_MS).await;
                items.update(|list| list.retain(|t| t.id != id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        items: create_rw_signal(Vec::new()),
        next_id: create_rw_signal(0),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not provided")
}
