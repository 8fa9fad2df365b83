//! Transient status notifications.
//!
//! A single toast is visible at a time; showing a new one replaces the
//! previous toast immediately. The service keeps a sequence number so the
//! delayed dismissal of an older toast never removes a newer one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const DISPLAY_MS: u32 = 3000;
const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub leaving: bool,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<Toast>>,
    seq: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let seq = self.seq.get_untracked() + 1;
        self.seq.set(seq);
        self.current.set(Some(Toast {
            message: message.into(),
            kind,
            leaving: false,
        }));

        let current = self.current;
        let latest = self.seq;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DISPLAY_MS).await;
            if latest.get_untracked() != seq {
                return;
            }
            current.update(|t| {
                if let Some(t) = t {
                    t.leaving = true;
                }
            });
            TimeoutFuture::new(EXIT_ANIMATION_MS).await;
            if latest.get_untracked() == seq {
                current.set(None);
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the currently visible toast, if any. Mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        {move || {
            toasts.current.get().map(|toast| {
                let class = format!(
                    "toast {}{}",
                    toast.kind.css_class(),
                    if toast.leaving { " toast--leaving" } else { "" }
                );
                view! {
                    <div class=class>
                        {toast.message.clone()}
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_css_class() {
        assert_eq!(ToastKind::Success.css_class(), "toast--success");
        assert_eq!(ToastKind::Error.css_class(), "toast--error");
        assert_eq!(ToastKind::Info.css_class(), "toast--info");
    }
}
