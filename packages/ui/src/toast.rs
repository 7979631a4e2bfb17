//! Transient notification toasts.
//!
//! A Signal-backed queue provided through context. Views call
//! [`use_toast`] and push messages with `success`/`error`/`warn`/`info`;
//! [`ToastProvider`] renders the queue as a fixed overlay and dismisses
//! each toast after three seconds on the web.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
}

/// Handle for pushing notifications.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().entries.retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = {
            let mut queue = self.queue.write();
            queue.next_id += 1;
            let id = queue.next_id;
            queue.entries.push(Toast { id, kind, message });
            id
        };

        // Auto-dismiss after 3 seconds.
        #[cfg(target_arch = "wasm32")]
        {
            let mut queue = self.queue;
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                queue.write().entries.retain(|t| t.id != id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

/// Get the toast handle.
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provider component: exposes the [`Toasts`] handle and renders the
/// notification overlay on top of its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts { queue });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in queue.read().entries.iter().cloned() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toast();
    let id = toast.id;

    rsx! {
        div {
            class: toast.kind.class(),
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                onclick: move |_| toasts.dismiss(id),
                "\u{2715}"
            }
        }
    }
}
