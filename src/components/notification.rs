use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::config::{NOTIFICATION_EXIT_MS, NOTIFICATION_TIMEOUT_MS};
use crate::state::notification::{
    NotificationCenter, NotificationKind, Toast, ToastId, ToastPhase,
};

const STYLE_ID: &str = "notification-styles";

const KEYFRAMES: &str = r#"
    @keyframes slideInRight {
        from {
            opacity: 0;
            transform: translateX(100px);
        }
        to {
            opacity: 1;
            transform: translateX(0);
        }
    }
    @keyframes slideOutRight {
        from {
            opacity: 1;
            transform: translateX(0);
        }
        to {
            opacity: 0;
            transform: translateX(100px);
        }
    }
"#;

const CLOSE_BUTTON_STYLE: &str = "background: none; border: none; color: white; font-size: 24px; cursor: pointer; padding: 0; line-height: 1; opacity: 0.8; transition: opacity 0.2s;";

/// Adds the toast keyframes to `<head>` the first time a toast is shown.
fn ensure_styles() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ID);
        style.set_text_content(Some(KEYFRAMES));
        let _ = head.append_child(&style);
        debug!("Injected notification styles");
    }
}

pub enum NotificationAction {
    Notify(String, NotificationKind),
    Dismiss(ToastId),
    Remove(ToastId),
}

impl Reducible for NotificationCenter {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NotificationAction::Notify(message, kind) => {
                let id = next.notify(message, kind);
                debug!("Toast {} shown ({})", id, kind.as_str());
                true
            }
            NotificationAction::Dismiss(id) => next.dismiss(id),
            NotificationAction::Remove(id) => next.remove(id),
        };
        // Stale timers land here as no-ops and must not trigger a re-render
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Handle for raising toasts from anywhere below `NotificationProvider`.
#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<(String, NotificationKind)>);

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        self.0.emit((message.into(), kind));
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| Notifier(Callback::from(|_| ())))
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let center = use_reducer(NotificationCenter::new);

    let notifier = {
        let dispatcher = center.dispatcher();
        use_state(move || {
            Notifier(Callback::from(move |(message, kind): (String, NotificationKind)| {
                ensure_styles();
                dispatcher.dispatch(NotificationAction::Notify(message, kind));
            }))
        })
    };

    let on_dismiss = {
        let dispatcher = center.dispatcher();
        Callback::from(move |id: ToastId| dispatcher.dispatch(NotificationAction::Dismiss(id)))
    };
    let on_remove = {
        let dispatcher = center.dispatcher();
        Callback::from(move |id: ToastId| dispatcher.dispatch(NotificationAction::Remove(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            {
                if let Some(toast) = center.current() {
                    html! {
                        <ToastView
                            key={toast.id}
                            toast={toast.clone()}
                            on_dismiss={on_dismiss}
                            on_remove={on_remove}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<ToastId>,
    on_remove: Callback<ToastId>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let toast = &props.toast;

    // Auto-dismiss. Not cancelled on click; the reducer ignores it by then.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &ToastId| {
                let id = *id;
                Timeout::new(NOTIFICATION_TIMEOUT_MS, move || on_dismiss.emit(id)).forget();
                || ()
            },
            toast.id,
        );
    }

    // Both dismiss paths end here: let the exit animation run, then remove.
    {
        let on_remove = props.on_remove.clone();
        use_effect_with_deps(
            move |(id, phase): &(ToastId, ToastPhase)| {
                if *phase == ToastPhase::Dismissing {
                    let id = *id;
                    Timeout::new(NOTIFICATION_EXIT_MS, move || on_remove.emit(id)).forget();
                }
                || ()
            },
            (toast.id, toast.phase),
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let animation = match toast.phase {
        ToastPhase::Visible => "slideInRight 0.3s ease",
        _ => "slideOutRight 0.3s ease forwards",
    };

    let style = format!(
        "position: fixed; top: 100px; right: 20px; max-width: 400px; padding: 16px 20px; background: {}; color: white; border-radius: 12px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2); display: flex; align-items: center; gap: 16px; z-index: 10000; animation: {}; font-weight: 500;",
        toast.kind.background(),
        animation
    );

    html! {
        <div
            class={classes!("notification", format!("notification-{}", toast.kind.as_str()))}
            role="status"
            style={style}
        >
            <span>{&toast.message}</span>
            <button
                class="notification-close"
                aria-label="Close"
                style={CLOSE_BUTTON_STYLE}
                onclick={close}
            >
                {"×"}
            </button>
        </div>
    }
}
