use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

mod config;
mod scroll;
mod state {
    pub mod accordion;
    pub mod contact;
    pub mod counter;
    pub mod header;
    pub mod menu;
    pub mod notification;
    pub mod reveal;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod faq;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::nav::{Nav, NavLink};
use components::notification::NotificationProvider;
use pages::landing::Landing;

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", href: "#home" },
        NavLink { label: "Services", href: "#services" },
        NavLink { label: "Testimonials", href: "#testimonials" },
        NavLink { label: "FAQ", href: "#faq" },
        NavLink { label: "Contact", href: "#contact" },
    ]
}

#[function_component]
fn App() -> Html {
    // In-page anchors anywhere on the page scroll smoothly instead of jumping
    use_effect_with_deps(
        move |_| {
            let document = window().and_then(|w| w.document());
            let anchor_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                scroll::handle_anchor_click(&e);
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback(
                    "click",
                    anchor_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        anchor_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    html! {
        <NotificationProvider>
            <Nav brand="Pro-Tect Services" links={nav_links()} />
            <Landing />
        </NotificationProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
