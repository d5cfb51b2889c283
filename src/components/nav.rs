use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, Node};
use yew::prelude::*;

use crate::state::header::{parallax_offset, HeaderState};
use crate::state::menu::MenuState;

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

fn apply_scroll_effects(header: &UseStateHandle<HeaderState>) {
    let Some(window) = window() else {
        return;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    header.set(HeaderState::from_offset(offset));

    if let Some(hero) = window
        .document()
        .and_then(|d| d.query_selector(".hero").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = hero
            .style()
            .set_property("background-position-y", &format!("{}px", parallax_offset(offset)));
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_state_eq(MenuState::default);
    let header = use_state_eq(HeaderState::default);
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Header look and hero parallax follow the scroll offset
    {
        let header = header.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let scroll_callback = {
                    let header = header.clone();
                    Closure::wrap(Box::new(move || {
                        apply_scroll_effects(&header);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                // Page may load already scrolled
                apply_scroll_effects(&header);

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Clicking anywhere outside the toggle and the panel closes the menu
    {
        let menu = menu.clone();
        let hamburger_ref = hamburger_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .map(|node| node.contains(Some(&target)))
                            .unwrap_or(false)
                    };
                    if !inside(&hamburger_ref) && !inside(&menu_ref) {
                        menu.set(MenuState::default());
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Body scroll lock mirrors the menu
    use_effect_with_deps(
        move |menu: &MenuState| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", menu.body_overflow());
            }
            || ()
        },
        *menu,
    );

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*menu).toggled();
            debug!("Menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    // Anchor navigation itself is handled by the document-level scroll handler
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).closed());
        })
    };

    html! {
        <header id="header" class={classes!("header", header.class())}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{&props.brand}</a>

                <button
                    id="hamburger"
                    ref={hamburger_ref}
                    class={classes!("hamburger", menu.active_class())}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav id="navMenu" ref={menu_ref} class={classes!("nav-menu", menu.active_class())}>
                    <ul class="nav-links">
                        { for props.links.iter().map(|link| html! {
                            <li>
                                <a href={link.href} onclick={close_menu.clone()}>{link.label}</a>
                            </li>
                        }) }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
