use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::state::reveal::{RevealOutcome, RevealState};

/// Watches `node` until it first scrolls into view, then stops observing.
/// The returned state flips to visible once and stays there; for stat items
/// it also carries the "counted" marker.
#[hook]
pub fn use_reveal(node: NodeRef, is_stat: bool) -> RevealState {
    let state = use_state(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;

                if let Some(element) = node.cast::<Element>() {
                    let tracker = Rc::new(Cell::new(RevealState::default()));
                    let revealed = state.clone();

                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                let mut current = tracker.get();
                                let outcome = current.observe(
                                    entry.is_intersecting(),
                                    entry.intersection_ratio(),
                                    is_stat,
                                );
                                if let RevealOutcome::Revealed { start_counter } = outcome {
                                    debug!("Revealed element (counter: {})", start_counter);
                                    tracker.set(current);
                                    revealed.set(current);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin("0px");
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some((obs, callback));
                        }
                        Err(_) => {
                            // No observer support: show content rather than leave it hidden
                            warn!("IntersectionObserver unavailable, revealing immediately");
                            let mut current = RevealState::default();
                            current.observe(true, 1.0, is_stat);
                            state.set(current);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// One of `fade-in`, `slide-in-left`, `slide-in-right`.
    #[prop_or(AttrValue::Static("fade-in"))]
    pub animation: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), false);

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(
                props.animation.to_string(),
                props.class.clone(),
                state.is_visible().then_some("visible"),
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
