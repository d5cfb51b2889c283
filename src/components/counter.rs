use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};
use crate::state::counter::{parse_target, CounterAnimation};

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    /// Raw `data-target` value; anything unreadable counts as zero.
    #[prop_or_default]
    pub target: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// A statistic that counts up from zero the first time it scrolls into view.
#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone(), true);
    let text = use_state(|| "0".to_string());

    let target = parse_target(props.target.as_deref());

    {
        let text = text.clone();
        let label = props.label.as_ref().map(|l| l.to_string());
        use_effect_with_deps(
            move |counted: &bool| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *counted {
                    let animation = CounterAnimation::new(target, label, COUNTER_DURATION_MS);
                    let first = animation.frame(0.0);
                    text.set(first.text);

                    if !first.done {
                        debug!("Counting up to {}", animation.target());
                        let started = Date::now();
                        let handle = interval_handle.clone();
                        let interval = Interval::new(COUNTER_FRAME_MS, move || {
                            let frame = animation.frame(Date::now() - started);
                            text.set(frame.text);
                            if frame.done {
                                // Dropping the interval stops it
                                handle.borrow_mut().take();
                            }
                        });
                        *interval_handle.borrow_mut() = Some(interval);
                    }
                }

                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            reveal.is_counted(),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("stat-item", reveal.is_visible().then_some("visible"))}
        >
            <div
                class={classes!("stat-number", reveal.is_counted().then_some("counted"))}
                data-target={props.target.clone()}
            >
                {(*text).clone()}
            </div>
            if let Some(label) = &props.label {
                <div class="stat-label">{label}</div>
            }
        </div>
    }
}
