use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::accordion::Accordion;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

impl FaqEntry {
    pub fn new(question: &'static str, answer: &'static str) -> Self {
        Self {
            question: AttrValue::Static(question),
            answer: AttrValue::Static(answer),
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("active"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

/// Accordion of questions; opening one closes whichever was open.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let len = props.entries.len();
    let accordion = use_state(|| Accordion::new(len));

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_| {
                        // Entries may have changed since the state was created
                        let next = (*accordion).clone().resized(len).activated(index);
                        debug!("FAQ item {} -> open {:?}", index, next.open_index());
                        accordion.set(next);
                    })
                };
                html! {
                    <FaqItem
                        key={index.to_string()}
                        question={entry.question.clone()}
                        answer={entry.answer.clone()}
                        is_open={accordion.is_open(index)}
                        on_toggle={on_toggle}
                    />
                }
            }) }
        </div>
    }
}
