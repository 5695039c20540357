use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQS;
use crate::hooks::in_view::{use_in_view, InViewOptions};

/// Single-open accordion: opening an item closes the others, clicking the open one collapses it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    index: usize,
    is_open: bool,
    visible: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div
            class={classes!("faq-item", props.is_open.then(|| "open"), "fade", props.visible.then(|| "shown"))}
            style={format!("transition: opacity 0.5s ease {}ms;", props.index * 100 + 300)}
        >
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            {
                if props.is_open {
                    html! { <div class="faq-answer">{props.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let (header_ref, in_view) = use_in_view(InViewOptions::once());
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.set(toggle_open(*open, index)))
    };

    html! {
        <section id="faq" class="section-spacing muted">
            <div class="container-custom">
                <div class="section-header" ref={header_ref}>
                    <h2 class={classes!("section-title", "gradient-text", "fade", in_view.then(|| "shown"))}>
                        {"Frequently Asked Questions"}
                    </h2>
                    <p class={classes!("section-subtitle", "fade", "delayed", in_view.then(|| "shown"))}>
                        {"Find answers to common questions about my services"}
                    </p>
                </div>

                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                        <FaqItem
                            key={index}
                            question={faq.question}
                            answer={faq.answer}
                            {index}
                            is_open={*open == Some(index)}
                            visible={in_view}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-list { max-width: 48rem; margin: 0 auto; }
                .faq-item {
                    background: #fff;
                    margin: 1rem 0;
                    border-radius: 0.75rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                    border: 1px solid #f3f4f6;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-item.open .faq-question { color: #6366f1; }
                .faq-answer { padding: 0 1.5rem 1rem; color: #4b5563; }
                "#}
            </style>
        </section>
    }
}
