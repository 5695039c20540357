use log::debug;
use yew::prelude::*;

use crate::content::{ProcessStep, PROCESS_STEPS};
use crate::hooks::in_view::{use_in_view, InViewOptions};
use crate::scroll_jacking::{use_scroll_jacking, ScrollJackingOptions};

pub const PROCESS_REGION_ID: &str = "process";
const PROCESS_STEP_HEIGHT: f64 = 600.0;

#[derive(Properties, PartialEq)]
struct ProcessStepCardProps {
    step: ProcessStep,
    index: usize,
    revealed: bool,
    active: bool,
}

#[function_component(ProcessStepCard)]
fn process_step_card(props: &ProcessStepCardProps) -> Html {
    // Later steps stack underneath earlier ones until revealed.
    let z_index = 50 - props.index as i32;
    let translate_y = if props.revealed { 0 } else { 100 };

    html! {
        <div
            class={classes!("process-step", if props.revealed { "revealed" } else { "concealed" }, props.active.then(|| "active"))}
            style={format!("z-index: {}; transform: translateY({}px);", z_index, translate_y)}
        >
            <div class="process-step-inner">
                <div class="process-icon gradient-bg">{props.step.icon}</div>
                <div class="process-card">
                    <div class="process-card-header">
                        <span class="step-badge">{format!("Step {}", props.index + 1)}</span>
                        <h3>{props.step.title}</h3>
                    </div>
                    <p>{props.step.description}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    let (header_ref, in_view) = use_in_view(InViewOptions::once());
    let timeline = use_scroll_jacking(
        ScrollJackingOptions::new(PROCESS_STEPS.len(), PROCESS_REGION_ID)
            .step_height(PROCESS_STEP_HEIGHT),
    );

    {
        use_effect_with_deps(
            move |active_step: &usize| {
                debug!("Process timeline at step {}", active_step);
                || ()
            },
            timeline.active_step,
        );
    }

    html! {
        <section id={PROCESS_REGION_ID} class={classes!("section-spacing", "process-section", timeline.is_jacking.then(|| "snapping"))}>
            <div class="container-custom">
                <div class="section-header" ref={header_ref}>
                    <h2 class={classes!("section-title", "gradient-text", "fade", in_view.then(|| "shown"))}>
                        {"My Development Process"}
                    </h2>
                    <p class={classes!("section-subtitle", "fade", "delayed", in_view.then(|| "shown"))}>
                        {"A structured approach to deliver exceptional results"}
                    </p>
                </div>

                <div class="process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <ProcessStepCard
                            key={index}
                            step={*step}
                            {index}
                            revealed={timeline.is_revealed(index)}
                            active={index == timeline.active_step}
                        />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .process-steps {
                    position: relative;
                    height: 500px;
                    margin-bottom: 500px;
                }
                .process-step {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    width: 100%;
                    transition: transform 0.7s ease-out, opacity 0.7s ease-out;
                }
                .process-step.concealed { opacity: 0; }
                .process-step.revealed { opacity: 1; }
                .process-step-inner {
                    display: flex;
                    justify-content: center;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .process-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    flex-shrink: 0;
                }
                .process-card {
                    background: #fff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                    max-width: 28rem;
                    margin-left: 1rem;
                }
                .process-card-header { display: flex; align-items: center; margin-bottom: 0.75rem; }
                .process-card-header h3 { font-size: 1.25rem; font-weight: 700; }
                .step-badge {
                    font-size: 0.75rem;
                    font-weight: 600;
                    background: #f3f4f6;
                    border-radius: 0.25rem;
                    padding: 0.25rem 0.5rem;
                    margin-right: 0.75rem;
                }
                .process-card p { color: #4b5563; }
                "#}
            </style>
        </section>
    }
}
