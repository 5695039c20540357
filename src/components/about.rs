use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS};
use crate::content::{Stat, OWNER_NAME, STATS};
use crate::hooks::in_view::{use_in_view, InViewOptions};

/// Counts from zero up to a target in fixed-size increments.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    count: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (duration_ms / tick_ms.max(1)).max(1);
        Self {
            target,
            count: 0.0,
            increment: target as f64 / ticks as f64,
        }
    }

    /// Advances one tick. Returns the value to display and whether the count is done.
    pub fn tick(&mut self) -> (u32, bool) {
        self.count += self.increment;
        if self.count >= self.target as f64 {
            (self.target, true)
        } else {
            (self.count.floor() as u32, false)
        }
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    stat: Stat,
    started: bool,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let shown = use_state(|| 0u32);

    {
        let target = props.stat.target;
        let setter = shown.setter();
        use_effect_with_deps(
            move |started: &bool| {
                let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *started {
                    let animation = RefCell::new(CounterAnimation::new(
                        target,
                        COUNTER_DURATION_MS,
                        COUNTER_TICK_MS,
                    ));
                    let handle = Rc::clone(&slot);
                    let interval = Interval::new(COUNTER_TICK_MS, move || {
                        let (value, done) = animation.borrow_mut().tick();
                        setter.set(value);
                        if done {
                            handle.borrow_mut().take();
                        }
                    });
                    *slot.borrow_mut() = Some(interval);
                }
                move || {
                    slot.borrow_mut().take();
                }
            },
            props.started,
        );
    }

    html! {
        <div class="stat-card">
            <h3 class={classes!("stat-value", format!("tone-{}", props.stat.tone))}>{*shown}</h3>
            <div class="stat-label">{props.stat.label}</div>
            {
                if let Some(suffix) = props.stat.suffix {
                    html! { <p class="stat-suffix">{suffix}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let (section_ref, in_view) = use_in_view(InViewOptions::once());

    html! {
        <section id="about" class="section-spacing muted" ref={section_ref}>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title gradient-text">{"About Me"}</h2>
                    <p class="section-subtitle">
                        {"Front-end developer at the intersection of design and code."}
                    </p>
                </div>

                <div class="about-grid">
                    <div class="about-copy card">
                        <h3>{"Web Developer & Designer"}</h3>
                        <p>
                            {format!("Hi! I am {}, a skilled web developer with a passion for creating stunning digital experiences. I turn your designs into pixel-perfect websites with great attention to detail and elegant animations.", OWNER_NAME)}
                        </p>
                        <p>
                            {"Say goodbye to the stressful back and forth with developers who have no feel for design. I offer consulting services during your design phase with my experience in UI/UX and animation, ensuring a seamless development process."}
                        </p>
                        <p>
                            {"My approach combines technical expertise with creative vision, allowing me to build websites that not only look beautiful but also perform exceptionally well."}
                        </p>
                    </div>

                    <div class="stats-grid">
                        { for STATS.iter().map(|stat| html! {
                            <StatCard stat={*stat} started={in_view} />
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2rem;
                }
                .about-copy h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                .about-copy p { color: #374151; margin-bottom: 1rem; }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .stat-card {
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    padding: 1.5rem;
                    text-align: center;
                    transition: box-shadow 0.3s ease;
                }
                .stat-card:hover { box-shadow: 0 20px 35px rgba(0, 0, 0, 0.12); }
                .stat-value { font-size: 3.5rem; font-weight: 700; }
                .tone-blue { color: #3b82f6; }
                .tone-purple { color: #8b5cf6; }
                .tone-pink { color: #ec4899; }
                .stat-label { font-size: 0.875rem; color: #6b7280; margin-top: 0.25rem; }
                .stat-suffix { font-size: 2rem; font-weight: 700; margin-top: 1rem; }
                @media (max-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
