use yew::prelude::*;

use crate::content::{Service, SERVICES};
use crate::hooks::in_view::{use_in_view, InViewOptions};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    delay: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let (card_ref, in_view) = use_in_view(InViewOptions::once());

    html! {
        <div
            ref={card_ref}
            class={classes!("service-card", "card-hover", if in_view { "revealed" } else { "concealed" })}
            style={format!("transition: all 0.5s ease {}ms;", props.delay)}
        >
            <div class="service-icon gradient-bg">{props.service.icon}</div>
            <h3>{props.service.title}</h3>
            <p>{props.service.description}</p>
            <a href="#contact" class="learn-more">{"Learn more →"}</a>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let (header_ref, in_view) = use_in_view(InViewOptions::once());

    html! {
        <section id="services" class="section-spacing">
            <div class="container-custom">
                <div class="section-header" ref={header_ref}>
                    <h2 class={classes!("section-title", "gradient-text", "fade", in_view.then(|| "shown"))}>
                        {"Services I Offer"}
                    </h2>
                    <p class={classes!("section-subtitle", "fade", "delayed", in_view.then(|| "shown"))}>
                        {"Comprehensive solutions for your digital needs"}
                    </p>
                </div>

                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard service={*service} delay={index * 100} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .service-card {
                    background: #fff;
                    border-radius: 1rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    padding: 1.5rem;
                }
                .service-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    margin-bottom: 1.25rem;
                }
                .service-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                .service-card p { color: #4b5563; margin-bottom: 1rem; }
                .learn-more { color: #6366f1; font-weight: 500; }
                "#}
            </style>
        </section>
    }
}
