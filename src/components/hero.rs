use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::content::OWNER_NAME;
use crate::scroll_jacking::browser::ListenerGuard;

/// How far the portrait drifts toward the pointer, measured from the viewport centre.
pub fn parallax_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    ((client_x - width / 2.0) / 50.0, (client_y - height / 2.0) / 50.0)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let offset = use_state(|| (0.0_f64, 0.0_f64));

    // Parallax effect for profile image
    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let guard = web_sys::window().and_then(|window| {
                    let target = window.clone();
                    ListenerGuard::new(&target, "mousemove", true, move |event: Event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                        let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
                        offset.set(parallax_offset(
                            event.client_x() as f64,
                            event.client_y() as f64,
                            width,
                            height,
                        ));
                    })
                });
                move || drop(guard)
            },
            (),
        );
    }

    let (x, y) = *offset;

    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>
            <div class="hero-grid">
                <div class="hero-text fade-in">
                    <h1>
                        {OWNER_NAME}
                        <span class="gradient-text">{"Digital Visionary"}</span>
                    </h1>
                    <p>
                        {"Creating beautiful digital experiences with pixel-perfect design and flawless functionality that drives results."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="glow-button">{"Get in touch"}</a>
                        <a href="#projects" class="outline-button">{"View my work"}</a>
                    </div>
                </div>
                <div class="hero-portrait" style={format!("transform: translate({}px, {}px);", x, y)}>
                    <div class="image-circle">
                        <img src="/assets/profile.png" alt={OWNER_NAME} />
                    </div>
                </div>
            </div>
            <a href="#about" class="scroll-indicator">
                <span>{"Scroll"}</span>
                <span class="arrow">{"↓"}</span>
            </a>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    padding: 8rem 1.5rem 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                }
                .hero-glow-left { top: 25%; left: -16rem; background: rgba(59, 130, 246, 0.1); }
                .hero-glow-right { bottom: 33%; right: -16rem; background: rgba(139, 92, 246, 0.1); }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                    max-width: 1200px;
                    width: 100%;
                }
                .hero-text h1 {
                    font-size: 4rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .hero-text h1 span { display: block; margin-top: 0.5rem; }
                .hero-text p { font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; max-width: 32rem; }
                .hero-cta-group { display: flex; gap: 1rem; }
                .hero-portrait { display: flex; justify-content: center; transition: transform 0.1s linear; }
                .image-circle {
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    overflow: hidden;
                    box-shadow: 0 0 60px rgba(139, 92, 246, 0.35);
                }
                .image-circle img { width: 100%; height: 100%; object-fit: cover; }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: #9ca3af;
                    animation: bounce 1s infinite;
                }
                @media (max-width: 768px) {
                    .hero-grid { grid-template-columns: 1fr; text-align: center; }
                    .hero-cta-group { flex-direction: column; }
                    .hero-text h1 { font-size: 2.5rem; }
                    .image-circle { width: 16rem; height: 16rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_has_no_offset() {
        assert_eq!(parallax_offset(500.0, 400.0, 1000.0, 800.0), (0.0, 0.0));
    }

    #[test]
    fn offset_scales_by_fifty() {
        assert_eq!(parallax_offset(1000.0, 0.0, 1000.0, 800.0), (10.0, -8.0));
    }
}
