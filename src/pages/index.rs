use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, faq::Faq, hero::Hero, process::Process, projects::Projects,
    services::Services,
};

#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <main class="page">
            <Hero />
            <About />
            <Services />
            <Projects />
            <Process />
            <Faq />
            <Contact />
        </main>
    }
}
