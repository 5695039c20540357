use yew::prelude::*;

use crate::content::{filter_projects, Project, ALL_CATEGORIES, PROJECTS, PROJECT_CATEGORIES};
use crate::hooks::in_view::{use_in_view, InViewOptions};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let (card_ref, in_view) = use_in_view(InViewOptions::once());
    let project = props.project;

    html! {
        <div
            ref={card_ref}
            class={classes!("project-card", "card-hover", if in_view { "revealed" } else { "concealed" })}
            style={format!("transition: all 0.5s ease {}ms;", props.index * 100)}
        >
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-overlay">
                <span class="project-category">{project.category}</span>
                <h3>{project.title}</h3>
                <a href="#contact" class="project-link">{"View Project →"}</a>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let (header_ref, in_view) = use_in_view(InViewOptions::once());
    let filter = use_state(|| ALL_CATEGORIES);

    let shown = filter_projects(&PROJECTS, *filter);

    html! {
        <section id="projects" class="section-spacing muted">
            <div class="container-custom">
                <div class="section-header" ref={header_ref}>
                    <h2 class={classes!("section-title", "gradient-text", "fade", in_view.then(|| "shown"))}>
                        {"Featured Projects"}
                    </h2>
                    <p class={classes!("section-subtitle", "fade", "delayed", in_view.then(|| "shown"))}>
                        {"A showcase of my recent work and achievements"}
                    </p>
                </div>

                <div class="filter-bar">
                    { for PROJECT_CATEGORIES.into_iter().map(|category| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(category))
                        };
                        html! {
                            <button
                                key={category}
                                class={classes!("filter-button", (*filter == category).then(|| "active"))}
                                {onclick}
                            >
                                {category}
                            </button>
                        }
                    }) }
                </div>

                <div class="card-grid">
                    {
                        if shown.is_empty() {
                            html! {
                                <div class="empty-projects">
                                    <p>{"No projects found with this filter."}</p>
                                </div>
                            }
                        } else {
                            shown.iter().enumerate().map(|(index, project)| html! {
                                <ProjectCard key={project.title} project={*project} {index} />
                            }).collect::<Html>()
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .filter-bar {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                    overflow-x: auto;
                }
                .filter-button {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid #e5e7eb;
                    background: #fff;
                    color: #374151;
                    text-transform: capitalize;
                    white-space: nowrap;
                    cursor: pointer;
                }
                .filter-button.active {
                    background: linear-gradient(90deg, #3b82f6, #8b5cf6);
                    color: #fff;
                    border-color: transparent;
                }
                .project-card { position: relative; overflow: hidden; border-radius: 1rem; }
                .project-image { aspect-ratio: 16 / 9; overflow: hidden; }
                .project-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
                .project-card:hover .project-image img { transform: scale(1.05); }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                    opacity: 0;
                    transition: opacity 0.3s;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    color: #fff;
                }
                .project-card:hover .project-overlay { opacity: 1; }
                .project-category { font-size: 0.875rem; }
                .empty-projects { grid-column: 1 / -1; text-align: center; padding: 3rem 0; color: #6b7280; }
                "#}
            </style>
        </section>
    }
}
