use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::config;
use crate::content::PROJECTS;

#[function_component(FeaturedProjects)]
pub fn featured_projects() -> Html {
    html! {
        <section class="projects">
            <div class="projects__header">
                <div>
                    <span class="eyebrow">{"Selected Works"}</span>
                    <h2 class="projects__title font-serif">{"Curated Excellence"}</h2>
                </div>
                <button class="projects__all cursor-pointer">{"View All →"}</button>
            </div>

            <div class="projects__strip scrollbar-hide cursor-pointer">
                { for PROJECTS.iter().enumerate().map(|(idx, project)| html! {
                    <Reveal key={project.title} index={idx} from={RevealFrom::Right} class="project-card">
                        <div class="project-card__frame">
                            <img src={project.image} alt={project.title} />
                            <div class="project-card__tint"></div>
                        </div>
                        <div class="project-card__caption">
                            <div>
                                <span class="project-card__category">{project.category}</span>
                                <h3 class="project-card__title font-serif">{project.title}</h3>
                            </div>
                            <p class="project-card__location">{project.location}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
            <style>
                {format!(r#"
                .projects {{ padding: 10rem 0; background: #f4f4f4; overflow: hidden; }}
                .projects__header {{
                    padding: 0 1.5rem 2rem;
                    margin-bottom: 5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    border-bottom: 1px solid #e7e5e4;
                }}
                .projects__title {{ font-size: 2.25rem; color: #1c1917; margin-top: 1.5rem; font-weight: 300; }}
                .projects__all {{
                    display: none;
                    background: none;
                    border: none;
                    color: #1c1917;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    padding-bottom: 0.5rem;
                }}
                .projects__all:hover {{ color: {accent}; }}
                .projects__strip {{
                    display: flex;
                    overflow-x: auto;
                    gap: 3rem;
                    padding: 0 1.5rem 3rem;
                    scroll-snap-type: x mandatory;
                }}
                .project-card {{
                    min-width: 85vw;
                    scroll-snap-align: center;
                    position: relative;
                }}
                .project-card__frame {{
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    background: #e7e5e4;
                    position: relative;
                }}
                .project-card__frame img {{
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: all 1s ease-out;
                }}
                .project-card:hover .project-card__frame img {{ filter: grayscale(0); transform: scale(1.05); }}
                .project-card__tint {{
                    position: absolute;
                    inset: 0;
                    background: rgba(197, 160, 89, 0.1);
                    opacity: 0;
                    mix-blend-mode: overlay;
                    transition: opacity 0.7s;
                }}
                .project-card:hover .project-card__tint {{ opacity: 1; }}
                .project-card__caption {{
                    margin-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    opacity: 0.6;
                    transition: opacity 0.5s;
                }}
                .project-card:hover .project-card__caption {{ opacity: 1; }}
                .project-card__category {{
                    display: block;
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: {accent};
                    margin-bottom: 0.5rem;
                }}
                .project-card__title {{ font-size: 1.875rem; color: #1c1917; font-style: italic; margin: 0; }}
                .project-card__location {{ font-size: 0.75rem; color: #78716c; font-weight: 300; letter-spacing: 0.025em; }}
                @media (min-width: 768px) {{
                    .projects__header {{ padding: 0 6rem 2rem; }}
                    .projects__title {{ font-size: 3.75rem; }}
                    .projects__all {{ display: flex; }}
                    .projects__strip {{ padding: 0 6rem 3rem; }}
                    .project-card {{ min-width: 45vw; }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </section>
    }
}
