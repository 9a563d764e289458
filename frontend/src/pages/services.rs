use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::config;
use crate::content::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <div class="services__grid">
                <div class="services__intro">
                    <span class="eyebrow">{"Expertise"}</span>
                    <h2 class="services__title font-serif">
                        {"Designing for people, "}
                        <br />
                        <span class="services__title-muted">{"purpose, and place."}</span>
                    </h2>
                </div>
                <div class="services__list">
                    { for SERVICES.iter().enumerate().map(|(idx, service)| html! {
                        <Reveal key={service.title} index={idx} from={RevealFrom::Below} class="service-row cursor-pointer">
                            <div class="service-row__inner">
                                <h3 class="service-row__title font-serif">{service.title}</h3>
                                <div class="service-row__detail">
                                    <p>{service.description}</p>
                                    <span class="service-row__arrow">{"→"}</span>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                    <div class="services__rule"></div>
                </div>
            </div>
            <style>
                {format!(r#"
                .services {{ padding: 10rem 1.5rem; background: #0a0a0a; color: #fff; }}
                .services__grid {{ display: grid; grid-template-columns: 1fr; gap: 4rem; }}
                .services__title {{
                    font-size: 2.25rem;
                    margin-top: 2rem;
                    line-height: 1.25;
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.9);
                }}
                .services__title-muted {{ color: rgba(255, 255, 255, 0.4); font-style: italic; }}
                .service-row {{
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 3rem 1rem;
                    margin: 0 -1rem;
                }}
                .service-row:hover {{ background: rgba(255, 255, 255, 0.05); }}
                .service-row__inner {{ display: flex; flex-direction: column; }}
                .service-row__title {{
                    font-size: 1.875rem;
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.8);
                    margin: 0;
                    transition: color 0.5s;
                }}
                .service-row:hover .service-row__title {{ color: {accent}; }}
                .service-row__detail {{
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-top: 1rem;
                }}
                .service-row__detail p {{
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.4);
                    max-width: 24rem;
                    font-weight: 300;
                    line-height: 1.625;
                    transition: color 0.3s;
                }}
                .service-row:hover .service-row__detail p {{ color: rgba(255, 255, 255, 0.7); }}
                .service-row__arrow {{ color: {accent}; opacity: 0; transition: opacity 0.5s; }}
                .service-row:hover .service-row__arrow {{ opacity: 1; }}
                .services__rule {{ border-top: 1px solid rgba(255, 255, 255, 0.1); }}
                @media (min-width: 768px) {{
                    .services {{ padding: 10rem 6rem; }}
                    .services__grid {{ grid-template-columns: 4fr 8fr; }}
                    .services__title {{ font-size: 3rem; }}
                    .service-row__inner {{ flex-direction: row; justify-content: space-between; align-items: baseline; }}
                    .service-row__detail {{ margin-top: 0; gap: 3rem; }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </section>
    }
}
