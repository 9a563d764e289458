use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::config;
use crate::content::{Job, JOBS};

pub fn job_summary(job: &Job) -> String {
    format!("{} — {}", job.location, job.kind)
}

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <section class="careers">
            <div class="careers__inner">
                <div class="careers__intro">
                    <h2 class="careers__title font-serif">{"Join the Collective"}</h2>
                    <div class="careers__rule"></div>
                    <p>{"We are looking for visionaries to help shape the future of our built environments."}</p>
                </div>

                <div class="careers__list">
                    { for JOBS.iter().enumerate().map(|(idx, job)| html! {
                        <Reveal key={job.role} index={idx} from={RevealFrom::Below} class="job-card cursor-pointer">
                            <div class="job-card__text">
                                <h3 class="job-card__role font-serif">{job.role}</h3>
                                <p class="job-card__meta">{job_summary(job)}</p>
                            </div>
                            <span class="job-card__apply">{"APPLY NOW"}</span>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {format!(r#"
                .careers {{ padding: 10rem 1.5rem; background: #fff; }}
                .careers__inner {{ max-width: 64rem; margin: 0 auto; }}
                .careers__intro {{ text-align: center; margin-bottom: 6rem; }}
                .careers__intro p {{
                    color: #78716c;
                    font-weight: 300;
                    max-width: 32rem;
                    margin: 0 auto;
                    line-height: 1.625;
                }}
                .careers__title {{ font-size: 2.25rem; color: #1c1917; font-weight: 300; }}
                .careers__rule {{ height: 1px; width: 3rem; background: {accent}; margin: 2rem auto; }}
                .careers__list {{ display: grid; gap: 1.5rem; }}
                .job-card {{
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    padding: 2rem;
                    border: 1px solid #f5f5f4;
                    background: #fafaf9;
                }}
                .job-card.reveal--shown:hover {{
                    background: #fff;
                    border-color: rgba(197, 160, 89, 0.3);
                    transform: translateY(-5px);
                }}
                .job-card__text {{ text-align: center; }}
                .job-card__role {{ font-size: 1.25rem; color: #1c1917; font-style: italic; margin: 0; }}
                .job-card:hover .job-card__role {{ color: {accent}; }}
                .job-card__meta {{
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #a8a29e;
                    margin-top: 0.5rem;
                }}
                .job-card__apply {{
                    margin-top: 1.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-decoration: underline;
                    text-decoration-color: #d6d3d1;
                    text-underline-offset: 4px;
                }}
                .job-card:hover .job-card__apply {{ text-decoration-color: {accent}; }}
                @media (min-width: 768px) {{
                    .careers {{ padding: 10rem 6rem; }}
                    .careers__title {{ font-size: 3rem; }}
                    .job-card {{ flex-direction: row; }}
                    .job-card__text {{ text-align: left; }}
                    .job-card__apply {{ margin-top: 0; }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_joins_location_and_contract_type() {
        assert_eq!(job_summary(&JOBS[2]), "Dubai — Contract");
    }
}
