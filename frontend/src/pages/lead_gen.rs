use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::content::PROJECT_TYPES;

/// Stage of the two-step inquiry form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    SelectType,
    EnterDetails,
}

pub enum WizardAction {
    Continue,
    Back,
    /// Entered details are not read, stored or sent anywhere.
    Submit,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::SelectType => 1,
            WizardStep::EnterDetails => 2,
        }
    }

    pub fn progress_percent(self) -> u8 {
        match self {
            WizardStep::SelectType => 50,
            WizardStep::EnterDetails => 100,
        }
    }

    pub fn apply(self, action: WizardAction) -> Self {
        match action {
            WizardAction::Continue => WizardStep::EnterDetails,
            WizardAction::Back | WizardAction::Submit => WizardStep::SelectType,
        }
    }
}

impl Reducible for WizardStep {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        log::debug!("Inquiry form at step {}", next.number());
        Rc::new(next)
    }
}

#[function_component(LeadGen)]
pub fn lead_gen() -> Html {
    let step = use_reducer(WizardStep::default);

    let send = |action: fn() -> WizardAction| {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.dispatch(action()))
    };

    let body = match *step {
        WizardStep::SelectType => html! {
            <div class="wizard__step" key="select-type">
                <h3 class="wizard__heading font-serif">{"Select Project Type"}</h3>
                <div class="wizard__types">
                    // Picking a type is not recorded; only Continue advances.
                    { for PROJECT_TYPES.iter().map(|kind| html! {
                        <button key={*kind} class="wizard__type cursor-pointer">{*kind}</button>
                    }) }
                </div>
                <div class="wizard__actions">
                    <button class="wizard__primary cursor-pointer" onclick={send(|| WizardAction::Continue)}>
                        {"CONTINUE"}
                    </button>
                </div>
            </div>
        },
        WizardStep::EnterDetails => html! {
            <div class="wizard__step" key="enter-details">
                <h3 class="wizard__heading font-serif">{"Your Details"}</h3>
                <div class="wizard__fields">
                    <input type="text" placeholder="Name" />
                    <input type="email" placeholder="Email" />
                </div>
                <div class="wizard__actions">
                    <button class="wizard__back cursor-pointer" onclick={send(|| WizardAction::Back)}>
                        {"BACK"}
                    </button>
                    <button class="wizard__primary cursor-pointer" onclick={send(|| WizardAction::Submit)}>
                        {"SUBMIT"}
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <section class="lead-gen">
            <div class="lead-gen__inner">
                <div class="lead-gen__intro">
                    <span class="eyebrow">{"Inquire"}</span>
                    <h2 class="lead-gen__title font-serif">{"Create Something Exceptional"}</h2>
                </div>

                <div class="wizard">
                    <div class="wizard__track">
                        <div
                            class="wizard__progress"
                            style={format!("width: {}%;", step.progress_percent())}
                        ></div>
                    </div>
                    {body}
                </div>
            </div>
            <style>
                {format!(r#"
                .lead-gen {{ padding: 10rem 1.5rem; background: #f4f4f4; }}
                .lead-gen__inner {{ max-width: 48rem; margin: 0 auto; }}
                .lead-gen__intro {{ text-align: center; margin-bottom: 4rem; }}
                .lead-gen__title {{ font-size: 2.25rem; color: #1c1917; margin-top: 1.5rem; font-weight: 300; }}
                .wizard {{
                    background: #fff;
                    padding: 3rem;
                    position: relative;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(231, 229, 228, 0.5);
                }}
                .wizard__track {{
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 0.25rem;
                    background: #f4f4f4;
                }}
                .wizard__progress {{
                    height: 100%;
                    background: {accent};
                    transition: width 0.5s;
                }}
                .wizard__step {{ animation: wizard-in 0.4s ease both; }}
                .wizard__heading {{ font-size: 1.25rem; margin-bottom: 2rem; text-align: center; font-style: italic; }}
                .wizard__types {{
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }}
                .wizard__type {{
                    padding: 1.5rem 0;
                    background: none;
                    border: 1px solid #f5f5f4;
                    color: #78716c;
                    font-size: 0.875rem;
                    letter-spacing: 0.025em;
                    text-transform: uppercase;
                    transition: all 0.3s;
                }}
                .wizard__type:hover {{ border-color: {accent}; color: {accent}; }}
                .wizard__fields {{
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin: 0 auto 3rem;
                    max-width: 28rem;
                }}
                .wizard__fields input {{
                    width: 100%;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid #e7e5e4;
                    padding-bottom: 1rem;
                    text-align: center;
                    outline: none;
                }}
                .wizard__fields input:focus {{ border-color: {accent}; }}
                .wizard__actions {{
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                }}
                .wizard__primary {{
                    background: #0a0a0a;
                    color: #fff;
                    border: none;
                    padding: 1rem 3rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    transition: background 0.3s;
                }}
                .wizard__primary:hover {{ background: {accent}; }}
                .wizard__back {{ background: none; border: none; font-size: 0.75rem; color: #a8a29e; }}
                .wizard__back:hover {{ color: #1c1917; }}
                @media (min-width: 768px) {{
                    .lead-gen {{ padding: 10rem 6rem; }}
                    .wizard {{ padding: 4rem; }}
                    .wizard__types {{ grid-template-columns: 1fr 1fr; }}
                }}
                @keyframes wizard-in {{
                    from {{ opacity: 0; }}
                    to {{ opacity: 1; }}
                }}
                "#, accent = config::ACCENT)}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: Vec<WizardAction>) -> WizardStep {
        actions
            .into_iter()
            .fold(WizardStep::default(), WizardStep::apply)
    }

    #[test]
    fn starts_on_type_selection_at_half_progress() {
        let step = WizardStep::default();
        assert_eq!(step.number(), 1);
        assert_eq!(step.progress_percent(), 50);
    }

    #[test]
    fn continue_moves_to_details() {
        let step = run(vec![WizardAction::Continue]);
        assert_eq!(step, WizardStep::EnterDetails);
        assert_eq!(step.number(), 2);
        assert_eq!(step.progress_percent(), 100);
    }

    #[test]
    fn back_and_submit_both_return_to_first_step() {
        assert_eq!(
            run(vec![WizardAction::Continue, WizardAction::Back]),
            WizardStep::SelectType
        );
        assert_eq!(
            run(vec![WizardAction::Continue, WizardAction::Submit]),
            WizardStep::SelectType
        );
    }

    #[test]
    fn reducer_matches_plain_transitions() {
        let step = Rc::new(WizardStep::default())
            .reduce(WizardAction::Continue)
            .reduce(WizardAction::Submit);
        assert_eq!(*step, WizardStep::SelectType);
    }
}
