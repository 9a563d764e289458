//! Top-level view state of the site.
//!
//! The shell owns exactly three pieces of cross-cutting state: whether the
//! intro is still loading, whether the navigation overlay is open, and which
//! page is current. Everything else is local to a component. All changes go
//! through [`ShellAction`] so the transitions can be exercised without a DOM.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Projects,
    Services,
    Philosophy,
    Careers,
    Contact,
}

impl Page {
    /// Menu order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Projects,
        Page::Services,
        Page::Philosophy,
        Page::Careers,
        Page::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Services => "Services",
            Page::Philosophy => "Philosophy",
            Page::Careers => "Careers",
            Page::Contact => "Contact",
        }
    }

    /// Exact, case-sensitive match against the page names.
    pub fn from_name(name: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.name() == name)
    }

    /// Body shown under the heading of a non-home page.
    pub fn body(self) -> Option<Section> {
        match self {
            Page::Projects => Some(Section::FeaturedProjects),
            Page::Services => Some(Section::Services),
            Page::Careers => Some(Section::Careers),
            Page::Contact => Some(Section::LeadGen),
            Page::Home | Page::Philosophy => None,
        }
    }
}

/// Renderable blocks a page body is composed of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    FeaturedProjects,
    LeadGen,
    Careers,
}

pub const HOME_SECTIONS: [Section; 4] = [
    Section::Hero,
    Section::Services,
    Section::FeaturedProjects,
    Section::LeadGen,
];

/// The page identifier held by the shell.
///
/// Identifiers are free-form; anything outside the six known names is kept
/// as-is and renders as a bare heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurrentPage {
    Known(Page),
    Unknown(String),
}

impl CurrentPage {
    pub fn from_name(name: &str) -> Self {
        match Page::from_name(name) {
            Some(page) => CurrentPage::Known(page),
            None => CurrentPage::Unknown(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CurrentPage::Known(page) => page.name(),
            CurrentPage::Unknown(name) => name,
        }
    }

    pub fn is(&self, page: Page) -> bool {
        *self == CurrentPage::Known(page)
    }

    pub fn layout(&self) -> PageLayout {
        match self {
            CurrentPage::Known(Page::Home) => PageLayout::Home(HOME_SECTIONS),
            CurrentPage::Known(page) => PageLayout::Titled {
                heading: page.name().to_string(),
                body: page.body(),
            },
            CurrentPage::Unknown(name) => PageLayout::Titled {
                heading: name.clone(),
                body: None,
            },
        }
    }
}

impl From<Page> for CurrentPage {
    fn from(page: Page) -> Self {
        CurrentPage::Known(page)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageLayout {
    /// The landing composition, no heading.
    Home([Section; 4]),
    Titled {
        heading: String,
        body: Option<Section>,
    },
}

impl PageLayout {
    pub fn heading(&self) -> Option<&str> {
        match self {
            PageLayout::Home(_) => None,
            PageLayout::Titled { heading, .. } => Some(heading),
        }
    }

    pub fn sections(&self) -> Vec<Section> {
        match self {
            PageLayout::Home(sections) => sections.to_vec(),
            PageLayout::Titled { body, .. } => body.iter().copied().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPanel {
    #[default]
    Closed,
    Open,
}

impl NavPanel {
    pub fn is_open(self) -> bool {
        self == NavPanel::Open
    }

    /// Slide position of the overlay panel.
    pub fn transform(self) -> &'static str {
        match self {
            NavPanel::Closed => "translateX(100%)",
            NavPanel::Open => "translateX(0%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub loading: bool,
    pub nav: NavPanel,
    pub page: CurrentPage,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            loading: true,
            nav: NavPanel::Closed,
            page: CurrentPage::Known(Page::Home),
        }
    }
}

pub enum ShellAction {
    /// The preloader finished its fade-out.
    IntroFinished,
    OpenNav,
    CloseNav,
    /// A destination was picked: switch page and close the overlay together.
    SelectPage(Page),
    /// Set the page from a free-form identifier; leaves the overlay alone.
    GoTo(String),
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShellAction::IntroFinished => next.loading = false,
            ShellAction::OpenNav => next.nav = NavPanel::Open,
            ShellAction::CloseNav => next.nav = NavPanel::Closed,
            ShellAction::SelectPage(page) => {
                next.page = page.into();
                next.nav = NavPanel::Closed;
            }
            ShellAction::GoTo(name) => next.page = CurrentPage::from_name(&name),
        }
        if next.page != self.page {
            log::info!("Showing page {}", next.page.name());
        }
        if next.nav != self.nav {
            log::debug!("Navigation overlay {:?}", next.nav);
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ShellState, actions: Vec<ShellAction>) -> ShellState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn starts_loading_on_home_with_menu_closed() {
        let state = ShellState::default();
        assert!(state.loading);
        assert_eq!(state.nav, NavPanel::Closed);
        assert!(state.page.is(Page::Home));
    }

    #[test]
    fn every_page_has_exactly_one_heading_except_home() {
        for page in Page::ALL {
            let layout = CurrentPage::from(page).layout();
            match page {
                Page::Home => assert_eq!(layout.heading(), None),
                _ => assert_eq!(layout.heading(), Some(page.name())),
            }
        }
    }

    #[test]
    fn home_composes_sections_in_fixed_order() {
        let layout = CurrentPage::Known(Page::Home).layout();
        assert_eq!(
            layout.sections(),
            vec![
                Section::Hero,
                Section::Services,
                Section::FeaturedProjects,
                Section::LeadGen
            ]
        );
    }

    #[test]
    fn non_home_pages_render_at_most_one_body() {
        let bodies: Vec<_> = Page::ALL
            .into_iter()
            .filter(|page| *page != Page::Home)
            .map(|page| (page, CurrentPage::from(page).layout().sections()))
            .collect();
        assert_eq!(
            bodies,
            vec![
                (Page::Projects, vec![Section::FeaturedProjects]),
                (Page::Services, vec![Section::Services]),
                (Page::Philosophy, vec![]),
                (Page::Careers, vec![Section::Careers]),
                (Page::Contact, vec![Section::LeadGen]),
            ]
        );
    }

    #[test]
    fn unknown_identifier_renders_heading_only() {
        let state = apply(
            ShellState::default(),
            vec![ShellAction::GoTo("Journal".to_string())],
        );
        assert_eq!(state.page, CurrentPage::Unknown("Journal".to_string()));
        assert_eq!(
            state.page.layout(),
            PageLayout::Titled {
                heading: "Journal".to_string(),
                body: None
            }
        );
        assert_eq!(state.page.layout().heading(), Some("Journal"));
        assert!(state.page.layout().sections().is_empty());
    }

    #[test]
    fn page_names_match_case_sensitively() {
        assert_eq!(Page::from_name("Careers"), Some(Page::Careers));
        assert_eq!(Page::from_name("careers"), None);
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), Some(page));
        }
    }

    #[test]
    fn open_then_close_restores_closed_transform() {
        let initial = ShellState::default();
        let state = apply(
            initial.clone(),
            vec![ShellAction::OpenNav, ShellAction::CloseNav],
        );
        assert_eq!(state.nav.transform(), initial.nav.transform());
        assert_eq!(state, initial);
    }

    #[test]
    fn selecting_any_destination_sets_page_and_closes_menu() {
        for page in Page::ALL {
            let state = apply(
                ShellState::default(),
                vec![ShellAction::OpenNav, ShellAction::SelectPage(page)],
            );
            assert!(state.page.is(page));
            assert!(!state.nav.is_open());
        }
    }

    #[test]
    fn rapid_toggles_keep_the_last_write() {
        let state = apply(
            ShellState::default(),
            vec![
                ShellAction::OpenNav,
                ShellAction::CloseNav,
                ShellAction::OpenNav,
                ShellAction::OpenNav,
            ],
        );
        assert_eq!(state.nav, NavPanel::Open);
    }

    #[test]
    fn intro_finishes_once_and_stays_finished() {
        let state = apply(
            ShellState::default(),
            vec![ShellAction::IntroFinished, ShellAction::IntroFinished],
        );
        assert!(!state.loading);
    }

    #[test]
    fn menu_to_services_scenario() {
        let state = Rc::new(ShellState::default());

        let state = state.reduce(ShellAction::IntroFinished);
        assert!(!state.loading);

        let state = state.reduce(ShellAction::OpenNav);
        assert!(state.nav.is_open());

        let state = state.reduce(ShellAction::SelectPage(Page::Services));
        assert_eq!(state.page.name(), "Services");
        assert!(!state.nav.is_open());
        assert_eq!(
            state.page.layout(),
            PageLayout::Titled {
                heading: "Services".to_string(),
                body: Some(Section::Services)
            }
        );
        assert_eq!(crate::content::SERVICES.len(), 4);
    }
}
