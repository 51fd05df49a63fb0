use handlebars::RenderError;
use serde::Serialize;
use shared::content::{
    CompanyValue, Milestone, Statistic, TeamMember, MILESTONES, STATISTICS, TEAM, VALUES,
};

use super::{Templates, ABOUT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Story,
    Team,
    Timeline,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Story, AboutTab::Team, AboutTab::Timeline];

    /// Resolves a `?tab=` value; missing or unknown slugs land on the story.
    pub fn from_query(slug: Option<&str>) -> Self {
        slug.and_then(|slug| Self::ALL.into_iter().find(|tab| tab.slug() == slug))
            .unwrap_or_default()
    }

    fn slug(self) -> &'static str {
        match self {
            AboutTab::Story => "story",
            AboutTab::Team => "team",
            AboutTab::Timeline => "timeline",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AboutTab::Story => "Our Story",
            AboutTab::Team => "Meet the Team",
            AboutTab::Timeline => "Timeline",
        }
    }
}

#[derive(Serialize)]
struct TabLink {
    slug: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct AboutContext {
    stats: &'static [Statistic],
    values: &'static [CompanyValue],
    tabs: Vec<TabLink>,
    active: &'static str,
    show_story: bool,
    show_team: bool,
    show_timeline: bool,
    team: &'static [TeamMember],
    milestones: &'static [Milestone],
}

pub fn render_about(templates: &Templates, tab: AboutTab) -> Result<String, RenderError> {
    let context = AboutContext {
        stats: &STATISTICS,
        values: &VALUES,
        tabs: AboutTab::ALL
            .into_iter()
            .map(|candidate| TabLink {
                slug: candidate.slug(),
                label: candidate.label(),
                selected: candidate == tab,
            })
            .collect(),
        active: tab.slug(),
        show_story: tab == AboutTab::Story,
        show_team: tab == AboutTab::Team,
        show_timeline: tab == AboutTab::Timeline,
        team: &TEAM,
        milestones: &MILESTONES,
    };
    templates.render(ABOUT, &context)
}
