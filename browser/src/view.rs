//! Page rendering. Profiles are flattened into plain view structs so the
//! template only deals with strings, lists and flags.

use askama::Template;
use common::{Education, Evaluation, Experience, Profile, Role, Tenure};

use crate::browser::{Notice, NoticeKind, ProfileBrowser};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub url: String,
    pub limit: String,
    pub processing: bool,
    pub notice: Option<NoticeView>,
    pub carousel: Option<CarouselView>,
}

pub struct NoticeView {
    pub class: &'static str,
    pub message: String,
}

pub struct CarouselView {
    /// 1-based position for the "X of Y" indicator.
    pub position: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub profile: ProfileView,
}

pub struct ProfileView {
    pub name: String,
    pub title: String,
    pub location: String,
    pub profile_url: String,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub evaluation: Option<EvaluationView>,
}

pub struct ExperienceView {
    pub company: String,
    /// `roles` holds the tenure's roles when true, the flat position otherwise.
    pub grouped: bool,
    pub roles: Vec<RoleView>,
}

pub struct RoleView {
    pub title: String,
    pub date_range: String,
    pub location: String,
    pub description: String,
}

pub struct EducationView {
    pub institution: String,
    pub degree: String,
    pub date: String,
    pub details: Vec<String>,
}

pub struct EvaluationView {
    pub categories: Vec<CategoryView>,
    pub overall_score: Option<String>,
    pub insights: Vec<String>,
}

pub struct CategoryView {
    pub label: &'static str,
    pub score: String,
    pub explanation: String,
}

impl IndexPage {
    /// Snapshot of the browser for one render. Consumes the pending notice.
    pub fn from_browser(browser: &mut ProfileBrowser, processing: bool) -> Self {
        let notice = browser.take_notice().map(NoticeView::from);
        let carousel = browser.current().map(|profile| CarouselView {
            position: browser.index() + 1,
            total: browser.profiles().len(),
            has_previous: browser.has_previous(),
            has_next: browser.has_next(),
            profile: ProfileView::from(profile),
        });

        Self {
            url: browser.last_url().to_string(),
            limit: match browser.last_limit() {
                "" => common::DEFAULT_LIMIT.to_string(),
                limit => limit.to_string(),
            },
            processing,
            notice,
            carousel,
        }
    }
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        let class = match notice.kind {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Error => "notice notice-error",
        };
        Self {
            class,
            message: notice.message,
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        Self {
            name: text(&profile.name),
            title: text(&profile.title),
            location: text(&profile.location),
            profile_url: text(&profile.profile_url),
            experience: profile.experience.iter().map(ExperienceView::from).collect(),
            education: profile.education.iter().map(EducationView::from).collect(),
            evaluation: profile.evaluation.as_ref().map(EvaluationView::from),
        }
    }
}

impl From<&Experience> for ExperienceView {
    fn from(experience: &Experience) -> Self {
        let (grouped, roles) = match &experience.tenure {
            Tenure::Roles { roles } => (true, roles.iter().map(RoleView::from).collect()),
            Tenure::Single(role) => (false, vec![RoleView::from(role)]),
        };
        Self {
            company: experience.company.clone(),
            grouped,
            roles,
        }
    }
}

impl From<&Role> for RoleView {
    fn from(role: &Role) -> Self {
        Self {
            title: text(&role.title),
            date_range: text(&role.date_range),
            location: text(&role.location),
            description: text(&role.description),
        }
    }
}

impl From<&Education> for EducationView {
    fn from(education: &Education) -> Self {
        Self {
            institution: text(&education.institution),
            degree: text(&education.degree),
            date: text(&education.date),
            details: education.details.clone(),
        }
    }
}

impl From<&Evaluation> for EvaluationView {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            categories: evaluation
                .categories()
                .map(|(label, category)| CategoryView {
                    label,
                    score: category.score.to_string(),
                    explanation: category.explanation.clone(),
                })
                .collect(),
            overall_score: evaluation.overall_score.map(|score| score.to_string()),
            insights: evaluation.actionable_insights.clone(),
        }
    }
}
