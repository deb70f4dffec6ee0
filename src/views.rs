use serde::Serialize;
use tera::{Context, Tera};

use crate::catalog::Catalog;
use crate::models::{Course, Landing, ResourceIcon, Session};
use crate::slug::course_href;
use crate::ui::date::long_date;
use crate::ui::{CardVariant, CourseCard, SectionTracker, SessionExpansion, Theme};

/// Landing sections, in page order.
pub const LANDING_SECTIONS: [&str; 3] = ["intro", "courses", "contact"];

/// Courses shown as grid cards in the listing hero.
const FEATURED_LIMIT: usize = 3;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("course_card.html", include_str!("../templates/course_card.html")),
    ("landing.html", include_str!("../templates/landing.html")),
    ("courses.html", include_str!("../templates/courses.html")),
    ("course_detail.html", include_str!("../templates/course_detail.html")),
    ("course_not_found.html", include_str!("../templates/course_not_found.html")),
];

pub struct Templates {
    tera: Tera,
}

#[derive(Serialize)]
struct ResourceView<'a> {
    title: &'a str,
    url: &'a str,
    icon: ResourceIcon,
}

#[derive(Serialize)]
struct SessionView<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    duration: &'a str,
    instructor: &'a str,
    date: String,
    expanded: bool,
    toggle_href: String,
    topics: &'a [String],
    resources: Vec<ResourceView<'a>>,
}

impl<'a> SessionView<'a> {
    fn new(session: &'a Session, expansion: SessionExpansion, course_path: &str) -> Self {
        let expanded = expansion.is_expanded(session.id);
        let resources = if expanded {
            session
                .resources
                .iter()
                .flatten()
                .map(|r| ResourceView {
                    title: &r.title,
                    url: &r.url,
                    icon: r.kind.icon(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            id: session.id,
            title: &session.title,
            description: &session.description,
            duration: &session.duration,
            instructor: &session.instructor,
            date: long_date(&session.date),
            expanded,
            toggle_href: expansion.toggle(session.id).href(course_path),
            topics: &session.topics,
            resources,
        }
    }
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    fn context(theme: Theme) -> Context {
        let mut context = Context::new();
        context.insert("theme", &theme);
        context.insert("theme_class", theme.class());
        context.insert("next_theme", &theme.toggle());
        context
    }

    fn card(&self, course: &Course, variant: CardVariant) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("card", &CourseCard::new(course, variant));
        self.tera.render("course_card.html", &context)
    }

    pub fn landing(&self, landing: &Landing) -> Result<String, tera::Error> {
        let tracker = SectionTracker::new(&LANDING_SECTIONS);

        let mut context = Self::context(Theme::default());
        context.insert("title", "Espacio Digital");
        context.insert("nav", &tracker.dots());
        context.insert("landing", landing);
        self.tera.render("landing.html", &context)
    }

    pub fn courses(&self, catalog: &Catalog) -> Result<String, tera::Error> {
        let courses = catalog.courses();
        let featured = courses
            .iter()
            .take(FEATURED_LIMIT)
            .map(|c| self.card(c, CardVariant::Grid))
            .collect::<Result<Vec<_>, _>>()?;
        let listed = courses
            .iter()
            .map(|c| self.card(c, CardVariant::List))
            .collect::<Result<Vec<_>, _>>()?;

        let mut context = Self::context(Theme::default());
        context.insert("title", "Nuestros Cursos");
        context.insert("featured", &featured);
        context.insert("cards", &listed);
        context.insert("course_count", &courses.len());
        self.tera.render("courses.html", &context)
    }

    pub fn course_detail(
        &self,
        course: &Course,
        sessions: &[Session],
        expansion: SessionExpansion,
    ) -> Result<String, tera::Error> {
        let course_path = course_href(course);
        let sessions: Vec<SessionView> = sessions
            .iter()
            .map(|s| SessionView::new(s, expansion, &course_path))
            .collect();

        let mut context = Self::context(Theme::default());
        context.insert("title", &course.title);
        context.insert("course", course);
        context.insert("start_date", &course.start_date);
        context.insert("schedule", &course.schedule);
        context.insert("sessions", &sessions);
        self.tera.render("course_detail.html", &context)
    }

    pub fn course_not_found(&self) -> Result<String, tera::Error> {
        let mut context = Self::context(Theme::default());
        context.insert("title", "Curso no encontrado");
        self.tera.render("course_not_found.html", &context)
    }
}
