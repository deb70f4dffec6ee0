use serde::Serialize;

use crate::models::Course;
use crate::slug::course_href;

/// Tags shown on a grid card before the `+N` marker.
const GRID_TECH_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Compact card for the hero strip.
    Grid,
    /// Dense row for the full listing.
    #[default]
    List,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseCard<'a> {
    pub variant: CardVariant,
    pub href: String,
    pub year: &'a str,
    pub level: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub duration: &'a str,
    pub students: &'a str,
    pub tech: &'a [String],
    pub hidden_tech: usize,
}

impl<'a> CourseCard<'a> {
    pub fn new(course: &'a Course, variant: CardVariant) -> Self {
        let shown = match variant {
            CardVariant::Grid => course.tech.len().min(GRID_TECH_LIMIT),
            CardVariant::List => course.tech.len(),
        };

        Self {
            variant,
            href: course_href(course),
            year: &course.year,
            level: &course.level,
            title: &course.title,
            description: &course.description,
            duration: &course.duration,
            students: &course.students,
            tech: &course.tech[..shown],
            hidden_tech: course.tech.len() - shown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data;

    #[test]
    fn both_variants_link_to_the_same_slug() {
        let courses = data::courses();
        let grid = CourseCard::new(&courses[0], CardVariant::Grid);
        let list = CourseCard::new(&courses[0], CardVariant::List);
        assert_eq!(grid.href, "/courses/desarrollo-web-con-python");
        assert_eq!(grid.href, list.href);
    }

    #[test]
    fn grid_truncates_tech() {
        let courses = data::courses();
        let grid = CourseCard::new(&courses[0], CardVariant::Grid);
        assert_eq!(grid.tech, ["TypeScript", "HTML", "CSS"]);
        assert_eq!(grid.hidden_tech, 2);

        let list = CourseCard::new(&courses[0], CardVariant::List);
        assert_eq!(list.tech.len(), 5);
        assert_eq!(list.hidden_tech, 0);
    }
}
