use crate::models::Course;

/// Lowercases `title` and collapses every whitespace run into a single `-`.
///
/// Leading and trailing runs are replaced too, so `" a b"` becomes `"-a-b"`.
/// Nothing else (accents, punctuation) is touched.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if is_slug_separator(c) {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

/// ECMAScript `\s`: Unicode whitespace plus BOM, without NEL.
fn is_slug_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Returns the first course whose title slugifies to `slug`.
pub fn resolve<'a>(slug: &str, courses: &'a [Course]) -> Option<&'a Course> {
    courses.iter().find(|course| slugify(&course.title) == slug)
}

/// Path of a course detail page.
pub fn course_href(course: &Course) -> String {
    format!("/courses/{}", slugify(&course.title))
}
