use serde::Serialize;

/// Navigation over the landing sections.
///
/// The server renders the initial state, where no section is active yet. The
/// browser marks a section active once it scrolls into view, observing exactly
/// the sections listed here (read back from each dot's `data-section`).
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<&'static str>,
    active: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavDot {
    pub id: &'static str,
    pub active: bool,
}

impl SectionTracker {
    pub fn new(sections: &[&'static str]) -> Self {
        Self {
            sections: sections.to_vec(),
            active: None,
        }
    }

    pub fn dots(&self) -> Vec<NavDot> {
        self.sections
            .iter()
            .map(|&id| NavDot {
                id,
                active: self.active == Some(id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dot_per_section_in_order() {
        let tracker = SectionTracker::new(&["intro", "courses", "contact"]);
        let ids: Vec<_> = tracker.dots().iter().map(|d| d.id).collect();
        assert_eq!(ids, ["intro", "courses", "contact"]);
    }

    #[test]
    fn nothing_active_initially() {
        let tracker = SectionTracker::new(&["intro", "courses", "contact"]);
        assert!(tracker.dots().iter().all(|d| !d.active));
    }
}
