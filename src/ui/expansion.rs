/// Which session of a detail page shows its topics and resources.
///
/// Single selection: expanding one session collapses the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionExpansion {
    #[default]
    Collapsed,
    Expanded(u32),
}

impl SessionExpansion {
    /// State after the user selects session `id`.
    pub fn toggle(self, id: u32) -> Self {
        match self {
            SessionExpansion::Expanded(current) if current == id => SessionExpansion::Collapsed,
            _ => SessionExpansion::Expanded(id),
        }
    }

    pub fn is_expanded(self, id: u32) -> bool {
        self == SessionExpansion::Expanded(id)
    }

    /// URL of the detail page rendered in this state.
    pub fn href(self, course_path: &str) -> String {
        match self {
            SessionExpansion::Collapsed => course_path.to_string(),
            SessionExpansion::Expanded(id) => format!("{course_path}/sessions/{id}#session-{id}"),
        }
    }
}
