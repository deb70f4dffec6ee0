use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class applied to the document root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_by_default_and_toggles_back() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.class(), "dark");
        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.toggle().toggle(), Theme::Dark);
    }
}
