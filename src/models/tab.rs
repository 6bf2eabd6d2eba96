/// The four panels of the dashboard. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Profile,
    Calculator,
    Insights,
}

impl Tab {
    /// Returns the identifier used in element ids and CSS classes.
    pub fn code(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Profile => "profile",
            Tab::Calculator => "calculator",
            Tab::Insights => "insights",
        }
    }

    /// Returns the label shown on the navigation button.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Profile => "Profile",
            Tab::Calculator => "Calculator",
            Tab::Insights => "Insights",
        }
    }

    /// Navigation icon
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Profile => "👤",
            Tab::Calculator => "🧮",
            Tab::Insights => "🧠",
        }
    }

    /// All tabs in navigation order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Dashboard, Tab::Profile, Tab::Calculator, Tab::Insights]
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
