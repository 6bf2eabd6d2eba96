pub mod calculator_panel;
pub mod chart;
pub mod dashboard_panel;
pub mod insights_panel;
pub mod nav_tabs;
pub mod profile_panel;
pub mod status;
pub mod summary;

pub use calculator_panel::CalculatorPanel;
pub use dashboard_panel::DashboardPanel;
pub use insights_panel::InsightsPanel;
pub use nav_tabs::NavTabs;
pub use profile_panel::ProfilePanel;
