//! Session state for one page load and the reducer that updates it.
//!
//! All mutation goes through [`SessionState::apply`]. Every asynchronous
//! action is tracked by its own [`ActionStatus`], and completions carry the
//! [`RequestToken`] they were started with so a superseded request can never
//! overwrite the result of a newer one.

use super::carbon::CarbonResult;
use super::profile::Profile;
use super::tab::Tab;
use std::rc::Rc;
use yew::Reducible;

/// Text shown in the insights panel while the agent handles a query
pub const AI_PROCESSING_NOTE: &str = "AI agent processing...";

/// The independent asynchronous actions the dashboard can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Profile,
    Carbon,
    Agent,
}

impl ActionKind {
    pub fn all() -> &'static [ActionKind] {
        &[ActionKind::Profile, ActionKind::Carbon, ActionKind::Agent]
    }

    /// Human-readable name used in log lines and error banners
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Profile => "profile generation",
            ActionKind::Carbon => "carbon calculation",
            ActionKind::Agent => "agent connection",
        }
    }
}

/// Identity of a single request. Tokens are minted in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending(RequestToken),
    Failed(String),
}

impl ActionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending(_))
    }

    /// Token of the in-flight request, if any
    pub fn token(&self) -> Option<RequestToken> {
        match self {
            ActionStatus::Pending(token) => Some(*token),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SelectTab(Tab),
    /// A request was issued. Supersedes any request of the same kind.
    Started {
        kind: ActionKind,
        token: RequestToken,
    },
    ProfileReady {
        token: RequestToken,
        profile: Profile,
    },
    CarbonReady {
        token: RequestToken,
        result: CarbonResult,
    },
    AgentConnected {
        token: RequestToken,
    },
    Failed {
        kind: ActionKind,
        token: RequestToken,
        error: String,
    },
    QuerySubmitted(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub selected_tab: Tab,
    pub profile: Option<Rc<Profile>>,
    pub carbon_result: Option<Rc<CarbonResult>>,
    pub ai_response: String,
    pub profile_status: ActionStatus,
    pub carbon_status: ActionStatus,
    pub agent_status: ActionStatus,
}

impl SessionState {
    pub fn status(&self, kind: ActionKind) -> &ActionStatus {
        match kind {
            ActionKind::Profile => &self.profile_status,
            ActionKind::Carbon => &self.carbon_status,
            ActionKind::Agent => &self.agent_status,
        }
    }

    fn status_mut(&mut self, kind: ActionKind) -> &mut ActionStatus {
        match kind {
            ActionKind::Profile => &mut self.profile_status,
            ActionKind::Carbon => &mut self.carbon_status,
            ActionKind::Agent => &mut self.agent_status,
        }
    }

    pub fn is_pending(&self, kind: ActionKind) -> bool {
        self.status(kind).is_pending()
    }

    /// True while any action is in flight
    pub fn is_busy(&self) -> bool {
        ActionKind::all().iter().any(|kind| self.is_pending(*kind))
    }

    pub fn is_visible(&self, tab: Tab) -> bool {
        self.selected_tab == tab
    }

    /// Whether a completion for `kind` carrying `token` would still be applied
    pub fn is_current(&self, kind: ActionKind, token: RequestToken) -> bool {
        self.status(kind).token() == Some(token)
    }

    /// Applies an action in place. Returns false when the action was stale and
    /// left the state untouched.
    pub fn apply(&mut self, action: SessionAction) -> bool {
        match action {
            SessionAction::SelectTab(tab) => {
                if self.selected_tab == tab {
                    return false;
                }
                self.selected_tab = tab;
                true
            }
            SessionAction::Started { kind, token } => {
                // Never step back to an older request
                if let Some(current) = self.status(kind).token() {
                    if token <= current {
                        return false;
                    }
                }
                *self.status_mut(kind) = ActionStatus::Pending(token);
                true
            }
            SessionAction::ProfileReady { token, profile } => {
                if !self.finish(ActionKind::Profile, token) {
                    return false;
                }
                self.profile = Some(Rc::new(profile));
                true
            }
            SessionAction::CarbonReady { token, result } => {
                if !self.finish(ActionKind::Carbon, token) {
                    return false;
                }
                self.carbon_result = Some(Rc::new(result));
                true
            }
            SessionAction::AgentConnected { token } => self.finish(ActionKind::Agent, token),
            SessionAction::Failed { kind, token, error } => {
                if !self.is_current(kind, token) {
                    return false;
                }
                *self.status_mut(kind) = ActionStatus::Failed(error);
                true
            }
            SessionAction::QuerySubmitted(_) => {
                self.ai_response = AI_PROCESSING_NOTE.to_string();
                true
            }
        }
    }

    /// Clears the pending mark if `token` is the current request
    fn finish(&mut self, kind: ActionKind, token: RequestToken) -> bool {
        if !self.is_current(kind, token) {
            return false;
        }
        *self.status_mut(kind) = ActionStatus::Idle;
        true
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
