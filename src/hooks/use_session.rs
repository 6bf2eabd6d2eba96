use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    carbon::ActivityInput,
    error::AppError,
    profile::ProfileRequest,
    session::{ActionKind, RequestToken, SessionAction, SessionState},
    tab::Tab,
};
use crate::services::{agent, carbon_api, profile_api};

/// Mints request tokens and holds the abort flag of the newest request per action
#[derive(Debug, Default)]
pub struct RequestTracker {
    last_token: u64,
    in_flight: HashMap<ActionKind, Rc<Cell<bool>>>,
}

impl RequestTracker {
    /// Starts a request for `kind`, aborting the one it supersedes
    pub fn begin(&mut self, kind: ActionKind) -> (RequestToken, Rc<Cell<bool>>) {
        self.last_token += 1;
        let aborted = Rc::new(Cell::new(false));
        if let Some(previous) = self.in_flight.insert(kind, aborted.clone()) {
            previous.set(true);
        }
        (RequestToken::new(self.last_token), aborted)
    }

    /// Forgets a request that ran to completion
    pub fn finish(&mut self, kind: ActionKind, aborted: &Rc<Cell<bool>>) {
        if self
            .in_flight
            .get(&kind)
            .is_some_and(|current| Rc::ptr_eq(current, aborted))
        {
            self.in_flight.remove(&kind);
        }
    }

    pub fn abort_all(&mut self) {
        for (_, aborted) in self.in_flight.drain() {
            aborted.set(true);
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

/// Handle returned by `use_session` hook
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub state: UseReducerHandle<SessionState>,
    pub select_tab: Callback<Tab>,
    pub generate_profile: Callback<ProfileRequest>,
    pub calculate_carbon: Callback<ActivityInput>,
    pub connect_agent: Callback<()>,
    pub submit_query: Callback<String>,
}

/// Session state for the dashboard plus the callbacks that drive it
#[hook]
pub fn use_session() -> SessionHandle {
    let state = use_reducer(SessionState::default);
    let tracker = use_mut_ref(RequestTracker::default);

    // Abort everything still in flight when the dashboard unmounts
    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| move || tracker.borrow_mut().abort_all());
    }

    let dispatcher = state.dispatcher();

    let select_tab = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |tab: Tab| dispatcher.dispatch(SessionAction::SelectTab(tab)))
    };

    let generate_profile = {
        let dispatcher = dispatcher.clone();
        let tracker = tracker.clone();
        Callback::from(move |request: ProfileRequest| {
            run_action(
                &dispatcher,
                &tracker,
                ActionKind::Profile,
                async move { profile_api::generate_profile(&request).await },
                |token, profile| SessionAction::ProfileReady { token, profile },
            );
        })
    };

    let calculate_carbon = {
        let dispatcher = dispatcher.clone();
        let tracker = tracker.clone();
        Callback::from(move |input: ActivityInput| {
            run_action(
                &dispatcher,
                &tracker,
                ActionKind::Carbon,
                async move { carbon_api::calculate_carbon(&input).await },
                |token, result| SessionAction::CarbonReady { token, result },
            );
        })
    };

    let connect_agent = {
        let dispatcher = dispatcher.clone();
        let tracker = tracker.clone();
        Callback::from(move |()| {
            run_action(
                &dispatcher,
                &tracker,
                ActionKind::Agent,
                agent::connect_agent(),
                |token, ()| SessionAction::AgentConnected { token },
            );
        })
    };

    let submit_query = {
        let dispatcher = dispatcher.clone();
        let connect_agent = connect_agent.clone();
        Callback::from(move |query: String| {
            gloo::console::log!(format!("Insights query: {query}"));
            dispatcher.dispatch(SessionAction::QuerySubmitted(query));
            connect_agent.emit(());
        })
    };

    SessionHandle {
        state,
        select_tab,
        generate_profile,
        calculate_carbon,
        connect_agent,
        submit_query,
    }
}

/// Marks `kind` pending and runs `task` in the background. The outcome is
/// dropped if a newer request of the same kind started meanwhile or the
/// dashboard unmounted.
fn run_action<T, Fut>(
    dispatcher: &UseReducerDispatcher<SessionState>,
    tracker: &Rc<RefCell<RequestTracker>>,
    kind: ActionKind,
    task: Fut,
    on_ready: fn(RequestToken, T) -> SessionAction,
) where
    T: 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let (token, aborted) = tracker.borrow_mut().begin(kind);
    dispatcher.dispatch(SessionAction::Started { kind, token });

    let dispatcher = dispatcher.clone();
    let tracker = tracker.clone();
    spawn_local(async move {
        let outcome = task.await;
        let action = settle(&mut tracker.borrow_mut(), kind, token, &aborted, outcome, on_ready);

        match action {
            None => {
                gloo::console::warn!(format!(
                    "Discarding stale {} result (request {})",
                    kind.label(),
                    token.id()
                ));
            }
            Some(action) => {
                if let SessionAction::Failed { error, .. } = &action {
                    gloo::console::error!(format!("Error during {}: {error}", kind.label()));
                }
                dispatcher.dispatch(action);
            }
        }
    });
}

/// Turns the outcome of a finished request into the action to dispatch.
/// Returns `None` when the request was aborted, either superseded or unmounted.
pub fn settle<T>(
    tracker: &mut RequestTracker,
    kind: ActionKind,
    token: RequestToken,
    aborted: &Rc<Cell<bool>>,
    outcome: Result<T, AppError>,
    on_ready: fn(RequestToken, T) -> SessionAction,
) -> Option<SessionAction> {
    if aborted.get() {
        return None;
    }
    tracker.finish(kind, aborted);

    Some(match outcome {
        Ok(value) => on_ready(token, value),
        Err(e) => SessionAction::Failed {
            kind,
            token,
            error: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{carbon::CarbonResult, profile::Profile};

    #[test]
    fn test_tokens_increase_across_kinds() {
        let mut tracker = RequestTracker::default();
        let (first, _) = tracker.begin(ActionKind::Profile);
        let (second, _) = tracker.begin(ActionKind::Carbon);
        assert!(second > first);
        assert_eq!(tracker.in_flight(), 2);
    }

    #[test]
    fn test_begin_aborts_superseded_request() {
        let mut tracker = RequestTracker::default();
        let (_, first) = tracker.begin(ActionKind::Profile);
        let (_, second) = tracker.begin(ActionKind::Profile);
        assert!(first.get());
        assert!(!second.get());
        assert_eq!(tracker.in_flight(), 1);
    }

    #[test]
    fn test_finish_ignores_superseded_flag() {
        let mut tracker = RequestTracker::default();
        let (_, first) = tracker.begin(ActionKind::Carbon);
        let (_, second) = tracker.begin(ActionKind::Carbon);
        tracker.finish(ActionKind::Carbon, &first);
        assert_eq!(tracker.in_flight(), 1);
        tracker.finish(ActionKind::Carbon, &second);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_abort_all() {
        let mut tracker = RequestTracker::default();
        let (_, profile) = tracker.begin(ActionKind::Profile);
        let (_, agent) = tracker.begin(ActionKind::Agent);
        tracker.abort_all();
        assert!(profile.get() && agent.get());
        assert_eq!(tracker.in_flight(), 0);
    }

    fn agent_ready(token: RequestToken, _: ()) -> SessionAction {
        SessionAction::AgentConnected { token }
    }

    #[test]
    fn test_settle_drops_superseded_outcome() {
        let mut tracker = RequestTracker::default();
        let (first, first_aborted) = tracker.begin(ActionKind::Agent);
        let (_, second_aborted) = tracker.begin(ActionKind::Agent);

        let action = settle(
            &mut tracker,
            ActionKind::Agent,
            first,
            &first_aborted,
            Ok(()),
            agent_ready,
        );
        assert!(action.is_none());
        assert_eq!(tracker.in_flight(), 1);
        assert!(!second_aborted.get());
    }

    #[test]
    fn test_settle_success_clears_in_flight() {
        let mut tracker = RequestTracker::default();
        let (token, aborted) = tracker.begin(ActionKind::Agent);

        let action = settle(&mut tracker, ActionKind::Agent, token, &aborted, Ok(()), agent_ready);
        assert!(matches!(
            action,
            Some(SessionAction::AgentConnected { token: t }) if t == token
        ));
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_settle_error_becomes_failed() {
        let mut tracker = RequestTracker::default();
        let (token, aborted) = tracker.begin(ActionKind::Profile);

        let action = settle(
            &mut tracker,
            ActionKind::Profile,
            token,
            &aborted,
            Err::<Profile, _>(AppError::NetworkError("offline".to_string())),
            |token, profile| SessionAction::ProfileReady { token, profile },
        );
        match action {
            Some(SessionAction::Failed { kind, token: t, error }) => {
                assert_eq!(kind, ActionKind::Profile);
                assert_eq!(t, token);
                assert_eq!(error, "Network error: offline");
            }
            other => panic!("expected a failure, got {other:?}"),
        }
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_settle_after_unmount_dispatches_nothing() {
        let mut tracker = RequestTracker::default();
        let (token, aborted) = tracker.begin(ActionKind::Carbon);
        tracker.abort_all();

        let action = settle(
            &mut tracker,
            ActionKind::Carbon,
            token,
            &aborted,
            Err::<CarbonResult, _>(AppError::RateLimited),
            |token, result| SessionAction::CarbonReady { token, result },
        );
        assert!(action.is_none());
    }
}
