use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::view::View;

/// Which screen is showing, plus the one piece of context the report screen
/// needs. The selected candidate is kept by id and may go stale after `back`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: View,
    pub selected_candidate: Option<Uuid>,
}

impl NavigationState {
    /// Sidebar navigation. The report screen is only reachable through
    /// [`NavigationState::open_analysis`].
    pub fn navigate(&mut self, view: View) -> Result<()> {
        if view == View::Analysis {
            return Err(Error::BadRequest(
                "The analysis view is opened from a candidate report".to_string(),
            ));
        }
        self.current = view;
        Ok(())
    }

    pub fn open_analysis(&mut self, candidate: &Candidate) -> Result<()> {
        if self.current != View::Candidates {
            return Err(Error::Conflict(
                "Reports can only be opened from the candidates view".to_string(),
            ));
        }
        if candidate.analysis().is_none() {
            return Err(Error::Conflict(format!(
                "Candidate {} has not been screened yet",
                candidate.id
            )));
        }
        self.selected_candidate = Some(candidate.id);
        self.current = View::Analysis;
        Ok(())
    }

    pub fn back(&mut self) {
        if self.current == View::Analysis {
            self.current = View::Candidates;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Navigator {
    state: Arc<Mutex<NavigationState>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> NavigationState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `f` to the state atomically and returns the resulting snapshot.
    pub fn update<F>(&self, f: F) -> Result<NavigationState>
    where
        F: FnOnce(&mut NavigationState) -> Result<()>,
    {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = *guard;
        f(&mut next)?;
        *guard = next;
        tracing::debug!(view = ?next.current, "Navigation updated");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::MatchAnalysis;

    fn scored() -> Candidate {
        Candidate::new("Ada".into(), None, "resume".into())
            .mark_scored(MatchAnalysis {
                match_percentage: 82,
                key_strengths: vec![],
                gap_analysis: vec![],
                recommendation: "Hire".into(),
                suggested_questions: vec![],
            })
            .unwrap()
    }

    #[test]
    fn starts_on_dashboard() {
        let state = NavigationState::default();
        assert_eq!(state.current, View::Dashboard);
        assert!(state.selected_candidate.is_none());
    }

    #[test]
    fn sidebar_navigation_is_unconditional() {
        let mut state = NavigationState::default();
        for view in [View::Jobs, View::Candidates, View::Dashboard] {
            state.navigate(view).unwrap();
            assert_eq!(state.current, view);
        }
        assert!(state.navigate(View::Analysis).is_err());
    }

    #[test]
    fn opening_report_selects_candidate() {
        let candidate = scored();
        let mut state = NavigationState::default();
        state.navigate(View::Candidates).unwrap();
        state.open_analysis(&candidate).unwrap();

        assert_eq!(state.current, View::Analysis);
        assert_eq!(state.selected_candidate, Some(candidate.id));
    }

    #[test]
    fn report_requires_analysis() {
        let pending = Candidate::new("Grace".into(), None, "resume".into());
        let mut state = NavigationState::default();
        state.navigate(View::Candidates).unwrap();

        assert!(state.open_analysis(&pending).is_err());
        assert_eq!(state.current, View::Candidates);
        assert!(state.selected_candidate.is_none());
    }

    #[test]
    fn report_only_opens_from_candidates() {
        let mut state = NavigationState::default();
        assert!(state.open_analysis(&scored()).is_err());
        assert_eq!(state.current, View::Dashboard);
    }

    #[test]
    fn back_keeps_stale_selection() {
        let candidate = scored();
        let mut state = NavigationState::default();
        state.navigate(View::Candidates).unwrap();
        state.open_analysis(&candidate).unwrap();
        state.back();

        assert_eq!(state.current, View::Candidates);
        assert_eq!(state.selected_candidate, Some(candidate.id));
    }

    #[test]
    fn failed_update_leaves_state_untouched() {
        let navigator = Navigator::new();
        navigator.update(|s| s.navigate(View::Jobs)).unwrap();
        assert!(navigator.update(|s| s.navigate(View::Analysis)).is_err());
        assert_eq!(navigator.snapshot().current, View::Jobs);
    }
}
