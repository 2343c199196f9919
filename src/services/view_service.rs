use crate::database::store::Store;
use crate::dto::candidate_dto::CandidateResponse;
use crate::dto::view_dto::{
    AnalysisReport, CandidateRow, CandidatesView, DashboardStats, DashboardView, JobOption,
    JobsView, RowAction, Screen, TopMatch,
};
use crate::models::analysis::{MatchBand, HIGH_MATCH_THRESHOLD};
use crate::models::candidate::CandidateStatus;
use crate::models::view::View;
use crate::services::navigation_service::NavigationState;

const RECENT_JOBS: usize = 3;
const TOP_MATCHES: usize = 3;

pub fn dashboard(store: &Store) -> DashboardView {
    let jobs = store.jobs();
    let candidates = store.candidates();

    let stats = DashboardStats {
        active_jobs: jobs.len(),
        total_applicants: candidates.len(),
        high_match: candidates
            .iter()
            .filter(|c| c.score().is_some_and(|s| s >= HIGH_MATCH_THRESHOLD))
            .count(),
        awaiting_action: candidates
            .iter()
            .filter(|c| c.status() == CandidateStatus::Pending)
            .count(),
        contacted: candidates
            .iter()
            .filter(|c| c.status() == CandidateStatus::Contacted)
            .count(),
    };

    let mut top_matches: Vec<TopMatch> = candidates
        .iter()
        .filter_map(|c| {
            let score = c.score().filter(|s| *s > 0)?;
            Some(TopMatch {
                id: c.id,
                name: c.name.clone(),
                score,
                band: MatchBand::from_score(score),
            })
        })
        .collect();
    // stable sort keeps newer candidates ahead on ties
    top_matches.sort_by(|a, b| b.score.cmp(&a.score));
    top_matches.truncate(TOP_MATCHES);

    DashboardView {
        stats,
        recent_jobs: jobs.into_iter().take(RECENT_JOBS).collect(),
        top_matches,
    }
}

pub fn jobs(store: &Store) -> JobsView {
    JobsView { jobs: store.jobs() }
}

pub fn candidates(store: &Store) -> CandidatesView {
    let rows = store
        .candidates()
        .into_iter()
        .map(|c| {
            let screening = store.screening_state(c.id);
            let action = match (c.analysis(), c.status()) {
                (Some(_), _) => RowAction::ViewReport,
                (None, CandidateStatus::Pending) => RowAction::RunScreen,
                (None, _) => RowAction::Closed,
            };
            CandidateRow {
                busy: screening.is_in_flight(),
                action,
                candidate: CandidateResponse::new(c, screening),
            }
        })
        .collect();

    CandidatesView {
        active_job: store.active_job(),
        jobs: store
            .jobs()
            .into_iter()
            .map(|j| JobOption {
                id: j.id,
                title: j.title,
            })
            .collect(),
        candidates: rows,
    }
}

/// Report for the selected candidate, or `None` when there is nothing to show.
pub fn analysis(store: &Store, nav: NavigationState) -> Option<AnalysisReport> {
    let candidate = store.candidate(nav.selected_candidate?)?;
    let analysis = candidate.analysis()?.clone();
    let invite_sent = candidate.status() == CandidateStatus::Contacted;
    let screening = store.screening_state(candidate.id);

    Some(AnalysisReport {
        band: analysis.band(),
        analysis,
        invite_sent,
        candidate: CandidateResponse::new(candidate, screening),
    })
}

pub fn render(store: &Store, nav: NavigationState) -> Screen {
    match nav.current {
        View::Dashboard => Screen::Dashboard(dashboard(store)),
        View::Jobs => Screen::Jobs(jobs(store)),
        View::Candidates => Screen::Candidates(candidates(store)),
        View::Analysis => analysis(store, nav).map_or(Screen::Blank, Screen::Analysis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::MatchAnalysis;
    use crate::models::candidate::Candidate;
    use crate::models::job::JobDescription;
    use uuid::Uuid;

    fn analysis_with(score: u8) -> MatchAnalysis {
        MatchAnalysis {
            match_percentage: score,
            key_strengths: vec!["Go".into()],
            gap_analysis: vec![],
            recommendation: "ok".into(),
            suggested_questions: vec![],
        }
    }

    fn add_scored(store: &Store, name: &str, score: u8) -> Candidate {
        let c = store.add_candidate(Candidate::new(name.into(), None, "resume".into()));
        let scored = c.mark_scored(analysis_with(score)).unwrap();
        store.update_candidate(scored.clone());
        scored
    }

    #[test]
    fn dashboard_counts_by_status_and_score() {
        let store = Store::seeded();
        store.add_candidate(Candidate::new("Pending".into(), None, "r".into()));
        add_scored(&store, "High", 80);
        add_scored(&store, "Mid", 79);
        let contacted = add_scored(&store, "Hired", 91).mark_contacted().unwrap();
        store.update_candidate(contacted);

        let stats = dashboard(&store).stats;
        assert_eq!(
            stats,
            DashboardStats {
                active_jobs: 1,
                total_applicants: 4,
                high_match: 2,
                awaiting_action: 1,
                contacted: 1,
            }
        );
    }

    #[test]
    fn top_matches_skip_zero_and_keep_three_best() {
        let store = Store::new();
        add_scored(&store, "Zero", 0);
        add_scored(&store, "A", 55);
        add_scored(&store, "B", 92);
        add_scored(&store, "C", 70);
        add_scored(&store, "D", 12);

        let names: Vec<String> = dashboard(&store)
            .top_matches
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn recent_jobs_are_three_newest() {
        let store = Store::new();
        for title in ["one", "two", "three", "four"] {
            store.add_job(JobDescription::new(title.into(), String::new(), "x".into()));
        }
        let titles: Vec<String> = dashboard(&store)
            .recent_jobs
            .into_iter()
            .map(|j| j.title)
            .collect();
        assert_eq!(titles, vec!["four", "three", "two"]);
    }

    #[test]
    fn candidate_rows_offer_screen_or_report() {
        let store = Store::seeded();
        let pending = store.add_candidate(Candidate::new("P".into(), None, "r".into()));
        add_scored(&store, "S", 60);
        store.begin_screening(pending.id);

        let view = candidates(&store);
        assert!(view.active_job.is_some());
        assert_eq!(view.jobs.len(), 1);
        assert_eq!(view.candidates[0].action, RowAction::ViewReport);
        assert_eq!(view.candidates[1].action, RowAction::RunScreen);
        assert!(view.candidates[1].busy);
    }

    #[test]
    fn rejected_without_analysis_has_no_report_action() {
        let store = Store::seeded();
        let c = store.add_candidate(Candidate::new("R".into(), None, "r".into()));
        store.update_candidate(c.mark_rejected().unwrap());
        let kept = add_scored(&store, "K", 70).mark_rejected().unwrap();
        store.update_candidate(kept);

        let view = candidates(&store);
        assert_eq!(view.candidates[0].candidate.name, "K");
        assert_eq!(view.candidates[0].action, RowAction::ViewReport);
        assert_eq!(view.candidates[1].candidate.name, "R");
        assert_eq!(view.candidates[1].action, RowAction::Closed);
    }

    #[test]
    fn analysis_screen_reflects_latest_record() {
        let store = Store::new();
        let scored = add_scored(&store, "Ada", 84);
        let nav = NavigationState {
            current: View::Analysis,
            selected_candidate: Some(scored.id),
        };

        match render(&store, nav) {
            Screen::Analysis(report) => {
                assert_eq!(report.band, MatchBand::High);
                assert!(!report.invite_sent);
            }
            other => panic!("unexpected screen {:?}", other),
        }

        store.update_candidate(scored.mark_contacted().unwrap());
        let report = analysis(&store, nav).unwrap();
        assert!(report.invite_sent);
    }

    #[test]
    fn analysis_without_scored_candidate_is_blank() {
        let store = Store::new();
        let pending = store.add_candidate(Candidate::new("P".into(), None, "r".into()));

        for selected in [None, Some(Uuid::new_v4()), Some(pending.id)] {
            let nav = NavigationState {
                current: View::Analysis,
                selected_candidate: selected,
            };
            assert!(matches!(render(&store, nav), Screen::Blank));
        }
    }
}
