//! Yes/No vote controls with proportional tally bars.

use crate::errors::{DashboardResult, VoteDisabled};
use crate::render::{ProgressBar, ProgressRenderer};
use crate::session::AccountSession;
use crate::types::{ProposalVoteData, VoteChoice};
use console::style;
use tracing::debug;

/// Which control was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteSide {
    Yes,
    No,
}

/// Callbacks fired when a vote control is selected.
pub trait VoteHandler {
    fn on_click_yes(&mut self);
    fn on_click_no(&mut self);
}

/// Render state of one radio control and its bar.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOptionView {
    pub label: &'static str,
    pub value: &'static str,
    pub checked: bool,
    pub disabled: bool,
    pub bar: ProgressBar,
}

/// Both vote controls, Yes first.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteResultsView {
    pub yes: VoteOptionView,
    pub no: VoteOptionView,
}

/// Share of approvals, 0 when nobody has voted
pub fn approved_ratio(data: &ProposalVoteData) -> f64 {
    ProgressBar::new(data.tot_approved, data.total()).ratio()
}

/// Share of refusals, 0 when nobody has voted
pub fn refused_ratio(data: &ProposalVoteData) -> f64 {
    ProgressBar::new(data.tot_refused, data.total()).ratio()
}

/// A pure function of the proposal tallies, the recorded choice and the
/// session; it holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct VoteResultsContainer<'a> {
    proposal: &'a ProposalVoteData,
    has_voted: VoteChoice,
    session: &'a AccountSession,
}

impl<'a> VoteResultsContainer<'a> {
    pub fn new(
        proposal: &'a ProposalVoteData,
        has_voted: VoteChoice,
        session: &'a AccountSession,
    ) -> Self {
        Self {
            proposal,
            has_voted,
            session,
        }
    }

    /// Controls are disabled without an account or once a vote is recorded
    pub fn is_disabled(&self) -> bool {
        !self.session.is_connected() || self.has_voted.is_recorded()
    }

    pub fn approved_ratio(&self) -> f64 {
        approved_ratio(self.proposal)
    }

    pub fn refused_ratio(&self) -> f64 {
        refused_ratio(self.proposal)
    }

    pub fn view(&self) -> VoteResultsView {
        let total = self.proposal.total();
        let disabled = self.is_disabled();
        VoteResultsView {
            yes: VoteOptionView {
                label: "Yes",
                value: "yes",
                checked: self.has_voted == VoteChoice::Approved,
                disabled,
                bar: ProgressBar::new(self.proposal.tot_approved, total),
            },
            no: VoteOptionView {
                label: "No",
                value: "no",
                checked: self.has_voted == VoteChoice::Refused,
                disabled,
                bar: ProgressBar::new(self.proposal.tot_refused, total).dark(),
            },
        }
    }

    /// Forward a click to `handler`, refusing it while the controls are disabled
    pub fn select(&self, side: VoteSide, handler: &mut dyn VoteHandler) -> DashboardResult<()> {
        if !self.session.is_connected() {
            return Err(VoteDisabled::new("No account connected").into());
        }
        if self.has_voted.is_recorded() {
            return Err(VoteDisabled::with_recorded(
                "A vote is already recorded for this account",
                self.has_voted.to_string(),
            )
            .into());
        }

        debug!(?side, "Vote selected");
        match side {
            VoteSide::Yes => handler.on_click_yes(),
            VoteSide::No => handler.on_click_no(),
        }
        Ok(())
    }

    /// Two lines, one per control: radio, label and tally bar
    pub fn render(&self, renderer: &dyn ProgressRenderer) -> String {
        let view = self.view();
        [&view.yes, &view.no]
            .iter()
            .map(|option| {
                let radio = if option.checked { "(•)" } else { "( )" };
                let label = format!("{} {:<3}", radio, option.label);
                let label = if option.disabled {
                    style(label).dim().to_string()
                } else {
                    label
                };
                format!("{}  {}", label, renderer.render_progress(&option.bar))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TerminalProgressRenderer;
    use crate::session::Account;

    #[derive(Default)]
    struct Recorder {
        clicks: Vec<VoteSide>,
    }

    impl VoteHandler for Recorder {
        fn on_click_yes(&mut self) {
            self.clicks.push(VoteSide::Yes);
        }
        fn on_click_no(&mut self) {
            self.clicks.push(VoteSide::No);
        }
    }

    fn connected() -> AccountSession {
        AccountSession::with_account(Account::new("alice").unwrap())
    }

    #[test]
    fn test_ratios() {
        let data = ProposalVoteData::new(30.0, 10.0);
        assert_eq!(approved_ratio(&data), 0.75);
        assert_eq!(refused_ratio(&data), 0.25);

        let empty = ProposalVoteData::new(0.0, 0.0);
        assert_eq!(approved_ratio(&empty), 0.0);
        assert_eq!(refused_ratio(&empty), 0.0);
    }

    #[test]
    fn test_checked_follows_choice() {
        let data = ProposalVoteData::new(1.0, 1.0);
        let session = connected();

        let view = VoteResultsContainer::new(&data, VoteChoice::Approved, &session).view();
        assert!(view.yes.checked && !view.no.checked);

        let view = VoteResultsContainer::new(&data, VoteChoice::Refused, &session).view();
        assert!(!view.yes.checked && view.no.checked);

        let view = VoteResultsContainer::new(&data, VoteChoice::Unset, &session).view();
        assert!(!view.yes.checked && !view.no.checked);
        assert!(!view.yes.disabled);
    }

    #[test]
    fn test_disabled_without_account_or_after_vote() {
        let data = ProposalVoteData::new(1.0, 1.0);
        let anonymous = AccountSession::new();
        let mut recorder = Recorder::default();

        let container = VoteResultsContainer::new(&data, VoteChoice::Unset, &anonymous);
        assert!(container.view().yes.disabled);
        assert!(container.select(VoteSide::Yes, &mut recorder).is_err());

        let session = connected();
        let container = VoteResultsContainer::new(&data, VoteChoice::Approved, &session);
        assert!(container.view().no.disabled);
        assert!(container.select(VoteSide::No, &mut recorder).is_err());
        assert!(recorder.clicks.is_empty());
    }

    #[test]
    fn test_select_fires_callback() {
        let data = ProposalVoteData::new(1.0, 1.0);
        let session = connected();
        let mut recorder = Recorder::default();
        let container = VoteResultsContainer::new(&data, VoteChoice::Unset, &session);

        container.select(VoteSide::No, &mut recorder).unwrap();
        container.select(VoteSide::Yes, &mut recorder).unwrap();
        assert_eq!(recorder.clicks, vec![VoteSide::No, VoteSide::Yes]);
    }

    #[test]
    fn test_render_lines() {
        let data = ProposalVoteData::new(3.0, 1.0);
        let session = connected();
        let container = VoteResultsContainer::new(&data, VoteChoice::Approved, &session);
        let out = container.render(&TerminalProgressRenderer::new(8));
        let plain = console::strip_ansi_codes(&out).to_string();
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("(•) Yes"));
        assert!(lines[0].ends_with("75.00%"));
        assert!(lines[1].ends_with("25.00%"));
    }
}
