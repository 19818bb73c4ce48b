//! Proposal vote command.

use crate::cli::utils::{print_info, print_success, print_warning, resolve_config, select};
use crate::cli::Cli;
use crate::components::{VoteHandler, VoteResultsContainer, VoteSide};
use crate::render::TerminalProgressRenderer;
use crate::session::{Account, AccountSession};
use crate::types::{ProposalVoteData, VoteChoice};
use clap::{Args, ValueEnum};

/// Side picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VoteOption {
    Yes,
    No,
}

impl From<VoteOption> for VoteSide {
    fn from(option: VoteOption) -> Self {
        match option {
            VoteOption::Yes => VoteSide::Yes,
            VoteOption::No => VoteSide::No,
        }
    }
}

/// Show vote tallies and optionally cast a vote
#[derive(Args, Clone)]
pub struct VoteCommand {
    /// Approving weight
    #[arg(long, default_value_t = 0.0)]
    pub approved: f64,

    /// Refusing weight
    #[arg(long, default_value_t = 0.0)]
    pub refused: f64,

    /// Vote already recorded for the account (approved, refused)
    #[arg(long)]
    pub has_voted: Option<VoteChoice>,

    /// Connected account; without one the controls are disabled
    #[arg(short, long)]
    pub account: Option<String>,

    /// Cast a vote
    #[arg(long, value_enum, conflicts_with = "interactive")]
    pub choose: Option<VoteOption>,

    /// Pick the vote from a prompt
    #[arg(short, long)]
    pub interactive: bool,
}

/// Prints the chosen side
struct PrintingHandler;

impl VoteHandler for PrintingHandler {
    fn on_click_yes(&mut self) {
        print_success("Voted Yes");
    }

    fn on_click_no(&mut self) {
        print_success("Voted No");
    }
}

/// Execute the vote command
pub async fn execute(cmd: VoteCommand, cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;

    let mut session = AccountSession::new();
    if let Some(account) = &cmd.account {
        session.login(Account::new(account.as_str())?);
    }

    let proposal = ProposalVoteData::new(cmd.approved, cmd.refused);
    let container =
        VoteResultsContainer::new(&proposal, cmd.has_voted.unwrap_or_default(), &session);

    let renderer = TerminalProgressRenderer::new(config.display.progress_width);
    println!("{}", container.render(&renderer));

    let side = if cmd.interactive {
        if container.is_disabled() {
            print_warning("Voting is disabled for this account");
            return Ok(());
        }
        match select("Your vote", &["Yes", "No"]) {
            Some(0) => Some(VoteSide::Yes),
            Some(_) => Some(VoteSide::No),
            None => None,
        }
    } else {
        cmd.choose.map(VoteSide::from)
    };

    match side {
        Some(side) => container.select(side, &mut PrintingHandler)?,
        None if !session.is_connected() => print_info("Connect an account with --account to vote"),
        None => {}
    }

    Ok(())
}
