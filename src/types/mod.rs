pub mod chart;
pub mod pair;
pub mod proposal_vote;
pub mod token;
pub mod volume;

pub use chart::ChartSegment;
pub use pair::PairRecord;
pub use proposal_vote::{ProposalVoteData, VoteChoice};
pub use token::{TokenRecord, TokenRow};
pub use volume::{DailyVolume, VolumeDataset, VolumeEntry};
