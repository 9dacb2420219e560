//! Shared consensus state for ADMM iterations.
//!
//! The consensus vector z is the globally-averaged value each term's local
//! variables are pulled toward. Terms read it during the projection phase;
//! the driver writes it during the consensus-update phase. Those two phases
//! must not overlap, and the API encodes that: reads go through `&self`,
//! writes through `&mut self`.

mod state;

pub use self::state::ConsensusState;
