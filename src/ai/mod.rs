mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, SectionHeuristic};
pub use minimax::{MinimaxAgent, SearchResult, Searcher, DEFAULT_DEPTH};
pub use random::RandomAgent;
