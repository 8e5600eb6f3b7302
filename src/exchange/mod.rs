mod advisor;
mod score;
mod suggestion;

pub use advisor::{suggest_exchanges, ExchangeOptions};
pub use suggestion::Suggestion;
