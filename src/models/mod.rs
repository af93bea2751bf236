pub mod review_state;
pub mod sm2;

pub use review_state::ReviewState;
pub use sm2::{due_date_after, next_easiness_factor, transition, transition_with};
