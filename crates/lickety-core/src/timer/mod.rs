mod session;
mod ticker;

pub use session::{SessionStatus, TimerSession};
pub use ticker::Ticker;
