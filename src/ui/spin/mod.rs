mod driver;
mod intent;
mod reducer;
mod state;

pub use driver::{SpinDriver, SpinError};
pub use intent::SpinIntent;
pub use reducer::SpinReducer;
pub use state::{SpinState, REROLL_BANNER};
