pub mod domain;
pub mod modifier;
pub mod plot;
pub mod roller;
pub mod types;


pub use domain::{shape_name, Die, COPY_PASTE_SNIPPET, STANDARD_FACE_COUNTS};
pub use modifier::{modifier_for, modifier_table};
pub use plot::{Plotter, TextPlotter};
pub use roller::{Roller, SeededRoller, ThreadRngRoller};
pub use types::{DiceError, Face, RollRequest, RollResult};
