//! Word lists: line validation, reference-set loading and intersection counting.
//!
//! Loading and counting share one validation rule and one line splitter, so a
//! word means the same thing on both sides of the comparison. The reference
//! set deduplicates at load time; the candidate stream deduplicates while it
//! is counted.

mod alphabet;
mod count;
mod lines;
mod load;

pub use alphabet::{is_valid_word, is_word_char};
pub use count::count_shared;
pub use lines::Lines;
pub use load::{load_word_set, WordSet};
