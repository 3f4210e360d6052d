pub mod slots;

pub use slots::{descending_slot_labels, slot_from_click, slot_labels, start_of_week, week_axis};
