/// Time easing curves.
pub mod ease;
