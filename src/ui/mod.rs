/// egui drawing code. Everything here reads [`crate::state::ViewerState`]
/// and only mutates it through its methods.
pub mod panels;
pub mod plot;
