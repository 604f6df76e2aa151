pub mod progress_engine;
pub mod study_tracker;
