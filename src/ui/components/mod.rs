pub mod answer_card;
pub mod conclusion;
pub mod presentation;
pub mod progress_bar;
pub mod quiz_card;
