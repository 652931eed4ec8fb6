pub mod answer;
pub mod interaction;
