pub mod run;
pub mod terminal;
