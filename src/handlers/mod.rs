pub mod run;
pub mod list;
