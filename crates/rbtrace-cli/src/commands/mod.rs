pub mod output;
pub mod run;
pub mod script;
