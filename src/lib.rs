pub mod cli;
pub mod commands;
pub mod generator;
pub mod interaction;
pub mod layout;
pub mod studio;
