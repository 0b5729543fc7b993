//! Better Ball Caddie - on-course advisor for two-player better-ball golf
//!
//! Shots are logged as letter grades; the advisor turns the hole state into
//! an attack/anchor recommendation with the rules that produced it.

pub mod advisor;
pub mod command;
pub mod core;
pub mod course;
pub mod session;
