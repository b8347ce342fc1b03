// HLT Directory: supervisor listing with controlled-vocabulary tagging
//
// This is the library root. Data flows one way:
//   vocabulary -> source rows -> classify -> directory -> output / web

pub mod classify;
pub mod config;
pub mod directory;
pub mod output;
pub mod source;
pub mod vocabulary;

#[cfg(feature = "web")]
pub mod web;
