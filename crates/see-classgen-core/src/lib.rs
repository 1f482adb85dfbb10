//! Core library for see-classgen.
//!
//! Generates the boilerplate `.h`/`.c` pair for a new class of the see-object C
//! framework, where classes are structs that embed their parent and carry a table of
//! function pointers.
//!
//! - [`naming`] derives the C spellings (`SeeStack`, `see_stack`, `SEE_STACK`, `stack`)
//! - [`templates`] renders the embedded Handlebars templates in strict mode
//! - [`generate`] plans the files for one class; [`files`] writes them without clobbering
//! - [`config`] loads optional defaults from `see-classgen.json`

pub mod config;
pub mod error;
pub mod files;
pub mod generate;
pub mod naming;
pub mod templates;
