//! A set of small OpenGL learning programs and the library they share.
//!
//! The interesting part lives in [`graphics`]: a thin, safe layer over the
//! raw GL calls needed to compile a pair of shaders, link them into a
//! program, and hand that program to the draw loop. Everything else is
//! support material for the tutorial binaries under `src/bin/`: compiled-in
//! shader sources ([`assets`]) and the little application-state struct the
//! input handler and render step share ([`app`]).

pub mod app;
pub mod assets;
pub mod graphics;
