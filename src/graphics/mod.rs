//! A simple set of wrappers around the OpenGL API.
//!
//! All any of the tutorial programs do is compile two shaders, link them into
//! a program, upload a handful of vertices, and redraw the same shape every
//! frame. That is still a surprising number of cryptic, unsafe driver calls,
//! so this module wraps them in a small safe interface instead of scattering
//! `unsafe` blocks through every binary.
//!
//! The one deliberate piece of structure is [`driver::GlDriver`]: the shader
//! and program types never call the driver directly, they go through that
//! trait. The real implementation ([`driver::Gl`]) is a direct translation to
//! `gl::*` calls; the tests substitute a scripted driver so the compile/link
//! lifecycle can be exercised without creating a GL context.
//!
//! If any of this is unfamiliar, [Learn OpenGL](https://learnopengl.com/) is
//! the canonical set of tutorials these programs follow.

pub mod buffer;
pub mod driver;
pub mod error;
pub mod program;
pub mod shader;
pub mod window;
