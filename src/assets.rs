//! Shader sources compiled into the binary.
//!
//! The programs that don't read shader text from disk get it from here
//! instead: each constant is a GLSL file baked in at build time with
//! `include_bytes!`. An [`Asset`] offers the bytes two ways, as a borrow of
//! the embedded data and as a fresh owned copy.

use std::borrow::Cow;

/// A named blob of data embedded in the executable.
pub struct Asset {
    name: &'static str,
    bytes: &'static [u8],
}

impl Asset {
    pub const fn new(name: &'static str, bytes: &'static [u8]) -> Self {
        Asset { name, bytes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The embedded bytes, borrowed for the life of the program.
    pub fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A fresh owned copy of the embedded bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// The embedded bytes viewed as shader source text.
    pub fn source(&self) -> Cow<'static, str> {
        String::from_utf8_lossy(self.bytes)
    }
}

macro_rules! shader_asset {
    ($name:literal) => {
        Asset::new(
            $name,
            include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/src/graphics/shaders/",
                $name
            )),
        )
    };
}

pub const DEFAULT_VERTEX_SHADER: Asset = shader_asset!("default.vert");
pub const DEFAULT_FRAGMENT_SHADER: Asset = shader_asset!("default.frag");
pub const TRIANGLE_VERTEX_SHADER: Asset = shader_asset!("triangle.vert");
pub const TRIANGLE_FRAGMENT_SHADER: Asset = shader_asset!("triangle.frag");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shaders_are_nonempty_glsl() {
        for asset in &[
            DEFAULT_VERTEX_SHADER,
            DEFAULT_FRAGMENT_SHADER,
            TRIANGLE_VERTEX_SHADER,
            TRIANGLE_FRAGMENT_SHADER,
        ] {
            assert!(!asset.is_empty(), "{} is empty", asset.name());
            assert!(
                asset.source().starts_with("#version"),
                "{} is missing a #version line",
                asset.name()
            );
        }
    }

    #[test]
    fn copy_matches_the_embedded_bytes() {
        let copy = TRIANGLE_VERTEX_SHADER.to_vec();

        assert_eq!(copy.len(), TRIANGLE_VERTEX_SHADER.len());
        assert_eq!(copy.as_slice(), TRIANGLE_VERTEX_SHADER.bytes());
    }
}
