use gl::types::GLenum;

use super::driver::{GlDriver, ShaderId};
use super::error::ShaderError;

/// Which stage of the pipeline a shader compiles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

/// One compiled shader stage.
///
/// Construction stores the stage kind, source text, and a debug name without
/// touching the driver; [`compile`](Shader::compile) is the explicit step
/// that allocates and compiles the driver-side object. A `Shader` that was
/// never compiled holds [`ShaderId::NONE`] and can still be destroyed safely.
pub struct Shader {
    id: ShaderId,
    stage: ShaderStage,
    source: String,
    name: String,
}

impl Shader {
    pub fn new(stage: ShaderStage, source: &str, name: &str) -> Self {
        Shader {
            id: ShaderId::NONE,
            stage,
            source: source.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Allocates the driver-side shader object, submits the source, and
    /// compiles it.
    ///
    /// On a driver-reported failure the handle stays allocated (linking
    /// against it will fail) and the returned error carries this shader's
    /// debug name together with the driver's info log. Whether that is fatal
    /// is the caller's call.
    pub fn compile(&mut self, driver: &mut impl GlDriver) -> Result<(), ShaderError> {
        self.id = driver.create_shader(self.stage);
        driver.shader_source(self.id, &self.source);
        driver.compile_shader(self.id);

        if driver.compile_status(self.id) {
            Ok(())
        } else {
            Err(ShaderError::Compile {
                name: self.name.clone(),
                log: driver.shader_info_log(self.id),
            })
        }
    }

    /// Releases the driver-side object. Safe whether or not
    /// [`compile`](Shader::compile) ever ran or succeeded.
    pub fn destroy(&mut self, driver: &mut impl GlDriver) {
        driver.delete_shader(self.id);
        self.id = ShaderId::NONE;
    }

    pub fn id(&self) -> ShaderId {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::driver::testing::FakeDriver;

    const VALID_VERTEX: &str = "#version 330 core\nvoid main(){gl_Position=vec4(0);}";

    #[test]
    fn construction_performs_no_driver_calls() {
        let shader = Shader::new(ShaderStage::Vertex, VALID_VERTEX, "v");

        assert!(shader.id().is_none());
        assert_eq!(shader.stage(), ShaderStage::Vertex);
        assert_eq!(shader.source(), VALID_VERTEX);
        assert_eq!(shader.name(), "v");
    }

    #[test]
    fn compile_of_valid_source_allocates_a_usable_handle() {
        let mut driver = FakeDriver::new();
        let mut shader = Shader::new(ShaderStage::Vertex, VALID_VERTEX, "v");

        shader.compile(&mut driver).unwrap();

        assert!(!shader.id().is_none());
        assert_ne!(shader.id().as_raw(), 0);
    }

    #[test]
    fn compile_of_invalid_source_reports_the_debug_name() {
        let mut driver = FakeDriver::new();
        let mut shader = Shader::new(ShaderStage::Fragment, "not glsl", "f");

        let err = shader.compile(&mut driver).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("unable to compile shader f"));
        assert!(message.contains("error: "));
        assert_eq!(err.name(), "f");
        // The handle stays allocated even though compilation failed.
        assert!(!shader.id().is_none());
    }

    #[test]
    fn destroy_without_compile_is_safe() {
        let mut driver = FakeDriver::new();
        let mut shader = Shader::new(ShaderStage::Vertex, VALID_VERTEX, "v");

        shader.destroy(&mut driver);

        assert!(shader.id().is_none());
        assert!(driver.deleted_shaders.is_empty());
    }

    #[test]
    fn destroy_after_failed_compile_releases_the_handle() {
        let mut driver = FakeDriver::new();
        let mut shader = Shader::new(ShaderStage::Fragment, "not glsl", "f");

        let raw = match shader.compile(&mut driver) {
            Err(_) => shader.id().as_raw(),
            Ok(()) => panic!("compile of invalid source succeeded"),
        };
        shader.destroy(&mut driver);

        assert_eq!(driver.deleted_shaders, vec![raw]);
        assert!(shader.id().is_none());
    }
}
