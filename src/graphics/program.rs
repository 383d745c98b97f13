use super::driver::{GlDriver, ProgramId, ShaderId};
use super::error::ShaderError;

/// A two-stage linked shader program.
///
/// Constructed with a debug name only; [`link`](ShaderProgram::link) is the
/// explicit step that allocates the driver-side program, attaches the two
/// already-compiled stages, and links them. The program stores the stage ids
/// purely for introspection: it never owns the originating [`Shader`]s, and
/// the caller is free to destroy them any time after linking (the driver
/// keeps an attached stage alive for as long as the program needs it).
///
/// [`Shader`]: super::shader::Shader
pub struct ShaderProgram {
    id: ProgramId,
    vertex_shader: ShaderId,
    fragment_shader: ShaderId,
    name: String,
}

impl ShaderProgram {
    pub fn new(name: &str) -> Self {
        ShaderProgram {
            id: ProgramId::NONE,
            vertex_shader: ShaderId::NONE,
            fragment_shader: ShaderId::NONE,
            name: name.to_owned(),
        }
    }

    /// Allocates the driver-side program, attaches both stages, and links.
    ///
    /// On a driver-reported failure the program handle stays allocated but
    /// activating it would make an unusable program current; the returned
    /// error carries this program's debug name and the driver's info log.
    /// There is no retry path: to relink, build a fresh `ShaderProgram`.
    pub fn link(
        &mut self,
        driver: &mut impl GlDriver,
        vertex_shader: ShaderId,
        fragment_shader: ShaderId,
    ) -> Result<(), ShaderError> {
        self.vertex_shader = vertex_shader;
        self.fragment_shader = fragment_shader;

        self.id = driver.create_program();
        driver.attach_shader(self.id, vertex_shader);
        driver.attach_shader(self.id, fragment_shader);
        driver.link_program(self.id);

        if driver.link_status(self.id) {
            Ok(())
        } else {
            Err(ShaderError::Link {
                name: self.name.clone(),
                log: driver.program_info_log(self.id),
            })
        }
    }

    /// Makes this program current for subsequent draw calls. Assumes a
    /// successful prior [`link`](ShaderProgram::link).
    pub fn activate(&self, driver: &mut impl GlDriver) {
        driver.use_program(self.id);
    }

    /// Releases the driver-side program. Safe whether or not
    /// [`link`](ShaderProgram::link) ever ran or succeeded; the attached
    /// stages are untouched.
    pub fn destroy(&mut self, driver: &mut impl GlDriver) {
        driver.delete_program(self.id);
        self.id = ProgramId::NONE;
    }

    pub fn id(&self) -> ProgramId {
        self.id
    }

    pub fn vertex_shader(&self) -> ShaderId {
        self.vertex_shader
    }

    pub fn fragment_shader(&self) -> ShaderId {
        self.fragment_shader
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
