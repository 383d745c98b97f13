//! The capability interface between the shader wrappers and the GL driver.

use std::ffi::CString;
use std::ptr::{null, null_mut};

use gl::types::*;

use super::shader::ShaderStage;

/// Identifier of a driver-side shader object.
///
/// A plain `Copy` value: holding one of these names a shader object but never
/// owns it. Deleting the object is the prerogative of whoever created the
/// [`Shader`](super::shader::Shader) it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShaderId(pub(crate) GLuint);

impl ShaderId {
    /// The zero id, held before a shader has been compiled. Deleting it is a
    /// driver-level no-op.
    pub const NONE: ShaderId = ShaderId(0);

    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Identifier of a driver-side program object. Same non-owning semantics as
/// [`ShaderId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgramId(pub(crate) GLuint);

impl ProgramId {
    pub const NONE: ProgramId = ProgramId(0);

    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// The set of driver operations the shader-compilation pipeline needs.
///
/// [`Shader`](super::shader::Shader) and
/// [`ShaderProgram`](super::program::ShaderProgram) only ever talk to the
/// driver through this trait, so any binding that can allocate, compile, and
/// link shader objects satisfies it. [`Gl`] is the real one.
pub trait GlDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId;
    fn shader_source(&mut self, shader: ShaderId, source: &str);
    fn compile_shader(&mut self, shader: ShaderId);
    fn compile_status(&mut self, shader: ShaderId) -> bool;
    fn shader_info_log(&mut self, shader: ShaderId) -> String;
    fn delete_shader(&mut self, shader: ShaderId);

    fn create_program(&mut self) -> ProgramId;
    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId);
    fn link_program(&mut self, program: ProgramId);
    fn link_status(&mut self, program: ProgramId) -> bool;
    fn program_info_log(&mut self, program: ProgramId) -> String;
    fn use_program(&mut self, program: ProgramId);
    fn delete_program(&mut self, program: ProgramId);
}

/// The loaded OpenGL driver. Every method is a direct blocking call into the
/// current context, so one of these must only be used after `gl::load_with`
/// has run on the context's thread.
pub struct Gl;

impl GlDriver for Gl {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderId {
        ShaderId(unsafe { gl::CreateShader(stage.gl_enum()) })
    }

    fn shader_source(&mut self, shader: ShaderId, source: &str) {
        // An interior NUL would truncate the source, but GLSL text never
        // contains one.
        let source = unsafe { CString::from_vec_unchecked(source.as_bytes().to_vec()) };
        unsafe {
            gl::ShaderSource(shader.0, 1, &source.as_ptr(), null());
        }
    }

    fn compile_shader(&mut self, shader: ShaderId) {
        unsafe {
            gl::CompileShader(shader.0);
        }
    }

    fn compile_status(&mut self, shader: ShaderId) -> bool {
        let mut success: GLint = 1;
        unsafe {
            gl::GetShaderiv(shader.0, gl::COMPILE_STATUS, &mut success);
        }
        success != 0
    }

    fn shader_info_log(&mut self, shader: ShaderId) -> String {
        let mut len: GLint = 0;
        unsafe {
            gl::GetShaderiv(shader.0, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = whitespace_cstring(len as usize);
        unsafe {
            gl::GetShaderInfoLog(shader.0, len, null_mut(), log.as_ptr() as *mut GLchar);
        }

        log.to_string_lossy().into_owned()
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        unsafe {
            gl::DeleteShader(shader.0);
        }
    }

    fn create_program(&mut self) -> ProgramId {
        ProgramId(unsafe { gl::CreateProgram() })
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        unsafe {
            gl::AttachShader(program.0, shader.0);
        }
    }

    fn link_program(&mut self, program: ProgramId) {
        unsafe {
            gl::LinkProgram(program.0);
        }
    }

    fn link_status(&mut self, program: ProgramId) -> bool {
        let mut success: GLint = 1;
        unsafe {
            gl::GetProgramiv(program.0, gl::LINK_STATUS, &mut success);
        }
        success != 0
    }

    fn program_info_log(&mut self, program: ProgramId) -> String {
        let mut len: GLint = 0;
        unsafe {
            gl::GetProgramiv(program.0, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = whitespace_cstring(len as usize);
        unsafe {
            gl::GetProgramInfoLog(program.0, len, null_mut(), log.as_ptr() as *mut GLchar);
        }

        log.to_string_lossy().into_owned()
    }

    fn use_program(&mut self, program: ProgramId) {
        unsafe {
            gl::UseProgram(program.0);
        }
    }

    fn delete_program(&mut self, program: ProgramId) {
        unsafe {
            gl::DeleteProgram(program.0);
        }
    }
}

/// A space-filled CString of the given length, used as a writable buffer for
/// the driver's info logs.
fn whitespace_cstring(len: usize) -> CString {
    let mut buf: Vec<u8> = Vec::with_capacity(len + 1);
    buf.extend([b' '].iter().cycle().take(len));
    unsafe { CString::from_vec_unchecked(buf) }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted driver so the compile/link lifecycle can be tested without
    //! a GL context. Compilation succeeds for any source that carries a
    //! `#version` line; linking succeeds when exactly one compiled vertex
    //! stage and one compiled fragment stage are attached.

    use std::collections::HashMap;

    use super::{GlDriver, ProgramId, ShaderId};
    use crate::graphics::shader::ShaderStage;

    pub struct FakeDriver {
        next_id: u32,
        stages: HashMap<u32, ShaderStage>,
        sources: HashMap<u32, String>,
        attached: HashMap<u32, Vec<u32>>,
        pub active_program: Option<ProgramId>,
        pub deleted_shaders: Vec<u32>,
        pub deleted_programs: Vec<u32>,
    }

    impl FakeDriver {
        pub fn new() -> Self {
            FakeDriver {
                next_id: 1,
                stages: HashMap::new(),
                sources: HashMap::new(),
                attached: HashMap::new(),
                active_program: None,
                deleted_shaders: Vec::new(),
                deleted_programs: Vec::new(),
            }
        }

        fn compiles(&self, shader: u32) -> bool {
            self.sources
                .get(&shader)
                .map_or(false, |src| src.starts_with("#version"))
        }
    }

    impl GlDriver for FakeDriver {
        fn create_shader(&mut self, stage: ShaderStage) -> ShaderId {
            let id = self.next_id;
            self.next_id += 1;
            self.stages.insert(id, stage);
            ShaderId(id)
        }

        fn shader_source(&mut self, shader: ShaderId, source: &str) {
            self.sources.insert(shader.0, source.to_owned());
        }

        fn compile_shader(&mut self, _shader: ShaderId) {}

        fn compile_status(&mut self, shader: ShaderId) -> bool {
            self.compiles(shader.0)
        }

        fn shader_info_log(&mut self, _shader: ShaderId) -> String {
            String::from("0:1(1): syntax error, unexpected token")
        }

        fn delete_shader(&mut self, shader: ShaderId) {
            // Deleting the zero id is a no-op at the driver level.
            if shader.0 != 0 {
                self.deleted_shaders.push(shader.0);
            }
        }

        fn create_program(&mut self) -> ProgramId {
            let id = self.next_id;
            self.next_id += 1;
            self.attached.insert(id, Vec::new());
            ProgramId(id)
        }

        fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
            self.attached.entry(program.0).or_default().push(shader.0);
        }

        fn link_program(&mut self, _program: ProgramId) {}

        fn link_status(&mut self, program: ProgramId) -> bool {
            let attached = match self.attached.get(&program.0) {
                Some(shaders) => shaders.clone(),
                None => return false,
            };

            let mut vertex = 0;
            let mut fragment = 0;
            for shader in attached {
                if !self.compiles(shader) {
                    return false;
                }
                match self.stages.get(&shader) {
                    Some(ShaderStage::Vertex) => vertex += 1,
                    Some(ShaderStage::Fragment) => fragment += 1,
                    None => return false,
                }
            }

            vertex == 1 && fragment == 1
        }

        fn program_info_log(&mut self, _program: ProgramId) -> String {
            String::from("program lacks a compiled vertex/fragment pair")
        }

        fn use_program(&mut self, program: ProgramId) {
            self.active_program = Some(program);
        }

        fn delete_program(&mut self, program: ProgramId) {
            if program.0 != 0 {
                self.deleted_programs.push(program.0);
            }
        }
    }
}
