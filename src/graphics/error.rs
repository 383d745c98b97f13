use thiserror::Error;

/// A driver-reported failure while building a shader program.
///
/// Neither failure is fatal to the process: the handle involved stays
/// allocated (just unusable), and the caller decides whether to log the
/// error and carry on or bail out. The tutorial binaries log and continue,
/// which shows up on screen as nothing being drawn.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("unable to compile shader {name}\nerror: {log}")]
    Compile { name: String, log: String },

    #[error("unable to link program {name}\nerror: {log}")]
    Link { name: String, log: String },
}

impl ShaderError {
    /// The debug name of the shader or program that failed.
    pub fn name(&self) -> &str {
        match self {
            ShaderError::Compile { name, .. } | ShaderError::Link { name, .. } => name,
        }
    }

    /// The driver's info log for the failure.
    pub fn log(&self) -> &str {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log, .. } => log,
        }
    }
}
