//! Window and GL-context bring-up shared by every tutorial binary.

use glutin::event_loop::EventLoop;
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Builds a window with a current OpenGL 3.3 core context and loads the GL
/// function pointers from it.
///
/// Panics if the window or context cannot be created; without them none of
/// the tutorial programs has anything left to do.
pub fn build_context(title: &str, events: &EventLoop<()>) -> WindowedContext<PossiblyCurrent> {
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(glutin::dpi::LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

    let context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(true)
        .build_windowed(window, events)
        .expect("could not create the GL window");

    let context = unsafe {
        context
            .make_current()
            .expect("could not make the GL context current")
    };

    gl::load_with(|s| context.get_proc_address(s) as *const std::ffi::c_void);

    context
}

/// Resizes both the swap chain and the GL viewport after a window resize.
/// The event loop already delivers the new size in physical pixels.
pub fn handle_resize(
    context: &WindowedContext<PossiblyCurrent>,
    size: glutin::dpi::PhysicalSize<u32>,
) {
    context.resize(size);

    unsafe {
        gl::Viewport(0, 0, size.width as i32, size.height as i32);
    }
}

#[cfg(test)]
mod tests {
    use glutin::dpi::{LogicalSize, PhysicalSize};

    #[test]
    fn default_window_size_scales_to_physical_pixels() {
        let logical: LogicalSize<f64> = LogicalSize::new(super::DEFAULT_WIDTH, super::DEFAULT_HEIGHT);
        let physical: PhysicalSize<u32> = logical.to_physical(2.0);

        assert_eq!(physical.width, 1600);
        assert_eq!(physical.height, 1200);
    }
}
