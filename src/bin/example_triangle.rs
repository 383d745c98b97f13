//! The example program the asset embedding was built for: the default
//! shaders are compiled into the executable, vertices carry position,
//! texture coordinates, and an RGBA color, and an orthographic projection
//! sized from the framebuffer is uploaded every frame so positions are in
//! pixels.

use std::ffi::{c_void, CString};
use std::mem::size_of;
use std::ptr::null;

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::error;

use alloy::app::{self, AppState};
use alloy::assets;
use alloy::graphics::buffer::{VertexArray, VertexBuffer};
use alloy::graphics::driver::Gl;
use alloy::graphics::program::ShaderProgram;
use alloy::graphics::shader::{Shader, ShaderStage};
use alloy::graphics::window;

/// Standard representation of a vertex. The layout must match the attribute
/// declarations in `default.vert`.
#[repr(C)]
struct Vertex {
    pos: [f32; 2],
    uv: [f32; 2],
    color: [u8; 4],
}

const TRIANGLE: [Vertex; 3] = [
    Vertex {
        pos: [50.0, 50.0],
        uv: [0.0, 0.0],
        color: [0, 0, 255, 255],
    },
    Vertex {
        pos: [50.0, 100.0],
        uv: [0.0, 0.0],
        color: [0, 255, 0, 255],
    },
    Vertex {
        pos: [100.0, 100.0],
        uv: [0.0, 0.0],
        color: [255, 0, 0, 255],
    },
];

/// Column-major orthographic projection mapping pixel coordinates (origin at
/// the top left) onto clip space.
fn ortho(width: f32, height: f32) -> [f32; 16] {
    let (left, right) = (0.0, width);
    let (top, bottom) = (0.0, height);

    [
        2.0 / (right - left),
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / (top - bottom),
        0.0,
        0.0,
        0.0,
        0.0,
        -1.0,
        0.0,
        -((right + left) / (right - left)),
        -((top + bottom) / (top - bottom)),
        0.0,
        1.0,
    ]
}

fn main() {
    env_logger::init();

    let events = EventLoop::new();
    let context = window::build_context("Learn OpenGL", &events);
    let mut driver = Gl;

    let mut vertex_shader = Shader::new(
        ShaderStage::Vertex,
        &assets::DEFAULT_VERTEX_SHADER.source(),
        "default_vertex_shader",
    );
    let mut fragment_shader = Shader::new(
        ShaderStage::Fragment,
        &assets::DEFAULT_FRAGMENT_SHADER.source(),
        "default_fragment_shader",
    );

    if let Err(e) = vertex_shader.compile(&mut driver) {
        error!("{}", e);
    }
    if let Err(e) = fragment_shader.compile(&mut driver) {
        error!("{}", e);
    }

    let mut program = ShaderProgram::new("default_shader_program");
    if let Err(e) = program.link(&mut driver, vertex_shader.id(), fragment_shader.id()) {
        error!("{}", e);
    }

    program.activate(&mut driver);

    unsafe {
        gl::ClearColor(0.66, 0.66, 0.33, 1.0);
    }

    let vao = VertexArray::new();
    vao.bind();
    let vbo = VertexBuffer::generate();
    vbo.bind();

    // Tell the driver the layout of `Vertex`; offsets and stride are in
    // bytes here because the color attribute is not a float.
    let stride = size_of::<Vertex>() as i32;
    let uv_offset = size_of::<[f32; 2]>();
    let color_offset = 2 * size_of::<[f32; 2]>();
    unsafe {
        gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, stride, null());
        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(1, 2, gl::FLOAT, gl::FALSE, stride, uv_offset as *const c_void);
        gl::EnableVertexAttribArray(1);
        gl::VertexAttribPointer(
            2,
            4,
            gl::UNSIGNED_BYTE,
            gl::TRUE,
            stride,
            color_offset as *const c_void,
        );
        gl::EnableVertexAttribArray(2);

        gl::BufferData(
            gl::ARRAY_BUFFER,
            (TRIANGLE.len() * size_of::<Vertex>()) as isize,
            TRIANGLE.as_ptr() as *const c_void,
            gl::STREAM_DRAW,
        );
    }

    let proj_name = CString::new("our_proj").unwrap();
    let proj_location = unsafe { gl::GetUniformLocation(program.id().as_raw(), proj_name.as_ptr()) };

    let mut state = AppState::new();

    events.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    window::handle_resize(&context, size);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    app::handle_key(&mut state, input.state, input.virtual_keycode);
                    if state.quit_requested {
                        *control_flow = ControlFlow::Exit;
                    }
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },
            Event::RedrawRequested(_) => {
                // The framebuffer size in physical pixels drives both the
                // viewport and the projection.
                let size = context.window().inner_size();

                unsafe {
                    gl::Viewport(0, 0, size.width as i32, size.height as i32);
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                }

                program.activate(&mut driver);
                let proj = ortho(size.width as f32, size.height as f32);
                unsafe {
                    gl::UniformMatrix4fv(proj_location, 1, gl::FALSE, proj.as_ptr());
                }
                vao.bind();
                unsafe {
                    gl::DrawArrays(gl::TRIANGLES, 0, 3);
                }

                context.swap_buffers().unwrap();
            }
            Event::MainEventsCleared => {
                context.window().request_redraw();
            }
            _ => {}
        }
    })
}
