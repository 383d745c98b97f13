//! The uniforms tutorial: the shader sources are read from files on disk at
//! startup, and a color uniform is animated from the elapsed time every
//! frame.

use std::env;
use std::ffi::CString;
use std::fs;
use std::process;
use std::time::Instant;

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::error;

use alloy::app::{self, AppState};
use alloy::graphics::buffer::{self, VertexArray, VertexBuffer};
use alloy::graphics::driver::Gl;
use alloy::graphics::program::ShaderProgram;
use alloy::graphics::shader::{Shader, ShaderStage};
use alloy::graphics::window;

const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.0, 0.5, 0.0,
];

fn load_shader_source(relative_path: &str) -> String {
    let path = format!(
        "{}/{}",
        env::current_dir().unwrap().to_str().unwrap(),
        relative_path
    );

    match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            error!("could not read shader source {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let vertex_source = load_shader_source("src/graphics/shaders/uniform_color.vert");
    let fragment_source = load_shader_source("src/graphics/shaders/uniform_color.frag");

    let events = EventLoop::new();
    let context = window::build_context("Learn OpenGL", &events);
    let mut driver = Gl;

    unsafe {
        gl::Viewport(
            0,
            0,
            window::DEFAULT_WIDTH as i32,
            window::DEFAULT_HEIGHT as i32,
        );
        gl::ClearColor(0.0, 0.0, 0.0, 1.0);
    }

    let mut vertex_shader = Shader::new(ShaderStage::Vertex, &vertex_source, "uniform_vertex_shader");
    let mut fragment_shader = Shader::new(
        ShaderStage::Fragment,
        &fragment_source,
        "uniform_fragment_shader",
    );

    if let Err(e) = vertex_shader.compile(&mut driver) {
        error!("{}", e);
    }
    if let Err(e) = fragment_shader.compile(&mut driver) {
        error!("{}", e);
    }

    let mut program = ShaderProgram::new("uniform_color_program");
    if let Err(e) = program.link(&mut driver, vertex_shader.id(), fragment_shader.id()) {
        error!("{}", e);
    }

    vertex_shader.destroy(&mut driver);
    fragment_shader.destroy(&mut driver);

    let vao = VertexArray::new();
    vao.bind();
    let _vbo = VertexBuffer::with_data(&TRIANGLE_VERTICES);
    buffer::set_vertex_attrib(0, 3, 3, 0);
    buffer::unbind_array_buffer();

    let color_name = CString::new("our_color").unwrap();
    let color_location =
        unsafe { gl::GetUniformLocation(program.id().as_raw(), color_name.as_ptr()) };

    let started = Instant::now();
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
                let elapsed = started.elapsed().as_secs_f32();
                let green = elapsed.sin() / 2.0 + 0.5;

                unsafe {
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                }
                program.activate(&mut driver);
                unsafe {
                    gl::Uniform4f(color_location, 0.0, green, 0.0, 1.0);
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
