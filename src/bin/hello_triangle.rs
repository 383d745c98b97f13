//! The "hello triangle" tutorial plus its exercise variants: a fixed shape
//! redrawn every frame, with escape to quit, `W` to toggle wireframe mode,
//! and space to switch between the triangle and the rectangle.

use std::ptr::null;

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::error;

use alloy::app::{self, AppState, Shape};
use alloy::assets;
use alloy::graphics::buffer::{self, ElementBuffer, VertexArray, VertexBuffer};
use alloy::graphics::driver::Gl;
use alloy::graphics::program::ShaderProgram;
use alloy::graphics::shader::{Shader, ShaderStage};
use alloy::graphics::window;

const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    0.0, 0.5, 0.0,
];

const RECTANGLE_VERTICES: [f32; 12] = [
    0.5, 0.5, 0.0, //
    0.5, -0.5, 0.0, //
    -0.5, -0.5, 0.0, //
    -0.5, 0.5, 0.0,
];

const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3, //
    1, 2, 3,
];

fn render(
    state: &AppState,
    driver: &mut Gl,
    program: &ShaderProgram,
    triangle: &VertexArray,
    rectangle: &VertexArray,
) {
    unsafe {
        gl::PolygonMode(
            gl::FRONT_AND_BACK,
            if state.wireframe { gl::LINE } else { gl::FILL },
        );
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }

    program.activate(driver);

    match state.shape {
        Shape::Triangle => {
            triangle.bind();
            unsafe {
                gl::DrawArrays(gl::TRIANGLES, 0, 3);
            }
        }
        Shape::Rectangle => {
            rectangle.bind();
            unsafe {
                gl::DrawElements(gl::TRIANGLES, 6, gl::UNSIGNED_INT, null());
            }
        }
    }
}

fn main() {
    env_logger::init();

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
        gl::ClearColor(0.0, 0.9, 0.5, 1.0);
    }

    // Build the shader program. A compile or link failure is logged and the
    // program keeps running with nothing drawn, so the driver's message
    // stays on screen in the terminal.
    let mut vertex_shader = Shader::new(
        ShaderStage::Vertex,
        &assets::TRIANGLE_VERTEX_SHADER.source(),
        "triangle_vertex_shader",
    );
    let mut fragment_shader = Shader::new(
        ShaderStage::Fragment,
        &assets::TRIANGLE_FRAGMENT_SHADER.source(),
        "triangle_fragment_shader",
    );

    if let Err(e) = vertex_shader.compile(&mut driver) {
        error!("{}", e);
    }
    if let Err(e) = fragment_shader.compile(&mut driver) {
        error!("{}", e);
    }

    let mut program = ShaderProgram::new("triangle_program");
    if let Err(e) = program.link(&mut driver, vertex_shader.id(), fragment_shader.id()) {
        error!("{}", e);
    }

    // The stages aren't needed once the program holds them.
    vertex_shader.destroy(&mut driver);
    fragment_shader.destroy(&mut driver);

    let triangle_vao = VertexArray::new();
    triangle_vao.bind();
    let _triangle_vbo = VertexBuffer::with_data(&TRIANGLE_VERTICES);
    buffer::set_vertex_attrib(0, 3, 3, 0);

    let rectangle_vao = VertexArray::new();
    rectangle_vao.bind();
    let _rectangle_vbo = VertexBuffer::with_data(&RECTANGLE_VERTICES);
    let _rectangle_ebo = ElementBuffer::with_data(&RECTANGLE_INDICES);
    buffer::set_vertex_attrib(0, 3, 3, 0);

    buffer::unbind_array_buffer();

    let mut state = AppState::new();

    events.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    window::handle_resize(&context, size);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    app::handle_key(&mut state, input.state, input.virtual_keycode);
                    if state.quit_requested {
                        *control_flow = ControlFlow::Exit;
                    } else {
                        context.window().request_redraw();
                    }
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },
            Event::RedrawRequested(_) => {
                render(&state, &mut driver, &program, &triangle_vao, &rectangle_vao);
                context.swap_buffers().unwrap();
            }
            _ => {}
        }
    })
}
