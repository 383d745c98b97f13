//! The first tutorial: open a window with a GL context and clear it to a
//! fixed color every frame. Escape closes the window.

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::info;

use alloy::app::{self, AppState};
use alloy::graphics::window;

fn main() {
    env_logger::init();
    info!("Hello, window!");

    let events = EventLoop::new();
    let context = window::build_context("Learn OpenGL", &events);

    unsafe {
        gl::Viewport(
            0,
            0,
            window::DEFAULT_WIDTH as i32,
            window::DEFAULT_HEIGHT as i32,
        );
        gl::ClearColor(0.0, 0.9, 0.5, 1.0);
    }

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
                    }
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },
            Event::RedrawRequested(_) => {
                unsafe {
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                }
                context.swap_buffers().unwrap();
            }
            _ => {}
        }
    })
}
