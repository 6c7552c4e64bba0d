use glow::HasContext;

use crate::abs::App;
use crate::demo::Demo;

mod abs;
mod demo;
mod shapes;

fn setup_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .expect("logger initialized twice");
}

fn main() {
    setup_logger();

    let mut app = match App::new("Flat Shapes", 600, 600) {
        Ok(app) => app,
        Err(e) => {
            log::error!("failed to create window: {e}");
            std::process::exit(1);
        }
    };

    let mut demo = match Demo::new(&app.gl) {
        Ok(demo) => demo,
        Err(e) => {
            log::error!("failed to initialize rendering: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "showing {:?}; press keys 1-4 to switch shapes",
        demo.current_shape()
    );

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => {
                    demo.on_resize(&app.gl, width, height);
                }
                sdl2::event::Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    demo.on_key_press(keycode);
                }
                _ => {}
            }
        }

        unsafe {
            app.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        demo.draw(&app.gl);
        app.window.gl_swap_window();
    }
}
