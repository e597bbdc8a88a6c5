use std::thread;
use std::time::Duration;

use floating_controller::prelude::*;

fn main() -> Result<(), calloop::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // A phone-sized screen with a notch and a home indicator
    let controller = Controller::new(
        ControllerConfig::default(),
        Viewport::new(390.0, 844.0),
        SafeInsets::all(0.0).top(47.0).bottom(34.0),
    )
    .on_press(|| log::info!("back pressed"));

    let home = controller.position();
    let event_loop = ControllerLoop::new(controller)?;
    let input = event_loop.sender();

    let script = thread::spawn(move || {
        let frame = Duration::from_millis(16);
        let (mut x, mut y) = (home.x + 20.0, home.y + 20.0);

        // Tap
        let _ = input.send(InputEvent::Pointer(PointerEvent::Down { x, y }));
        thread::sleep(frame * 4);
        let _ = input.send(InputEvent::Pointer(PointerEvent::Up { x, y }));
        thread::sleep(Duration::from_millis(500));

        // Slow drag to the middle of the left half, released at rest
        let _ = input.send(InputEvent::Pointer(PointerEvent::Down { x, y }));
        for _ in 0..30 {
            thread::sleep(frame);
            x -= 8.0;
            y += 12.0;
            let _ = input.send(InputEvent::Pointer(PointerEvent::Move { x, y }));
        }
        thread::sleep(Duration::from_millis(200));
        let _ = input.send(InputEvent::Pointer(PointerEvent::Up { x, y }));
        thread::sleep(Duration::from_millis(500));

        // Rotate
        let _ = input.send(InputEvent::Viewport(Viewport::new(844.0, 390.0)));
        let _ = input.send(InputEvent::Insets(SafeInsets::all(0.0).left(47.0).right(47.0)));

        // Stay untouched long enough to dim
        thread::sleep(Duration::from_millis(4000));
    });

    let controller = event_loop.run()?;
    let _ = script.join();

    let position = controller.position();
    log::info!(
        "finished at ({}, {}) with opacity {}",
        position.x,
        position.y,
        controller.opacity()
    );
    Ok(())
}
