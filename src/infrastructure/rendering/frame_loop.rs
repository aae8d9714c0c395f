use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::infrastructure::services::now_ms;

/// requestAnimationFrame loop that stops itself.
///
/// The callback receives the animation clock and returns whether another
/// frame is needed. `kick` restarts a stopped loop and is a no-op while one
/// is already scheduled.
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    on_frame: Rc<RefCell<dyn FnMut(f64) -> bool>>,
}

impl FrameLoop {
    pub fn new<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let on_frame: Rc<RefCell<dyn FnMut(f64) -> bool>> = Rc::new(RefCell::new(on_frame));
        Self { running: Rc::new(Cell::new(false)), on_frame }
    }

    pub fn kick(&self) {
        if self.running.replace(true) {
            return;
        }
        schedule(Rc::clone(&self.running), Rc::clone(&self.on_frame));
    }
}

fn schedule(running: Rc<Cell<bool>>, on_frame: Rc<RefCell<dyn FnMut(f64) -> bool>>) {
    leptos::request_animation_frame(move || {
        let keep_going = (on_frame.borrow_mut())(now_ms());
        if keep_going {
            schedule(running, on_frame);
        } else {
            running.set(false);
        }
    });
}
