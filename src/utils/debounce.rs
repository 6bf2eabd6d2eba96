use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Calls `callback` once the window has stopped resizing for `delay_ms`.
/// Returns `None` without a window; dropping the listener unregisters it.
pub fn create_debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a Timeout cancels it
        pending.borrow_mut().take();

        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
