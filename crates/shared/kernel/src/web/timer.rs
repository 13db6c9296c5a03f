use crate::KernelError;
use crate::scheduler::{Scheduler, Tick};
use crate::web::{JsResultExt, window};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// [`Scheduler`] backed by `window.setTimeout` / `window.setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

fn millis(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Result<(), KernelError> {
        let callback = Closure::once_into_js(move || task());
        window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay_ms),
            )
            .dom_context("setTimeout")?;
        Ok(())
    }

    fn interval(
        &self,
        period_ms: u32,
        mut task: Box<dyn FnMut() -> Tick>,
    ) -> Result<(), KernelError> {
        let window = window()?;
        let handle = Rc::new(Cell::new(None::<i32>));

        let callback = Closure::<dyn FnMut()>::new({
            let handle = Rc::clone(&handle);
            let window = window.clone();
            move || {
                if task() == Tick::Stop {
                    if let Some(id) = handle.take() {
                        window.clear_interval_with_handle(id);
                    }
                }
            }
        });

        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period_ms),
            )
            .dom_context("setInterval")?;
        handle.set(Some(id));
        callback.forget();
        Ok(())
    }
}
