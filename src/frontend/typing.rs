use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::anim::{TypingAnimator, TYPED_TITLES, TYPE_START_DELAY_MS};

pub fn init(document: &Document, reduced_motion: bool) {
    let Some(element) = document.get_element_by_id("typed-title") else {
        return;
    };

    if reduced_motion {
        element.set_text_content(Some(TYPED_TITLES[0]));
        return;
    }

    spawn_local(async move {
        TimeoutFuture::new(TYPE_START_DELAY_MS).await;

        let mut animator = TypingAnimator::new(&TYPED_TITLES);
        loop {
            let frame = animator.tick();
            element.set_text_content(Some(&frame.text));
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });
}
