//! IntersectionObserver wiring: visibility entering/leaving the viewport
//! drives each item's reveal target and the `is-visible` CSS side channel.

use crate::constants::INTERSECT_ID_ATTR;
use crate::scene::SceneHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn observe_media(host: &Rc<RefCell<SceneHost>>) -> anyhow::Result<()> {
    let callback = {
        let host = host.clone();
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(id) = entry
                        .target()
                        .get_attribute(INTERSECT_ID_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    host.borrow_mut().set_visibility(id, entry.is_intersecting());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>)
    };

    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("IntersectionObserver error: {:?}", e)))?;
    callback.forget();

    let elements = host.borrow().media_elements();
    for (index, element) in elements {
        element
            .set_attribute(INTERSECT_ID_ATTR, &index.to_string())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        observer.observe(&element);
    }

    Ok(())
}
