use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, WebGl2RenderingContext, Window};

use crate::domain::errors::{PlatformError, SandboxResult};
use crate::domain::geometry::square_side;
use crate::domain::logging::LogComponent;
use crate::log_info;

pub const CONTEXT_KIND: &str = "webgl2";

/// Style overrides that let the canvas fill the viewport without scrollbars.
const PAGE_STYLE: [(&str, &str); 3] = [("margin", "0px"), ("padding", "0px"), ("overflow", "hidden")];

/// A square canvas attached to the page.
pub struct Surface {
    canvas: HtmlCanvasElement,
    side: u32,
}

impl Surface {
    /// Strip page chrome, append a canvas sized to the smaller viewport
    /// dimension and return it.
    pub fn create() -> SandboxResult<Self> {
        let window = web_sys::window().ok_or(PlatformError::WindowUnavailable)?;
        let document = window.document().ok_or(PlatformError::DocumentUnavailable)?;

        prepare_page(&document)?;
        let canvas = create_canvas(&document)?;

        let (width, height) = viewport_size(&window);
        let side = square_side(width, height);
        canvas.set_width(side);
        canvas.set_height(side);

        log_info!(
            LogComponent::Infrastructure("Surface"),
            "canvas sized {}x{} for viewport {}x{}",
            side,
            side,
            width,
            height
        );

        Ok(Self { canvas, side })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn side(&self) -> u32 {
        self.side
    }
}

pub fn prepare_page(document: &Document) -> SandboxResult<()> {
    let html = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(PlatformError::DocumentUnavailable)?;
    let body = document.body().ok_or(PlatformError::BodyUnavailable)?;

    for element in [&html, &body] {
        let style = element.style();
        for (property, value) in PAGE_STYLE {
            style
                .set_property(property, value)
                .map_err(|e| PlatformError::StyleUpdateFailed(format!("{}: {:?}", property, e)))?;
        }
    }
    Ok(())
}

pub fn create_canvas(document: &Document) -> SandboxResult<HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| PlatformError::ElementCreationFailed("canvas".to_string()))?;
    let body = document.body().ok_or(PlatformError::BodyUnavailable)?;
    body.append_child(&canvas)
        .map_err(|_| PlatformError::ElementCreationFailed("canvas".to_string()))?;
    Ok(canvas)
}

/// `innerWidth` x `innerHeight` of the window, 0 when unreadable.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Request the WebGL2 context. Absence is an error so callers skip all GPU
/// setup; the caller reports it.
pub fn acquire_context(canvas: &HtmlCanvasElement) -> SandboxResult<WebGl2RenderingContext> {
    let context = canvas
        .get_context(CONTEXT_KIND)
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<WebGl2RenderingContext>().ok());

    context.ok_or_else(|| PlatformError::ContextUnavailable(CONTEXT_KIND.to_string()).into())
}
