//! WebGPU client for the billiards table
//!
//! Runs the simulation in the page and draws it with wgpu through the
//! `billiards_core::Renderer` contract. The browser drives frames from
//! `requestAnimationFrame`.

pub mod camera;
pub mod mesh;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::renderer::Renderer;
    use crate::simulation::LocalTable;

    struct Client {
        table: LocalTable,
        renderer: Renderer,
    }

    impl Client {
        async fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, String> {
            let table = LocalTable::new(seed)?;
            let (width, height) = {
                let t = table.sim.table();
                (t.width(), t.height())
            };
            let renderer = Renderer::new(canvas, width, height, &table.draw_list).await?;
            Ok(Self { table, renderer })
        }

        fn draw(&mut self) -> Result<(), JsValue> {
            self.renderer.draw(&self.table.draw_list).map_err(|e| {
                log::error!("draw failed: {}", e);
                JsValue::from_str(&e)
            })
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<R>(f: impl FnOnce(&mut Client) -> Result<R, JsValue>) -> Result<R, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => f(client),
            None => Err(JsValue::from_str("Client not initialized")),
        })
    }

    /// Set up the table on `canvas`; resolves once the GPU is ready
    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement, seed: u32) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        wasm_bindgen_futures::future_to_promise(async move {
            match Client::new(canvas, u64::from(seed)).await {
                Ok(client) => {
                    log::info!("billiards client initialized, seed {}", seed);
                    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
                    Ok(JsValue::UNDEFINED)
                }
                Err(e) => {
                    log::error!("client init failed: {}", e);
                    Err(JsValue::from_str(&e))
                }
            }
        })
    }

    /// Step one fixed frame and draw it
    #[wasm_bindgen]
    pub fn render_frame() -> Result<(), JsValue> {
        with_client(|client| {
            client.table.frame();
            client.draw()
        })
    }

    /// Step by the milliseconds elapsed since the last frame and draw
    #[wasm_bindgen]
    pub fn advance_frame(elapsed_ms: f32) -> Result<(), JsValue> {
        with_client(|client| {
            client.table.advance_ms(elapsed_ms);
            client.draw()
        })
    }

    #[wasm_bindgen]
    pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
        with_client(|client| {
            client.renderer.resize(width, height);
            Ok(())
        })
    }

    #[wasm_bindgen]
    pub fn ball_count() -> Result<u32, JsValue> {
        with_client(|client| Ok(client.table.sim.balls().len() as u32))
    }
}
