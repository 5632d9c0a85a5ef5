//! Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use rainy_day::Settings;
    use rainy_day::consts::*;
    use rainy_day::platform::{FrameClock, InputState, sample_frame_input};
    use rainy_day::renderer::{RenderState, SpriteBatch, draw};
    use rainy_day::sim::{GameState, autopilot, step};

    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        batch: SpriteBatch,
        clock: FrameClock,
        input: InputState,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, now: f64, canvas_w: f32, canvas_h: f32) -> Self {
            Self {
                state: GameState::new(seed, now),
                render_state: None,
                batch: SpriteBatch::new(canvas_w, canvas_h),
                clock: FrameClock::new(),
                input: InputState::new(),
                settings: Settings::load(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance the simulation one frame
        fn update(&mut self, time_ms: f64) {
            let time = self.clock.advance_to(time_ms / 1000.0);
            let input = if self.settings.demo_mode {
                autopilot(&self.state)
            } else {
                sample_frame_input(&self.input, self.batch.camera())
            };
            step(&mut self.state, &input, time);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time_ms;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time_ms - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw(&self.state, &mut self.batch);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Place the batch's text labels into the DOM overlay
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let camera = self.batch.camera();
            for (i, label) in self.batch.labels().iter().enumerate() {
                if let Some(el) = document.get_element_by_id(&format!("hud-label-{}", i)) {
                    // Labels hang below their anchor, like bitmap font text
                    let pos = camera.project(label.pos);
                    el.set_text_content(Some(&label.text));
                    let _ = el.set_attribute(
                        "style",
                        &format!("left: {:.0}px; top: {:.0}px", pos.x, pos.y),
                    );
                }
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("{} starting...", WINDOW_TITLE);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title(WINDOW_TITLE);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical size, scaled by device pixel ratio for the backing store
        let dpr = window.device_pixel_ratio();
        let width = (SCREEN_WIDTH as f64 * dpr) as u32;
        let height = (SCREEN_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let client_w = canvas.client_width().max(1) as f32;
        let client_h = canvas.client_height().max(1) as f32;

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            now_ms() / 1000.0,
            client_w,
            client_h,
        )));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_focus_handler(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("{} running!", WINDOW_TITLE);
    }

    /// Pointer position relative to the canvas, in CSS pixels
    fn touch_pos(canvas: &HtmlCanvasElement, touch: &web_sys::Touch) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            touch.client_x() as f32 - rect.left() as f32,
            touch.client_y() as f32 - rect.top() as f32,
        )
    }

    fn refresh_viewport(game: &mut Game, canvas: &HtmlCanvasElement) {
        let w = canvas.client_width() as f32;
        let h = canvas.client_height() as f32;
        game.batch.camera_mut().resize_viewport(w, h);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                refresh_viewport(&mut g, &canvas_clone);
                g.input
                    .pointer_down(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut()
                    .input
                    .pointer_moved(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up (window-wide so releasing outside the canvas counts)
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer_up();
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start / move
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    refresh_viewport(&mut g, &canvas_clone);
                    g.input.pointer_down(touch_pos(&canvas_clone, &touch));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if event.touches().length() == 0 {
                    game.borrow_mut().input.pointer_up();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard down
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                match key.as_str() {
                    "i" | "I" => {
                        g.settings.demo_mode = !g.settings.demo_mode;
                        log::info!("Demo mode: {}", g.settings.demo_mode);
                        g.settings.save();
                    }
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    _ => {
                        let Game { input, settings, .. } = &mut *g;
                        input.key_down(&key, &settings.key_bindings);
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let Game { input, settings, .. } = &mut *g;
                input.key_up(&event.key(), &settings.key_bindings);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Forget held keys when the window loses focus; their keyup never arrives
    fn setup_focus_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            game.borrow_mut().input.release_all();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("{} (native) starting...", rainy_day::consts::WINDOW_TITLE);
    log::info!("Native mode requires winit integration - run with `trunk serve` for web version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one minute at 60 Hz with the autopilot and report the result
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use rainy_day::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use rainy_day::platform::FrameClock;
    use rainy_day::renderer::{SpriteBatch, draw};
    use rainy_day::sim::{GameState, autopilot, update};

    const FPS: f64 = 60.0;
    const FRAMES: u32 = 60 * 60;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut clock = FrameClock::new();
    let mut state = GameState::new(seed, 0.0);
    let mut batch = SpriteBatch::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut caught = 0u32;

    for frame in 0..FRAMES {
        let time = clock.advance_to(frame as f64 / FPS);
        let input = autopilot(&state);
        let before = state.score;
        state = update(state, &input, time);
        if state.score > before {
            caught += state.score - before;
        }
        draw(&state, &mut batch);
    }

    log::info!(
        "Demo finished: {} vertices, {} labels in last frame",
        batch.vertices().len(),
        batch.labels().len()
    );
    println!("Seed:        {}", seed);
    println!("Caught:      {}", caught);
    println!("Score:       {}", state.score);
    println!("High score:  {}", state.high_score);
    println!("Falling:     {}", state.raindrops.len());
    for label in batch.labels() {
        println!("HUD:         {}", label.text);
    }
}
