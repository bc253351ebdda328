pub mod runner;

pub use runner::PuzzleRunner;

use wasm_bindgen::JsValue;

/// Log a puzzle load failure to the browser console and turn it into a JS `Error`.
pub fn init_error(puzzle_name: &str, err: &seek_engine::ConfigError) -> JsValue {
    let msg = format!("{puzzle_name}: {err}");
    web_sys::console::error_1(&JsValue::from_str(&msg));
    js_sys::Error::new(&msg).into()
}

/// Generate all `#[wasm_bindgen]` exports for a puzzle.
///
/// This macro generates:
/// - `thread_local!` storage for the PuzzleRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, resize, pointer input, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use seek_engine::*;
///
/// const PUZZLE_JSON: &str = include_str!("../puzzle.json");
///
/// seek_web::export_puzzle!(PUZZLE_JSON, "my-puzzle");
/// ```
///
/// # Arguments
///
/// - `$json`: An expression evaluating to the puzzle JSON (`&str`)
/// - `$puzzle_name`: A string literal used in log and error messages
#[macro_export]
macro_rules! export_puzzle {
    ($json:expr, $puzzle_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::PuzzleRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::PuzzleRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Puzzle not initialized. Call puzzle_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn puzzle_init() -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::PuzzleRunner::from_json($json)
                .map_err(|err| $crate::init_error($puzzle_name, &err))?;

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized", $puzzle_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn puzzle_resize(x: f32, y: f32, width: f32, height: f32) {
            with_runner(|r| r.resize(x, y, width, height));
        }

        #[wasm_bindgen]
        pub fn puzzle_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn puzzle_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn puzzle_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn puzzle_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn puzzle_pointer_cancel() {
            with_runner(|r| r.push_input(InputEvent::PointerCancel));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_quads_ptr() -> *const f32 {
            with_runner(|r| r.quads_ptr())
        }

        #[wasm_bindgen]
        pub fn get_quad_count() -> u32 {
            with_runner(|r| r.quad_count())
        }

        #[wasm_bindgen]
        pub fn get_selection_start() -> u32 {
            with_runner(|r| r.selection_start())
        }

        #[wasm_bindgen]
        pub fn get_lines_ptr() -> *const f32 {
            with_runner(|r| r.lines_ptr())
        }

        #[wasm_bindgen]
        pub fn get_line_count() -> u32 {
            with_runner(|r| r.line_count())
        }

        #[wasm_bindgen]
        pub fn get_line_color_ptr() -> *const f32 {
            with_runner(|r| r.line_color_ptr())
        }

        #[wasm_bindgen]
        pub fn get_glyphs_ptr() -> *const f32 {
            with_runner(|r| r.glyphs_ptr())
        }

        #[wasm_bindgen]
        pub fn get_glyph_count() -> u32 {
            with_runner(|r| r.glyph_count())
        }

        #[wasm_bindgen]
        pub fn get_glyph_color_ptr() -> *const f32 {
            with_runner(|r| r.glyph_color_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        // ---- Puzzle queries ----

        #[wasm_bindgen]
        pub fn puzzle_found_count() -> u32 {
            with_runner(|r| r.found_count())
        }

        #[wasm_bindgen]
        pub fn puzzle_word_count() -> u32 {
            with_runner(|r| r.word_count())
        }

        #[wasm_bindgen]
        pub fn puzzle_word(index: u32) -> Option<String> {
            with_runner(|r| r.word(index as usize).map(str::to_string))
        }

        #[wasm_bindgen]
        pub fn puzzle_is_found(index: u32) -> bool {
            with_runner(|r| r.is_found(index as usize))
        }
    };
}
