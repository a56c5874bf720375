pub mod engine;
pub mod error;
pub mod game;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent, Request,
    RequestInit, RequestMode, Response, Window,
};

use crate::engine::surface::CanvasSurface;
use crate::error::{ConfigError, GameError};
use crate::game::config::GameConfig;
use crate::game::input::{InputTracker, Key, KeyboardState};
use crate::game::player::Character;
use crate::game::{Game, Mode};

const CONFIG_URL: &str = "/assets/config.json";

/// Everything the browser callbacks share.
struct Session {
    game: Game,
    keyboard: KeyboardState,
    tracker: InputTracker,
    surface: CanvasSurface,
    ui: Ui,
}

impl Session {
    fn tick(&mut self) {
        let pressed = self.tracker.just_pressed(self.keyboard.snapshot());
        self.game.handle_input(&pressed);
        self.game.update();
        self.game.draw(&mut self.surface);
        self.ui.sync(&self.game);
    }
}

/// Page overlays and score readouts.
struct Ui {
    score: Element,
    final_score: Element,
    game_over: Element,
    start_screen: Element,
    char_select: Element,
    char_select_open: bool,
    shown: Option<(Mode, bool, u32)>,
}

impl Ui {
    fn new(document: &Document) -> Result<Self, GameError> {
        Ok(Ui {
            score: element(document, "score")?,
            final_score: element(document, "final-score")?,
            game_over: element(document, "game-over")?,
            start_screen: element(document, "start-screen")?,
            char_select: element(document, "character-select")?,
            char_select_open: false,
            shown: None,
        })
    }

    /// Pushes mode and score to the DOM when they changed since last frame.
    fn sync(&mut self, game: &Game) {
        let state = (game.mode(), self.char_select_open, game.score());
        if self.shown == Some(state) {
            return;
        }
        let (mode, picking, score) = state;
        self.score.set_text_content(Some(&score.to_string()));
        self.final_score.set_text_content(Some(&score.to_string()));
        set_visible(&self.start_screen, mode == Mode::Menu && !picking);
        set_visible(&self.char_select, mode == Mode::Menu && picking);
        set_visible(&self.game_over, mode == Mode::GameOver);
        self.shown = Some(state);
    }
}

fn element(document: &Document, id: &'static str) -> Result<Element, GameError> {
    document.get_element_by_id(id).ok_or(GameError::MissingElement(id))
}

fn set_visible(el: &Element, visible: bool) {
    let classes = el.class_list();
    let result = if visible { classes.remove_1("hidden") } else { classes.add_1("hidden") };
    if let Err(e) = result {
        log::warn!("could not toggle overlay: {:?}", e);
    }
}

#[wasm_bindgen]
pub async fn init_game() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    let window = web_sys::window().ok_or(GameError::MissingElement("window"))?;
    let document = window.document().ok_or(GameError::MissingElement("document"))?;
    let canvas = element(&document, "gameCanvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::MissingElement("gameCanvas"))?;

    let config = load_config(&window).await;
    canvas.set_width(config.width() as u32);
    canvas.set_height(config.height() as u32);

    let ctx = canvas
        .get_context("2d")?
        .ok_or(GameError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GameError::ContextUnavailable)?;

    log::info!("canvas {}x{}, starting in menu", config.width(), config.height());

    let session = Rc::new(RefCell::new(Session {
        game: Game::new(config),
        keyboard: KeyboardState::default(),
        tracker: InputTracker::default(),
        surface: CanvasSurface::new(ctx),
        ui: Ui::new(&document)?,
    }));

    bind_keyboard(&window, &session)?;
    bind_buttons(&document, &session)?;
    start_loop(session)?;
    Ok(())
}

/// Fetches the optional config file, falling back to defaults.
async fn load_config(window: &Window) -> GameConfig {
    match fetch_config(window).await {
        Ok(Some(config)) => {
            log::info!("loaded {}", CONFIG_URL);
            config
        }
        Ok(None) => GameConfig::default(),
        Err(e) => {
            log::warn!("ignoring {}: {}", CONFIG_URL, e);
            GameConfig::default()
        }
    }
}

async fn fetch_config(window: &Window) -> Result<Option<GameConfig>, GameError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(CONFIG_URL, &opts)?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Ok(None);
    }
    let json = JsFuture::from(resp.json()?).await?;
    let config: GameConfig = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(Some(config))
}

fn bind_keyboard(window: &Window, session: &Rc<RefCell<Session>>) -> Result<(), GameError> {
    let down = {
        let session = session.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let name = event.key();
            if Key::suppresses_default(&name) {
                event.prevent_default();
            }
            session.borrow_mut().keyboard.press(&name);
        }) as Box<dyn FnMut(_)>)
    };
    let up = {
        let session = session.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            session.borrow_mut().keyboard.release(&event.key());
        }) as Box<dyn FnMut(_)>)
    };

    window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())?;
    down.forget();
    up.forget();
    Ok(())
}

fn on_click<F>(target: &Element, session: &Rc<RefCell<Session>>, mut action: F) -> Result<(), GameError>
where
    F: FnMut(&mut Session, &web_sys::MouseEvent) + 'static,
{
    let session = session.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        action(&mut session.borrow_mut(), &event);
    }) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn bind_buttons(document: &Document, session: &Rc<RefCell<Session>>) -> Result<(), GameError> {
    on_click(&element(document, "start-btn")?, session, |s, _| {
        s.ui.char_select_open = false;
        s.game.start_game();
    })?;
    on_click(&element(document, "restart-btn")?, session, |s, _| s.game.restart())?;
    on_click(&element(document, "chars-btn")?, session, |s, _| s.ui.char_select_open = true)?;
    on_click(&element(document, "back-btn")?, session, |s, _| s.ui.char_select_open = false)?;

    let buttons = document.query_selector_all(".char-btn")?;
    let all: Vec<Element> = (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    for button in &all {
        let siblings = all.clone();
        on_click(button, session, move |s, event| {
            let Some(target) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(kind) = target.get_attribute("data-type") else {
                return;
            };
            match kind.parse::<Character>() {
                Ok(character) => {
                    s.game.set_selected_character(character);
                    s.game.show_menu();
                    log::info!("selected {}", character);
                    for b in &siblings {
                        let classes = b.class_list();
                        let result = if b.get_attribute("data-type").as_deref() == Some(kind.as_str()) {
                            classes.add_1("selected")
                        } else {
                            classes.remove_1("selected")
                        };
                        if let Err(e) = result {
                            log::warn!("could not mark selection: {:?}", e);
                        }
                    }
                }
                Err(e) => log::warn!("{}", e),
            }
        })?;
    }
    Ok(())
}

fn start_loop(session: Rc<RefCell<Session>>) -> Result<(), GameError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        session.borrow_mut().tick();
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(next) {
                log::error!("animation loop stopped: {}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    match first.as_ref() {
        Some(closure) => request_animation_frame(closure),
        None => Ok(()),
    }
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<(), GameError> {
    web_sys::window()
        .ok_or(GameError::MissingElement("window"))?
        .request_animation_frame(f.as_ref().unchecked_ref())?;
    Ok(())
}
