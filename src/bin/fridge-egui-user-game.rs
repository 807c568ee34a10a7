use std::time::{Duration, Instant};

use anyhow::anyhow;
use egui::{Align2, Color32, Context, FontId, Id, Key, LayerId, Order, Painter, Pos2, Vec2};

use fridge_gym::config::FridgeConfig;
use fridge_gym::environment::fridge::app_game_drawer::{start_button_rect, AppGameDrawer, SpriteTextures, BUTTON_TEXT_COLOR};
use fridge_gym::environment::fridge::assets::Sprites;
use fridge_gym::environment::fridge::mechanics::{MODEL_LEN_X, MODEL_LEN_Y};
use fridge_gym::environment::fridge_environment::{FridgeAction, FridgeEnvironment};
use fridge_gym::gym::prelude::{DebugVisualizer, Environment};
use fridge_gym::util::init_logging;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Title,
    Playing,
}

/// What the player asked for during one frame
#[derive(Clone, Copy, Debug, Default)]
struct UiControl {
    action: Option<FridgeAction>,
    reset: bool,
    start: bool,
    exit: bool,
}

pub struct FridgeApp {
    env: FridgeEnvironment,
    textures: SpriteTextures,
    screen: Screen,
    frame_interval: Duration,
    last_move: Instant,
    episode_reward: f32,
}

impl FridgeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &FridgeConfig,
    ) -> Self {
        let sprites = Sprites::load(&config.assets_dir);
        let mut env = FridgeEnvironment::new();
        env.reset(None);
        Self {
            env,
            textures: SpriteTextures::upload(&cc.egui_ctx, &sprites),
            screen: Screen::Title,
            frame_interval: config.frame_interval(),
            last_move: Instant::now(),
            episode_reward: 0.0,
        }
    }

    fn read_ui_control(
        &self,
        ctx: &Context,
    ) -> UiControl {
        let canvas = ctx.screen_rect();
        let mut control = UiControl::default();
        ctx.input(|i| {
            control.exit = i.key_pressed(Key::Escape);
            match self.screen {
                Screen::Title => {
                    let clicked_start = i.pointer.primary_clicked()
                        && i.pointer.interact_pos().map_or(false, |pos| start_button_rect(canvas).contains(pos));
                    control.start = clicked_start || i.key_pressed(Key::Enter);
                }
                Screen::Playing => {
                    control.reset = i.key_pressed(Key::R);
                    control.action = if i.key_pressed(Key::O) {
                        Some(FridgeAction::OpenFridge)
                    } else if i.key_pressed(Key::C) {
                        Some(FridgeAction::CloseFridge)
                    } else if i.key_down(Key::ArrowUp) {
                        Some(FridgeAction::Up)
                    } else if i.key_down(Key::ArrowDown) {
                        Some(FridgeAction::Down)
                    } else if i.key_down(Key::ArrowLeft) {
                        Some(FridgeAction::Left)
                    } else if i.key_down(Key::ArrowRight) {
                        Some(FridgeAction::Right)
                    } else {
                        None
                    };
                }
            }
        });
        control
    }

    fn process(
        &mut self,
        control: UiControl,
    ) {
        if control.start {
            log::info!("game started");
            self.screen = Screen::Playing;
        }
        if control.reset {
            self.env.reset(None);
            self.episode_reward = 0.0;
            log::info!("game reset");
            return;
        }
        let Some(action) = control.action else { return };
        let is_move = !matches!(action, FridgeAction::OpenFridge | FridgeAction::CloseFridge);
        // held arrow keys move the elephant at most once per frame interval
        if is_move && self.last_move.elapsed() < self.frame_interval {
            return;
        }
        if is_move {
            self.last_move = Instant::now();
        }
        let (observation, reward, done, _, info) = self.env.step(action);
        self.episode_reward += reward;
        log::debug!("{action}: reward {reward}, {}", observation.one_line_info());
        if done && info.task_complete && reward > 0.0 {
            log::info!("episode reward: {:.1}", self.episode_reward);
        }
    }

    fn draw_game_content(
        &self,
        ctx: &Context,
        painter: &Painter,
    ) {
        let canvas = painter.clip_rect();
        let drawer = AppGameDrawer::new(canvas, &self.textures);
        let font_scale = (canvas.width() / MODEL_LEN_X).min(canvas.height() / MODEL_LEN_Y);

        match self.screen {
            Screen::Title => {
                let button = start_button_rect(canvas);
                let hovered = ctx.input(|i| i.pointer.hover_pos()).map_or(false, |pos| button.contains(pos));
                painter.extend(drawer.title_shapes(hovered));
                painter.text(
                    button.center(),
                    Align2::CENTER_CENTER,
                    "Start",
                    FontId::proportional(40.0 * font_scale),
                    BUTTON_TEXT_COLOR,
                );
            }
            Screen::Playing => {
                painter.extend(drawer.game_shapes(self.env.mechanics()));
                let info = self.env.info();
                painter.text(
                    canvas.min + Vec2::new(canvas.width() / 2.0, 50.0 * font_scale),
                    Align2::CENTER_CENTER,
                    info.game_phase.prompt(),
                    FontId::proportional(24.0 * font_scale),
                    Color32::BLACK,
                );
                painter.text(
                    Pos2::new(canvas.min.x + 10.0, canvas.max.y - 10.0),
                    Align2::LEFT_BOTTOM,
                    format!(
                        "{} | reward {:.1}",
                        self.env.observation().one_line_info(),
                        self.episode_reward
                    ),
                    FontId::monospace(12.0 * font_scale),
                    Color32::DARK_GRAY,
                );
            }
        }
    }
}

impl eframe::App for FridgeApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        let control = self.read_ui_control(ctx);
        if control.exit {
            frame.close();
            return;
        }
        self.process(control);

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(ctx, &game_painter);
        ctx.request_repaint_after(self.frame_interval);
    }
}

fn fridge_user_game(config: FridgeConfig) -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(Vec2::new(MODEL_LEN_X, MODEL_LEN_Y)),
        resizable: true,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Box::new(FridgeApp::new(cc, &config))),
    )
    .map_err(|e| anyhow!("game window failed: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = FridgeConfig::from_env();
    log::info!("assets: {}", config.assets_dir.display());
    fridge_user_game(config)
}
