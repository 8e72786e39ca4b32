//! Console state machine.
//!
//! [`Console`] owns the surface, the keyboard decoder, the shell and both
//! menus. Every call to [`Console::step`] performs one iteration of the
//! polling loop: at most one scancode is read and routed to whichever
//! component the active [`AppState`] designates.

use crate::config::{ConsoleConfig, MenuAction, Palette};
use crate::keyboard::ScancodeDecoder;
use crate::menu::Menu;
use crate::splash;
use crate::surface::TextSurface;
use crate::terminal::{ShellOutcome, Terminal};
use testos_common::{ColorCode, ConfigError, KeyEvent};
use testos_hal::{FrameBuffer, PortIo};

const HALTED_MESSAGE: &str = "System halted.";

/// Active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Banner not yet drawn. Left on the next step.
    Splash,
    /// Main menu under the banner.
    MainMenu,
    /// Menu that flips the displayed value.
    ChangeValueMenu,
    /// Shell prompt.
    Terminal,
    /// Nothing is polled anymore.
    Halted,
}

/// The interactive console.
///
/// `B` is the frame buffer, `P` the display control ports and `K` the
/// keyboard controller ports.
pub struct Console<B, P, K> {
    surface: TextSurface<B, P>,
    keyboard: ScancodeDecoder<K>,
    terminal: Terminal,
    main_menu: Menu<MenuAction>,
    value_menu: Option<Menu<MenuAction>>,
    value: bool,
    /// Row below the active menu where the value is shown.
    value_row: usize,
    config: ConsoleConfig,
    state: AppState,
}

impl<B: FrameBuffer, P: PortIo, K: PortIo> Console<B, P, K> {
    /// Builds a console in the [`AppState::Splash`] state.
    ///
    /// Nothing is drawn until the first [`Console::step`].
    pub fn new(
        config: ConsoleConfig,
        buffer: B,
        display_ports: P,
        keyboard_ports: K,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let main_menu = Menu::new(config.main_menu).ok_or(ConfigError::EmptyMainMenu)?;

        Ok(Self {
            surface: TextSurface::new(buffer, display_ports),
            keyboard: ScancodeDecoder::new(keyboard_ports),
            terminal: Terminal::new(),
            main_menu,
            value_menu: Menu::new(config.value_menu),
            value: false,
            value_row: 0,
            config,
            state: AppState::Splash,
        })
    }

    /// The active state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// The value flipped by [`MenuAction::ToggleValue`].
    pub fn value(&self) -> bool {
        self.value
    }

    /// The surface the console draws on.
    pub fn surface(&self) -> &TextSurface<B, P> {
        &self.surface
    }

    /// One iteration of the main loop. Returns the state after it.
    pub fn step(&mut self) -> AppState {
        match self.state {
            AppState::Splash => self.show_main_menu(),
            AppState::Halted => {}
            AppState::MainMenu | AppState::ChangeValueMenu | AppState::Terminal => {
                if let Some(event) = self.keyboard.poll() {
                    self.dispatch(&event);
                }
            }
        }
        self.state
    }

    /// Polls until halted, then idles the CPU forever.
    #[cfg(target_arch = "x86_64")]
    pub fn run(&mut self) -> ! {
        while self.step() != AppState::Halted {
            core::hint::spin_loop();
        }
        crate::arch::x86_64::halt_loop()
    }

    fn dispatch(&mut self, event: &KeyEvent) {
        let action = match self.state {
            AppState::MainMenu => self.main_menu.handle(event, &mut self.surface),
            AppState::ChangeValueMenu => self
                .value_menu
                .as_mut()
                .and_then(|menu| menu.handle(event, &mut self.surface)),
            AppState::Terminal => {
                let outcome =
                    self.terminal
                        .handle_key(event, &mut self.surface, &self.config.palette);
                if outcome == ShellOutcome::Exit {
                    self.leave_terminal();
                }
                None
            }
            AppState::Splash | AppState::Halted => None,
        };

        if let Some(action) = action {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: MenuAction) {
        log::debug!("menu action {:?}", action);
        match action {
            MenuAction::OpenTerminal => {
                self.terminal.open(&mut self.surface, &self.config.palette);
                self.transition(AppState::Terminal);
            }
            MenuAction::OpenChangeValue => self.show_value_menu(),
            MenuAction::ToggleValue => {
                self.value = !self.value;
                self.render_value();
            }
            MenuAction::Back => self.transition(AppState::Splash),
            MenuAction::Halt => {
                self.surface.set_cursor(self.value_row, 0);
                self.halt();
            }
        }
    }

    fn show_main_menu(&mut self) {
        draw_banner(&mut self.surface, &self.config.palette);
        self.main_menu.enter(&mut self.surface);
        self.surface.next_line();
        self.value_row = self.surface.row();
        self.transition(AppState::MainMenu);
    }

    fn show_value_menu(&mut self) {
        // `validate` guarantees the menu exists whenever it can be opened.
        let Some(menu) = self.value_menu.as_mut() else {
            log::warn!("no change-value menu configured");
            return;
        };
        draw_banner(&mut self.surface, &self.config.palette);
        menu.enter(&mut self.surface);
        self.surface.next_line();
        self.value_row = self.surface.row();
        self.render_value();
        self.transition(AppState::ChangeValueMenu);
    }

    fn render_value(&mut self) {
        self.surface.set_cursor(self.value_row, 0);
        self.surface.set_color_code(self.config.palette.accent);
        self.surface
            .write_str(if self.value { "Value: ON " } else { "Value: OFF" });
        self.surface.set_color_code(ColorCode::DEFAULT);
    }

    fn leave_terminal(&mut self) {
        if self.config.loop_after_terminal {
            self.transition(AppState::Splash);
        } else {
            self.halt();
        }
    }

    /// Prints the halt notice at the cursor.
    fn halt(&mut self) {
        self.surface.set_color_code(ColorCode::DEFAULT);
        self.surface.write_str(HALTED_MESSAGE);
        self.surface.hide_cursor();
        self.transition(AppState::Halted);
    }

    fn transition(&mut self, next: AppState) {
        log::info!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Clears the screen, hides the cursor and draws the splash banner.
fn draw_banner<B: FrameBuffer, P: PortIo>(surface: &mut TextSurface<B, P>, palette: &Palette) {
    surface.initialize();
    surface.hide_cursor();
    splash::render(surface, palette);
}
