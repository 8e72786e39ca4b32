//! Console configuration.
//!
//! One [`ConsoleConfig`] describes a console variant: which options the menus
//! offer, what they do, and whether leaving the terminal restarts the splash
//! cycle or halts the machine.

use crate::menu::MenuOption;
use crate::splash::BANNER_ROWS;
use crate::surface::{HEIGHT, WIDTH};
use testos_common::{Color, ColorCode, ConfigError};

/// Rows below each menu: a blank line and the value line.
const MENU_FOOTER_ROWS: usize = 2;

/// Rows a menu block may occupy under the banner.
pub const MENU_ROWS: usize = HEIGHT - BANNER_ROWS - MENU_FOOTER_ROWS;

/// What choosing a menu option does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Enter the terminal shell.
    OpenTerminal,
    /// Open the change-value menu.
    OpenChangeValue,
    /// Flip the displayed value.
    ToggleValue,
    /// Back to the splash screen and main menu.
    Back,
    /// Stop the console for good.
    Halt,
}

/// Accent colors. Body text always uses [`ColorCode::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Splash banner.
    pub banner: ColorCode,
    /// Value display and shell feedback.
    pub accent: ColorCode,
}

impl Palette {
    /// Magenta banner, cyan accents.
    pub const DEFAULT: Palette = Palette {
        banner: ColorCode::new(Color::Magenta, Color::Black),
        accent: ColorCode::new(Color::Cyan, Color::Black),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A console variant.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig {
    /// Options under the splash banner.
    pub main_menu: &'static [MenuOption<MenuAction>],
    /// Options of the change-value screen.
    pub value_menu: &'static [MenuOption<MenuAction>],
    /// After `exit`, show the splash again instead of halting.
    pub loop_after_terminal: bool,
    /// Colors.
    pub palette: Palette,
}

const LOOPING_MAIN_MENU: [MenuOption<MenuAction>; 3] = [
    MenuOption::new("Terminal", MenuAction::OpenTerminal),
    MenuOption::new("Change value", MenuAction::OpenChangeValue),
    MenuOption::new("Exit", MenuAction::Halt),
];

const SINGLE_SHOT_MAIN_MENU: [MenuOption<MenuAction>; 2] = [
    MenuOption::new("Terminal", MenuAction::OpenTerminal),
    MenuOption::new("Exit", MenuAction::Halt),
];

const VALUE_MENU: [MenuOption<MenuAction>; 2] = [
    MenuOption::new("Toggle value", MenuAction::ToggleValue),
    MenuOption::new("Back", MenuAction::Back),
];

impl ConsoleConfig {
    /// Terminal, change value, exit; `exit` in the shell returns to the splash.
    pub const LOOPING: ConsoleConfig = ConsoleConfig {
        main_menu: &LOOPING_MAIN_MENU,
        value_menu: &VALUE_MENU,
        loop_after_terminal: true,
        palette: Palette::DEFAULT,
    };

    /// Terminal, exit; `exit` in the shell halts.
    pub const SINGLE_SHOT: ConsoleConfig = ConsoleConfig {
        main_menu: &SINGLE_SHOT_MAIN_MENU,
        value_menu: &VALUE_MENU,
        loop_after_terminal: false,
        palette: Palette::DEFAULT,
    };

    /// Checks that every reachable menu can be drawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.main_menu.is_empty() {
            return Err(ConfigError::EmptyMainMenu);
        }
        check_fits(self.main_menu)?;

        if self.opens_value_menu() {
            if self.value_menu.is_empty() {
                return Err(ConfigError::EmptyValueMenu);
            }
            check_fits(self.value_menu)?;
        }
        Ok(())
    }

    /// True if some main menu option leads to the change-value screen.
    pub fn opens_value_menu(&self) -> bool {
        self.main_menu
            .iter()
            .any(|option| option.action == MenuAction::OpenChangeValue)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::LOOPING
    }
}

fn check_fits(options: &[MenuOption<MenuAction>]) -> Result<(), ConfigError> {
    if options.len() > MENU_ROWS {
        return Err(ConfigError::MenuTooTall {
            options: options.len(),
            rows: MENU_ROWS,
        });
    }
    if options.iter().any(|option| option.label.len() >= WIDTH) {
        return Err(ConfigError::LabelTooWide);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(ConsoleConfig::LOOPING.validate(), Ok(()));
        assert_eq!(ConsoleConfig::SINGLE_SHOT.validate(), Ok(()));
        assert!(ConsoleConfig::LOOPING.opens_value_menu());
        assert!(!ConsoleConfig::SINGLE_SHOT.opens_value_menu());
    }

    #[test]
    fn test_empty_main_menu() {
        let config = ConsoleConfig {
            main_menu: &[],
            ..ConsoleConfig::LOOPING
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyMainMenu));
    }

    #[test]
    fn test_empty_value_menu_only_matters_when_reachable() {
        let looping = ConsoleConfig {
            value_menu: &[],
            ..ConsoleConfig::LOOPING
        };
        assert_eq!(looping.validate(), Err(ConfigError::EmptyValueMenu));

        let single = ConsoleConfig {
            value_menu: &[],
            ..ConsoleConfig::SINGLE_SHOT
        };
        assert_eq!(single.validate(), Ok(()));
    }

    #[test]
    fn test_menu_too_tall() {
        static TALL: [MenuOption<MenuAction>; MENU_ROWS + 1] =
            [MenuOption::new("Exit", MenuAction::Halt); MENU_ROWS + 1];
        let config = ConsoleConfig {
            main_menu: &TALL,
            ..ConsoleConfig::SINGLE_SHOT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MenuTooTall {
                options: MENU_ROWS + 1,
                rows: MENU_ROWS,
            })
        );
    }

    #[test]
    fn test_label_too_wide() {
        static WIDE: [MenuOption<MenuAction>; 1] = [MenuOption::new(
            "................................................................................",
            MenuAction::Halt,
        )];
        let config = ConsoleConfig {
            main_menu: &WIDE,
            ..ConsoleConfig::SINGLE_SHOT
        };
        assert_eq!(config.validate(), Err(ConfigError::LabelTooWide));
    }
}
