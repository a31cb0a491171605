/// Top-level screens reachable from the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Scrollable product catalog.
    #[default]
    Home,
    /// Cart summary.
    Cart,
    /// Static brand information.
    About,
}

impl Screen {
    /// All screens in navigation-bar order.
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Cart, Screen::About];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Cart => "Cart",
            Screen::About => "About",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Cart => "cart",
            Screen::About => "about",
        }
    }

    /// Position of the screen in [`Screen::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Cart => 1,
            Screen::About => 2,
        }
    }

    /// The screen to the right in the bar, wrapping around.
    pub fn next(&self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    /// The screen to the left in the bar, wrapping around.
    pub fn previous(&self) -> Screen {
        Screen::ALL[(self.index() + Screen::ALL.len() - 1) % Screen::ALL.len()]
    }
}

/// Which screen is active. Starts at [`Screen::Home`]; any screen can be
/// selected from any other.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    current: Screen,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn select(&mut self, screen: Screen) {
        self.current = screen;
    }
}
