use serde::{Deserialize, Serialize};

use crate::navigation::NavigationState;

/// Tabs of the main navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainTab {
    Watchlist,
    Portfolio,
    Orders,
    Earnings,
    News,
}

impl Default for MainTab {
    fn default() -> Self {
        Self::Watchlist
    }
}

/// The closed set of navigable routes and their parameter shapes.
///
/// Leaf screens are external collaborators; each only needs to know its own
/// route's parameter shape. Serialized as a tagged `{route, params}` object
/// for the UI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Login / registration screen (the whole unauthenticated subtree).
    Login,
    /// Root of the authenticated shell: the nested tab navigator.
    MainTabs { tab: MainTab },
    /// Account-creation screen, target of the one-shot setup redirect.
    CreateAccount,
    /// Instrument detail, reachable only from within the tab navigator.
    StockDetail { symbol: String },
    /// Order entry for an instrument, reachable only from within the tabs.
    OrderTicket { symbol: String },
    /// Single news article, reachable only from within the tabs.
    NewsArticle { article_id: String },
}

impl Route {
    /// Root of the authenticated shell with the default tab selected.
    pub fn main_tabs() -> Self {
        Self::MainTabs {
            tab: MainTab::default(),
        }
    }

    /// Stable route-name string, the declarative navigator key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::MainTabs { .. } => "MainTabs",
            Self::CreateAccount => "CreateAccount",
            Self::StockDetail { .. } => "StockDetail",
            Self::OrderTicket { .. } => "OrderTicket",
            Self::NewsArticle { .. } => "NewsArticle",
        }
    }

    /// Whether this route is only reachable from within the tab navigator.
    pub fn is_tab_child(&self) -> bool {
        matches!(
            self,
            Self::StockDetail { .. } | Self::OrderTicket { .. } | Self::NewsArticle { .. }
        )
    }
}

/// Declarative initial route for a freshly mounted navigator.
///
/// `Loading`, `NeedsAccountSetup` and `Ready` all mount the tab-navigator
/// root; the setup screen is never an initial route, it is always pushed by
/// the imperative redirect once the first snapshot is dispatched.
pub fn initial_route(state: NavigationState) -> Route {
    match state {
        NavigationState::Unauthenticated => Route::Login,
        NavigationState::Loading | NavigationState::NeedsAccountSetup | NavigationState::Ready => {
            Route::main_tabs()
        }
    }
}
