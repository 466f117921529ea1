use std::sync::Arc;

use tokio::runtime::Handle;

use crate::search::{SearchController, SearchState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavIntent, NavReducer, NavState, Route};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Which part of the search screen receives keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchFocus {
    Input,
    Results,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Back stack (MVI pattern).
    nav: NavState,
    query: String,
    focus: SearchFocus,
    selection: usize,
    recipe_scroll: u16,
    ticks: usize,
    /// Last state published by the controller.
    search: SearchState,
    controller: Arc<SearchController>,
    runtime: Handle,
}

impl App {
    pub fn new(controller: Arc<SearchController>, runtime: Handle) -> Self {
        let search = controller.state();
        Self {
            should_quit: false,
            nav: NavState::default(),
            query: String::new(),
            focus: SearchFocus::Input,
            selection: 0,
            recipe_scroll: 0,
            ticks: 0,
            search,
            controller,
            runtime,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> SearchFocus {
        self.focus
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn recipe_scroll(&self) -> u16 {
        self.recipe_scroll
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER[self.ticks % SPINNER.len()]
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
        tracing::debug!(
            route = self.nav.current().name(),
            depth = self.nav.depth(),
            "Navigation"
        );
    }

    pub fn navigate(&mut self, route: Route) {
        if matches!(route, Route::Recipe { .. }) {
            self.recipe_scroll = 0;
        }
        self.dispatch_nav(NavIntent::Navigate(route));
    }

    pub fn back(&mut self) {
        self.dispatch_nav(NavIntent::Back);
    }

    /// Pull the latest controller state.
    pub fn sync_search(&mut self) {
        let state = self.controller.state();
        if state.items != self.search.items {
            self.selection = 0;
        }
        if state.items.is_empty() {
            self.focus = SearchFocus::Input;
        }
        self.search = state;
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Issue a search for the current query. Blank queries are not sent.
    pub fn submit_search(&mut self) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }
        let started = self
            .controller
            .spawn_search(&self.runtime, &self.query)
            .is_some();
        // The loading flag is set synchronously; show it right away.
        self.sync_search();
        started
    }

    pub fn focus_results(&mut self) {
        if self.search.has_results() && !self.search.loading {
            self.focus = SearchFocus::Results;
        }
    }

    pub fn focus_input(&mut self) {
        self.focus = SearchFocus::Input;
    }

    /// Move the result selection; moving up past the first row returns
    /// focus to the query input.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.search.items.len();
        if len == 0 {
            return;
        }
        if delta < 0 && self.selection == 0 {
            self.focus_input();
            return;
        }
        let next = self.selection as isize + delta;
        self.selection = next.clamp(0, len as isize - 1) as usize;
    }

    /// Open the detail route for the selected result.
    pub fn open_selected(&mut self) -> bool {
        let Some(item) = self.search.items.get(self.selection) else {
            return false;
        };
        let route = Route::recipe(item.name.clone(), item.instructions.clone());
        self.navigate(route);
        true
    }

    pub fn scroll_recipe(&mut self, delta: i32) {
        let next = i32::from(self.recipe_scroll) + delta;
        self.recipe_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }
}
