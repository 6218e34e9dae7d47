use crate::backend::EventsBackend;
use crate::config::DisplayConfig;
use crate::logger::Logger;
use crate::routes::Route;
use crate::ui::components::{
    DialogComponent, EventFormComponent, EventListComponent, StatisticsComponent, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{BackgroundAction, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The component mounted for the current route
pub enum View {
    List(EventListComponent),
    Form(EventFormComponent),
    Statistics(StatisticsComponent),
}

impl View {
    fn component(&mut self) -> &mut dyn Component {
        match self {
            View::List(list) => list,
            View::Form(form) => form,
            View::Statistics(statistics) => statistics,
        }
    }

    fn captures_text(&self) -> bool {
        match self {
            View::List(list) => list.captures_text(),
            View::Form(form) => form.captures_text(),
            View::Statistics(statistics) => statistics.captures_text(),
        }
    }
}

pub struct AppComponent {
    // Component composition
    route: Route,
    view: View,
    dialog: DialogComponent,

    // Services
    backend: Arc<dyn EventsBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<BackgroundAction>,
    logger: Logger,
    display_config: DisplayConfig,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn EventsBackend>, logger: Logger, display_config: DisplayConfig) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            route: Route::EventList,
            view: View::List(EventListComponent::new(display_config.clone())),
            dialog: DialogComponent::new(logger.clone()),
            backend,
            task_manager,
            background_action_rx,
            logger,
            display_config,
            should_quit: false,
        }
    }

    /// Mount the initial route and issue its loads
    pub fn start(&mut self, route: Route) {
        self.logger.log(format!(
            "AppComponent: Starting on {} with {} backend",
            route,
            self.backend.backend_type()
        ));
        self.navigate(route);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Replace the mounted view. Requests the previous view issued keep running;
    /// their results are discarded by generation.
    fn navigate(&mut self, route: Route) {
        let generation = self.task_manager.begin_generation();
        self.logger.log(format!(
            "Navigation: {} -> {} (generation {})",
            self.route, route, generation
        ));

        let display = self.display_config.clone();
        self.view = match route {
            Route::EventList => View::List(EventListComponent::new(display)),
            Route::CreateEvent => View::Form(EventFormComponent::new(None)),
            Route::EditEvent(event_id) => View::Form(EventFormComponent::new(Some(event_id))),
            Route::Statistics => View::Statistics(StatisticsComponent::new(display)),
        };
        self.route = route;

        let backend = Arc::clone(&self.backend);
        match route {
            Route::EventList => {
                self.task_manager.spawn_events_load(backend);
            }
            Route::CreateEvent => {
                self.task_manager.spawn_form_load(backend, None);
            }
            Route::EditEvent(event_id) => {
                self.task_manager.spawn_form_load(backend, Some(event_id));
            }
            Route::Statistics => {
                self.task_manager.spawn_reference_load(backend);
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't view-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        match key.code {
            KeyCode::F(1) => {
                self.logger.log("Global key: F1 - opening help dialog".to_string());
                return Action::ShowDialog(DialogType::Help);
            }
            KeyCode::F(2) => {
                self.logger.log("Global key: F2 - opening logs dialog".to_string());
                return Action::ShowDialog(DialogType::Logs);
            }
            _ => {}
        }

        // Plain characters belong to the focused input while one is active
        if self.view.captures_text() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require backend calls or navigation
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(route) => {
                self.navigate(route);
                Action::None
            }
            Action::ReloadEvents => {
                self.logger.log("Events: Reloading".to_string());
                self.task_manager.spawn_events_load(Arc::clone(&self.backend));
                Action::None
            }
            Action::DeleteEvent(event_id) => {
                self.logger.log(format!("Events: Deleting event {}", event_id));
                self.task_manager.spawn_event_delete(Arc::clone(&self.backend), event_id);
                Action::None
            }
            Action::SubmitEvent { event_id, payload } => {
                match event_id {
                    Some(id) => self.logger.log(format!("Form: Updating event {} '{}'", id, payload.title)),
                    None => self.logger.log(format!("Form: Creating event '{}'", payload.title)),
                }
                self.task_manager
                    .spawn_event_submit(Arc::clone(&self.backend), event_id, payload);
                Action::None
            }
            Action::FetchStatistics(filter) => {
                self.logger.log(format!("Statistics: Fetching with {:?}", filter));
                self.task_manager.spawn_statistics_fetch(Arc::clone(&self.backend), filter);
                Action::None
            }
            Action::EventSaved => {
                self.logger.log("Form: Event saved".to_string());
                self.navigate(Route::EventList);
                Action::None
            }
            Action::RequestFailed { context, error } => {
                self.logger.log_error(&context, &error);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Drain background results, keeping only those issued by the mounted view
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        let current = self.task_manager.generation();

        while let Ok(BackgroundAction { generation, action }) = self.background_action_rx.try_recv() {
            if generation != current {
                // Failures of a view already left still belong in the log
                if let Action::RequestFailed { context, error } = &action {
                    self.logger.log_error(context, error);
                } else {
                    self.logger.log(format!(
                        "Background: Dropped stale result from generation {}: {:?}",
                        generation, action
                    ));
                }
                continue;
            }
            self.logger.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Run an action through the component hierarchy, then the app itself
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        if let EventType::Key(key) = event_type {
            let action = self.handle_key_events(key);
            self.dispatch(action);
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.handle_global_key(key) {
            Action::None => self.view.component().handle_key_events(key),
            action => action,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.view.component().update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.view.component().render(f, chunks[0]);
        StatusBar::render(f, chunks[1], &self.route, &self.task_manager.running_task_descriptions());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
