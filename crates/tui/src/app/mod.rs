use std::time::{Duration, Instant};

use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Currency, Dashboard, DashboardSettings, TransactionStore};

use crate::{
    config::{self, AppConfig},
    error::{AppError, Result},
    form::EntryForm,
    quick_add,
    ui::{self, keymap::AppAction},
};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Dashboard,
    Form(EntryForm),
    QuickAdd(QuickAddState),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickAddState {
    pub input: String,
    pub error: Option<String>,
}

impl QuickAddState {
    /// Editing the line clears the last parse error.
    pub fn push_char(&mut self, ch: char) {
        self.error = None;
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.error = None;
        self.input.pop();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

impl ToastState {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub store: TransactionStore,
    pub settings: DashboardSettings,
    pub mode: Mode,
    pub toast: Option<ToastState>,
}

impl AppState {
    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    /// Every figure on screen, recomputed from the whole store.
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::compute(self.store.all(), &self.settings)
    }
}

pub struct App {
    pub state: AppState,
    timezone: Tz,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let settings = config.dashboard_settings()?;
        let timezone = config.timezone()?;
        let store = if config.seed_examples {
            TransactionStore::seeded()?
        } else {
            TransactionStore::new()
        };

        tracing::info!(
            currency = settings.currency.code(),
            timezone = %timezone,
            transactions = store.len(),
            budgets = settings.budgets.lines().len(),
            "dashboard initialised"
        );

        Ok(Self {
            state: AppState {
                store,
                settings,
                mode: Mode::Dashboard,
                toast: None,
            },
            timezone,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        tracing::info!("dashboard closed");
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self
                .state
                .toast
                .as_ref()
                .is_some_and(|toast| toast.expires_at <= Instant::now())
            {
                self.state.toast = None;
            }
        }

        Ok(())
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        let action = ui::keymap::map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match (&self.state.mode, action) {
            (Mode::Dashboard, _) => return self.handle_dashboard(action),
            (Mode::Form(_), AppAction::Cancel) => return self.close_dialog("Draft discarded"),
            (Mode::Form(_), AppAction::Submit) => return self.submit_form(),
            (Mode::QuickAdd(_), AppAction::Cancel) => {
                return self.close_dialog("Quick add cancelled");
            }
            (Mode::QuickAdd(_), AppAction::Submit) => return self.submit_quick_add(),
            _ => {}
        }

        match &mut self.state.mode {
            Mode::Form(form) => match action {
                AppAction::NextField => form.next_field(),
                AppAction::PrevField => form.prev_field(),
                AppAction::Left => form.cycle(false),
                AppAction::Right => form.cycle(true),
                AppAction::Backspace => form.backspace(),
                AppAction::Input(ch) => form.push_char(ch),
                _ => {}
            },
            Mode::QuickAdd(quick) => match action {
                AppAction::Backspace => quick.backspace(),
                AppAction::Input(ch) => quick.push_char(ch),
                _ => {}
            },
            Mode::Dashboard => {}
        }
    }

    fn handle_dashboard(&mut self, action: AppAction) {
        match action {
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('a') => {
                self.state.mode = Mode::Form(EntryForm::new(config::today(self.timezone)));
            }
            AppAction::Input('+' | 'n') => {
                self.state.mode = Mode::QuickAdd(QuickAddState::default());
            }
            _ => {}
        }
    }

    fn close_dialog(&mut self, message: &str) {
        self.state.mode = Mode::Dashboard;
        self.state.toast = Some(ToastState::new(message, ToastLevel::Info));
    }

    fn submit_form(&mut self) {
        let Mode::Form(form) = &self.state.mode else {
            return;
        };
        let input = form.to_input();

        match self.state.store.submit(&input, self.state.currency()) {
            Ok(_) => self.added(&input.description),
            Err(err) => {
                if let Mode::Form(form) = &mut self.state.mode {
                    form.error = Some(err.to_string());
                }
            }
        }
    }

    fn submit_quick_add(&mut self) {
        let Mode::QuickAdd(quick) = &self.state.mode else {
            return;
        };
        let line = quick.input.clone();
        let currency = self.state.currency();

        let outcome = quick_add::parse(&line, config::today(self.timezone)).and_then(|input| {
            self.state
                .store
                .submit(&input, currency)
                .map(|_| input.description)
                .map_err(|err| err.to_string())
        });

        match outcome {
            Ok(description) => self.added(&description),
            Err(message) => {
                tracing::debug!(%message, "quick add rejected");
                if let Mode::QuickAdd(quick) = &mut self.state.mode {
                    quick.error = Some(message);
                }
            }
        }
    }

    fn added(&mut self, description: &str) {
        self.state.mode = Mode::Dashboard;
        self.state.toast = Some(ToastState::new(
            format!("Added \"{}\"", description.trim()),
            ToastLevel::Success,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use engine::{Category, Money, TransactionKind, total_expenses};

    fn app() -> App {
        App::new(AppConfig::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn starts_on_seeded_dashboard() {
        let app = app();
        assert_eq!(app.state.mode, Mode::Dashboard);
        assert_eq!(app.state.store.len(), 3);
        assert_eq!(app.state.dashboard().totals.balance, Money::new(5_750));
    }

    #[test]
    fn no_seed_starts_empty() {
        let config = AppConfig {
            seed_examples: false,
            ..AppConfig::default()
        };
        let app = App::new(config).unwrap();
        assert!(app.state.store.is_empty());
    }

    #[test]
    fn form_submission_appends_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.state.mode, Mode::Form(_)));

        type_text(&mut app, "Coffee");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "4.50");
        press(&mut app, KeyCode::Tab);
        for _ in 0..2 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.mode, Mode::Dashboard);
        assert_eq!(app.state.store.len(), 4);
        let added = &app.state.store.all()[0];
        assert_eq!(added.description, "Coffee");
        assert_eq!(added.category, Category::Food);
        assert_eq!(added.kind, TransactionKind::Expense);
        assert_eq!(total_expenses(app.state.store.all()), Money::new(26_700));
        assert!(app.state.toast.is_some());
    }

    #[test]
    fn rejected_form_stays_open_with_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        match &app.state.mode {
            Mode::Form(form) => {
                let error = form.error.as_deref().unwrap_or_default();
                assert!(error.contains("description"));
            }
            other => panic!("expected form, got {other:?}"),
        }
        assert_eq!(app.state.store.len(), 3);
    }

    #[test]
    fn escape_discards_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "quinoa");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state.mode, Mode::Dashboard);
        assert_eq!(app.state.store.len(), 3);
        assert!(!app.should_quit);
    }

    #[test]
    fn q_types_inside_dialogs_and_quits_on_dashboard() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(
            app.state.mode,
            Mode::QuickAdd(QuickAddState {
                input: "q".to_string(),
                error: None,
            })
        );

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn quick_add_records_income() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "+100 Scholarship");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.mode, Mode::Dashboard);
        let added = &app.state.store.all()[0];
        assert_eq!(added.kind, TransactionKind::Income);
        assert_eq!(added.amount, Money::new(10_000));
    }

    #[test]
    fn quick_add_errors_are_shown_inline() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        type_text(&mut app, "abc Lunch #food");
        press(&mut app, KeyCode::Enter);

        match &app.state.mode {
            Mode::QuickAdd(quick) => assert!(quick.error.is_some()),
            other => panic!("expected quick add, got {other:?}"),
        }
        assert_eq!(app.state.store.len(), 3);
    }

    #[test]
    fn editing_after_a_rejection_clears_the_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "C");
        match &app.state.mode {
            Mode::Form(form) => {
                assert_eq!(form.error, None);
                assert_eq!(form.description, "C");
            }
            other => panic!("expected form, got {other:?}"),
        }

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('+'));
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        match &app.state.mode {
            Mode::QuickAdd(quick) => {
                assert_eq!(quick.error, None);
                assert_eq!(quick.input, "ab");
            }
            other => panic!("expected quick add, got {other:?}"),
        }
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
