/// Generator session state and its transitions

use std::rc::Rc;

use uuid::Uuid;
use yew::functional::Reducible;

use crate::address::parse_combined_input;
use crate::config::GeneratorConfig;
use crate::email_data::GeneratedEmail;
use crate::error::ValidationError;
use crate::history::History;

#[derive(Debug, Clone, PartialEq)]
struct CopiedFlag {
    entry_id: String,
    token: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorAction {
    /// Combined field edited; may carry a full "user@domain"
    UsernameInput(String),
    DomainInput(String),
    IncrementCounter,
    DecrementCounter,
    /// Id and timestamp are supplied by the caller
    Generate { id: String, timestamp: f64 },
    Reset,
    ClearHistory,
    /// Copy button clicked; supersedes every earlier request
    CopyRequested { token: Uuid },
    /// Clipboard write finished; dropped unless `token` is the latest request
    CopyConfirmed { entry_id: String, token: Uuid },
    /// Fired by the feedback timer; ignored unless `token` is still shown
    CopyExpired { token: Uuid },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorState {
    pub username: String,
    pub domain: String,
    pub counter: u32,
    pub history: History,
    pub error: Option<ValidationError>,
    start_counter: u32,
    latest_copy: Option<Uuid>,
    copied: Option<CopiedFlag>,
}

impl GeneratorState {
    pub fn new(config: &GeneratorConfig) -> Self {
        let start_counter = config.start_counter();
        GeneratorState {
            username: String::new(),
            domain: String::new(),
            counter: start_counter,
            history: History::new(),
            error: None,
            start_counter,
            latest_copy: None,
            copied: None,
        }
    }

    /// Entry currently showing "copied"
    pub fn copied_id(&self) -> Option<&str> {
        self.copied.as_ref().map(|flag| flag.entry_id.as_str())
    }

    pub fn is_copied(&self, entry_id: &str) -> bool {
        self.copied_id() == Some(entry_id)
    }

    /// Address to put on the clipboard for a history entry
    pub fn copy_text(&self, entry_id: &str) -> Option<&str> {
        self.history.get(entry_id).map(|entry| entry.full_email.as_str())
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: GeneratorAction) {
        match action {
            GeneratorAction::UsernameInput(raw) => {
                let parsed = parse_combined_input(&raw);
                self.username = parsed.username;
                if let Some(domain) = parsed.domain {
                    self.domain = domain;
                }
                self.error = None;
            }
            GeneratorAction::DomainInput(domain) => {
                self.domain = domain;
                self.error = None;
            }
            GeneratorAction::IncrementCounter => {
                self.counter = self.counter.saturating_add(1);
            }
            GeneratorAction::DecrementCounter => {
                self.counter = self.counter.saturating_sub(1).max(1);
            }
            GeneratorAction::Generate { id, timestamp } => self.generate(id, timestamp),
            GeneratorAction::Reset => {
                self.username.clear();
                self.domain.clear();
                self.counter = self.start_counter;
                self.error = None;
                log::debug!("Form reset, counter back to {}", self.counter);
            }
            GeneratorAction::ClearHistory => {
                log::info!("Clearing {} history entries", self.history.len());
                self.history.clear();
            }
            GeneratorAction::CopyRequested { token } => {
                self.latest_copy = Some(token);
            }
            GeneratorAction::CopyConfirmed { entry_id, token } => {
                if self.latest_copy == Some(token) {
                    self.copied = Some(CopiedFlag { entry_id, token });
                } else {
                    log::debug!("Dropping superseded copy of {}", entry_id);
                }
            }
            GeneratorAction::CopyExpired { token } => {
                if self.copied.as_ref().is_some_and(|flag| flag.token == token) {
                    self.copied = None;
                }
            }
        }
    }

    fn generate(&mut self, id: String, timestamp: f64) {
        match GeneratedEmail::generate(&self.username, self.counter, &self.domain, id, timestamp) {
            Ok(entry) => {
                log::info!("Generated {}", entry.full_email);
                self.history.prepend(entry);
                self.counter = self.counter.saturating_add(1);
                self.error = None;
            }
            Err(e) => {
                log::debug!("Generate rejected: {:?}", e);
                self.error = Some(e);
            }
        }
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl Reducible for GeneratorState {
    type Action = GeneratorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
