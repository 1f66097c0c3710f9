use chrono::NaiveDate;
use engine::{Category, DATE_FORMAT, TransactionInput, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Description,
    Amount,
    Category,
    Date,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Kind,
        FormField::Description,
        FormField::Amount,
        FormField::Category,
        FormField::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn fields() -> &'static [FormField] {
        &Self::ORDER
    }
}

/// Draft of the "add transaction" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub kind: TransactionKind,
    pub description: String,
    pub amount: String,
    pub category: Option<Category>,
    pub date: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl EntryForm {
    /// An expense draft dated `today`, focused on the description.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionKind::Expense,
            description: String::new(),
            amount: String::new(),
            category: None,
            date: today.format(DATE_FORMAT).to_string(),
            focus: FormField::Description,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Typing into the form clears the last submission error.
    pub fn push_char(&mut self, ch: char) {
        self.error = None;
        match self.focus {
            FormField::Description => self.description.push(ch),
            FormField::Amount => {
                if ch.is_ascii_digit() || matches!(ch, '.' | ',') {
                    self.amount.push(ch);
                }
            }
            FormField::Date => {
                if ch.is_ascii_digit() || ch == '-' {
                    self.date.push(ch);
                }
            }
            FormField::Kind => {
                if ch == ' ' {
                    self.toggle_kind();
                }
            }
            FormField::Category => {
                if ch == ' ' {
                    self.cycle_category(true);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            FormField::Description => {
                self.description.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Date => {
                self.date.pop();
            }
            FormField::Category => self.category = None,
            FormField::Kind => {}
        }
    }

    /// Left/right on the selector fields.
    pub fn cycle(&mut self, forward: bool) {
        self.error = None;
        match self.focus {
            FormField::Kind => self.toggle_kind(),
            FormField::Category => self.cycle_category(forward),
            _ => {}
        }
    }

    /// Switches income/expense and drops a category the new kind does not
    /// allow.
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
        if self.category.is_some_and(|c| !c.allows(self.kind)) {
            self.category = None;
        }
    }

    /// Steps through the categories offered for the current kind.
    pub fn cycle_category(&mut self, forward: bool) {
        let options: Vec<Category> = Category::for_kind(self.kind).collect();
        if options.is_empty() {
            return;
        }
        let position = self
            .category
            .and_then(|current| options.iter().position(|c| *c == current));
        let index = match (position, forward) {
            (None, true) => 0,
            (None, false) => options.len() - 1,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.category = Some(options[index]);
    }

    pub fn to_input(&self) -> TransactionInput {
        TransactionInput {
            description: self.description.clone(),
            amount: self.amount.clone(),
            category: self.category,
            date: self.date.clone(),
            kind: self.kind,
        }
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Kind => match self.kind {
                TransactionKind::Expense => "Expense".to_string(),
                TransactionKind::Income => "Income".to_string(),
            },
            FormField::Description => self.description.clone(),
            FormField::Amount => self.amount.clone(),
            FormField::Category => self
                .category
                .map(|c| format!("{} {}", c.emoji(), c.label()))
                .unwrap_or_default(),
            FormField::Date => self.date.clone(),
        }
    }
}
