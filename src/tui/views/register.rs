//! Registration wizard view
//!
//! Shows the fields of the current step as a focusable form. Every edit is
//! pushed straight into the wizard so its error map stays in sync with what
//! is on screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{
    Choice, Field, FieldKind, FieldValue, QualificationField, RegistrationDraft,
};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::StepLayout;
use crate::tui::widgets::TextInput;
use crate::wizard::{AdvanceOutcome, Step, WizardController};

/// One focusable row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItem {
    /// A draft field
    Field(Field),
    /// A field of the qualification edit buffer
    Qualification(QualificationField),
    /// Button that appends the edit buffer
    AddQualification,
}

impl FormItem {
    fn is_textual(&self) -> bool {
        match self {
            Self::Field(field) => field.is_textual(),
            Self::Qualification(_) => true,
            Self::AddQualification => false,
        }
    }
}

/// State for the registration form
#[derive(Debug, Clone)]
pub struct RegisterFormState {
    /// The wizard being driven
    pub wizard: WizardController,

    /// Index of the focused row in [`Self::items`]
    pub focus: usize,

    /// Edit buffer for the focused text row
    pub input: TextInput,

    /// Highlighted entry of the language list
    pub language_index: usize,
}

impl RegisterFormState {
    /// A form on step 1 whose language list is seeded with `language`
    pub fn new(language: &str) -> Self {
        Self::with_wizard(WizardController::with_language(language))
    }

    pub fn with_wizard(wizard: WizardController) -> Self {
        let mut state = Self {
            wizard,
            focus: 0,
            input: TextInput::new(),
            language_index: 0,
        };
        state.sync_input();
        state
    }

    pub fn step(&self) -> Step {
        self.wizard.current_step()
    }

    /// Focusable rows of the current step
    pub fn items(&self) -> Vec<FormItem> {
        let mut items = Vec::new();
        for field in self.wizard.visible_fields() {
            if field == Field::Qualifications {
                items.extend(QualificationField::ALL.map(FormItem::Qualification));
                items.push(FormItem::AddQualification);
            } else {
                items.push(FormItem::Field(field));
            }
        }
        items
    }

    pub fn focused_item(&self) -> Option<FormItem> {
        self.items().get(self.focus).copied()
    }

    pub fn next_item(&mut self) {
        let count = self.items().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
        self.sync_input();
    }

    pub fn prev_item(&mut self) {
        let count = self.items().len();
        if count > 0 {
            self.focus = self.focus.checked_sub(1).unwrap_or(count - 1);
        }
        self.sync_input();
    }

    /// Reload the edit buffer from the focused row
    fn sync_input(&mut self) {
        let count = self.items().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }

        let draft = self.wizard.draft();
        let input = match self.focused_item() {
            Some(FormItem::Field(field)) if field.is_textual() => TextInput::new()
                .label(field.label())
                .masked(field.kind() == FieldKind::Secret)
                .content(draft.text(field).unwrap_or_default()),
            Some(FormItem::Qualification(field)) => TextInput::new()
                .label(field.label())
                .content(draft.current_qualification.get(field)),
            _ => TextInput::new(),
        };
        self.input = input.focused(true);
    }

    /// Push the edit buffer into the focused row's field
    fn commit_input(&mut self) -> Result<()> {
        let value = self.input.value().to_string();
        match self.focused_item() {
            Some(FormItem::Field(field)) if field.is_textual() => {
                self.wizard.set_field(field, value)?;
            }
            Some(FormItem::Qualification(field)) => {
                self.wizard.set_qualification_field(field, value);
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply an edit to the text row under focus. Returns false when the
    /// focused row is not textual.
    pub fn edit(&mut self, edit: impl FnOnce(&mut TextInput)) -> Result<bool> {
        if !self.focused_item().is_some_and(|item| item.is_textual()) {
            return Ok(false);
        }
        edit(&mut self.input);
        self.commit_input()?;
        Ok(true)
    }

    /// Step the focused picker forwards or backwards
    pub fn cycle_choice(&mut self, forward: bool) -> Result<bool> {
        let Some(FormItem::Field(field)) = self.focused_item() else {
            return Ok(false);
        };
        let Some(value) = cycled(field, self.wizard.draft(), forward) else {
            return Ok(false);
        };
        self.wizard.set_field(field, value)?;
        self.sync_input();
        Ok(true)
    }

    /// Flip the focused toggle
    pub fn toggle_flag(&mut self) -> Result<bool> {
        let Some(FormItem::Field(field)) = self.focused_item() else {
            return Ok(false);
        };
        if field.kind() != FieldKind::Flag {
            return Ok(false);
        }
        let current = self.wizard.draft().has_qualifications;
        self.wizard.set_field(field, !current)?;
        self.sync_input();
        Ok(true)
    }

    /// Append the qualification edit buffer
    pub fn add_qualification(&mut self) -> bool {
        let added = self.wizard.add_qualification();
        if added {
            self.focus = self
                .items()
                .iter()
                .position(|item| *item == FormItem::Qualification(QualificationField::Title))
                .unwrap_or(0);
            self.sync_input();
        }
        added
    }

    pub fn next_language(&mut self) {
        let count = self.wizard.draft().languages.len();
        if count > 0 {
            self.language_index = (self.language_index + 1) % count;
        }
    }

    pub fn prev_language(&mut self) {
        let count = self.wizard.draft().languages.len();
        if count > 0 {
            self.language_index = self.language_index.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Remove the highlighted language
    pub fn remove_selected_language(&mut self) -> bool {
        let Some(language) = self
            .wizard
            .draft()
            .languages
            .iter()
            .nth(self.language_index)
            .map(str::to_string)
        else {
            return false;
        };

        let removed = self.wizard.remove_language(&language);
        let count = self.wizard.draft().languages.len();
        if self.language_index >= count {
            self.language_index = count.saturating_sub(1);
        }
        removed
    }

    /// Validate and move on. A rejected step focuses its first invalid row.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = self.wizard.advance();
        match outcome {
            AdvanceOutcome::Advanced { .. } => {
                self.focus = 0;
                self.language_index = 0;
            }
            AdvanceOutcome::Rejected => {
                let errors = self.wizard.errors();
                if let Some(index) = self.items().iter().position(|item| {
                    matches!(item, FormItem::Field(field) if errors.contains(*field))
                }) {
                    self.focus = index;
                }
            }
            AdvanceOutcome::ReadyToSubmit => {}
        }
        self.sync_input();
        outcome
    }

    /// Go back one step; false on step 1
    pub fn retreat(&mut self) -> bool {
        let moved = self.wizard.retreat();
        if moved {
            self.focus = 0;
            self.language_index = 0;
            self.sync_input();
        }
        moved
    }
}

/// Value one position away from the current selection of a picker field
fn cycled(field: Field, draft: &RegistrationDraft, forward: bool) -> Option<FieldValue> {
    fn pick<C: Choice>(current: Option<C>, forward: bool) -> Option<C> {
        if forward {
            C::next_choice(current)
        } else {
            C::prev_choice(current)
        }
    }

    let value = match field.kind() {
        FieldKind::AccountType => FieldValue::AccountType(pick(draft.account_type, forward)),
        FieldKind::Occupation => FieldValue::Occupation(pick(draft.occupation_type, forward)),
        FieldKind::Gender => FieldValue::Gender(pick(draft.gender, forward)),
        FieldKind::Medical => FieldValue::Medical(pick(draft.medical_status, forward)),
        _ => return None,
    };
    Some(value)
}

/// Render the registration wizard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(form) = app.register.as_ref() else {
        return;
    };

    let step = form.step();
    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = StepLayout::new(inner);
    frame.render_widget(Paragraph::new(progress_line(step)), layout.progress);

    let (lines, focused_line) = form_lines(form);
    let visible = layout.fields.height.max(1) as usize;
    let scroll = focused_line.saturating_sub(visible.saturating_sub(2));
    let fields = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    frame.render_widget(fields, layout.fields);

    frame.render_widget(Paragraph::new(hint_line(form)), layout.hints);
}

fn progress_line(step: Step) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("Step {} of {}  ", step.number(), Step::ALL.len()),
        Style::default().fg(Color::White),
    )];
    for other in Step::ALL {
        let (symbol, color) = if other < step {
            ("● ", Color::Green)
        } else if other == step {
            ("● ", Color::Cyan)
        } else {
            ("○ ", Color::DarkGray)
        };
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    Line::from(spans)
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

/// Lines for every row, plus the index of the focused row's line
fn form_lines(form: &RegisterFormState) -> (Vec<Line<'static>>, usize) {
    let draft = form.wizard.draft();
    let errors = form.wizard.errors();
    let mut lines = Vec::new();
    let mut focused_line = 0;

    for (index, item) in form.items().into_iter().enumerate() {
        let focused = index == form.focus;
        if focused {
            focused_line = lines.len();
        }

        match item {
            FormItem::Field(field) if field.is_textual() => {
                if focused {
                    lines.push(form.input.line());
                } else {
                    let input = TextInput::new()
                        .label(field.label())
                        .masked(field.kind() == FieldKind::Secret)
                        .content(draft.text(field).unwrap_or_default());
                    lines.push(input.line());
                }
            }
            FormItem::Field(Field::Languages) => {
                lines.push(language_line(form, focused));
            }
            FormItem::Field(field) if field.kind() == FieldKind::Flag => {
                let mark = if draft.has_qualifications { "[x]" } else { "[ ]" };
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", field.label()), label_style(focused)),
                    Span::styled(
                        format!("{} {}", mark, draft.display_value(field)),
                        Style::default().fg(Color::White),
                    ),
                ]));
            }
            FormItem::Field(field) => {
                let value = draft.display_value(field);
                let shown = if value.is_empty() {
                    Span::styled("(not selected)", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(value, Style::default().fg(Color::White))
                };
                let mut spans = vec![
                    Span::styled(format!("{}: ", field.label()), label_style(focused)),
                    Span::styled("< ", Style::default().fg(Color::DarkGray)),
                    shown,
                    Span::styled(" >", Style::default().fg(Color::DarkGray)),
                ];
                if focused {
                    spans.push(Span::styled(
                        "  (←/→ to change)",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.push(Line::from(spans));

                if let Some(description) = draft.account_type.filter(|_| field == Field::AccountType)
                {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", description.description()),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
            FormItem::Qualification(field) => {
                let input = if focused {
                    form.input.clone()
                } else {
                    TextInput::new()
                        .label(field.label())
                        .content(draft.current_qualification.get(field))
                };
                lines.push(input.line());
            }
            FormItem::AddQualification => {
                let style = if focused {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default().fg(Color::Green)
                };
                lines.push(Line::from(Span::styled("[ + Add Qualification ]", style)));
                for qualification in &draft.qualifications {
                    lines.push(Line::from(Span::styled(
                        format!("  • {} ({})", qualification.title, qualification.year),
                        Style::default().fg(Color::White),
                    )));
                }
            }
        }

        if let FormItem::Field(field) = item {
            if let Some(error) = errors.get(field) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", error.message),
                    Style::default().fg(Color::Red),
                )));
            }
        }
    }

    (lines, focused_line)
}

fn language_line(form: &RegisterFormState, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{}: ", Field::Languages.label()),
        label_style(focused),
    )];

    for (index, language) in form.wizard.draft().languages.iter().enumerate() {
        let style = if focused && index == form.language_index {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", language), style));
        spans.push(Span::raw(" "));
    }

    if focused {
        spans.push(Span::styled(
            "(Enter to add, Del to remove)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn hint_line(form: &RegisterFormState) -> Line<'static> {
    let (enter, esc) = match (form.focused_item(), form.step()) {
        (Some(FormItem::AddQualification), _) => (" Add  ", " Back"),
        (Some(FormItem::Field(Field::Languages)), _) => (" Add language  ", " Back"),
        (_, step) if step.is_last() => (" Submit  ", " Back"),
        (_, Step::Identity) => (" Next  ", " Leave"),
        _ => (" Next  ", " Back"),
    };

    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Move  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(enter),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(esc),
    ])
}

/// Handle key input for the registration wizard
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    let Some(form) = app.register.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Esc => {
            if !form.retreat() {
                app.open_dialog(ActiveDialog::ConfirmDiscard);
            }
        }

        KeyCode::Tab | KeyCode::Down => form.next_item(),
        KeyCode::BackTab | KeyCode::Up => form.prev_item(),

        KeyCode::Enter => match form.focused_item() {
            Some(FormItem::AddQualification) => {
                if !form.add_qualification() {
                    app.set_status("Enter a qualification title first");
                }
            }
            Some(FormItem::Field(Field::Languages)) => {
                app.open_dialog(ActiveDialog::AddLanguage);
            }
            _ => match form.advance() {
                AdvanceOutcome::Advanced { to, .. } => app.set_status(to.to_string()),
                AdvanceOutcome::Rejected => {
                    let count = form.wizard.errors().len();
                    app.set_status(format!("{} field(s) need attention", count));
                }
                AdvanceOutcome::ReadyToSubmit => app.submit_registration(),
            },
        },

        KeyCode::Left => {
            if form.focused_item() == Some(FormItem::Field(Field::Languages)) {
                form.prev_language();
            } else if !form.cycle_choice(false)? {
                form.edit(TextInput::move_left)?;
            }
        }
        KeyCode::Right => {
            if form.focused_item() == Some(FormItem::Field(Field::Languages)) {
                form.next_language();
            } else if !form.cycle_choice(true)? {
                form.edit(TextInput::move_right)?;
            }
        }
        KeyCode::Home => {
            form.edit(TextInput::move_start)?;
        }
        KeyCode::End => {
            form.edit(TextInput::move_end)?;
        }

        KeyCode::Backspace | KeyCode::Delete
            if form.focused_item() == Some(FormItem::Field(Field::Languages)) =>
        {
            form.remove_selected_language();
        }
        KeyCode::Backspace => {
            form.edit(TextInput::backspace)?;
        }
        KeyCode::Delete => {
            form.edit(TextInput::delete)?;
        }

        KeyCode::Char(' ') if !form.focused_item().is_some_and(|item| item.is_textual()) => {
            if !form.toggle_flag()? {
                form.cycle_choice(true)?;
            }
        }
        KeyCode::Char(c) => {
            form.edit(|input| input.insert(c))?;
        }

        _ => return Ok(false),
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, MedicalStatus};
    use crate::validation::ValidationErrorKind;

    fn type_text(form: &mut RegisterFormState, text: &str) {
        for c in text.chars() {
            form.edit(|input| input.insert(c)).unwrap();
        }
    }

    fn focus(form: &mut RegisterFormState, target: FormItem) {
        while form.focused_item() != Some(target) {
            form.next_item();
        }
    }

    #[test]
    fn test_step_one_items() {
        let form = RegisterFormState::new("English");
        assert_eq!(
            form.items(),
            vec![
                FormItem::Field(Field::FirstName),
                FormItem::Field(Field::LastName),
                FormItem::Field(Field::Email),
                FormItem::Field(Field::Password),
                FormItem::Field(Field::ConfirmPassword),
            ]
        );
        assert!(form.input.focused);
    }

    #[test]
    fn test_typing_updates_draft() {
        let mut form = RegisterFormState::new("English");
        type_text(&mut form, "Ada");
        assert_eq!(form.wizard.draft().first_name, "Ada");

        form.edit(TextInput::backspace).unwrap();
        assert_eq!(form.wizard.draft().first_name, "Ad");
    }

    #[test]
    fn test_password_input_is_masked() {
        let mut form = RegisterFormState::new("English");
        focus(&mut form, FormItem::Field(Field::Password));
        assert!(form.input.masked);
        type_text(&mut form, "Secret1!");
        assert_eq!(form.wizard.draft().password.expose(), "Secret1!");
    }

    #[test]
    fn test_rejected_advance_focuses_first_error() {
        let mut form = RegisterFormState::new("English");
        type_text(&mut form, "Ada");
        form.next_item();
        type_text(&mut form, "Lovelace");
        focus(&mut form, FormItem::Field(Field::ConfirmPassword));

        assert_eq!(form.advance(), AdvanceOutcome::Rejected);
        assert_eq!(form.focused_item(), Some(FormItem::Field(Field::Email)));
        assert_eq!(
            form.wizard.errors().kind_of(Field::Email),
            Some(ValidationErrorKind::RequiredField)
        );

        type_text(&mut form, "a");
        assert!(!form.wizard.errors().contains(Field::Email));
    }

    fn identity_draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Abcdef1!".into(),
            ..RegistrationDraft::default()
        }
    }

    #[test]
    fn test_cycle_choice_sets_account_type() {
        let mut form = RegisterFormState::with_wizard(WizardController::with_draft(identity_draft()));
        assert!(matches!(form.advance(), AdvanceOutcome::Advanced { .. }));
        assert_eq!(form.step(), Step::AccountType);

        assert!(form.cycle_choice(true).unwrap());
        assert_eq!(form.wizard.draft().account_type, Some(AccountType::SoleTrader));
        assert!(form.cycle_choice(false).unwrap());
        assert_eq!(form.wizard.draft().account_type, Some(AccountType::Worker));
    }

    #[test]
    fn test_toggle_hides_qualification_rows() {
        let draft = RegistrationDraft {
            account_type: Some(AccountType::Company),
            ..identity_draft()
        };
        let mut form = RegisterFormState::with_wizard(WizardController::with_draft(draft));
        for _ in 0..3 {
            assert!(matches!(form.advance(), AdvanceOutcome::Advanced { .. }));
        }
        assert_eq!(form.step(), Step::Qualifications);
        assert!(form.items().contains(&FormItem::AddQualification));

        assert!(form.toggle_flag().unwrap());
        assert!(!form.wizard.draft().has_qualifications);
        assert_eq!(form.items(), vec![FormItem::Field(Field::HasQualifications)]);
    }

    #[test]
    fn test_add_qualification_resets_buffer() {
        let mut draft = RegistrationDraft::default();
        draft.current_qualification.title = "CSCS Card".into();
        let mut form = RegisterFormState::with_wizard(WizardController::with_draft(draft));

        assert!(form.add_qualification());
        assert_eq!(form.wizard.draft().qualifications.len(), 1);
        assert!(!form.add_qualification());
    }

    #[test]
    fn test_remove_selected_language() {
        let mut form = RegisterFormState::new("English");
        form.wizard.add_language("Polish");
        form.next_language();

        assert!(form.remove_selected_language());
        let languages: Vec<&str> = form.wizard.draft().languages.iter().collect();
        assert_eq!(languages, vec!["English"]);
        assert_eq!(form.language_index, 0);
    }

    #[test]
    fn test_cycle_medical_status() {
        let draft = RegistrationDraft {
            medical_status: Some(MedicalStatus::Fit),
            ..RegistrationDraft::default()
        };
        let form = RegisterFormState::with_wizard(WizardController::with_draft(draft));
        let cycled = cycled(Field::MedicalStatus, form.wizard.draft(), true);
        assert_eq!(cycled, Some(FieldValue::Medical(Some(MedicalStatus::History))));
    }

    #[test]
    fn test_retreat_on_first_step() {
        let mut form = RegisterFormState::new("English");
        assert!(!form.retreat());
    }
}
