//! Create-avatar modal state.
//!
//! Data model for the "Create New Avatar" dialog. The rendering widget lives
//! in avatarhub-tui/src/widgets/create_modal.rs.
//!
//! The modal is either absent or shown together with its own form. Opening it
//! always builds a fresh [`CreateAvatarForm`], and closing it drops the form,
//! so typed input never survives a close.

/// Longest accepted avatar name, in characters
pub const MAX_NAME_LEN: usize = 60;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 280;

/// Mount state of the create-avatar modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Absent,
    Shown(CreateAvatarForm),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Shown(_))
    }

    pub fn form(&self) -> Option<&CreateAvatarForm> {
        match self {
            ModalState::Shown(form) => Some(form),
            ModalState::Absent => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut CreateAvatarForm> {
        match self {
            ModalState::Shown(form) => Some(form),
            ModalState::Absent => None,
        }
    }
}

/// Editable fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Type,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Avatar Name",
            FormField::Description => "Description",
            FormField::Type => "Type",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "e.g., influencer",
            FormField::Description => "Describe what your avatar does...",
            FormField::Type => "e.g., fashion",
        }
    }
}

/// Focusable elements of the modal, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Description,
    Type,
    Cancel,
    Create,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Description,
            FormFocus::Description => FormFocus::Type,
            FormFocus::Type => FormFocus::Cancel,
            FormFocus::Cancel => FormFocus::Create,
            FormFocus::Create => FormFocus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Create,
            FormFocus::Description => FormFocus::Name,
            FormFocus::Type => FormFocus::Description,
            FormFocus::Cancel => FormFocus::Type,
            FormFocus::Create => FormFocus::Cancel,
        }
    }

    /// The input field under focus, if focus is on a field rather than a button
    pub fn field(self) -> Option<FormField> {
        match self {
            FormFocus::Name => Some(FormField::Name),
            FormFocus::Description => Some(FormField::Description),
            FormFocus::Type => Some(FormField::Type),
            FormFocus::Cancel | FormFocus::Create => None,
        }
    }
}

impl From<FormField> for FormFocus {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => FormFocus::Name,
            FormField::Description => FormFocus::Description,
            FormField::Type => FormFocus::Type,
        }
    }
}

/// A problem that would block creating the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    NameRequired,
    NameTooLong,
    DescriptionTooLong,
}

impl FormIssue {
    pub fn message(&self) -> String {
        match self {
            FormIssue::NameRequired => "Avatar name is required".to_string(),
            FormIssue::NameTooLong => {
                format!("Avatar name must be at most {MAX_NAME_LEN} characters")
            }
            FormIssue::DescriptionTooLong => {
                format!("Description must be at most {MAX_DESCRIPTION_LEN} characters")
            }
        }
    }
}

/// Transient form data owned by an open modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAvatarForm {
    pub name: String,
    pub description: String,
    pub avatar_type: String,
    pub focus: FormFocus,
}

impl CreateAvatarForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Type => &self.avatar_type,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Type => self.avatar_type = value,
        }
    }

    /// No field holds any input yet; moving focus does not count
    pub fn is_untouched(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.avatar_type.is_empty()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Check the form against the creation rules.
    ///
    /// Nothing consumes these yet beyond the hints under the form; the
    /// "Create Avatar" action has no submission path.
    pub fn validate(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();
        let name = self.name.trim();
        if name.is_empty() {
            issues.push(FormIssue::NameRequired);
        } else if name.chars().count() > MAX_NAME_LEN {
            issues.push(FormIssue::NameTooLong);
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            issues.push(FormIssue::DescriptionTooLong);
        }
        issues
    }
}
