use crate::model::{self, FormValues};

pub const ERR_PHARMACY: &str = "Enter pharmacy number";
pub const ERR_CATEGORY: &str = "Select a category";
pub const ERR_COMMENT_SALARY: &str = "Specify full name";
pub const ERR_COMMENT_OTHER: &str = "Comment is mandatory";
pub const ERR_AMOUNT: &str = "Enter a valid amount";

/// Per-field validation state. Rendering derives the error class and the
/// message slot from this, never the other way around.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum FieldState {
    #[default]
    Valid,
    Invalid(&'static str),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldState::Valid => None,
            FieldState::Invalid(msg) => Some(msg),
        }
    }
}

/// Validation result for the whole form, one state per field.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldStates {
    pub pharmacy_number: FieldState,
    pub category: FieldState,
    pub comment: FieldState,
    pub amount: FieldState,
}

impl FieldStates {
    pub fn all_valid(&self) -> bool {
        !self.pharmacy_number.is_invalid()
            && !self.category.is_invalid()
            && !self.comment.is_invalid()
            && !self.amount.is_invalid()
    }

    /// Same states with the comment error dropped. Applied when the category
    /// changes, so a stale requirement does not linger on screen.
    pub fn without_comment_error(&self) -> Self {
        Self {
            comment: FieldState::Valid,
            ..self.clone()
        }
    }
}

/// Checks all four fields independently and returns a fresh set of states,
/// replacing whatever was rendered before. No short-circuiting: every field
/// gets marked on a single pass.
pub fn validate(values: &FormValues) -> FieldStates {
    let mut states = FieldStates::default();

    if values.pharmacy_number.trim().is_empty() {
        states.pharmacy_number = FieldState::Invalid(ERR_PHARMACY);
    }

    if values.category.is_empty() {
        states.category = FieldState::Invalid(ERR_CATEGORY);
    }

    if model::comment_required(&values.category) && values.comment.trim().is_empty() {
        let msg = if values.category == model::CATEGORY_SALARY {
            ERR_COMMENT_SALARY
        } else {
            ERR_COMMENT_OTHER
        };
        states.comment = FieldState::Invalid(msg);
    }

    match values.amount.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => {}
        _ => states.amount = FieldState::Invalid(ERR_AMOUNT),
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CATEGORY_OTHER, CATEGORY_SALARY};

    fn valid_values() -> FormValues {
        FormValues {
            pharmacy_number: "99".to_string(),
            category: "Water".to_string(),
            comment: "".to_string(),
            amount: "150".to_string(),
        }
    }

    #[test]
    fn valid_values_pass() {
        let states = validate(&valid_values());
        assert!(states.all_valid());
        assert_eq!(states, FieldStates::default());
    }

    #[test]
    fn empty_pharmacy_number_is_the_only_error() {
        let mut values = valid_values();
        values.pharmacy_number = "   ".to_string();
        let states = validate(&values);
        assert_eq!(states.pharmacy_number, FieldState::Invalid(ERR_PHARMACY));
        assert_eq!(states.category, FieldState::Valid);
        assert_eq!(states.comment, FieldState::Valid);
        assert_eq!(states.amount, FieldState::Valid);
        assert!(!states.all_valid());
    }

    #[test]
    fn missing_category_is_the_only_error() {
        let mut values = valid_values();
        values.category = "".to_string();
        let states = validate(&values);
        assert_eq!(states.category, FieldState::Invalid(ERR_CATEGORY));
        assert_eq!(states.pharmacy_number, FieldState::Valid);
        assert_eq!(states.comment, FieldState::Valid);
        assert_eq!(states.amount, FieldState::Valid);
    }

    #[test]
    fn salary_category_requires_full_name_comment() {
        let mut values = valid_values();
        values.category = CATEGORY_SALARY.to_string();
        let states = validate(&values);
        assert_eq!(states.comment, FieldState::Invalid(ERR_COMMENT_SALARY));
        assert!(!states.all_valid());

        values.comment = "Anna Petrova".to_string();
        assert!(validate(&values).all_valid());
    }

    #[test]
    fn other_expenses_requires_a_comment() {
        let mut values = valid_values();
        values.category = CATEGORY_OTHER.to_string();
        let states = validate(&values);
        assert_eq!(states.comment, FieldState::Invalid(ERR_COMMENT_OTHER));

        values.comment = "taxi for courier".to_string();
        assert!(validate(&values).all_valid());
    }

    #[test]
    fn whitespace_only_comment_counts_as_missing() {
        let mut values = valid_values();
        values.category = CATEGORY_OTHER.to_string();
        values.comment = "   ".to_string();
        assert_eq!(
            validate(&values).comment,
            FieldState::Invalid(ERR_COMMENT_OTHER)
        );
    }

    #[test]
    fn comment_is_optional_for_plain_categories() {
        let mut values = valid_values();
        values.comment = "".to_string();
        assert!(validate(&values).all_valid());
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        for bad in ["0", "-5", "", "  ", "12x"] {
            let mut values = valid_values();
            values.amount = bad.to_string();
            let states = validate(&values);
            assert_eq!(states.amount, FieldState::Invalid(ERR_AMOUNT), "amount {:?}", bad);
            assert_eq!(states.pharmacy_number, FieldState::Valid);
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let values = FormValues::default();
        let first = validate(&values);
        let second = validate(&values);
        assert_eq!(first, second);
        assert_eq!(first.pharmacy_number, FieldState::Invalid(ERR_PHARMACY));
        assert_eq!(first.category, FieldState::Invalid(ERR_CATEGORY));
        assert_eq!(first.amount, FieldState::Invalid(ERR_AMOUNT));
    }

    #[test]
    fn category_switch_clears_stale_comment_error() {
        let mut values = valid_values();
        values.category = CATEGORY_OTHER.to_string();
        let states = validate(&values);
        assert!(states.comment.is_invalid());

        let cleared = states.without_comment_error();
        assert_eq!(cleared.comment, FieldState::Valid);
        assert_eq!(cleared.pharmacy_number, states.pharmacy_number);
        assert_eq!(cleared.amount, states.amount);
    }
}
