use serde::Serialize;

/// Categories offered by the expense form, in display order.
pub const CATEGORIES: &[&str] = &[
    "Household needs",
    "Water",
    "Stationery",
    "Repairs and maintenance",
    "Transportation",
    "Salary, advance, vacation pay",
    "Other expenses",
];

pub const CATEGORY_SALARY: &str = "Salary, advance, vacation pay";
pub const CATEGORY_OTHER: &str = "Other expenses";

pub const COMMENT_PLACEHOLDER_DEFAULT: &str = "Additional information";
pub const COMMENT_PLACEHOLDER_SALARY: &str = "Specify employee full name";

/// Raw field text as typed into the form, before any validation.
#[derive(Clone, PartialEq, Default)]
pub struct FormValues {
    pub pharmacy_number: String,
    pub category: String,
    pub comment: String,
    pub amount: String,
}

/// The record POSTed to the webhook. Built only from values that already
/// passed validation; dropped once the request resolves.
#[derive(Clone, PartialEq, Serialize)]
pub struct ExpenseSubmission {
    pub pharmacy_number: String,
    pub category: String,
    pub comment: String,
    pub amount: f64,
}

impl FormValues {
    /// Parses the raw values into a submission payload. Returns `None` when
    /// the amount text is not a usable number; callers validate first, so a
    /// `None` here means validation was skipped.
    pub fn to_submission(&self) -> Option<ExpenseSubmission> {
        let amount = self.amount.trim().parse::<f64>().ok()?;
        if !amount.is_finite() || amount <= 0.0 {
            return None;
        }
        Some(ExpenseSubmission {
            pharmacy_number: self.pharmacy_number.clone(),
            category: self.category.clone(),
            comment: self.comment.clone(),
            amount,
        })
    }
}

/// Whether the comment field is mandatory for the given category.
pub fn comment_required(category: &str) -> bool {
    category == CATEGORY_SALARY || category == CATEGORY_OTHER
}

/// Placeholder shown in the comment field for the given category.
pub fn comment_placeholder(category: &str) -> &'static str {
    if category == CATEGORY_SALARY {
        COMMENT_PLACEHOLDER_SALARY
    } else {
        COMMENT_PLACEHOLDER_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            pharmacy_number: "99".to_string(),
            category: "Water".to_string(),
            comment: "".to_string(),
            amount: "150".to_string(),
        }
    }

    #[test]
    fn comment_rules_depend_on_category() {
        assert!(comment_required(CATEGORY_SALARY));
        assert!(comment_required(CATEGORY_OTHER));
        assert!(!comment_required("Water"));
        assert!(!comment_required(""));
    }

    #[test]
    fn salary_category_changes_placeholder() {
        assert_eq!(comment_placeholder(CATEGORY_SALARY), COMMENT_PLACEHOLDER_SALARY);
        assert_eq!(comment_placeholder(CATEGORY_OTHER), COMMENT_PLACEHOLDER_DEFAULT);
        assert_eq!(comment_placeholder("Water"), COMMENT_PLACEHOLDER_DEFAULT);
    }

    #[test]
    fn submission_serializes_amount_as_number() {
        let submission = valid_values().to_submission().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pharmacy_number": "99",
                "category": "Water",
                "comment": "",
                "amount": 150.0,
            })
        );
    }

    #[test]
    fn non_positive_or_garbage_amounts_yield_no_submission() {
        for bad in ["0", "-5", "", "abc", "NaN", "inf"] {
            let mut values = valid_values();
            values.amount = bad.to_string();
            assert!(values.to_submission().is_none(), "amount {:?}", bad);
        }
    }
}
