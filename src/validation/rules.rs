/// A constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Empty values pass and skip every other rule.
    Optional,
    Required,
    MaxBytes(usize),
    /// No control characters.
    Printable,
    /// Digits, spaces and `+-()`, with at least one digit.
    Phone,
    /// `local@domain`, domain made of at least two non-empty dot-separated labels.
    Mail,
}

impl Rule {
    /// Returns a description of the violation, or `None` if `value` passes.
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Rule::Optional => None,
            Rule::Required => value.is_empty().then(|| "must not be empty".to_string()),
            Rule::MaxBytes(max) => (value.len() > *max).then(|| {
                format!("length {} bytes exceeds maximum {} bytes", value.len(), max)
            }),
            Rule::Printable => value.find(char::is_control).map(|pos| {
                format!("contains a control character at byte offset {}", pos)
            }),
            Rule::Phone => (!is_phone(value))
                .then(|| "must contain only digits, spaces and +-() characters".to_string()),
            Rule::Mail => (!is_mail(value))
                .then(|| "must be a mail address of the form local@domain".to_string()),
        }
    }
}

fn is_phone(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

fn is_mail(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
