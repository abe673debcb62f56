use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error: {source}",
    Json{source: serde_json::Error} = "JSON error: {source}",
    FieldCount{message: String} = "{message}",
    Format{message: String} = "{message}",
    Range{message: String} = "{message}",
    Usage{message: String} = "{message}"
}

impl Error {
    fn map_message<F: FnOnce(String) -> String>(self, f: F) -> Error {
        match self {
            Error::FieldCount { message } => Error::FieldCount { message: f(message) },
            Error::Format { message } => Error::Format { message: f(message) },
            Error::Range { message } => Error::Range { message: f(message) },
            Error::Usage { message } => Error::Usage { message: f(message) },
            other => other,
        }
    }

    /// Prefix a parse error with the 1-based line it came from.
    pub fn at_line(self, lineno: usize) -> Error {
        self.map_message(|m| format!("Error on line {}: {}", lineno, m))
    }

    /// Append a hint to a parse error, keeping its variant.
    pub fn with_hint(self, hint: &str) -> Error {
        self.map_message(|m| format!("{}{}", m, hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_line_keeps_the_variant() {
        let e = Error::Format { message: "bad token".to_string() }.at_line(3);
        match e {
            Error::Format { message } => assert_eq!(message, "Error on line 3: bad token"),
            other => panic!("wrong variant: {}", other),
        }
    }

    #[test]
    fn with_hint_appends_to_the_message() {
        let e = Error::Range { message: "Minutes out of range".to_string() }
            .with_hint(" (Hint: try --reverse)");
        assert_eq!(e.to_string(), "Minutes out of range (Hint: try --reverse)");
    }

    #[test]
    fn io_errors_pass_through_untouched() {
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        match io.at_line(9) {
            Error::Io { .. } => (),
            other => panic!("wrong variant: {}", other),
        }
    }
}
