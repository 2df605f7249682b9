pub mod fields;
pub mod parser;
pub mod pipeline;

use chrono::{DateTime, Local};

pub const FULL_NAME: &str = "Nome Completo";
pub const EMAIL: &str = "Email";
pub const PHONE: &str = "Telefone";
pub const SERVICE: &str = "Servico de Interesse";
pub const MESSAGE: &str = "Mensagem";

/// Keys that must be present and non-empty, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 4] = [FULL_NAME, EMAIL, PHONE, SERVICE];

/// `DD/MM/YYYY HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_of_interest: String,
    /// Empty when the form left it out.
    pub message: String,
    pub submitted_at: String,
}

impl Submission {
    /// Spreadsheet row, in column order A..F.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.service_of_interest.clone(),
            self.message.clone(),
            self.submitted_at.clone(),
        ]
    }
}

pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn timestamp_now() -> String {
    format_timestamp(Local::now())
}
