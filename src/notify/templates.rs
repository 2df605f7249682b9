use crate::submission::Submission;

pub const MESSAGE_PLACEHOLDER: &str = "Não informada";

pub fn render_subject(submission: &Submission) -> String {
    format!("📩 Novo contato: {}", submission.full_name)
}

pub fn render_body(submission: &Submission) -> String {
    let message = if submission.message.is_empty() {
        MESSAGE_PLACEHOLDER
    } else {
        submission.message.as_str()
    };

    format!(
        "Novo contato recebido pelo site:

👤 Nome: {name}
📧 Email: {email}
📞 Telefone: {phone}
🔧 Serviço: {service}
💬 Mensagem: {message}
📅 Data: {date}
",
        name = submission.full_name,
        email = submission.email,
        phone = submission.phone,
        service = submission.service_of_interest,
        date = submission.submitted_at,
    )
}
