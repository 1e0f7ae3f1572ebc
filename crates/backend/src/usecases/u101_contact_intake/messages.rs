//! Статические тексты писем и SMS.
//!
//! Пользовательские поля экранируются через `ammonia::clean_text`
//! перед вставкой в HTML.

use contracts::usecases::u101_contact_intake::ContactRequest;

use crate::shared::delivery::{OutgoingEmail, OutgoingSms};

pub fn sms_body(nombre: &str) -> String {
    format!(
        "🌱 ¡Hola {}! Soy Macety, tu amiguita de Naturafy 🍃 Gracias por escribirnos 💚. Sigue cultivando buenas energías 🌿☀️",
        nombre
    )
}

pub fn sms(req: &ContactRequest, telefono: &str) -> OutgoingSms {
    OutgoingSms {
        to: telefono.to_string(),
        body: sms_body(req.display_name()),
    }
}

/// Уведомление администратору о новом контакте
pub fn admin_email(req: &ContactRequest, telefono: &str, admin_to: &str) -> OutgoingEmail {
    let nombre = req.display_name();
    let subject = if nombre.is_empty() {
        "Nuevo contacto desde la web".to_string()
    } else {
        format!("Nuevo contacto: {}", nombre)
    };

    let row = |label: &str, value: &str| {
        format!(
            "<tr><td style=\"padding:6px 12px;font-weight:bold;\">{}</td><td style=\"padding:6px 12px;\">{}</td></tr>",
            label,
            if value.is_empty() {
                "-".to_string()
            } else {
                ammonia::clean_text(value)
            }
        )
    };

    let html = format!(
        r#"<div style="font-family:Arial,sans-serif;color:#2d3b2d;">
<h2 style="color:#3a7d44;">🌱 Nuevo contacto en Naturafy</h2>
<table style="border-collapse:collapse;">
{}{}{}{}{}
</table>
</div>"#,
        row("Nombre", nombre),
        row("Teléfono", telefono),
        row("Email", req.reply_email().unwrap_or("")),
        row("Mensaje", req.message_text()),
        row("Recibir SMS", if req.wants_sms() { "Sí" } else { "No" }),
    );

    OutgoingEmail {
        to: admin_to.to_string(),
        subject,
        html,
    }
}

/// Благодарственное письмо отправителю
pub fn thank_you_email(req: &ContactRequest, to: &str) -> OutgoingEmail {
    let saludo = match req.display_name() {
        "" => "¡Hola!".to_string(),
        nombre => format!("¡Hola {}!", ammonia::clean_text(nombre)),
    };

    let html = format!(
        r#"<div style="font-family:Arial,sans-serif;color:#2d3b2d;max-width:560px;">
<h1 style="color:#3a7d44;">{}</h1>
<p>Soy <strong>Macety</strong>, tu amiguita de Naturafy 🍃</p>
<p>Recibimos tu mensaje y muy pronto nos pondremos en contacto contigo.</p>
<p>Mientras tanto, sigue cultivando buenas energías 🌿☀️</p>
<p style="color:#888;font-size:12px;">Naturafy · Cuidado inteligente para tus plantas</p>
</div>"#,
        saludo
    );

    OutgoingEmail {
        to: to.to_string(),
        subject: "¡Gracias por contactar a Naturafy! 🌱".to_string(),
        html,
    }
}
