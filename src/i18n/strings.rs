use crate::i18n::Language;

/// All localized interface strings for a language.
///
/// Page titles, descriptions and headings live in the SEO metadata tables;
/// this struct only carries the chrome around them (navigation, footer,
/// contact form and its outcome messages).
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_services: &'static str,
    pub nav_pricing: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,

    /// Accessible label of the language switcher
    pub language_switcher: &'static str,

    // ==================== Footer ====================
    pub footer_legal: &'static str,
    pub footer_privacy: &'static str,
    pub footer_tagline: &'static str,

    /// Heading of the document-translation link list on the services page
    pub documents_heading: &'static str,

    // ==================== Contact Form ====================
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_phone: &'static str,
    pub form_document_type: &'static str,
    pub form_message: &'static str,
    pub form_submit: &'static str,

    // ==================== Contact Outcomes ====================
    pub contact_success: &'static str,

    /// Shown when the relay rejected the submission
    pub contact_rejected: &'static str,

    /// Shown when the relay could not be reached
    pub contact_unreachable: &'static str,

    /// Shown when local validation failed
    pub contact_invalid: &'static str,

    /// Shown when the form relay is not configured on this deployment
    pub contact_unavailable: &'static str,
}

impl LanguageStrings {
    /// Get the strings for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.code() {
            "de" => &GERMAN_STRINGS,
            "fr" => &FRENCH_STRINGS,
            "en" => &ENGLISH_STRINGS,
            _ => &SPANISH_STRINGS,
        }
    }
}

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Inicio",
    nav_services: "Servicios",
    nav_pricing: "Precios",
    nav_about: "Sobre mí",
    nav_contact: "Contacto",
    language_switcher: "Idioma",
    footer_legal: "Aviso legal",
    footer_privacy: "Política de privacidad",
    footer_tagline: "Traductora jurada de alemán, francés e inglés nombrada por el MAEC",
    documents_heading: "Documentos que traduzco",
    form_name: "Nombre",
    form_email: "Correo electrónico",
    form_phone: "Teléfono",
    form_document_type: "Tipo de documento",
    form_message: "Mensaje",
    form_submit: "Solicitar presupuesto",
    contact_success: "¡Gracias! He recibido tu mensaje y te responderé en menos de 24 horas.",
    contact_rejected: "No se ha podido enviar el mensaje. Revisa los datos e inténtalo de nuevo.",
    contact_unreachable: "Error de conexión. Inténtalo de nuevo en unos minutos.",
    contact_invalid: "Completa tu nombre, un correo electrónico válido y el mensaje.",
    contact_unavailable: "El formulario no está disponible. Escríbeme directamente por correo.",
};

// ==================== German Strings ====================

pub const GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Startseite",
    nav_services: "Leistungen",
    nav_pricing: "Preise",
    nav_about: "Über mich",
    nav_contact: "Kontakt",
    language_switcher: "Sprache",
    footer_legal: "Impressum",
    footer_privacy: "Datenschutz",
    footer_tagline: "Vereidigte Übersetzerin für Deutsch, Französisch und Englisch",
    documents_heading: "Dokumente, die ich übersetze",
    form_name: "Name",
    form_email: "E-Mail",
    form_phone: "Telefon",
    form_document_type: "Dokumentart",
    form_message: "Nachricht",
    form_submit: "Angebot anfordern",
    contact_success: "Vielen Dank! Ich habe Ihre Nachricht erhalten und antworte innerhalb von 24 Stunden.",
    contact_rejected: "Die Nachricht konnte nicht gesendet werden. Bitte prüfen Sie Ihre Angaben und versuchen Sie es erneut.",
    contact_unreachable: "Verbindungsfehler. Bitte versuchen Sie es in einigen Minuten erneut.",
    contact_invalid: "Bitte geben Sie Ihren Namen, eine gültige E-Mail-Adresse und eine Nachricht an.",
    contact_unavailable: "Das Formular ist derzeit nicht verfügbar. Bitte schreiben Sie mir direkt eine E-Mail.",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Accueil",
    nav_services: "Prestations",
    nav_pricing: "Tarifs",
    nav_about: "À propos",
    nav_contact: "Contact",
    language_switcher: "Langue",
    footer_legal: "Mentions légales",
    footer_privacy: "Politique de confidentialité",
    footer_tagline: "Traductrice assermentée d'allemand, de français et d'anglais",
    documents_heading: "Documents que je traduis",
    form_name: "Nom",
    form_email: "E-mail",
    form_phone: "Téléphone",
    form_document_type: "Type de document",
    form_message: "Message",
    form_submit: "Demander un devis",
    contact_success: "Merci ! J'ai bien reçu votre message et je vous répondrai sous 24 heures.",
    contact_rejected: "Le message n'a pas pu être envoyé. Vérifiez vos informations et réessayez.",
    contact_unreachable: "Erreur de connexion. Veuillez réessayer dans quelques minutes.",
    contact_invalid: "Indiquez votre nom, une adresse e-mail valide et votre message.",
    contact_unavailable: "Le formulaire est indisponible. Écrivez-moi directement par e-mail.",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    nav_home: "Home",
    nav_services: "Services",
    nav_pricing: "Pricing",
    nav_about: "About",
    nav_contact: "Contact",
    language_switcher: "Language",
    footer_legal: "Legal notice",
    footer_privacy: "Privacy policy",
    footer_tagline: "Sworn translator for German, French and English appointed by the Spanish Ministry of Foreign Affairs",
    documents_heading: "Documents I translate",
    form_name: "Name",
    form_email: "Email",
    form_phone: "Phone",
    form_document_type: "Document type",
    form_message: "Message",
    form_submit: "Request a quote",
    contact_success: "Thank you! I have received your message and will reply within 24 hours.",
    contact_rejected: "Your message could not be sent. Please check your details and try again.",
    contact_unreachable: "Connection error. Please try again in a few minutes.",
    contact_invalid: "Please enter your name, a valid email address and a message.",
    contact_unavailable: "The form is currently unavailable. Please email me directly.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_language_selects_table() {
        assert_eq!(
            LanguageStrings::for_language(Language::GERMAN).nav_services,
            "Leistungen"
        );
        assert_eq!(
            LanguageStrings::for_language(Language::SPANISH).nav_services,
            "Servicios"
        );
    }

    #[test]
    fn test_every_language_has_distinct_outcomes() {
        for lang in Language::all() {
            let strings = LanguageStrings::for_language(lang);
            assert!(!strings.contact_success.is_empty());
            assert_ne!(strings.contact_success, strings.contact_rejected);
            assert_ne!(strings.contact_rejected, strings.contact_unreachable);
        }
    }
}
