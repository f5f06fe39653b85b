//! Per-page, per-language SEO metadata.
//!
//! Spanish entries are the fallback for every route, so a route must at
//! least carry an `es` entry to be resolvable.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::i18n::Language;
use crate::routing::RouteKey;

/// Static metadata for one page in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoMetadataEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Visible `<h1>` of the page
    pub heading: &'static str,
    pub keywords: &'static [&'static str],
    /// Page-specific Open Graph / Twitter image, relative to the site root
    pub image: Option<&'static str>,
    pub image_alt: Option<&'static str>,
}

const fn page(
    title: &'static str,
    description: &'static str,
    heading: &'static str,
    keywords: &'static [&'static str],
) -> SeoMetadataEntry {
    SeoMetadataEntry {
        title,
        description,
        heading,
        keywords,
        image: None,
        image_alt: None,
    }
}

/// Lookup table of metadata entries.
#[derive(Debug, Default)]
pub struct SeoCatalog {
    entries: HashMap<RouteKey, HashMap<Language, SeoMetadataEntry>>,
}

static CATALOG: OnceLock<SeoCatalog> = OnceLock::new();

impl SeoCatalog {
    /// The site's built-in catalog, loaded once.
    pub fn builtin() -> &'static SeoCatalog {
        CATALOG.get_or_init(|| SeoCatalog::from_entries(builtin_entries()))
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (RouteKey, Language, SeoMetadataEntry)>,
    ) -> Self {
        let mut catalog = SeoCatalog::default();
        for (key, language, entry) in entries {
            catalog
                .entries
                .entry(key)
                .or_default()
                .insert(language, entry);
        }
        catalog
    }

    /// Entry for `(key, language)`, falling back to the default language.
    ///
    /// `None` only when the route has no entries at all.
    pub fn entry(&self, key: RouteKey, language: Language) -> Option<&SeoMetadataEntry> {
        let by_language = self.entries.get(&key)?;
        by_language
            .get(&language)
            .or_else(|| by_language.get(&Language::default_language()))
    }

    pub fn contains(&self, key: RouteKey) -> bool {
        self.entries.contains_key(&key)
    }
}

fn builtin_entries() -> Vec<(RouteKey, Language, SeoMetadataEntry)> {
    use Language as L;
    use RouteKey as R;

    let about_image = |entry: SeoMetadataEntry, alt: &'static str| SeoMetadataEntry {
        image: Some("/assets/og/maria-angeles-capas.jpg"),
        image_alt: Some(alt),
        ..entry
    };

    vec![
        // ==================== Home ====================
        (R::Home, L::SPANISH, page(
            "Traductora Jurada de Alemán, Francés e Inglés | María Ángeles Capas",
            "Traducciones juradas oficiales de alemán, francés e inglés con validez ante organismos españoles. Presupuesto en 24 horas y envío a toda España.",
            "Traductora jurada de alemán, francés e inglés",
            &["traductora jurada", "traducción jurada", "traductor jurado alemán", "traducción oficial"],
        )),
        (R::Home, L::GERMAN, page(
            "Vereidigte Übersetzerin Spanisch | María Ángeles Capas",
            "Beglaubigte Übersetzungen ins Spanische, anerkannt von spanischen Behörden. Angebot innerhalb von 24 Stunden.",
            "Vereidigte Übersetzerin für Spanisch",
            &["vereidigte Übersetzerin", "beglaubigte Übersetzung Spanisch", "Übersetzer Spanien"],
        )),
        (R::Home, L::FRENCH, page(
            "Traductrice Assermentée Espagnol | María Ángeles Capas",
            "Traductions assermentées vers l'espagnol reconnues par les administrations espagnoles. Devis sous 24 heures.",
            "Traductrice assermentée d'espagnol",
            &["traductrice assermentée", "traduction assermentée espagnol", "traduction officielle Espagne"],
        )),
        (R::Home, L::ENGLISH, page(
            "Sworn Spanish Translator | María Ángeles Capas",
            "Official sworn translations into Spanish accepted by Spanish authorities. Quote within 24 hours, delivery across Spain.",
            "Sworn translator for Spanish",
            &["sworn translator Spain", "sworn translation Spanish", "official translation Spain"],
        )),
        // ==================== Services ====================
        (R::Services, L::SPANISH, page(
            "Servicios de Traducción Jurada | María Ángeles Capas",
            "Traducción jurada de certificados, títulos académicos, antecedentes penales y documentos notariales de alemán, francés e inglés.",
            "Servicios de traducción jurada",
            &["servicios traducción jurada", "traducir documentos oficiales"],
        )),
        (R::Services, L::GERMAN, page(
            "Leistungen: Beglaubigte Übersetzungen | María Ángeles Capas",
            "Beglaubigte Übersetzung von Urkunden, Zeugnissen, Führungszeugnissen und notariellen Dokumenten ins Spanische.",
            "Leistungen",
            &["beglaubigte Übersetzung Urkunden", "Übersetzung Dokumente Spanisch"],
        )),
        (R::Services, L::FRENCH, page(
            "Prestations de Traduction Assermentée | María Ángeles Capas",
            "Traduction assermentée d'actes d'état civil, diplômes, casiers judiciaires et actes notariés vers l'espagnol.",
            "Prestations de traduction assermentée",
            &["prestations traduction assermentée", "traduire documents officiels"],
        )),
        (R::Services, L::ENGLISH, page(
            "Sworn Translation Services | María Ángeles Capas",
            "Sworn translation of certificates, academic records, criminal records and notarial documents into Spanish.",
            "Sworn translation services",
            &["sworn translation services", "official document translation Spain"],
        )),
        // ==================== Pricing ====================
        (R::Pricing, L::SPANISH, page(
            "Precios de Traducción Jurada | María Ángeles Capas",
            "Tarifas claras por documento para traducciones juradas. Sin costes ocultos y con presupuesto cerrado antes de empezar.",
            "Precios",
            &["precio traducción jurada", "tarifa traductor jurado"],
        )),
        (R::Pricing, L::GERMAN, page(
            "Preise für beglaubigte Übersetzungen | María Ángeles Capas",
            "Transparente Preise pro Dokument für beglaubigte Übersetzungen. Festpreisangebot vor Beginn der Arbeit.",
            "Preise",
            &["Preis beglaubigte Übersetzung", "Kosten vereidigter Übersetzer"],
        )),
        (R::Pricing, L::FRENCH, page(
            "Tarifs de Traduction Assermentée | María Ángeles Capas",
            "Tarifs transparents par document pour les traductions assermentées. Devis ferme avant le début du travail.",
            "Tarifs",
            &["tarif traduction assermentée", "prix traducteur assermenté"],
        )),
        (R::Pricing, L::ENGLISH, page(
            "Sworn Translation Pricing | María Ángeles Capas",
            "Clear per-document rates for sworn translations. Fixed quote before any work starts, no hidden fees.",
            "Pricing",
            &["sworn translation price", "sworn translator rates"],
        )),
        // ==================== About ====================
        (R::About, L::SPANISH, about_image(page(
            "Sobre mí | María Ángeles Capas, Traductora Jurada",
            "Traductora jurada nombrada por el Ministerio de Asuntos Exteriores, con más de quince años de experiencia en traducción oficial.",
            "Sobre mí",
            &["María Ángeles Capas", "traductora jurada MAEC"],
        ), "María Ángeles Capas, traductora jurada")),
        (R::About, L::GERMAN, about_image(page(
            "Über mich | María Ángeles Capas, Vereidigte Übersetzerin",
            "Vom spanischen Außenministerium ernannte vereidigte Übersetzerin mit über fünfzehn Jahren Erfahrung.",
            "Über mich",
            &["María Ángeles Capas", "vereidigte Übersetzerin Spanien"],
        ), "María Ángeles Capas, vereidigte Übersetzerin")),
        (R::About, L::FRENCH, about_image(page(
            "À propos | María Ángeles Capas, Traductrice Assermentée",
            "Traductrice assermentée nommée par le ministère espagnol des Affaires étrangères, plus de quinze ans d'expérience.",
            "À propos",
            &["María Ángeles Capas", "traductrice assermentée Espagne"],
        ), "María Ángeles Capas, traductrice assermentée")),
        (R::About, L::ENGLISH, about_image(page(
            "About | María Ángeles Capas, Sworn Translator",
            "Sworn translator appointed by the Spanish Ministry of Foreign Affairs, with over fifteen years of experience.",
            "About me",
            &["María Ángeles Capas", "sworn translator Spain"],
        ), "María Ángeles Capas, sworn translator")),
        // ==================== Contact ====================
        (R::Contact, L::SPANISH, page(
            "Contacto y Presupuesto | María Ángeles Capas",
            "Solicita presupuesto para tu traducción jurada. Respuesta en menos de 24 horas.",
            "Contacto",
            &["presupuesto traducción jurada", "contacto traductora jurada"],
        )),
        (R::Contact, L::GERMAN, page(
            "Kontakt und Angebot | María Ángeles Capas",
            "Fordern Sie ein Angebot für Ihre beglaubigte Übersetzung an. Antwort innerhalb von 24 Stunden.",
            "Kontakt",
            &["Angebot beglaubigte Übersetzung", "Kontakt Übersetzerin"],
        )),
        (R::Contact, L::FRENCH, page(
            "Contact et Devis | María Ángeles Capas",
            "Demandez un devis pour votre traduction assermentée. Réponse sous 24 heures.",
            "Contact",
            &["devis traduction assermentée", "contact traductrice"],
        )),
        (R::Contact, L::ENGLISH, page(
            "Contact and Quote | María Ángeles Capas",
            "Request a quote for your sworn translation. Reply within 24 hours.",
            "Contact",
            &["sworn translation quote", "contact sworn translator"],
        )),
        // ==================== Legal ====================
        (R::Legal, L::SPANISH, page(
            "Aviso Legal | María Ángeles Capas",
            "Información legal sobre el titular de este sitio web y las condiciones de uso.",
            "Aviso legal",
            &[],
        )),
        (R::Legal, L::GERMAN, page(
            "Impressum | María Ángeles Capas",
            "Angaben zum Betreiber dieser Website und Nutzungsbedingungen.",
            "Impressum",
            &[],
        )),
        (R::Legal, L::FRENCH, page(
            "Mentions Légales | María Ángeles Capas",
            "Informations légales sur l'éditeur de ce site et conditions d'utilisation.",
            "Mentions légales",
            &[],
        )),
        (R::Legal, L::ENGLISH, page(
            "Legal Notice | María Ángeles Capas",
            "Legal information about the owner of this website and its terms of use.",
            "Legal notice",
            &[],
        )),
        // ==================== Privacy ====================
        (R::Privacy, L::SPANISH, page(
            "Política de Privacidad | María Ángeles Capas",
            "Cómo se tratan y protegen tus datos personales conforme al RGPD.",
            "Política de privacidad",
            &[],
        )),
        (R::Privacy, L::GERMAN, page(
            "Datenschutzerklärung | María Ángeles Capas",
            "Wie Ihre personenbezogenen Daten gemäß DSGVO verarbeitet und geschützt werden.",
            "Datenschutzerklärung",
            &[],
        )),
        (R::Privacy, L::FRENCH, page(
            "Politique de Confidentialité | María Ángeles Capas",
            "Comment vos données personnelles sont traitées et protégées conformément au RGPD.",
            "Politique de confidentialité",
            &[],
        )),
        (R::Privacy, L::ENGLISH, page(
            "Privacy Policy | María Ángeles Capas",
            "How your personal data is processed and protected under the GDPR.",
            "Privacy policy",
            &[],
        )),
        // ==================== Birth certificate ====================
        (R::BirthCertificate, L::SPANISH, page(
            "Traducción Jurada de Certificado de Nacimiento | María Ángeles Capas",
            "Traducción jurada de certificados de nacimiento de alemán, francés e inglés, válida para Registro Civil y extranjería.",
            "Traducción jurada de certificado de nacimiento",
            &["traducción certificado de nacimiento", "partida de nacimiento traducción jurada"],
        )),
        (R::BirthCertificate, L::GERMAN, page(
            "Beglaubigte Übersetzung der Geburtsurkunde ins Spanische | María Ángeles Capas",
            "Beglaubigte Übersetzung Ihrer Geburtsurkunde ins Spanische, anerkannt von Standesämtern und Behörden in Spanien.",
            "Übersetzung der Geburtsurkunde",
            &["Geburtsurkunde übersetzen Spanisch", "beglaubigte Übersetzung Geburtsurkunde"],
        )),
        (R::BirthCertificate, L::FRENCH, page(
            "Traduction Assermentée d'Acte de Naissance | María Ángeles Capas",
            "Traduction assermentée de votre acte de naissance vers l'espagnol, acceptée par l'état civil espagnol.",
            "Traduction d'acte de naissance",
            &["traduction acte de naissance espagnol", "acte de naissance traduction assermentée"],
        )),
        (R::BirthCertificate, L::ENGLISH, page(
            "Birth Certificate Sworn Translation into Spanish | María Ángeles Capas",
            "Sworn translation of your birth certificate into Spanish, accepted by the Spanish Civil Registry and immigration offices.",
            "Birth certificate translation",
            &["birth certificate translation Spanish", "sworn birth certificate translation"],
        )),
        // ==================== Marriage certificate ====================
        (R::MarriageCertificate, L::SPANISH, page(
            "Traducción Jurada de Certificado de Matrimonio | María Ángeles Capas",
            "Traducción jurada de certificados de matrimonio para inscripción, nacionalidad y trámites de extranjería.",
            "Traducción jurada de certificado de matrimonio",
            &["traducción certificado de matrimonio", "certificado matrimonio traducción jurada"],
        )),
        (R::MarriageCertificate, L::GERMAN, page(
            "Beglaubigte Übersetzung der Heiratsurkunde | María Ángeles Capas",
            "Beglaubigte Übersetzung Ihrer Heiratsurkunde ins Spanische für Eintragung und Behördengänge in Spanien.",
            "Übersetzung der Heiratsurkunde",
            &["Heiratsurkunde übersetzen Spanisch"],
        )),
        (R::MarriageCertificate, L::FRENCH, page(
            "Traduction Assermentée d'Acte de Mariage | María Ángeles Capas",
            "Traduction assermentée de votre acte de mariage vers l'espagnol pour toutes vos démarches en Espagne.",
            "Traduction d'acte de mariage",
            &["traduction acte de mariage espagnol"],
        )),
        (R::MarriageCertificate, L::ENGLISH, page(
            "Marriage Certificate Sworn Translation | María Ángeles Capas",
            "Sworn translation of your marriage certificate into Spanish for registration and residency procedures.",
            "Marriage certificate translation",
            &["marriage certificate translation Spanish"],
        )),
        // ==================== Academic records ====================
        (R::AcademicRecords, L::SPANISH, page(
            "Traducción Jurada de Títulos y Expedientes Académicos | María Ángeles Capas",
            "Traducción jurada de títulos, expedientes y certificados académicos para homologación y convalidación.",
            "Traducción jurada de títulos académicos",
            &["traducción jurada título universitario", "homologación título traducción"],
        )),
        (R::AcademicRecords, L::GERMAN, page(
            "Beglaubigte Übersetzung von Zeugnissen | María Ángeles Capas",
            "Beglaubigte Übersetzung von Zeugnissen, Diplomen und Notenspiegeln für die Anerkennung in Spanien.",
            "Übersetzung von Zeugnissen",
            &["Zeugnis übersetzen Spanisch", "Diplom beglaubigte Übersetzung"],
        )),
        (R::AcademicRecords, L::FRENCH, page(
            "Traduction Assermentée de Diplômes | María Ángeles Capas",
            "Traduction assermentée de diplômes et relevés de notes pour l'équivalence en Espagne.",
            "Traduction de diplômes",
            &["traduction diplôme espagnol", "relevé de notes traduction assermentée"],
        )),
        (R::AcademicRecords, L::ENGLISH, page(
            "Academic Records Sworn Translation | María Ángeles Capas",
            "Sworn translation of degrees, diplomas and transcripts for recognition in Spain.",
            "Academic records translation",
            &["degree translation Spanish", "transcript sworn translation"],
        )),
        // ==================== Criminal record ====================
        (R::CriminalRecord, L::SPANISH, page(
            "Traducción Jurada de Antecedentes Penales | María Ángeles Capas",
            "Traducción jurada de certificados de antecedentes penales para residencia, nacionalidad y empleo.",
            "Traducción jurada de antecedentes penales",
            &["traducción antecedentes penales", "certificado penales traducción jurada"],
        )),
        (R::CriminalRecord, L::GERMAN, page(
            "Beglaubigte Übersetzung des Führungszeugnisses | María Ángeles Capas",
            "Beglaubigte Übersetzung Ihres Führungszeugnisses ins Spanische für Aufenthalt und Arbeit in Spanien.",
            "Übersetzung des Führungszeugnisses",
            &["Führungszeugnis übersetzen Spanisch"],
        )),
        (R::CriminalRecord, L::FRENCH, page(
            "Traduction Assermentée de Casier Judiciaire | María Ángeles Capas",
            "Traduction assermentée de votre extrait de casier judiciaire vers l'espagnol.",
            "Traduction de casier judiciaire",
            &["traduction casier judiciaire espagnol"],
        )),
        (R::CriminalRecord, L::ENGLISH, page(
            "Criminal Record Certificate Sworn Translation | María Ángeles Capas",
            "Sworn translation of your criminal record certificate into Spanish for residency and employment.",
            "Criminal record translation",
            &["criminal record translation Spanish", "police certificate translation"],
        )),
        // ==================== Driving licence ====================
        (R::DrivingLicence, L::SPANISH, page(
            "Traducción Jurada de Carnet de Conducir | María Ángeles Capas",
            "Traducción jurada de permisos de conducir extranjeros para canje ante la DGT.",
            "Traducción jurada de carnet de conducir",
            &["traducción carnet de conducir", "canje permiso conducir traducción"],
        )),
        (R::DrivingLicence, L::GERMAN, page(
            "Beglaubigte Übersetzung des Führerscheins | María Ángeles Capas",
            "Beglaubigte Übersetzung Ihres Führerscheins ins Spanische für den Umtausch bei der DGT.",
            "Übersetzung des Führerscheins",
            &["Führerschein übersetzen Spanisch"],
        )),
        (R::DrivingLicence, L::FRENCH, page(
            "Traduction Assermentée de Permis de Conduire | María Ángeles Capas",
            "Traduction assermentée de votre permis de conduire vers l'espagnol pour l'échange auprès de la DGT.",
            "Traduction de permis de conduire",
            &["traduction permis de conduire espagnol"],
        )),
        (R::DrivingLicence, L::ENGLISH, page(
            "Driving Licence Sworn Translation | María Ángeles Capas",
            "Sworn translation of your driving licence into Spanish for exchange at the DGT.",
            "Driving licence translation",
            &["driving licence translation Spanish"],
        )),
        // ==================== Notarial documents ====================
        (R::NotarialDocuments, L::SPANISH, page(
            "Traducción Jurada de Documentos Notariales | María Ángeles Capas",
            "Traducción jurada de poderes, escrituras y actas notariales de alemán, francés e inglés.",
            "Traducción jurada de documentos notariales",
            &["traducción poder notarial", "traducción escritura notarial"],
        )),
        (R::NotarialDocuments, L::GERMAN, page(
            "Beglaubigte Übersetzung notarieller Urkunden | María Ángeles Capas",
            "Beglaubigte Übersetzung von Vollmachten, Urkunden und notariellen Protokollen ins Spanische.",
            "Übersetzung notarieller Urkunden",
            &["Vollmacht übersetzen Spanisch", "notarielle Urkunde Übersetzung"],
        )),
        (R::NotarialDocuments, L::FRENCH, page(
            "Traduction Assermentée d'Actes Notariés | María Ángeles Capas",
            "Traduction assermentée de procurations et actes notariés vers l'espagnol.",
            "Traduction d'actes notariés",
            &["traduction procuration espagnol", "acte notarié traduction"],
        )),
        (R::NotarialDocuments, L::ENGLISH, page(
            "Notarial Documents Sworn Translation | María Ángeles Capas",
            "Sworn translation of powers of attorney, deeds and notarial acts into Spanish.",
            "Notarial documents translation",
            &["power of attorney translation Spanish", "notarial deed translation"],
        )),
    ]
}
