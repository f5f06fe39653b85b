//! Route table: the single copy of the localized slug data.
//!
//! The HTTP dispatcher, the sitemap generator and the prerenderer all read
//! `ROUTES`; nothing else may hold slug strings.

use crate::i18n::Language;
use std::fmt;

/// Logical page, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteKey {
    Home,
    Services,
    Pricing,
    About,
    Contact,
    Legal,
    Privacy,
    BirthCertificate,
    MarriageCertificate,
    AcademicRecords,
    CriminalRecord,
    DrivingLicence,
    NotarialDocuments,
}

impl RouteKey {
    /// Every route key, in table order.
    pub const ALL: [RouteKey; 13] = [
        RouteKey::Home,
        RouteKey::Services,
        RouteKey::Pricing,
        RouteKey::About,
        RouteKey::Contact,
        RouteKey::Legal,
        RouteKey::Privacy,
        RouteKey::BirthCertificate,
        RouteKey::MarriageCertificate,
        RouteKey::AcademicRecords,
        RouteKey::CriminalRecord,
        RouteKey::DrivingLicence,
        RouteKey::NotarialDocuments,
    ];

    /// The document-translation landing pages.
    pub const DOCUMENT_PAGES: [RouteKey; 6] = [
        RouteKey::BirthCertificate,
        RouteKey::MarriageCertificate,
        RouteKey::AcademicRecords,
        RouteKey::CriminalRecord,
        RouteKey::DrivingLicence,
        RouteKey::NotarialDocuments,
    ];

    /// Stable identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::Services => "services",
            RouteKey::Pricing => "pricing",
            RouteKey::About => "about",
            RouteKey::Contact => "contact",
            RouteKey::Legal => "legal",
            RouteKey::Privacy => "privacy",
            RouteKey::BirthCertificate => "birth-certificate",
            RouteKey::MarriageCertificate => "marriage-certificate",
            RouteKey::AcademicRecords => "academic-records",
            RouteKey::CriminalRecord => "criminal-record",
            RouteKey::DrivingLicence => "driving-licence",
            RouteKey::NotarialDocuments => "notarial-documents",
        }
    }

    pub fn from_id(id: &str) -> Option<RouteKey> {
        Self::ALL.into_iter().find(|key| key.as_str() == id)
    }

    pub fn is_document_page(self) -> bool {
        Self::DOCUMENT_PAGES.contains(&self)
    }

    /// Table row for this key.
    pub fn def(self) -> &'static RouteDef {
        ROUTES
            .iter()
            .find(|def| def.key == self)
            .expect("every RouteKey has a row in ROUTES")
    }

    pub fn slug(self, language: Language) -> &'static str {
        self.def().slugs.get(language)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One URL path segment per supported language.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedSlug {
    pub es: &'static str,
    pub de: &'static str,
    pub fr: &'static str,
    pub en: &'static str,
}

impl LocalizedSlug {
    pub fn get(&self, language: Language) -> &'static str {
        match language.code() {
            "de" => self.de,
            "fr" => self.fr,
            "en" => self.en,
            _ => self.es,
        }
    }

    /// `(language, slug)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &'static str)> + '_ {
        Language::all().into_iter().map(|lang| (lang, self.get(lang)))
    }
}

/// Sitemap `<changefreq>` values used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub key: RouteKey,
    pub slugs: LocalizedSlug,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

pub static ROUTES: [RouteDef; 13] = [
    RouteDef {
        key: RouteKey::Home,
        slugs: LocalizedSlug { es: "", de: "", fr: "", en: "" },
        changefreq: ChangeFreq::Weekly,
        priority: 1.0,
    },
    RouteDef {
        key: RouteKey::Services,
        slugs: LocalizedSlug {
            es: "servicios",
            de: "leistungen",
            fr: "prestations",
            en: "services",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.9,
    },
    RouteDef {
        key: RouteKey::Pricing,
        slugs: LocalizedSlug {
            es: "precios",
            de: "preise",
            fr: "tarifs",
            en: "pricing",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.9,
    },
    RouteDef {
        key: RouteKey::About,
        slugs: LocalizedSlug {
            es: "sobre-mi",
            de: "ueber-mich",
            fr: "a-propos",
            en: "about",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.7,
    },
    RouteDef {
        key: RouteKey::Contact,
        slugs: LocalizedSlug {
            es: "contacto",
            de: "kontakt",
            fr: "contact",
            en: "contact-us",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
    RouteDef {
        key: RouteKey::Legal,
        slugs: LocalizedSlug {
            es: "aviso-legal",
            de: "impressum",
            fr: "mentions-legales",
            en: "legal-notice",
        },
        changefreq: ChangeFreq::Yearly,
        priority: 0.3,
    },
    RouteDef {
        key: RouteKey::Privacy,
        slugs: LocalizedSlug {
            es: "politica-privacidad",
            de: "datenschutz",
            fr: "politique-confidentialite",
            en: "privacy-policy",
        },
        changefreq: ChangeFreq::Yearly,
        priority: 0.3,
    },
    RouteDef {
        key: RouteKey::BirthCertificate,
        slugs: LocalizedSlug {
            es: "traduccion-certificado-nacimiento",
            de: "uebersetzung-geburtsurkunde",
            fr: "traduction-acte-de-naissance",
            en: "birth-certificate-translation",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
    RouteDef {
        key: RouteKey::MarriageCertificate,
        slugs: LocalizedSlug {
            es: "traduccion-certificado-matrimonio",
            de: "uebersetzung-heiratsurkunde",
            fr: "traduction-acte-de-mariage",
            en: "marriage-certificate-translation",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
    RouteDef {
        key: RouteKey::AcademicRecords,
        slugs: LocalizedSlug {
            es: "traduccion-titulos-academicos",
            de: "uebersetzung-zeugnisse",
            fr: "traduction-diplomes",
            en: "academic-records-translation",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
    RouteDef {
        key: RouteKey::CriminalRecord,
        slugs: LocalizedSlug {
            es: "traduccion-antecedentes-penales",
            de: "uebersetzung-fuehrungszeugnis",
            fr: "traduction-casier-judiciaire",
            en: "criminal-record-translation",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
    RouteDef {
        key: RouteKey::DrivingLicence,
        slugs: LocalizedSlug {
            es: "traduccion-carnet-conducir",
            de: "uebersetzung-fuehrerschein",
            fr: "traduction-permis-de-conduire",
            en: "driving-licence-translation",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
    RouteDef {
        key: RouteKey::NotarialDocuments,
        slugs: LocalizedSlug {
            es: "traduccion-documentos-notariales",
            de: "uebersetzung-notarielle-urkunden",
            fr: "traduction-actes-notaries",
            en: "notarial-documents-translation",
        },
        changefreq: ChangeFreq::Monthly,
        priority: 0.8,
    },
];
